//! HTML bodies for the form emails.
//!
//! Every value that comes from a form submission is escaped before it is
//! placed into markup.

use crate::contract::EnrollmentRecord;

const HEADER: &str = r#"<head></head>
<section style="max-width: 42rem; padding: 2rem 1.5rem; margin: 0 auto; background-color: #ffffff;">
<header>
<a href="https://musicschool-cml.de">
<img style="width: auto; height: 1.75rem;" src="https://musicschool-cml.de/favicon.ico" alt="" />
</a>
</header>
"#;

const FOOTER: &str = "</section>\n";

const SIGNATURE: &str = r#"<p style="margin-top: 2rem; color: #718096;">
Mit freundlichen Grüßen, <br />
Ihr Musikschule CML Team
</p>
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn page(main: &str) -> String {
    format!("{HEADER}\n<main style=\"margin-top: 2rem;\">\n{main}</main>\n{FOOTER}")
}

/// Confirmation sent to the applicant together with the contract.
pub fn enrollment_confirmation_html() -> String {
    page(&format!(
        r#"<h2 style="color: #4a5568;">Sehr geehrte Damen und Herren,</h2>

<p style="margin-top: 0.5rem; line-height: 1.75; color: #718096;">
Vielen Dank für das Ausfüllen des Anmeldeformulars auf musicschool-cml.de. <br />
Hiermit erhalten Sie den Unterrichtsvertrag zum Download. <br />
Bitte füllen Sie diesen aus und bringen Sie ihn zum ersten Unterricht (nach dem kostenlosen Probeunterricht) mit. <br /> <br />
Danach wird der Vertrag von uns gegengezeichnet und Sie erhalten eine Kopie. <br />
</p>

{SIGNATURE}"#
    ))
}

/// Summary of a new enrollment for the school.
pub fn enrollment_notification_html(record: &EnrollmentRecord) -> String {
    let fields = [
        ("Instrument", record.instrument.as_str()),
        ("Lehrer", record.teacher_name.as_str()),
        ("Schüler", record.student_name.as_str()),
        ("Geburtsdatum", record.birth_date.as_str()),
        ("Straße", record.street.as_str()),
        ("PLZ", record.postal_code.as_str()),
        ("Wohnort", record.city.as_str()),
        ("Erziehungsberechtigte", record.guardian_name.as_str()),
    ];

    let mut rows = String::new();
    for (label, value) in fields {
        rows.push_str(&format!("{}: {} <br />\n", label, escape_html(value)));
    }
    rows.push_str(&format!("Telefon: +49 {} <br />\n", escape_html(&record.phone)));
    rows.push_str(&format!("E-Mail: {} <br />\n", escape_html(&record.email)));
    rows.push_str(&format!(
        "Vertrag: {} <br />\n",
        escape_html(crate::contract::tariff::label_for(&record.contract_variant))
    ));

    page(&format!(
        r#"<h2 style="color: #4a5568;">Neues Formular:</h2>

<p style="margin-top: 0.5rem; line-height: 1.75; color: #718096;">
{rows}</p>

{SIGNATURE}"#
    ))
}

/// Contact form message forwarded to the school.
pub fn contact_notification_html(name: &str, message: &str, email: &str) -> String {
    let message = escape_html(message).replace('\n', "<br />\n");
    let email = escape_html(email);

    page(&format!(
        r#"<h2 style="color: #4a5568;">Hi Jana,</h2>

<p style="margin-top: 0.5rem; line-height: 1.75; color: #718096;">
Das Kontaktformular auf musicschool-cml.de wurde von
<span style="font-weight: 600;">{name}</span> ausgefüllt.
</p>

<p style="margin-top: 2rem; color: #718096;">
Die Nachricht:
<br />
{message}
</p>

<p style="margin-top: 2rem; color: #718096;">
Du kannst
<a href="mailto:{email}" style="color: #3182ce; text-decoration: underline;">
{email}
</a>
direkt antworten.
</p>
"#,
        name = escape_html(name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("Müller"), "Müller");
    }

    #[test]
    fn test_contact_escapes_user_input() {
        let html = contact_notification_html(
            "<b>Eve</b>",
            "Hallo\n<img src=x onerror=alert(1)>",
            "eve@example.de\"><script>",
        );

        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
        assert!(html.contains("Hallo<br />\n&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("mailto:eve@example.de&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>Eve"));
    }

    #[test]
    fn test_contact_reply_link() {
        let html = contact_notification_html("Anna", "Frage", "anna@example.de");
        assert!(html.contains(r#"href="mailto:anna@example.de""#));
        assert!(html.contains("Hi Jana,"));
    }

    #[test]
    fn test_confirmation_mentions_contract() {
        let html = enrollment_confirmation_html();
        assert!(html.contains("Unterrichtsvertrag zum Download"));
        assert!(html.contains("Mit freundlichen Grüßen"));
        assert!(html.starts_with("<head></head>"));
        assert!(html.trim_end().ends_with("</section>"));
    }

    #[test]
    fn test_notification_lists_fields() {
        let record = EnrollmentRecord {
            instrument: "klavier".to_string(),
            student_name: "Anna <Schmidt>".to_string(),
            phone: "0301234567".to_string(),
            contract_variant: "3".to_string(),
            ..Default::default()
        };

        let html = enrollment_notification_html(&record);
        assert!(html.contains("Instrument: klavier <br />"));
        assert!(html.contains("Schüler: Anna &lt;Schmidt&gt; <br />"));
        assert!(html.contains("Telefon: +49 0301234567 <br />"));
        assert!(html.contains("Vertrag: 60 Minuten Gruppenunterricht <br />"));
    }
}
