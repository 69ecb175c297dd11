//! Contract clauses printed below the personal data grid.
//!
//! Lines are pre-broken to fit the page width at 10pt; nothing here wraps text.

use super::tariff;

/// Which clause block a contract variant receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalBlockKind {
    /// Regular lessons billed as a yearly fee in 12 monthly installments.
    MonthlyTariff,
    /// A block of 10 lessons paid once.
    LessonBlock,
}

impl LegalBlockKind {
    /// Only variants 1 to 3 get the monthly clauses. Variant 4 is a known
    /// tariff but is contracted as a lesson block.
    pub fn for_variant(variant_code: &str) -> Self {
        match variant_code {
            "1" | "2" | "3" => Self::MonthlyTariff,
            _ => Self::LessonBlock,
        }
    }
}

pub const BLOCK_FEE_EUROS: u32 = 450;
pub const ADMISSION_FEE_EUROS: u32 = 20;

const LESSON_BLOCK_LINES: [&str; 8] = [
    "Der Unterricht wird als 10-stündige Lektion zu jeweils 45 Minuten bei freier Vereinbarung des",
    "Zeitpunktes in Absprache mit der zuständigen Lehrkraft erteilt, einmahlige Gebühr = 450,- Euro.",
    "Aufnahmegebühr: 20,- Euro.",
    "Unterrichtsstunden können abgesagt werden, wenn die Lehrkraft im Falle ernsthafter Verhinderung",
    "mindestens 24 Stunden vorher davon Kenntnis erhalten hat, andernfalls gelten sie als gegeben.",
    "Zahlungsweise: per Überweisung oder durch Einzugsverfahren. Änderungen und Ergänzungen des",
    "Vertrages sind nur wirksam, wenn sie schriftlich erfolgen. Werden einzelne Bestimmungen dieses",
    "Vertrages unwirksam, wird dadurch die Gültigkeit des Vertrages im Übrigen nicht berührt.",
];

// Lines 2 and 3 of the monthly block carry the lesson length and the fee.
const MONTHLY_HEAD: &str =
    "Die Musikschule übernimmt den regelmäßigen Unterricht des Schülers beginnend am ...........................";

const MONTHLY_TAIL: [&str; 21] = [
    "Das Honorar wird als Jahreshonorar berechnet und ist in 12 gleichen Raten im Voraus bis zum 10.",
    "jeden Monats zu zahlen, einmalige Aufnahmegebühr: 20,- Euro. Der Unterricht kann nur an",
    "Schultagen erteilt werden. Bei Rücklastschriften berechnen wir 10,-€ pro nicht einlösbarer",
    "Lastschrift. Die erste Unterrichtsstunde ist ein Gratis-Probeunterricht, die vereinbarte Zeit gilt für alle folgenden",
    "Stunden. Will ein Schüler den Unterricht nach der kostenlosen Probestunde nicht fortsetzen, genügt",
    "eine entsprechende mündliche Mitteilung. Bei längerer Krankheit des Schülers entfällt das anteilige",
    "Honorar nach der vierten einander folgenden versäumten Stunde.",
    "Der Kurs kann von den Vertragspartnern mit sechswöchiger Frist zum 30.April/ 31.August/",
    "31.Dezember in schriftlicher Form gekündigt werden. Die Kündigung kann durch eine E-Mail",
    "erfolgen und muß vor Beginn der Kündigungsfrist bei o.g. Anschrift eingegangen sein. Eine",
    "Erhöhung des Honorars ist möglich und hat nach Grundsätzen der Billigkeit zu erfolgen. Sie muß",
    "mindestens 8 Wochen vorher dem Vertragspartner schriftlich mitgeteilt werden.",
    "Für vom Schüler versäumte oder abgesagte Stunden ist die Lehrkraft nicht nachleistungspflichtig,",
    "die anteilige Vergütung hierfür kann vom Honorar nicht abgezogen werden. Es besteht jedoch die",
    "Möglichkeit, in derselben Woche ersatzweise an einer anderen Unterrichtsstunde teilzunehmen,",
    "wenn die Lehrkraft im Falle ernsthafter Verhinderung mindestens 24 Stunden vorher davon",
    "Kenntnis erhalten hat. Aus anderen Gründen von der Lehrkraft abgesagte Stunden werden",
    "nachgegeben, ersatzweise wird das anteilige Honorar erstattet. Zahlungsweise: nur monatlich durch",
    "Einzugsverfahren. Änderungen und Ergänzungen des Vertrages sind nur wirksam, wenn sie",
    "schriftlich erfolgen. Werden einzelne Bestimmungen dieses Vertrages unwirksam, wird dadurch die",
    "Gültigkeit des Vertrages im Übrigen nicht berührt.",
];

/// Clause lines for the given contract variant, in print order.
pub fn legal_block(variant_code: &str) -> Vec<String> {
    match LegalBlockKind::for_variant(variant_code) {
        LegalBlockKind::MonthlyTariff => match tariff::resolve(variant_code) {
            Some(tariff) => monthly_block(tariff.lesson_minutes, tariff.monthly_fee_euros),
            None => lesson_block(),
        },
        LegalBlockKind::LessonBlock => lesson_block(),
    }
}

fn monthly_block(lesson_minutes: u32, monthly_fee_euros: u32) -> Vec<String> {
    let mut lines = Vec::with_capacity(MONTHLY_TAIL.len() + 3);
    lines.push(MONTHLY_HEAD.to_string());
    lines.push(format!(
        "Als Unterrichtsjahr gilt das Kalenderjahr. Der Unterricht wird als Lektion zu wöchentlich einmal {}",
        lesson_minutes
    ));
    lines.push(format!(
        "Minuten erteilt, monatliche Gebühr = {},- Euro.",
        monthly_fee_euros
    ));
    lines.extend(MONTHLY_TAIL.iter().map(|line| line.to_string()));
    lines
}

fn lesson_block() -> Vec<String> {
    LESSON_BLOCK_LINES.iter().map(|line| line.to_string()).collect()
}
