mod common;

use std::path::PathBuf;

use common::{logo_fixture, pdf_contains_text, renderer_with_logo, sample_record};
use lopdf::Document;
use musicschool_forms_server::contract::legal::legal_block;
use musicschool_forms_server::contract::{ContractError, ContractRenderer};

#[test]
fn test_variant_two_contract() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let document = renderer.render(&sample_record("2")).unwrap();

    assert_eq!(
        document.title,
        "Anmeldung und Unterrichtsvertrag zum 45 Minuten Einzelunterricht"
    );
    assert_eq!(document.filename, "anmeldung-Anna Schmidt.pdf");
    assert!(pdf_contains_text(&document.pdf, "Instrument: Klavier"));
    assert!(pdf_contains_text(&document.pdf, "Lehrer: Müller"));
    assert!(pdf_contains_text(
        &document.pdf,
        "Minuten erteilt, monatliche Gebühr = 111,- Euro."
    ));
    assert!(pdf_contains_text(
        &document.pdf,
        "Der Unterricht wird als Lektion zu wöchentlich einmal 45"
    ));
}

#[test]
fn test_unknown_variant_contract() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let document = renderer.render(&sample_record("5")).unwrap();

    assert_eq!(document.title, "Anmeldung und Unterrichtsvertrag zum ");
    for line in legal_block("5") {
        assert!(pdf_contains_text(&document.pdf, &line), "missing line: {}", line);
    }
    assert!(pdf_contains_text(&document.pdf, "einmahlige Gebühr = 450,- Euro."));
    assert!(pdf_contains_text(&document.pdf, "Aufnahmegebühr: 20,- Euro."));
    assert!(!pdf_contains_text(&document.pdf, "monatliche Gebühr"));
}

#[test]
fn test_variant_four_gets_block_text() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let document = renderer.render(&sample_record("4")).unwrap();

    assert!(document.title.ends_with("45 Minuten Einzelunterricht"));
    assert!(pdf_contains_text(&document.pdf, "einmahlige Gebühr = 450,- Euro."));
    assert!(!pdf_contains_text(&document.pdf, "monatliche Gebühr = 111,- Euro."));
}

#[test]
fn test_header_date_and_phone_prefix() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let mut record = sample_record("1");
    record.phone = "+49301234567".to_string();
    let document = renderer.render(&record).unwrap();

    assert!(pdf_contains_text(&document.pdf, "01.09.2025"));
    assert!(pdf_contains_text(&document.pdf, "Telefon: +49 +49301234567"));
}

#[test]
fn test_same_record_same_day_is_byte_identical() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);
    let record = sample_record("3");

    let first = renderer.render(&record).unwrap();
    let second = renderer.render(&record).unwrap();

    assert_eq!(first.pdf, second.pdf);
}

#[test]
fn test_output_is_single_page_pdf() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let document = renderer.render(&sample_record("1")).unwrap();
    let parsed = Document::load_mem(&document.pdf).unwrap();

    assert_eq!(parsed.get_pages().len(), 1);
}

#[test]
fn test_missing_logo_fails_render() {
    let renderer = ContractRenderer::new(PathBuf::from("/nonexistent/logo.png"));

    let result = renderer.render(&sample_record("1"));

    assert!(matches!(result, Err(ContractError::AssetLoad { .. })));
}

#[test]
fn test_empty_teacher_fails_render() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let mut record = sample_record("1");
    record.teacher_name.clear();

    assert!(matches!(
        renderer.render(&record),
        Err(ContractError::EmptyText)
    ));
}

#[test]
fn test_renderer_is_shareable_across_threads() {
    let (_dir, logo) = logo_fixture();
    let renderer = renderer_with_logo(&logo);

    let handles: Vec<_> = ["1", "2", "3", "4"]
        .into_iter()
        .map(|variant| {
            let renderer = renderer.clone();
            std::thread::spawn(move || renderer.render(&sample_record(variant)))
        })
        .collect();

    for handle in handles {
        let document = handle.join().unwrap().unwrap();
        assert!(document.pdf.starts_with(b"%PDF"));
    }
}
