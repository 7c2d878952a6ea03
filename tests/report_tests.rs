mod common;

use common::{TestResult, build_report, product, products};

#[test]
fn empty_catalog_produces_a_header_only_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&[])?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Lista na proizvodi - 01.03.2024");
    assert_pdf_contains_text!(pdf, "Naziv");
    assert_pdf_contains_text!(pdf, "Opis");
    assert_pdf_not_contains_text!(pdf, "Artikl");
    Ok(())
}

#[test]
fn a_full_page_of_records_fits_without_a_break() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&products(35))?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "Artikl 001");
    assert_pdf_contains_text!(pdf, "Artikl 035");
    Ok(())
}

#[test]
fn one_record_over_capacity_flows_onto_a_second_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&products(36))?;
    assert_pdf_page_count!(pdf, 2);

    // The continuation page carries its own header and exactly the
    // overflowing record.
    let second = pdf.page_text(2)?;
    assert!(second.contains("Naziv"), "page 2 misses the header: {second}");
    assert!(second.contains("Artikl 036"), "page 2: {second}");
    assert!(!second.contains("Artikl 035"), "page 2: {second}");
    Ok(())
}

#[test]
fn title_appears_only_on_the_first_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&products(40))?;
    assert_pdf_page_count!(pdf, 2);
    assert!(pdf.page_text(1)?.contains("Lista na proizvodi"));
    assert!(!pdf.page_text(2)?.contains("Lista na proizvodi"));
    Ok(())
}

#[test]
fn prices_render_with_exactly_two_decimals() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = product(1, "Kafe");
    record.price = 45.5;
    record.regular_price = Some(120.0);
    let pdf = build_report(std::slice::from_ref(&record))?;
    assert_pdf_contains_text!(pdf, "45.50");
    assert_pdf_contains_text!(pdf, "120.00");
    // The absent discount price renders as zero.
    assert_pdf_contains_text!(pdf, "0.00");
    Ok(())
}

#[test]
fn absent_fields_never_render_as_null() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&[product(1, "Kafe")])?;
    assert_pdf_not_contains_text!(pdf, "null");
    assert_pdf_not_contains_text!(pdf, "None");
    Ok(())
}

#[test]
fn cyrillic_fields_are_transliterated() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = product(1, "Џемпер");
    record.description = Some("зимска жолта волна".to_string());
    let pdf = build_report(std::slice::from_ref(&record))?;
    assert_pdf_contains_text!(pdf, "Djemper");
    assert_pdf_contains_text!(pdf, "zimska zholta volna");
    assert_pdf_not_contains_text!(pdf, "Џемпер");
    Ok(())
}

#[test]
fn overlong_names_are_clipped_to_thirty_characters() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = build_report(&[product(1, &"x".repeat(35))])?;
    assert_pdf_contains_text!(pdf, &"x".repeat(30));
    assert_pdf_not_contains_text!(pdf, &"x".repeat(31));
    Ok(())
}

#[test]
fn malformed_records_fail_the_whole_build() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut record = product(1, "Kafe");
    record.price = f64::NAN;
    let result =
        cenik::ReportPipeline::default().generate(std::slice::from_ref(&record));
    assert!(matches!(result, Err(cenik::ReportError::Layout(_))));
    Ok(())
}
