use chrono::NaiveDate;
use recibo::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request() -> ReceiptRequest {
    ReceiptRequestBuilder::new("Condomínio Jardim das Acácias", "Maria Souza", dec!(2500))
        .entity_code("EMP-042")
        .entity_tax_id("12345678000195")
        .provider_tax_id("39053344705")
        .provider_pis("12056412547")
        .bank("341", "Itaú")
        .agency("1234-5")
        .account("99887-0")
        .pix_key(PixKeyType::Cpf, "39053344705")
        .base_date(date(2024, 6, 15))
        .build()
        .unwrap()
}

// --- Money rules ---

#[test]
fn withholding_is_eleven_percent_rounded_half_up() {
    assert_eq!(compute_withholding(dec!(2500), TaxMode::Standard), dec!(275.00));
    // 0.11 * 100.05 = 11.0055 -> 11.01
    assert_eq!(compute_withholding(dec!(100.05), TaxMode::Standard), dec!(11.01));
}

#[test]
fn exempt_mode_withholds_nothing() {
    assert_eq!(compute_withholding(dec!(2500), TaxMode::None), dec!(0));
    let breakdown = MoneyBreakdown::from_gross(dec!(2500), TaxMode::None);
    assert_eq!(breakdown.net, dec!(2500.00));
}

#[test]
fn non_positive_gross_withholds_nothing() {
    assert_eq!(compute_withholding(dec!(0), TaxMode::Standard), dec!(0));
    assert_eq!(compute_withholding(dec!(-10), TaxMode::Standard), dec!(0));
}

#[test]
fn breakdown_figures_reconcile() {
    let b = MoneyBreakdown::from_gross(dec!(2500), TaxMode::Standard);
    assert_eq!(b.gross, dec!(2500.00));
    assert_eq!(b.withheld, dec!(275.00));
    assert_eq!(b.net, dec!(2225.00));
    assert_eq!(b.gross, b.withheld + b.net);
}

#[test]
fn brl_formatting_groups_thousands() {
    assert_eq!(format_brl(dec!(1234567.89)), "R$ 1.234.567,89");
    assert_eq!(format_brl(dec!(0.5)), "R$ 0,50");
    assert_eq!(format_brl(dec!(-12.3)), "-R$ 12,30");
}

#[test]
fn plain_formatting_uses_dot_and_two_places() {
    assert_eq!(format_plain(dec!(1234.5)), "1234.50");
    assert_eq!(format_plain(dec!(0)), "0.00");
}

// --- Validation ---

#[test]
fn valid_request_passes() {
    assert!(validate_request(&request()).is_empty());
}

#[test]
fn negative_gross_is_rejected() {
    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(-1)).build_unchecked();
    let errors = validate_request(&req);
    assert!(errors.iter().any(|e| e.field == "gross"));
}

#[test]
fn installment_count_is_bounded() {
    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(100))
        .installments(0)
        .build_unchecked();
    assert!(validate_request(&req).iter().any(|e| e.field == "installments"));

    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(100))
        .installments(MAX_INSTALLMENTS + 1)
        .build_unchecked();
    assert!(validate_request(&req).iter().any(|e| e.field == "installments"));

    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(100))
        .installments(MAX_INSTALLMENTS)
        .build_unchecked();
    assert!(validate_request(&req).is_empty());
}

#[test]
fn blank_names_are_rejected() {
    let req = ReceiptRequestBuilder::new("  ", "", dec!(100)).build_unchecked();
    let errors = validate_request(&req);
    assert_eq!(errors.len(), 2);
}

#[test]
fn malformed_identifiers_are_not_rejected() {
    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(100))
        .provider_tax_id("123")
        .entity_tax_id("not a cnpj")
        .build_unchecked();
    assert!(validate_request(&req).is_empty());
}

#[test]
fn builder_surfaces_joined_errors() {
    let err = ReceiptRequestBuilder::new("", "", dec!(-5)).build().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("gross"));
    assert!(message.contains("entity_name"));
    assert!(message.contains("provider_name"));
}

// --- Tax mode and PIX key codes ---

#[test]
fn tax_mode_codes() {
    assert_eq!(TaxMode::from_code("SEM_INSS"), TaxMode::None);
    assert_eq!(TaxMode::from_code("NONE"), TaxMode::None);
    assert_eq!(TaxMode::from_code("qualquer outra coisa"), TaxMode::Standard);
}

#[test]
fn pix_key_type_labels() {
    assert_eq!(PixKeyType::from_code("celular"), PixKeyType::Phone);
    assert_eq!(PixKeyType::Phone.label(), "Celular");
    assert_eq!(PixKeyType::Random.label(), "Aleatória");
}

// --- Installment planning ---

#[test]
fn single_installment_has_blank_label() {
    let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 1);
    assert_eq!(schedule.len(), 1);
    let only = schedule.first().unwrap();
    assert_eq!(only.label(), "");
    assert_eq!(only.due_date, date(2024, 6, 15));
}

#[test]
fn installments_advance_month_by_month() {
    let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 3);
    let dates: Vec<NaiveDate> = schedule.iter().map(|i| i.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 6, 15), date(2024, 7, 15), date(2024, 8, 15)]
    );
    assert_eq!(schedule.get(1).unwrap().label(), "Parcela 2 de 3");
}

#[test]
fn month_end_clamps_instead_of_overflowing() {
    let schedule = InstallmentSchedule::plan(date(2024, 1, 31), 3);
    let dates: Vec<NaiveDate> = schedule.iter().map(|i| i.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
    );
}

#[test]
fn clamped_day_does_not_stick() {
    // After the February clamp the schedule returns to the base day.
    let schedule = InstallmentSchedule::plan(date(2023, 1, 30), 3);
    let dates: Vec<NaiveDate> = schedule.iter().map(|i| i.due_date).collect();
    assert_eq!(
        dates,
        vec![date(2023, 1, 30), date(2023, 2, 28), date(2023, 3, 30)]
    );
}

#[test]
fn attachment_filenames_carry_slug_and_parcel() {
    let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 2);
    assert_eq!(
        schedule.first().unwrap().attachment_filename("Maria Souza"),
        "Recibo_ProLabore_Maria_Souza_Parcela1de2_20240615.pdf"
    );
}

#[test]
fn month_reference_is_capitalized_portuguese() {
    assert_eq!(month_reference(date(2024, 3, 1)), "Março/2024");
    assert_eq!(month_reference(date(2025, 12, 31)), "Dezembro/2025");
}

#[test]
fn effective_base_date_falls_back_to_today() {
    let req = ReceiptRequestBuilder::new("Condomínio", "Maria", dec!(100)).build_unchecked();
    assert_eq!(req.effective_base_date(date(2024, 9, 1)), date(2024, 9, 1));
    assert_eq!(request().effective_base_date(date(2024, 9, 1)), date(2024, 6, 15));
}
