use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::ReceiptRequest;

/// Highest accepted installment count.
pub const MAX_INSTALLMENTS: u32 = 12;

/// Validate a receipt request against the boundary rules.
/// Returns all validation errors found (not just the first).
///
/// Identifier shape problems (CPF/CNPJ with the wrong digit count) are
/// deliberately NOT rejected here — the formatters degrade to passthrough
/// so a receipt still renders with partially invalid banking data.
pub fn validate_request(request: &ReceiptRequest) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // REC-01: gross amount must not be negative
    if request.gross < Decimal::ZERO {
        errors.push(ValidationError::with_rule(
            "gross",
            format!("gross amount must not be negative, got {}", request.gross),
            "REC-01",
        ));
    }

    // REC-02: installment count in [1, 12]
    if request.installments < 1 || request.installments > MAX_INSTALLMENTS {
        errors.push(ValidationError::with_rule(
            "installments",
            format!(
                "installment count must be between 1 and {MAX_INSTALLMENTS}, got {}",
                request.installments
            ),
            "REC-02",
        ));
    }

    // REC-03: paying entity name must not be blank
    if request.entity_name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "entity_name",
            "entity name must not be empty",
            "REC-03",
        ));
    }

    // REC-04: provider name must not be blank
    if request.provider_name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "provider_name",
            "provider name must not be empty",
            "REC-04",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::ReceiptRequestBuilder;
    use rust_decimal_macros::dec;

    fn request() -> ReceiptRequest {
        ReceiptRequestBuilder::new("Condomínio Jardim", "Maria Souza", dec!(2500))
            .build_unchecked()
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(validate_request(&request()).is_empty());
    }

    #[test]
    fn negative_gross_rejected() {
        let mut req = request();
        req.gross = dec!(-0.01);
        let errors = validate_request(&req);
        assert!(errors.iter().any(|e| e.rule.as_deref() == Some("REC-01")));
    }

    #[test]
    fn zero_gross_accepted() {
        let mut req = request();
        req.gross = Decimal::ZERO;
        assert!(validate_request(&req).is_empty());
    }

    #[test]
    fn installment_bounds() {
        let mut req = request();

        req.installments = 0;
        assert!(
            validate_request(&req)
                .iter()
                .any(|e| e.rule.as_deref() == Some("REC-02"))
        );

        req.installments = 13;
        assert!(
            validate_request(&req)
                .iter()
                .any(|e| e.rule.as_deref() == Some("REC-02"))
        );

        req.installments = 12;
        assert!(validate_request(&req).is_empty());
    }

    #[test]
    fn blank_names_rejected() {
        let mut req = request();
        req.entity_name = "  ".into();
        req.provider_name = "".into();
        let errors = validate_request(&req);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn malformed_identifiers_are_not_rejected() {
        // Leniency policy: the formatters pass those through unchanged.
        let mut req = request();
        req.provider_tax_id = Some("123".into());
        req.entity_tax_id = Some("not-a-cnpj".into());
        assert!(validate_request(&req).is_empty());
    }
}
