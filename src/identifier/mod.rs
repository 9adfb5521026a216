//! Display formatting for Brazilian identifiers: CPF, CNPJ, PIS, phone
//! numbers, PIX keys, and agency/account bank fields.
//!
//! Every function here is total and never errors: input that does not
//! match the expected digit count passes through unchanged. Receipts must
//! still render with partially invalid banking data, so malformed
//! identifiers degrade to best-effort display instead of failing the
//! request.

use serde::{Deserialize, Serialize};

use crate::core::PixKeyType;

/// Keep only ASCII digits.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask an 11-digit CPF as "###.###.###-##"; anything else passes
/// through unchanged. `None`/blank input yields an empty string.
pub fn format_cpf(input: Option<&str>) -> String {
    mask_11_digits(input)
}

/// Mask an 11-digit PIS as "###.###.###-##" (same shape as CPF).
pub fn format_pis(input: Option<&str>) -> String {
    mask_11_digits(input)
}

fn mask_11_digits(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }
    let digits = strip_non_digits(raw);
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

/// Mask a 14-digit CNPJ as "##.###.###/####-##"; anything else passes
/// through unchanged.
pub fn format_cnpj(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }
    let digits = strip_non_digits(raw);
    if digits.len() != 14 {
        return raw.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Mask an 11-digit mobile number as "(##) #####-####"; anything else
/// passes through unchanged.
pub fn format_phone(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }
    let digits = strip_non_digits(raw);
    if digits.len() != 11 {
        return raw.to_string();
    }
    format!(
        "({}) {}-{}",
        &digits[0..2],
        &digits[2..7],
        &digits[7..11]
    )
}

/// A bank agency or account split into its number and check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankField {
    pub number: String,
    pub check_digit: String,
}

impl BankField {
    /// Rejoin as "number-digit" for display; just the number when the
    /// check digit is empty.
    pub fn display(&self) -> String {
        if self.check_digit.is_empty() {
            self.number.clone()
        } else {
            format!("{}-{}", self.number, self.check_digit)
        }
    }
}

/// Split an agency/account value at the first "-". Without a separator
/// the whole value is the number and the check digit is empty.
pub fn split_bank_field(value: &str) -> BankField {
    match value.split_once('-') {
        Some((number, check_digit)) => BankField {
            number: number.to_string(),
            check_digit: check_digit.to_string(),
        },
        None => BankField {
            number: value.to_string(),
            check_digit: String::new(),
        },
    }
}

/// Format a PIX key for display according to its type: CPF keys get the
/// CPF mask, phone keys the phone mask, e-mail and random keys pass
/// through as entered. Blank/absent keys yield an empty string.
pub fn format_pix_key(kind: PixKeyType, raw: Option<&str>) -> String {
    match kind {
        PixKeyType::Cpf => format_cpf(raw),
        PixKeyType::Phone => format_phone(raw),
        PixKeyType::Email | PixKeyType::Random => raw
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_default()
            .to_string(),
    }
}
