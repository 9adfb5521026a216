use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::types::TaxMode;

/// INSS withholding rate applied under [`TaxMode::Standard`].
pub const INSS_RATE: Decimal = dec!(0.11);

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
///
/// Every published monetary figure goes through this with `dp = 2`.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// INSS amount withheld from `gross`.
///
/// Zero under [`TaxMode::None`], and zero for a non-positive gross; a
/// negative gross therefore reappears untouched in the net amount.
/// Otherwise `gross × 0.11`, rounded to 2 places half-up.
pub fn compute_withholding(gross: Decimal, mode: TaxMode) -> Decimal {
    if mode == TaxMode::None || gross <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_half_up(gross * INSS_RATE, 2)
}

/// Net amount after withholding: `gross − withheld`, 2 places, half-up.
pub fn compute_net(gross: Decimal, withheld: Decimal) -> Decimal {
    round_half_up(gross - withheld, 2)
}

/// Gross, withheld, and net figures of one receipt, all at 2 decimal
/// places. Derived per request and reused across every installment of
/// that request — the figures are not prorated per installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyBreakdown {
    pub gross: Decimal,
    pub withheld: Decimal,
    pub net: Decimal,
}

impl MoneyBreakdown {
    /// Compute the full breakdown from a gross amount and withholding mode.
    pub fn from_gross(gross: Decimal, mode: TaxMode) -> Self {
        let gross = round_half_up(gross, 2);
        let withheld = compute_withholding(gross, mode);
        let net = compute_net(gross, withheld);
        Self {
            gross,
            withheld,
            net,
        }
    }
}

/// Format as Brazilian currency: "R$ 1.234,56" (comma decimals, dot
/// thousands). Negative values render as "-R$ …".
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_half_up(value, 2);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*b as char);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {grouped},{frac_part}")
}

/// Format as a plain 2-place number with a dot decimal separator and no
/// grouping ("1234.56") — the machine-readable twin of [`format_brl`].
pub fn format_plain(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_withholding_is_eleven_percent() {
        assert_eq!(
            compute_withholding(dec!(1000), TaxMode::Standard),
            dec!(110.00)
        );
        assert_eq!(
            compute_withholding(dec!(2500.00), TaxMode::Standard),
            dec!(275.00)
        );
    }

    #[test]
    fn withholding_rounds_half_up_not_bankers() {
        // 13.50 × 0.11 = 1.4850 — half-up gives 1.49, half-even would give 1.48
        assert_eq!(
            compute_withholding(dec!(13.50), TaxMode::Standard),
            dec!(1.49)
        );
        // 0.50 × 0.11 = 0.0550
        assert_eq!(
            compute_withholding(dec!(0.50), TaxMode::Standard),
            dec!(0.06)
        );
    }

    #[test]
    fn exempt_mode_withholds_nothing() {
        assert_eq!(compute_withholding(dec!(1000), TaxMode::None), dec!(0));
        let breakdown = MoneyBreakdown::from_gross(dec!(1000), TaxMode::None);
        assert_eq!(breakdown.net, dec!(1000.00));
        assert_eq!(breakdown.withheld, dec!(0));
    }

    #[test]
    fn zero_and_negative_gross_withhold_nothing() {
        assert_eq!(compute_withholding(dec!(0), TaxMode::Standard), dec!(0));
        assert_eq!(
            compute_withholding(dec!(-50.00), TaxMode::Standard),
            dec!(0)
        );
        // negative gross propagates into net untouched
        assert_eq!(compute_net(dec!(-50.00), dec!(0)), dec!(-50.00));
    }

    #[test]
    fn breakdown_parts_sum_to_gross() {
        let breakdown = MoneyBreakdown::from_gross(dec!(1234.56), TaxMode::Standard);
        assert_eq!(breakdown.withheld, dec!(135.80));
        assert_eq!(breakdown.net, dec!(1098.76));
        assert_eq!(breakdown.withheld + breakdown.net, breakdown.gross);
    }

    #[test]
    fn brl_formatting_groups_thousands() {
        assert_eq!(format_brl(dec!(0)), "R$ 0,00");
        assert_eq!(format_brl(dec!(7.5)), "R$ 7,50");
        assert_eq!(format_brl(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_brl(dec!(1234567.89)), "R$ 1.234.567,89");
        assert_eq!(format_brl(dec!(-980.10)), "-R$ 980,10");
    }

    #[test]
    fn plain_formatting_keeps_dot_decimal() {
        assert_eq!(format_plain(dec!(1234.56)), "1234.56");
        assert_eq!(format_plain(dec!(1000)), "1000.00");
        assert_eq!(format_plain(dec!(0.5)), "0.50");
    }
}
