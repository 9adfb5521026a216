//! Brazilian-Portuguese spelled-out currency amounts ("valor por extenso").
//!
//! Receipts must state the payment amount in words next to the numeric
//! figure. [`spell`] renders a monetary [`Decimal`] as grammatically
//! correct pt-BR ("mil duzentos e trinta e quatro reais e cinquenta e
//! seis centavos"); [`spell_cardinal`] exposes the bare integer engine.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const UNIDADES: [&str; 10] = [
    "", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];

const DEZ_A_DEZENOVE: [&str; 10] = [
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

const DEZENAS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta",
    "noventa",
];

const CENTENAS: [&str; 10] = [
    "",
    "cento",
    "duzentos",
    "trezentos",
    "quatrocentos",
    "quinhentos",
    "seiscentos",
    "setecentos",
    "oitocentos",
    "novecentos",
];

/// Spell a monetary amount in Brazilian Portuguese.
///
/// The integer part is truncated toward zero into whole reais; cents are
/// the truncated 2-digit fraction (upstream money rules already round to
/// 2 places). A zero amount short-circuits to "zero reais"; an integer
/// part of zero with cents still reads "zero reais e … centavos".
/// Singular unit words apply at exactly 1 ("um real", "um centavo").
pub fn spell(amount: Decimal) -> String {
    if amount.is_zero() {
        return "zero reais".to_string();
    }

    // i64 covers the supported magnitude (billions band); amounts beyond
    // that truncate at the i64 boundary.
    let integer = amount.trunc().to_i64().unwrap_or(i64::MAX);
    let cents = ((amount - amount.trunc()) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_i64()
        .unwrap_or(0);

    let mut out = String::new();

    if integer == 0 {
        out.push_str("zero reais");
    } else {
        out.push_str(&integer_words(integer));
        out.push_str(if integer == 1 { " real" } else { " reais" });
    }

    if cents > 0 {
        out.push_str(" e ");
        out.push_str(&integer_words(cents));
        out.push_str(if cents == 1 { " centavo" } else { " centavos" });
    }

    out
}

/// Spell a bare cardinal number ("mil duzentos e trinta e quatro").
pub fn spell_cardinal(n: i64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    integer_words(n)
}

/// Recursive magnitude-band rendering. Returns "" for 0 so band joins
/// can concatenate without special-casing an empty remainder.
fn integer_words(n: i64) -> String {
    if n == 0 {
        return String::new();
    }
    if n < 0 {
        return format!("menos {}", integer_words(-n));
    }

    match n {
        1..=9 => UNIDADES[n as usize].to_string(),
        10..=19 => DEZ_A_DEZENOVE[(n - 10) as usize].to_string(),
        20..=99 => tens(n),
        100..=999 => hundreds(n),
        1_000..=999_999 => group(n, 1_000, "mil", "mil"),
        1_000_000..=999_999_999 => group(n, 1_000_000, "um milhão", "milhões"),
        _ => group(n, 1_000_000_000, "um bilhão", "bilhões"),
    }
}

fn tens(n: i64) -> String {
    let dezena = (n / 10) as usize;
    let unidade = (n % 10) as usize;
    if unidade == 0 {
        DEZENAS[dezena].to_string()
    } else {
        format!("{} e {}", DEZENAS[dezena], UNIDADES[unidade])
    }
}

fn hundreds(n: i64) -> String {
    // "cem" only for the exact hundred; 101..199 use "cento".
    if n == 100 {
        return "cem".to_string();
    }
    let centena = (n / 100) as usize;
    let resto = n % 100;
    if resto == 0 {
        CENTENAS[centena].to_string()
    } else {
        format!("{} e {}", CENTENAS[centena], integer_words(resto))
    }
}

/// Render one thousand/million/billion group: the multiplier words plus
/// the remainder, joined with " e " when the remainder is below 100 and
/// with a plain space otherwise. "mil" drops the leading "um".
fn group(n: i64, scale: i64, singular: &str, plural: &str) -> String {
    let count = n / scale;
    let resto = n % scale;

    let mut out = if count == 1 {
        singular.to_string()
    } else {
        format!("{} {}", integer_words(count), plural)
    };

    if resto > 0 {
        if resto < 100 {
            out.push_str(" e ");
        } else {
            out.push(' ');
        }
        out.push_str(&integer_words(resto));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    // --- Currency amounts ---

    #[test]
    fn zero_is_fixed_phrase() {
        assert_eq!(spell(dec!(0)), "zero reais");
        assert_eq!(spell(dec!(0.00)), "zero reais");
    }

    #[test]
    fn singular_plural_boundary_at_one() {
        assert_eq!(spell(dec!(1.00)), "um real");
        assert_eq!(spell(dec!(2.00)), "dois reais");
        assert_eq!(spell(dec!(0.01)), "zero reais e um centavo");
        assert_eq!(spell(dec!(0.02)), "zero reais e dois centavos");
        assert_eq!(spell(dec!(1.01)), "um real e um centavo");
    }

    #[test]
    fn exact_hundred_is_cem() {
        assert_eq!(spell(dec!(100.00)), "cem reais");
        assert_eq!(spell(dec!(101.00)), "cento e um reais");
        assert_eq!(spell(dec!(199.00)), "cento e noventa e nove reais");
    }

    #[test]
    fn cents_only_amount_keeps_zero_reais_prefix() {
        assert_eq!(spell(dec!(0.50)), "zero reais e cinquenta centavos");
    }

    #[test]
    fn teens_and_tens() {
        assert_eq!(spell(dec!(11)), "onze reais");
        assert_eq!(spell(dec!(15)), "quinze reais");
        assert_eq!(spell(dec!(20)), "vinte reais");
        assert_eq!(spell(dec!(42)), "quarenta e dois reais");
        assert_eq!(spell(dec!(99)), "noventa e nove reais");
    }

    #[test]
    fn mixed_reais_and_centavos() {
        assert_eq!(
            spell(dec!(1234.56)),
            "mil duzentos e trinta e quatro reais e cinquenta e seis centavos"
        );
    }

    #[test]
    fn thousand_join_uses_e_below_one_hundred_remainder() {
        // remainder < 100 → " e "
        assert_eq!(spell(dec!(1001)), "mil e um reais");
        assert_eq!(spell(dec!(2050)), "dois mil e cinquenta reais");
        // remainder ≥ 100 → plain space
        assert_eq!(spell(dec!(1100)), "mil cem reais");
        assert_eq!(spell(dec!(2345)), "dois mil trezentos e quarenta e cinco reais");
    }

    #[test]
    fn one_thousand_has_no_um() {
        assert_eq!(spell(dec!(1000)), "mil reais");
        assert_eq!(spell(dec!(1000000)), "um milhão reais");
        assert_eq!(spell(dec!(1000000000)), "um bilhão reais");
    }

    #[test]
    fn millions_and_billions() {
        assert_eq!(spell(dec!(2000000)), "dois milhões reais");
        assert_eq!(
            spell(dec!(1000050)),
            "um milhão e cinquenta reais"
        );
        assert_eq!(
            spell(dec!(2500000)),
            "dois milhões quinhentos mil reais"
        );
        assert_eq!(spell(dec!(3000000000)), "três bilhões reais");
    }

    #[test]
    fn negative_integer_part_renders_menos() {
        // request validation rejects negative gross upstream
        assert_eq!(spell(dec!(-5.00)), "menos cinco reais");
    }

    #[test]
    fn truncates_beyond_two_decimal_places() {
        // upstream rounds to 2 places; a stray 3rd digit truncates
        assert_eq!(spell(dec!(1.999)), "um real e noventa e nove centavos");
    }

    // --- Cardinals ---

    #[test]
    fn cardinal_zero_is_zero() {
        assert_eq!(spell_cardinal(0), "zero");
    }

    #[test]
    fn cardinal_bands() {
        assert_eq!(spell_cardinal(7), "sete");
        assert_eq!(spell_cardinal(100), "cem");
        assert_eq!(spell_cardinal(847), "oitocentos e quarenta e sete");
        assert_eq!(spell_cardinal(1000), "mil");
        assert_eq!(
            spell_cardinal(987_654_321),
            "novecentos e oitenta e sete milhões \
             seiscentos e cinquenta e quatro mil trezentos e vinte e um"
        );
    }
}
