use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One due installment of a receipt request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    /// 1-based position within the schedule.
    pub index: u32,
    /// Total number of installments in the schedule.
    pub total: u32,
    /// Due date: base date plus `index − 1` calendar months.
    pub due_date: NaiveDate,
}

impl Installment {
    /// Document label: "Parcela i de N", or empty for a single-installment
    /// schedule.
    pub fn label(&self) -> String {
        if self.total > 1 {
            format!("Parcela {} de {}", self.index, self.total)
        } else {
            String::new()
        }
    }

    /// Due date as shown on the document: "dd/mm/aaaa".
    pub fn due_date_display(&self) -> String {
        self.due_date.format("%d/%m/%Y").to_string()
    }

    /// Attachment filename for this installment's rendered receipt.
    ///
    /// "Recibo_ProLabore" + provider-name slug + (when the schedule has
    /// more than one installment) "Parcela{i}de{N}" + due date as
    /// yyyymmdd + ".pdf". The slug keeps ASCII alphanumerics only, with
    /// whitespace runs collapsed to a single underscore.
    pub fn attachment_filename(&self, provider_name: &str) -> String {
        let mut base = String::from("Recibo_ProLabore");

        let slug = slugify(provider_name);
        if !slug.is_empty() {
            base.push('_');
            base.push_str(&slug);
        }

        if self.total > 1 {
            base.push_str(&format!("_Parcela{}de{}", self.index, self.total));
        }

        format!("{base}_{}.pdf", self.due_date.format("%Y%m%d"))
    }
}

/// Ordered due-date sequence of a receipt request, immutable after
/// [`plan`](InstallmentSchedule::plan).
///
/// Due dates advance by calendar months with the day-of-month clamped to
/// the target month's last valid day (Jan 31 + 1 month → Feb 28/29).
/// Count range validation (1–12) lives at the request boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentSchedule {
    installments: Vec<Installment>,
}

impl InstallmentSchedule {
    /// Produce the schedule for `count` installments starting at `base`.
    pub fn plan(base: NaiveDate, count: u32) -> Self {
        let installments = (1..=count)
            .map(|index| Installment {
                index,
                total: count,
                due_date: base + Months::new(index - 1),
            })
            .collect();
        Self { installments }
    }

    pub fn len(&self) -> usize {
        self.installments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Installment> {
        self.installments.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Installment> {
        self.installments.get(index)
    }

    /// The first (earliest) installment, when the schedule is non-empty.
    pub fn first(&self) -> Option<&Installment> {
        self.installments.first()
    }
}

impl<'a> IntoIterator for &'a InstallmentSchedule {
    type Item = &'a Installment;
    type IntoIter = std::slice::Iter<'a, Installment>;

    fn into_iter(self) -> Self::IntoIter {
        self.installments.iter()
    }
}

fn slugify(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Month/year reference of a date in pt-BR: "Janeiro/2024".
pub fn month_reference(date: NaiveDate) -> String {
    format!("{}/{}", MONTHS_PT[date.month0() as usize], date.year())
}

/// Capitalized Brazilian-Portuguese month names, January first.
pub const MONTHS_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_sequence_clamps_to_short_months() {
        let schedule = InstallmentSchedule::plan(date(2024, 1, 31), 3);
        let dues: Vec<NaiveDate> = schedule.iter().map(|i| i.due_date).collect();
        assert_eq!(
            dues,
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
        );
    }

    #[test]
    fn non_leap_february_clamps_to_28() {
        let schedule = InstallmentSchedule::plan(date(2023, 1, 31), 2);
        assert_eq!(schedule.get(1).unwrap().due_date, date(2023, 2, 28));
    }

    #[test]
    fn single_installment_has_empty_label() {
        let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 1);
        assert_eq!(schedule.len(), 1);
        let only = schedule.first().unwrap();
        assert_eq!(only.label(), "");
        assert_eq!(only.due_date_display(), "15/06/2024");
    }

    #[test]
    fn multi_installment_labels_are_one_based() {
        let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 3);
        let labels: Vec<String> = schedule.iter().map(|i| i.label()).collect();
        assert_eq!(
            labels,
            vec!["Parcela 1 de 3", "Parcela 2 de 3", "Parcela 3 de 3"]
        );
    }

    #[test]
    fn filename_single_installment_omits_parcela_segment() {
        let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 1);
        let name = schedule.first().unwrap().attachment_filename("Maria Souza");
        assert_eq!(name, "Recibo_ProLabore_Maria_Souza_20240615.pdf");
    }

    #[test]
    fn filename_multi_installment_carries_index_and_due_date() {
        let schedule = InstallmentSchedule::plan(date(2024, 1, 31), 3);
        let name = schedule.get(1).unwrap().attachment_filename("Maria Souza");
        assert_eq!(name, "Recibo_ProLabore_Maria_Souza_Parcela2de3_20240229.pdf");
    }

    #[test]
    fn filename_slug_drops_non_ascii_and_punctuation() {
        let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 1);
        let name = schedule
            .first()
            .unwrap()
            .attachment_filename("João  d'Ávila & Filhos");
        assert_eq!(name, "Recibo_ProLabore_Joo_dvila_Filhos_20240615.pdf");
    }

    #[test]
    fn filename_blank_provider_keeps_base_name() {
        let schedule = InstallmentSchedule::plan(date(2024, 6, 15), 1);
        let name = schedule.first().unwrap().attachment_filename("   ");
        assert_eq!(name, "Recibo_ProLabore_20240615.pdf");
    }

    #[test]
    fn month_reference_is_capitalized_portuguese() {
        assert_eq!(month_reference(date(2024, 1, 5)), "Janeiro/2024");
        assert_eq!(month_reference(date(2025, 12, 31)), "Dezembro/2025");
    }
}
