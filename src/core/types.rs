use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pró-labore payment receipt request — the immutable input of the
/// whole pipeline. One request produces one receipt per installment.
///
/// All fields are request-scoped values; nothing here is shared or
/// mutated after construction. Build through [`ReceiptRequestBuilder`]
/// so the range invariants (gross ≥ 0, installments 1–12) hold.
///
/// [`ReceiptRequestBuilder`]: crate::core::ReceiptRequestBuilder
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    /// Paying entity (condomínio) display name.
    pub entity_name: String,
    /// Internal entity code (empreendimento), shown as "{code} - {name}" when present.
    pub entity_code: Option<String>,
    /// Entity CNPJ, raw digits or already punctuated.
    pub entity_tax_id: Option<String>,
    /// Accounting balance-group label, carried verbatim onto the document.
    pub balance_group: Option<String>,
    /// Ledger account of the balance group.
    pub balance_group_account: Option<String>,
    /// Bank compensation code (e.g. "341").
    pub bank_code: Option<String>,
    /// Bank display name.
    pub bank_name: Option<String>,
    /// Branch, optionally "number-dash-check-digit" (e.g. "1234-5").
    pub agency: Option<String>,
    /// Account, optionally "number-dash-check-digit".
    pub account: Option<String>,
    /// PIX key type; selects the display mask for `pix_key`.
    pub pix_key_type: PixKeyType,
    /// Raw PIX key as entered.
    pub pix_key: Option<String>,
    /// Service provider (payee) name.
    pub provider_name: String,
    /// Provider CPF, raw digits or already punctuated.
    pub provider_tax_id: Option<String>,
    /// Provider PIS (worker registry), same 11-digit mask as CPF.
    pub provider_pis: Option<String>,
    /// Gross payment amount. Absent input is treated as zero upstream.
    pub gross: Decimal,
    /// Free-text description of the service rendered.
    pub service_description: Option<String>,
    /// Service type label (e.g. "Pró-labore").
    pub service_type: Option<String>,
    /// Withholding mode applied to the gross amount.
    pub tax_mode: TaxMode,
    /// Whether the retention box on the document reads "Sim" or "Não".
    pub retention: bool,
    /// Number of installments, 1–12.
    pub installments: u32,
    /// Explicit base (first due) date; defaults to the caller's "today".
    pub base_date: Option<NaiveDate>,
    /// City shown as the place of issuance.
    pub issue_place: Option<String>,
    /// Manager name, used only by the QR verification URL.
    pub manager_name: Option<String>,
}

impl ReceiptRequest {
    /// The schedule's base date: the explicit one when given, else `today`.
    ///
    /// "Today" is always threaded in by the caller; the core never reads
    /// a clock.
    pub fn effective_base_date(&self, today: NaiveDate) -> NaiveDate {
        self.base_date.unwrap_or(today)
    }
}

/// Withholding mode for the gross amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxMode {
    /// INSS withheld at the standard rate.
    Standard,
    /// No withholding; net equals gross.
    None,
}

impl TaxMode {
    /// Wire code as used by upstream systems.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Standard => "INSS",
            Self::None => "SEM_INSS",
        }
    }

    /// Lenient parse: only an explicit no-withholding code maps to
    /// [`TaxMode::None`]; anything else, including unknown codes, is
    /// [`TaxMode::Standard`].
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "SEM_INSS" | "NONE" => Self::None,
            _ => Self::Standard,
        }
    }
}

impl Default for TaxMode {
    fn default() -> Self {
        Self::Standard
    }
}

/// PIX key type. Only CPF and phone keys have a display mask; email and
/// random (EVP) keys are shown exactly as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixKeyType {
    /// 11-digit CPF, masked "###.###.###-##".
    Cpf,
    /// 11-digit mobile number, masked "(##) #####-####".
    Phone,
    /// E-mail address, passthrough.
    Email,
    /// Random key (EVP), passthrough.
    Random,
}

impl PixKeyType {
    /// Wire code as used by upstream systems.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Phone => "celular",
            Self::Email => "email",
            Self::Random => "aleatoria",
        }
    }

    /// Human-readable label as printed on the document.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Phone => "Celular",
            Self::Email => "E-mail",
            Self::Random => "Aleatória",
        }
    }

    /// Lenient parse; unknown codes fall back to [`PixKeyType::Random`],
    /// whose display behavior is passthrough.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "cpf" => Self::Cpf,
            "celular" | "telefone" | "phone" => Self::Phone,
            "email" | "e-mail" => Self::Email,
            _ => Self::Random,
        }
    }
}

impl Default for PixKeyType {
    fn default() -> Self {
        Self::Random
    }
}
