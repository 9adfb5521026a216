//! Receipt dispatch over e-mail.
//!
//! [`MailTransport`] is the delivery seam; [`dispatch`] implements the
//! fan-out: the recipient gets the receipt, the requester optionally
//! gets a marked copy, and the sender optionally gets a confirmation.
//! Only the primary send is fatal; copy failures are logged and
//! reported, never propagated.
//!
//! The SMTP-backed transport lives in [`smtp`] behind the `smtp`
//! feature.

use std::fmt;
use std::sync::{Mutex, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use crate::core::{MoneyBreakdown, ReceiptRequest, format_brl};
use crate::identifier::{format_cnpj, format_cpf, format_pix_key, split_bank_field};
use crate::payload::{DocumentPayload, NOT_INFORMED};

#[cfg(feature = "smtp")]
pub mod smtp;

/// Subject used when the caller does not provide one.
pub const DEFAULT_SUBJECT: &str = "Recibo de Pagamento - Pró-Labore";

/// Suffix appended to the subject of requester copies.
pub const COPY_SUFFIX: &str = " - Cópia";

/// Error from building or delivering a message.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum MailError {
    /// A recipient or sender address could not be parsed.
    InvalidAddress(String),
    /// The message could not be constructed.
    Build(String),
    /// The transport failed to deliver.
    Transport(String),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress(a) => write!(f, "invalid e-mail address: {a}"),
            Self::Build(e) => write!(f, "message build error: {e}"),
            Self::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

impl std::error::Error for MailError {}

/// A binary attachment, typically the rendered receipt PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf".to_string(),
            bytes,
        }
    }
}

/// A fully assembled outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body_html: String,
    pub body_text: String,
    pub reply_to: Option<String>,
    pub attachments: Vec<Attachment>,
}

/// Delivery seam. Implementations must be shareable across tasks.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError>;
}

/// In-memory transport for tests: records every message, optionally
/// failing for one recipient address.
#[derive(Debug, Default)]
pub struct MockTransport {
    sent: Mutex<Vec<EmailMessage>>,
    fail_for: Option<String>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport that rejects sends addressed to `address`.
    pub fn failing_for(address: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: Some(address.into()),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        if self.fail_for.as_deref() == Some(message.to.as_str()) {
            return Err(MailError::Transport(format!("rejected for {}", message.to)));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Addressing and content of one dispatch.
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    /// Primary recipient.
    pub to: String,
    pub subject: String,
    pub body_html: String,
    /// Pre-composed plain-text alternative; derived from the HTML body
    /// when absent.
    pub body_text: Option<String>,
    /// Requester address for the marked copy, when distinct.
    pub copy_to: Option<String>,
    /// Sender address for the confirmation message.
    pub confirm_to: Option<String>,
    pub reply_to: Option<String>,
}

impl DispatchOptions {
    pub fn new(to: impl Into<String>, body_html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: DEFAULT_SUBJECT.to_string(),
            body_html: body_html.into(),
            body_text: None,
            copy_to: None,
            confirm_to: None,
            reply_to: None,
        }
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    pub fn copy_to(mut self, address: impl Into<String>) -> Self {
        self.copy_to = Some(address.into());
        self
    }

    pub fn confirm_to(mut self, address: impl Into<String>) -> Self {
        self.confirm_to = Some(address.into());
        self
    }

    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to = Some(address.into());
        self
    }
}

/// Outcome of a [`dispatch`] call. The primary send always succeeded
/// when a report is returned; the flags record the optional copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    pub copy_requested: bool,
    pub copy_sent: bool,
    pub confirmation_requested: bool,
    pub confirmation_sent: bool,
}

/// Send the receipt to the recipient, then fan out the requester copy
/// and the sender confirmation. The primary send is fatal; copy and
/// confirmation failures degrade to a warning and a cleared report
/// flag.
pub async fn dispatch(
    transport: &dyn MailTransport,
    options: &DispatchOptions,
    attachments: Vec<Attachment>,
) -> Result<DispatchReport, MailError> {
    let body_text = options
        .body_text
        .clone()
        .unwrap_or_else(|| html_to_text(&options.body_html));
    let primary = EmailMessage {
        to: options.to.clone(),
        subject: options.subject.clone(),
        body_html: options.body_html.clone(),
        body_text: body_text.clone(),
        reply_to: options.reply_to.clone(),
        attachments,
    };
    transport.send(&primary).await?;

    let mut report = DispatchReport::default();

    // Requester copy only when the address differs from the recipient.
    if let Some(copy_to) = options
        .copy_to
        .as_deref()
        .filter(|a| !a.eq_ignore_ascii_case(&options.to))
    {
        report.copy_requested = true;
        let notice = format!(
            "Esta é uma cópia do recibo enviado para {}.",
            options.to
        );
        let copy = EmailMessage {
            to: copy_to.to_string(),
            subject: format!("{}{COPY_SUFFIX}", options.subject),
            body_html: format!("<p><em>{notice}</em></p>{}", options.body_html),
            body_text: format!("{notice}\n\n{body_text}"),
            reply_to: options.reply_to.clone(),
            attachments: primary.attachments.clone(),
        };
        match transport.send(&copy).await {
            Ok(()) => report.copy_sent = true,
            Err(e) => warn!(to = copy_to, error = %e, "requester copy not delivered"),
        }
    }

    if let Some(confirm_to) = options.confirm_to.as_deref() {
        report.confirmation_requested = true;
        let notice = format!(
            "O recibo foi enviado para {} com o assunto \"{}\".",
            options.to, options.subject
        );
        let confirmation = EmailMessage {
            to: confirm_to.to_string(),
            subject: format!("Confirmação de envio: {}", options.subject),
            body_html: format!("<p>{notice}</p>"),
            body_text: notice,
            reply_to: None,
            attachments: Vec::new(),
        };
        match transport.send(&confirmation).await {
            Ok(()) => report.confirmation_sent = true,
            Err(e) => warn!(to = confirm_to, error = %e, "confirmation not delivered"),
        }
    }

    Ok(report)
}

/// Placeholder names of the short payment-notice body, a compact
/// variant of the receipt used in the message itself.
pub mod notice_keys {
    pub const VALOR_PAGAMENTO: &str = "VALOR_PAGAMENTO";
    pub const CODIGO_EMPREENDIMENTO: &str = "CODIGO_EMPREENDIMENTO";
    pub const NOME_EMPREENDIMENTO: &str = "NOME_EMPREENDIMENTO";
    pub const VENCIMENTO: &str = "VENCIMENTO";
    pub const CONTA_CONTABIL: &str = "CONTA_CONTABIL";
    pub const DESCRICAO_PAGAMENTO: &str = "DESCRICAO_PAGAMENTO";
    pub const DOCUMENTO_FORNECEDOR: &str = "DOCUMENTO_FORNECEDOR";
    pub const NOME_FORNECEDOR: &str = "NOME_FORNECEDOR";
    pub const DOCUMENTO_FAVORECIDO: &str = "DOCUMENTO_FAVORECIDO";
    pub const NOME_FAVORECIDO: &str = "NOME_FAVORECIDO";
    pub const NUMERO_BANCO: &str = "NUMERO_BANCO";
    pub const AGENCIA: &str = "AGENCIA";
    pub const DIGITO_AGENCIA: &str = "DIGITO_AGENCIA";
    pub const NUMERO_CONTA: &str = "NUMERO_CONTA";
    pub const DIGITO_CONTA: &str = "DIGITO_CONTA";
    pub const CHAVE_PIX: &str = "CHAVE_PIX";

    pub const ALL: &[&str] = &[
        VALOR_PAGAMENTO,
        CODIGO_EMPREENDIMENTO,
        NOME_EMPREENDIMENTO,
        VENCIMENTO,
        CONTA_CONTABIL,
        DESCRICAO_PAGAMENTO,
        DOCUMENTO_FORNECEDOR,
        NOME_FORNECEDOR,
        DOCUMENTO_FAVORECIDO,
        NOME_FAVORECIDO,
        NUMERO_BANCO,
        AGENCIA,
        DIGITO_AGENCIA,
        NUMERO_CONTA,
        DIGITO_CONTA,
        CHAVE_PIX,
    ];
}

/// Assemble the payment-notice payload for the message body. Every key
/// of [`notice_keys::ALL`] is present; absent data degrades to
/// "Não informado" or the next fallback in line.
pub fn notice_payload(
    request: &ReceiptRequest,
    breakdown: &MoneyBreakdown,
    due_date_display: &str,
) -> DocumentPayload {
    use notice_keys as k;

    let mut p = DocumentPayload::new();
    p.set(k::VALOR_PAGAMENTO, format_brl(breakdown.net));
    p.set(
        k::CODIGO_EMPREENDIMENTO,
        or_not_informed(request.entity_code.as_deref()),
    );
    p.set(k::NOME_EMPREENDIMENTO, request.entity_name.clone());
    p.set(k::VENCIMENTO, due_date_display);
    p.set(
        k::CONTA_CONTABIL,
        or_not_informed(request.balance_group_account.as_deref()),
    );
    p.set(k::DESCRICAO_PAGAMENTO, payment_description(request));
    p.set(
        k::DOCUMENTO_FORNECEDOR,
        masked_or_not_informed(request.entity_tax_id.as_deref(), format_cnpj),
    );
    p.set(k::NOME_FORNECEDOR, request.entity_name.clone());
    p.set(
        k::DOCUMENTO_FAVORECIDO,
        masked_or_not_informed(request.provider_tax_id.as_deref(), format_cpf),
    );
    p.set(k::NOME_FAVORECIDO, request.provider_name.clone());
    p.set(k::NUMERO_BANCO, bank_number(request));
    let agency = split_bank_field(request.agency.as_deref().unwrap_or(""));
    p.set(k::AGENCIA, or_not_informed(non_blank(&agency.number)));
    p.set(k::DIGITO_AGENCIA, or_not_informed(non_blank(&agency.check_digit)));
    let account = split_bank_field(request.account.as_deref().unwrap_or(""));
    p.set(k::NUMERO_CONTA, or_not_informed(non_blank(&account.number)));
    p.set(k::DIGITO_CONTA, or_not_informed(non_blank(&account.check_digit)));
    let pix = format_pix_key(request.pix_key_type, request.pix_key.as_deref());
    p.set(k::CHAVE_PIX, or_not_informed(non_blank(&pix)));
    p
}

fn payment_description(request: &ReceiptRequest) -> String {
    match request.service_description.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(desc) => desc.to_string(),
        None if !request.provider_name.trim().is_empty() => {
            format!("Pagamento de serviços - {}", request.provider_name)
        }
        None => "Pagamento de serviços".to_string(),
    }
}

fn bank_number(request: &ReceiptRequest) -> String {
    request
        .bank_name
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .or(request.bank_code.as_deref().filter(|s| !s.trim().is_empty()))
        .unwrap_or(NOT_INFORMED)
        .to_string()
}

fn or_not_informed(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(v) => v.to_string(),
        None => NOT_INFORMED.to_string(),
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn masked_or_not_informed(value: Option<&str>, mask: fn(Option<&str>) -> String) -> String {
    let masked = mask(value);
    if masked.trim().is_empty() {
        NOT_INFORMED.to_string()
    } else {
        masked
    }
}

/// Derive a plain-text body from an HTML one: block tags become line
/// breaks, list items become dashes, the rest of the markup is dropped
/// and common entities are decoded.
pub fn html_to_text(html: &str) -> String {
    static BLOCK_BREAK: OnceLock<Regex> = OnceLock::new();
    static LIST_ITEM: OnceLock<Regex> = OnceLock::new();
    static ANY_TAG: OnceLock<Regex> = OnceLock::new();
    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

    let block_break = BLOCK_BREAK
        .get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</p>|</div>|</tr>|</h[1-6]>|</li>").unwrap());
    let list_item = LIST_ITEM.get_or_init(|| Regex::new(r"(?i)<li[^>]*>").unwrap());
    let any_tag = ANY_TAG.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());
    let blank_runs = BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").unwrap());

    let text = block_break.replace_all(html, "\n");
    let text = list_item.replace_all(&text, "- ");
    let text = any_tag.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");
    let text = blank_runs.replace_all(&text, "\n\n");
    text.trim().to_string()
}
