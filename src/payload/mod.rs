//! Document payload assembly: the flat placeholder → value map consumed
//! by the template renderer.
//!
//! [`assemble`] is the join point of the pipeline: money rules, the
//! spelled-out amounts, the identifier masks, and the installment
//! schedule all meet here. Every key in [`keys::ALL`] is guaranteed
//! present; absent optional inputs surface as [`NOT_INFORMED`] so the
//! rendered document never shows a hole.

pub mod keys;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    Installment, InstallmentSchedule, MoneyBreakdown, ReceiptRequest, format_brl, format_plain,
    month_reference,
};
use crate::extenso;
use crate::identifier;

/// Marker used for absent optional fields ("Não informado").
pub const NOT_INFORMED: &str = "Não informado";

/// Style value that hides an image block until a capability fills it.
pub const HIDDEN_STYLE: &str = "display:none;";

/// Flat placeholder → value map for one rendered receipt.
///
/// Backed by a `BTreeMap` so iteration order is deterministic and
/// repeated assembly of the same request is byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentPayload(BTreeMap<String, String>);

impl DocumentPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a DocumentPayload {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Assemble one payload per installment, in ascending due-date order.
///
/// The money breakdown is computed once from the request's gross amount
/// and reused across every installment — figures are not prorated.
/// `issued_on` is the caller-captured "today"; the assembler never reads
/// a clock, so re-running it over the same inputs is byte-identical.
pub fn assemble(
    request: &ReceiptRequest,
    schedule: &InstallmentSchedule,
    issued_on: NaiveDate,
) -> Vec<DocumentPayload> {
    let breakdown = MoneyBreakdown::from_gross(request.gross, request.tax_mode);
    schedule
        .iter()
        .map(|installment| assemble_one(request, &breakdown, installment, issued_on))
        .collect()
}

/// Assemble the payload for a single installment.
pub fn assemble_one(
    request: &ReceiptRequest,
    breakdown: &MoneyBreakdown,
    installment: &Installment,
    issued_on: NaiveDate,
) -> DocumentPayload {
    let mut payload = DocumentPayload::new();

    // Header
    payload.set(keys::MES_REFERENCIA, month_reference(issued_on));
    payload.set(
        keys::MES_REFERENCIA_CURTO,
        issued_on.format("%m/%Y").to_string(),
    );
    payload.set(keys::DATA_EMISSAO, issued_on.format("%d/%m/%Y").to_string());
    payload.set(
        keys::LOCAL_EMISSAO,
        or_not_informed(request.issue_place.as_deref()),
    );
    payload.set(keys::LOCALIDADE, "Brasil");

    // Paying entity
    let entity = match &request.entity_code {
        Some(code) if !code.trim().is_empty() => {
            format!("{code} - {}", request.entity_name)
        }
        _ => request.entity_name.clone(),
    };
    payload.set(keys::NOME_CONDOMINIO, entity);
    payload.set(
        keys::CNPJ_CONDOMINIO,
        non_blank(identifier::format_cnpj(request.entity_tax_id.as_deref())),
    );
    payload.set(
        keys::GRUPO_DE_SALDO,
        or_not_informed(request.balance_group.as_deref()),
    );
    payload.set(
        keys::CONTA_GRUPO_DE_SALDO,
        or_not_informed(request.balance_group_account.as_deref()),
    );

    // Amounts
    payload.set(keys::VALOR_BRUTO, format_brl(breakdown.gross));
    payload.set(keys::VALOR_INSS, format_brl(breakdown.withheld));
    payload.set(keys::VALOR_LIQUIDO, format_brl(breakdown.net));
    payload.set(keys::VALOR_BRUTO_NUMERICO, format_plain(breakdown.gross));
    payload.set(keys::VALOR_INSS_NUMERICO, format_plain(breakdown.withheld));
    payload.set(keys::VALOR_LIQUIDO_NUMERICO, format_plain(breakdown.net));

    let gross_words = extenso::spell(breakdown.gross);
    let net_words = extenso::spell(breakdown.net);
    payload.set(
        keys::VALOR_LIQUIDO_FORMATADO,
        format!("{} ({net_words})", format_brl(breakdown.net)),
    );
    payload.set(keys::VALOR_BRUTO_POR_EXTENSO, gross_words);
    payload.set(keys::VALOR_LIQUIDO_POR_EXTENSO, net_words);

    // Provider
    payload.set(keys::NOME_PRESTADOR, request.provider_name.clone());
    payload.set(
        keys::CPF_PRESTADOR,
        non_blank(identifier::format_cpf(request.provider_tax_id.as_deref())),
    );
    payload.set(
        keys::PIS,
        non_blank(identifier::format_pis(request.provider_pis.as_deref())),
    );

    // Bank
    payload.set(
        keys::CODIGO_BANCO,
        or_not_informed(request.bank_code.as_deref()),
    );
    payload.set(
        keys::NOME_BANCO,
        or_not_informed(request.bank_name.as_deref()),
    );
    payload.set(keys::AGENCIA, bank_display(request.agency.as_deref()));
    payload.set(keys::CONTA, bank_display(request.account.as_deref()));
    payload.set(
        keys::CHAVE_PIX,
        non_blank(identifier::format_pix_key(
            request.pix_key_type,
            request.pix_key.as_deref(),
        )),
    );
    payload.set(keys::TIPO_CHAVE_PIX, request.pix_key_type.label());

    // Service
    payload.set(
        keys::DESCRICAO_SERVICO,
        or_not_informed(request.service_description.as_deref()),
    );
    payload.set(
        keys::TIPO_SERVICO_PRESTADO,
        or_not_informed(
            request
                .service_type
                .as_deref()
                .or(request.service_description.as_deref()),
        ),
    );
    payload.set(
        keys::RETENCAO_VALOR,
        if request.retention { "Sim" } else { "Não" },
    );

    // Installment
    payload.set(keys::DATA_VENCIMENTO, installment.due_date_display());
    payload.set(keys::PARCELA, installment.label());

    // Image blocks stay hidden until a capability fills them
    payload.set(keys::LOGO_BASE64, "");
    payload.set(keys::LOGO_STYLE, HIDDEN_STYLE);
    payload.set(keys::QR_CODE_BASE64, "");
    payload.set(keys::QR_CODE_STYLE, HIDDEN_STYLE);

    payload
}

fn or_not_informed(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_INFORMED.to_string(),
    }
}

fn non_blank(formatted: String) -> String {
    if formatted.trim().is_empty() {
        NOT_INFORMED.to_string()
    } else {
        formatted
    }
}

fn bank_display(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => identifier::split_bank_field(v).display(),
        _ => NOT_INFORMED.to_string(),
    }
}
