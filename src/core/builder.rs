use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReciboError;
use super::types::*;
use super::validation;

/// Builder for constructing valid receipt requests.
///
/// ```
/// use recibo::core::*;
/// use rust_decimal_macros::dec;
///
/// let request = ReceiptRequestBuilder::new("Condomínio Jardim das Flores", "Maria Souza", dec!(2500))
///     .entity_tax_id("12345678000190")
///     .provider_tax_id("12345678901")
///     .bank("341", "Itaú")
///     .agency("1234-5")
///     .account("67890-1")
///     .pix_key(PixKeyType::Cpf, "12345678901")
///     .installments(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.installments, 3);
/// ```
pub struct ReceiptRequestBuilder {
    entity_name: String,
    entity_code: Option<String>,
    entity_tax_id: Option<String>,
    balance_group: Option<String>,
    balance_group_account: Option<String>,
    bank_code: Option<String>,
    bank_name: Option<String>,
    agency: Option<String>,
    account: Option<String>,
    pix_key_type: PixKeyType,
    pix_key: Option<String>,
    provider_name: String,
    provider_tax_id: Option<String>,
    provider_pis: Option<String>,
    gross: Decimal,
    service_description: Option<String>,
    service_type: Option<String>,
    tax_mode: TaxMode,
    retention: bool,
    installments: u32,
    base_date: Option<NaiveDate>,
    issue_place: Option<String>,
    manager_name: Option<String>,
}

impl ReceiptRequestBuilder {
    pub fn new(
        entity_name: impl Into<String>,
        provider_name: impl Into<String>,
        gross: Decimal,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            entity_code: None,
            entity_tax_id: None,
            balance_group: None,
            balance_group_account: None,
            bank_code: None,
            bank_name: None,
            agency: None,
            account: None,
            pix_key_type: PixKeyType::default(),
            pix_key: None,
            provider_name: provider_name.into(),
            provider_tax_id: None,
            provider_pis: None,
            gross,
            service_description: None,
            service_type: None,
            tax_mode: TaxMode::default(),
            retention: false,
            installments: 1,
            base_date: None,
            issue_place: None,
            manager_name: None,
        }
    }

    pub fn entity_code(mut self, code: impl Into<String>) -> Self {
        self.entity_code = Some(code.into());
        self
    }

    pub fn entity_tax_id(mut self, cnpj: impl Into<String>) -> Self {
        self.entity_tax_id = Some(cnpj.into());
        self
    }

    pub fn balance_group(mut self, group: impl Into<String>) -> Self {
        self.balance_group = Some(group.into());
        self
    }

    pub fn balance_group_account(mut self, account: impl Into<String>) -> Self {
        self.balance_group_account = Some(account.into());
        self
    }

    pub fn bank(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.bank_code = Some(code.into());
        self.bank_name = Some(name.into());
        self
    }

    pub fn agency(mut self, agency: impl Into<String>) -> Self {
        self.agency = Some(agency.into());
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn pix_key(mut self, kind: PixKeyType, key: impl Into<String>) -> Self {
        self.pix_key_type = kind;
        self.pix_key = Some(key.into());
        self
    }

    pub fn provider_tax_id(mut self, cpf: impl Into<String>) -> Self {
        self.provider_tax_id = Some(cpf.into());
        self
    }

    pub fn provider_pis(mut self, pis: impl Into<String>) -> Self {
        self.provider_pis = Some(pis.into());
        self
    }

    pub fn service_description(mut self, description: impl Into<String>) -> Self {
        self.service_description = Some(description.into());
        self
    }

    pub fn service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn tax_mode(mut self, mode: TaxMode) -> Self {
        self.tax_mode = mode;
        self
    }

    pub fn retention(mut self, retention: bool) -> Self {
        self.retention = retention;
        self
    }

    pub fn installments(mut self, count: u32) -> Self {
        self.installments = count;
        self
    }

    pub fn base_date(mut self, date: NaiveDate) -> Self {
        self.base_date = Some(date);
        self
    }

    pub fn issue_place(mut self, place: impl Into<String>) -> Self {
        self.issue_place = Some(place.into());
        self
    }

    pub fn manager_name(mut self, name: impl Into<String>) -> Self {
        self.manager_name = Some(name.into());
        self
    }

    /// Build the request, running boundary validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<ReceiptRequest, ReciboError> {
        let request = self.assemble();

        let errors = validation::validate_request(&request);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ReciboError::Validation(msg));
        }

        Ok(request)
    }

    /// Build without validation — useful for testing or importing external data.
    pub fn build_unchecked(self) -> ReceiptRequest {
        self.assemble()
    }

    fn assemble(self) -> ReceiptRequest {
        ReceiptRequest {
            entity_name: self.entity_name,
            entity_code: self.entity_code,
            entity_tax_id: self.entity_tax_id,
            balance_group: self.balance_group,
            balance_group_account: self.balance_group_account,
            bank_code: self.bank_code,
            bank_name: self.bank_name,
            agency: self.agency,
            account: self.account,
            pix_key_type: self.pix_key_type,
            pix_key: self.pix_key,
            provider_name: self.provider_name,
            provider_tax_id: self.provider_tax_id,
            provider_pis: self.provider_pis,
            gross: self.gross,
            service_description: self.service_description,
            service_type: self.service_type,
            tax_mode: self.tax_mode,
            retention: self.retention,
            installments: self.installments,
            base_date: self.base_date,
            issue_place: self.issue_place,
            manager_name: self.manager_name,
        }
    }
}
