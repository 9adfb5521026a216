//! CPF verification: local check-digit validation plus an optional
//! lookup against the public registry API.
//!
//! Registry availability is best-effort. When the service cannot be
//! reached or returns something unparseable, verification degrades to
//! the checksum result and says so via [`VerificationSource`].

use std::fmt;
use std::time::Duration;

use tracing::warn;

use crate::identifier::strip_non_digits;

/// Public registry endpoint queried by [`RegistryClient`].
pub const DEFAULT_REGISTRY_URL: &str = "https://api.receitaws.com.br/v1/cpf";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a verification verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationSource {
    /// The registry answered.
    Registry,
    /// Only the local check-digit test ran.
    ChecksumOnly,
}

/// Verdict of a CPF verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub valid: bool,
    pub source: VerificationSource,
}

/// Error talking to the registry. Callers of
/// [`RegistryClient::verify`] never see these; they surface only in
/// logs when the lookup degrades.
#[derive(Debug)]
#[non_exhaustive]
pub enum RegistryError {
    Network(reqwest::Error),
    Api(String),
    Parse(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "registry request failed: {e}"),
            Self::Api(e) => write!(f, "registry rejected the request: {e}"),
            Self::Parse(e) => write!(f, "registry response unreadable: {e}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

/// Check-digit test over the 11 digits of a CPF. Formatting characters
/// are ignored; anything that does not strip to 11 digits fails, as do
/// the well-known all-same-digit sequences.
pub fn checksum_valid(cpf: &str) -> bool {
    let digits = strip_non_digits(cpf);
    if digits.len() != 11 {
        return false;
    }
    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if d.iter().all(|&n| n == d[0]) {
        return false;
    }
    check_digit(&d[..9], 10) == d[9] && check_digit(&d[..10], 11) == d[10]
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &n)| n * (first_weight - i as u32))
        .sum();
    let resto = (sum * 10) % 11;
    if resto >= 10 { 0 } else { resto }
}

/// Client for the registry lookup.
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint, e.g. a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Verify a CPF. A failed checksum is conclusive and skips the
    /// network entirely. A registry "erro" answer is conclusive too.
    /// An unreachable or unreadable registry degrades to the checksum
    /// verdict.
    pub async fn verify(&self, cpf: &str) -> Verification {
        if !checksum_valid(cpf) {
            return Verification {
                valid: false,
                source: VerificationSource::ChecksumOnly,
            };
        }

        match self.lookup(&strip_non_digits(cpf)).await {
            Ok(valid) => Verification {
                valid,
                source: VerificationSource::Registry,
            },
            Err(e) => {
                warn!(error = %e, "registry lookup degraded to checksum");
                Verification {
                    valid: true,
                    source: VerificationSource::ChecksumOnly,
                }
            }
        }
    }

    async fn lookup(&self, digits: &str) -> Result<bool, RegistryError> {
        let url = format!("{}/{digits}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RegistryError::Network)?;
        if !response.status().is_success() {
            return Err(RegistryError::Api(response.status().to_string()));
        }
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| RegistryError::Parse(e.to_string()))?;

        // "status": "OK" means found; an explicit "erro" marker (or a
        // non-OK status) means the registry does not know the CPF.
        if let Some(status) = body.get("status").and_then(|v| v.as_str()) {
            return Ok(status.eq_ignore_ascii_case("ok"));
        }
        Ok(body.get("erro").is_none())
    }
}
