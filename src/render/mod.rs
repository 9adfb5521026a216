//! Template filling and the rendering seams.
//!
//! The core produces a [`DocumentPayload`]; turning it into a document is
//! the job of an external engine behind the [`ReceiptRenderer`] trait.
//! [`HtmlRenderer`] is the built-in implementation: placeholder
//! substitution over an HTML template, returned as UTF-8 bytes. PDF
//! conversion stays outside this crate.
//!
//! QR stamping is an explicit capability: callers inject a [`QrEncoder`]
//! (or [`NoQr`]) at construction time instead of probing for an encoder
//! at runtime.

use std::collections::BTreeSet;
use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::payload::{DocumentPayload, keys};

/// Error from a rendering collaborator.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum RenderError {
    /// The rendering engine rejected the template or payload.
    Engine(String),
    /// A URL or query string could not be encoded.
    Encoding(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "render engine error: {e}"),
            Self::Encoding(e) => write!(f, "encoding error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Replace every `{{KEY}}` occurrence with the payload's value for KEY.
/// Keys the payload does not carry are left untouched.
pub fn fill_template(template: &str, payload: &DocumentPayload) -> String {
    let mut filled = template.to_string();
    for (key, value) in payload.iter() {
        let marker = format!("{{{{{key}}}}}");
        if filled.contains(&marker) {
            filled = filled.replace(&marker, value);
        }
    }
    filled
}

/// Collect every `{{KEY}}` placeholder name a template declares.
pub fn template_keys(template: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let key = &after[..end];
        if !key.is_empty() && !key.contains('{') && !key.contains('\n') {
            found.insert(key.to_string());
        }
        rest = &after[end + 2..];
    }
    found
}

/// Template placeholders the payload does not provide, sorted.
///
/// The assembler's completeness guarantee makes this empty for the
/// bundled template; custom templates can be checked before rendering.
pub fn missing_keys(template: &str, payload: &DocumentPayload) -> Vec<String> {
    template_keys(template)
        .into_iter()
        .filter(|key| !payload.contains_key(key))
        .collect()
}

/// External document-engine seam.
pub trait ReceiptRenderer {
    fn render(&self, template: &str, payload: &DocumentPayload) -> Result<Vec<u8>, RenderError>;
}

/// Built-in renderer: placeholder substitution, UTF-8 HTML bytes out.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ReceiptRenderer for HtmlRenderer {
    fn render(&self, template: &str, payload: &DocumentPayload) -> Result<Vec<u8>, RenderError> {
        Ok(fill_template(template, payload).into_bytes())
    }
}

/// QR-code capability. `encode` returns PNG bytes, or `None` when the
/// capability is absent or the content cannot be encoded.
pub trait QrEncoder {
    fn encode(&self, content: &str) -> Option<Vec<u8>>;
}

/// The no-op QR capability: never encodes anything, so the QR block on
/// the document stays hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQr;

impl QrEncoder for NoQr {
    fn encode(&self, _content: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Build the verification URL stamped into the QR code:
/// `{base}/recibos/qr-info?gerente=…&data=…&hora=…`.
pub fn verification_url(
    base_url: &str,
    manager: &str,
    date: &str,
    time: &str,
) -> Result<String, RenderError> {
    let base = base_url.trim_end_matches('/');
    let query = serde_urlencoded::to_string([("gerente", manager), ("data", date), ("hora", time)])
        .map_err(|e| RenderError::Encoding(e.to_string()))?;
    Ok(format!("{base}/recibos/qr-info?{query}"))
}

/// Stamp the QR block: when the encoder produces PNG bytes for `url`,
/// set the data URI and unhide the block; otherwise leave the hidden
/// defaults untouched.
pub fn apply_qr(payload: &mut DocumentPayload, encoder: &dyn QrEncoder, url: &str) {
    if let Some(png) = encoder.encode(url) {
        payload.set(keys::QR_CODE_BASE64, data_uri(&png));
        payload.set(keys::QR_CODE_STYLE, "");
    }
}

/// Stamp the logo block with the given PNG bytes and unhide it.
pub fn apply_logo(payload: &mut DocumentPayload, png: &[u8]) {
    payload.set(keys::LOGO_BASE64, data_uri(png));
    payload.set(keys::LOGO_STYLE, "");
}

fn data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(png))
}

/// The receipt template shipped with the crate. Declares exactly the
/// placeholders of [`keys::ALL`].
pub const DEFAULT_TEMPLATE: &str = include_str!("recibo.html");
