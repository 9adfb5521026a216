//! # recibo
//!
//! Recibos de pró-labore: INSS withholding arithmetic, valores por
//! extenso, Brazilian identifier formatting, installment planning, and
//! the assembly of a complete receipt payload — plus optional rendering,
//! e-mail dispatch, and CPF verification.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Rounding is half-up at two decimal places throughout.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use recibo::core::*;
//! use rust_decimal_macros::dec;
//!
//! let request = ReceiptRequestBuilder::new("Condomínio Jardim das Acácias", "Maria Souza", dec!(2500))
//!     .entity_tax_id("12345678000195")
//!     .provider_tax_id("39053344705")
//!     .pix_key(PixKeyType::Cpf, "39053344705")
//!     .installments(2)
//!     .base_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let breakdown = MoneyBreakdown::from_gross(request.gross, request.tax_mode);
//! assert_eq!(breakdown.withheld, dec!(275.00));
//! assert_eq!(breakdown.net, dec!(2225.00));
//!
//! let base = request.base_date.unwrap();
//! let schedule = InstallmentSchedule::plan(base, request.installments);
//! assert_eq!(schedule.get(1).unwrap().label(), "Parcela 2 de 2");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Request types, money rules, extenso, identifier masks, payload assembly |
//! | `render` | Template filling, renderer and QR seams |
//! | `email` | Dispatch fan-out, payment notice, mail transport trait |
//! | `smtp` | SMTP transport backed by lettre |
//! | `verify` | CPF check digits and registry lookup |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod extenso;

#[cfg(feature = "core")]
pub mod identifier;

#[cfg(feature = "core")]
pub mod payload;

#[cfg(feature = "render")]
pub mod render;

#[cfg(feature = "email")]
pub mod email;

#[cfg(feature = "verify")]
pub mod verify;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
