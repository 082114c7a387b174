//! # PIX BR Code
//!
//! Encodes static PIX payment requests into the BR Code ("PIX copia e cola")
//! text format: a sequence of `id + length + value` fields sealed with a
//! CRC-16/CCITT-FALSE checksum.
//!
//! ## Design Principles
//!
//! - **Pure core**: normalization, field encoding and checksum are stateless functions
//! - **Fail fast**: values over 99 characters and non-ASCII payloads are errors
//! - **Lenient amounts**: unusable amounts produce an open-amount request
//! - **Fixed-point amounts**: two decimal places via `rust_decimal`, half-to-even
//!
//! ## Example
//!
//! ```
//! use pix_brcode::{Amount, PaymentRequest};
//!
//! let code = PaymentRequest::new("+5571997170057", "Central Cidadania", "Salvador")
//!     .unwrap()
//!     .with_amount(Amount::parse("20"))
//!     .generate()
//!     .unwrap();
//!
//! assert!(code.contains("540520.00"));
//! assert!(pix_brcode::crc::verify(&code));
//! ```

pub mod amount;
pub mod batch;
pub mod crc;
pub mod error;
pub mod field;
pub mod normalize;
pub mod payload;
pub mod request;

pub use amount::Amount;
pub use batch::{BrCodeBatch, GeneratedCode};
pub use error::{BrCodeError, Result};
pub use field::{field, TaggedField, Template};
pub use normalize::normalize;
pub use payload::generate;
pub use request::{PaymentRecord, PaymentRequest};
