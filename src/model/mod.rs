//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod invoice;
pub mod money;
pub mod status;

// Re-export for convenience
pub use error::{AppError, FetchError, ParseError, StoreError};
pub use identifiers::{InvalidInvoiceId, InvoiceId};
pub use invoice::{Comment, Customer, Invoice, MISSING_FIELD_PLACEHOLDER};
pub use money::{Amount, InvalidAmount};
pub use status::{InvoiceStatus, UnknownStatus};
