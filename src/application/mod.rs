// Application layer - applies caller operations to a single account.
// Parsing of external input lives in `io`; the ledger rules live in `domain`.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
