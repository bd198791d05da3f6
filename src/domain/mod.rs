mod account;
mod error;
mod money;
mod statement;
mod transaction;

pub use account::*;
pub use error::*;
pub use money::*;
pub use statement::*;
pub use transaction::*;
