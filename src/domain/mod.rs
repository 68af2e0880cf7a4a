mod categories;
mod date;
mod ledger;
mod money;
mod transaction;

pub use categories::*;
pub use date::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
