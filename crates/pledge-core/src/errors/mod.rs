mod config_error;
mod ledger_error;
mod pledge_error;

pub use config_error::ConfigError;
pub use ledger_error::LedgerError;
pub use pledge_error::{PledgeError, PledgeResult};
