pub mod beneficiary;
pub mod config;
pub mod fraction;
pub mod pool;

pub use beneficiary::*;
pub use config::*;
pub use fraction::*;
pub use pool::*;
