pub mod initialize;
pub mod create_pool;
pub mod allocate;
pub mod allocate_batch;
pub mod claim;
pub mod remove_beneficiary;
pub mod transfer_ownership;
pub mod unlocked_token_amount;
pub mod total_unclaimed_pool_tokens;

pub use initialize::*;
pub use create_pool::*;
pub use allocate::*;
pub use allocate_batch::*;
pub use claim::*;
pub use remove_beneficiary::*;
pub use transfer_ownership::*;
pub use unlocked_token_amount::*;
pub use total_unclaimed_pool_tokens::*;
