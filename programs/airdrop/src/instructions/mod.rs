pub mod initialize_pool;
pub mod claim_tokens;

pub use initialize_pool::*;
pub use claim_tokens::*;
