pub mod pool_state;
pub mod claim_state;

pub use pool_state::*;
pub use claim_state::*;
