pub mod math;
pub mod token;

pub use math::*;
pub use token::*;
