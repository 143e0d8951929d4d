pub mod constants;
pub mod types;
pub mod errors;

pub use constants::*;
pub use types::*;
