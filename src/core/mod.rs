pub mod chain;
pub mod scale;
pub mod state;

pub use chain::*;
pub use scale::*;
pub use state::*;
