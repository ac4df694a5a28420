pub use coordinator::*;
pub use raffle::*;
pub use vault::*;

pub mod coordinator;
pub mod raffle;
pub mod vault;
