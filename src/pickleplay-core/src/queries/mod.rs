mod court;
mod filter;

pub use court::*;
pub use filter::*;
