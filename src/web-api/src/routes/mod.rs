pub mod utils;
pub mod v1;
