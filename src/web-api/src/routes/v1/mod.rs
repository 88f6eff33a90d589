pub mod court;
pub mod map;
