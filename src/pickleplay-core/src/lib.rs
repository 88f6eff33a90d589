#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod admin;
mod court_id;
mod dataset;
mod discovery;
mod distance;
mod domain;
pub mod error;
mod geolocation;
mod map;
mod ports;
mod queries;
mod sequence;
mod state;

pub use admin::*;
pub use court_id::*;
pub use dataset::*;
pub use discovery::*;
pub use distance::*;
pub use domain::*;
pub use error::{BoxedError, CoreResult, Error};
pub use geolocation::*;
pub use map::*;
pub use ports::*;
pub use queries::*;
pub use sequence::*;
pub use state::*;
