#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod client;
mod error;
mod settings;

pub use client::CourtServiceClient;
pub use error::{Error, Result};
pub use settings::Settings;
