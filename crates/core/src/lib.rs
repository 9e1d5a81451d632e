#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod age;

pub mod config {
    pub mod loader;
    pub mod types;
}

pub use age::{
    AgeError, DateInput, DateParser, compute_age, compute_age_today, compute_age_with,
    parse_date, years_between,
};

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
