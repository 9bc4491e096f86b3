#![forbid(unsafe_code)]

pub mod model;
pub mod sanitize;
pub mod time;

pub use time::Clock;
