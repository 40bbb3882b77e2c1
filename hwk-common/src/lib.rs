pub mod constants;
pub mod error;
pub mod message;
pub mod schema;

extern crate anyhow;
use core::result;
pub type Result<T> = result::Result<T, anyhow::Error>;
