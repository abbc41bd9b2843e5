//! Conversions between text, integers and their binary renditions.

pub mod error;
pub mod integer;
pub mod text;

pub use error::{BinaryInputError, Error};
