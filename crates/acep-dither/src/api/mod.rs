//! Public error surface of the crate.

mod error;

pub use error::{DitherError, InputError};
