//! Data module - Pasted JSON decoding and validation

mod record;
mod validator;

pub use record::RecordSet;
pub use validator::{InputState, Trace};

#[cfg(test)]
pub use validator::validate;
