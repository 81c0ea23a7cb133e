//! Output formatting module

pub mod json;

pub use json::{ErrorPayload, JsonWriter, Payload, TextPayload};
