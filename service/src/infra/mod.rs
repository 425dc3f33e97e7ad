//! Infrastructure layer.

pub mod gateway;

pub use self::gateway::{Gateway, Http};
