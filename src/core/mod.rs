//! Core, platform independent list processing code.

pub mod entry;
pub mod normalize;
pub mod repr;
pub mod serialize;
pub mod stream;
pub mod validate;
