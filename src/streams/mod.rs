//! This module provides ways to produce streams other than `cons`ing them by hand.
//! Additionally, it declares the modules with the implementations and re-exports their names.

mod generators;
pub use generators::{constant, integers_from, interval};
pub(crate) use generators::from_shared;

#[cfg(feature = "std")]
pub mod receivers;
