//! A local binary pattern texture analysis library based on the
//! [image] crate.
//!
//! The functions in [`local_binary_patterns`] compute the patterns
//! themselves, classify them by uniformity and extract the locations
//! of chosen patterns; [`extractor`] wraps them in a type that loads
//! an image once and caches its pattern image for repeated queries.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]

#[macro_use]
pub mod utils;
pub mod definitions;
pub mod extractor;
pub mod local_binary_patterns;
pub mod point;
#[cfg(test)]
mod proptest_utils;
