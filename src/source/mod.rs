//! Photograph input and decoding.
//!
//! This module enumerates the image corpus and decodes each entry to
//! grayscale intensities. Photographs are treated as a bulk source of
//! noisy pixels, not as entropy directly.

mod config;
mod corpus;
mod decoded;

pub use config::{ConfigError, EnumerationOrder, SourceConfig};
pub use corpus::{
    decode_grayscale, has_image_extension, DecodeOutcome, ImageCorpus, ImageSource,
    MemorySource, IMAGE_EXTENSIONS,
};
pub use decoded::SourceImage;
