//! # Imaging crate — avatar compression pipeline
//!
//! Pure image-processing logic shared by the Linkpage frontends. This crate has no
//! Dioxus dependency and compiles for both native targets and `wasm32`, so the same
//! pipeline runs in the browser and in native builds.
//!
//! ## Entry points
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`compress_to_data_url`] | Type allow-list, resize-and-recompress pipeline producing a data URL |
//! | [`encode_data_url`] / [`parse_data_url`] | Base64 data-URL encoding and parsing |
//!
//! ## Contract
//!
//! [`compress_to_data_url`] accepts raw file bytes plus the declared MIME type and
//! returns a `data:image/jpeg;base64,...` string whose encoded payload is at most
//! [`MAX_ENCODED_BYTES`] and whose longer edge is at most [`MAX_DIMENSION`] pixels.
//! Files with a MIME type outside [`ALLOWED_IMAGE_TYPES`] are rejected before any
//! decoding happens.

mod compress;
mod data_url;

pub use compress::{
    compress_to_data_url, is_allowed_type, CompressionJob, ALLOWED_IMAGE_TYPES, MAX_DIMENSION,
    MAX_ENCODED_BYTES,
};
pub use data_url::{encode_data_url, parse_data_url};

use thiserror::Error;

/// Errors produced by the avatar compression pipeline.
#[derive(Debug, Error)]
pub enum ImagingError {
    /// The declared MIME type is not in the allow-list. The input is never decoded.
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    /// Decoding, resizing, or re-encoding failed.
    #[error("image processing failed: {0}")]
    Processing(String),
}
