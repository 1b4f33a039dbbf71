/// Ingestion adapters: text and pixel buffers in, lists and tables out.
///
/// The quasi-JSON reader recovers from malformed input and never
/// reports an error; the delimited-text and image paths report typed
/// [`IngestError`]s instead.

pub mod image;
pub mod loader;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("image decode failed: {0}")]
    Decode(#[from] ::image::ImageError),

    #[error("malformed delimited text: {0}")]
    Delimited(#[from] csv::Error),
}
