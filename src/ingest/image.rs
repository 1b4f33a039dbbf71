use super::IngestError;
use crate::data::model::{List, Table, TypedList, Value};

// ---------------------------------------------------------------------------
// Pixel-buffer contract
// ---------------------------------------------------------------------------

/// A decoded RGBA buffer: `width * height * 4` bytes, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// The pixel-decoding collaborator. Decode failures propagate to the
/// caller unmodified; this is the one ingestion path that does not
/// absorb its errors.
pub trait PixelSource {
    fn frame(&self) -> Result<RgbaFrame, IngestError>;
}

/// An already-decoded buffer is its own source.
impl PixelSource for RgbaFrame {
    fn frame(&self) -> Result<RgbaFrame, IngestError> {
        Ok(self.clone())
    }
}

/// Undecoded image bytes (PNG), decoded on demand.
pub struct EncodedImage {
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        EncodedImage { bytes }
    }
}

impl PixelSource for EncodedImage {
    fn frame(&self) -> Result<RgbaFrame, IngestError> {
        let decoded = image::load_from_memory(&self.bytes)?;
        let rgba = decoded.to_rgba8();
        Ok(RgbaFrame {
            width: rgba.width(),
            height: rgba.height(),
            data: rgba.into_raw(),
        })
    }
}

// ---------------------------------------------------------------------------
// Pixel buffer → table
// ---------------------------------------------------------------------------

/// Turn a pixel source into a `width`-column, `height`-row table.
///
/// Cell `(x, y)` holds either an `[r, g, b, a]` array with the alpha
/// normalised to `[0, 1]`, or the string `"rgba(r,g,b,a)"`, selected by
/// `as_string`. An absent source or zero width is absence, a buffer
/// shorter than its declared dimensions likewise; only decode failures
/// from the source itself are errors.
pub fn image_to_table_of_rgba(
    source: Option<&dyn PixelSource>,
    as_string: bool,
) -> Result<Option<Table>, IngestError> {
    let Some(source) = source else {
        return Ok(None);
    };
    let frame = source.frame()?;
    let width = frame.width as usize;
    let height = frame.height as usize;
    if width == 0 {
        return Ok(None);
    }
    let needed = width * height * 4;
    if frame.data.len() < needed {
        log::warn!(
            "rgba buffer holds {} bytes, {needed} expected for {width}x{height}",
            frame.data.len()
        );
        return Ok(None);
    }

    let mut columns = Vec::with_capacity(width);
    for x in 0..width {
        let mut cells = Vec::with_capacity(height);
        for y in 0..height {
            let at = (y * width + x) * 4;
            let (r, g, b) = (frame.data[at], frame.data[at + 1], frame.data[at + 2]);
            let alpha = frame.data[at + 3] as f64 / 255.0;
            cells.push(if as_string {
                Value::Str(format!("rgba({r},{g},{b},{alpha})"))
            } else {
                Value::Array(vec![
                    Value::Integer(r as i64),
                    Value::Integer(g as i64),
                    Value::Integer(b as i64),
                    Value::Float(alpha),
                ])
            });
        }
        columns.push(TypedList::Generic(List::new(cells)));
    }
    Ok(Some(Table::new(columns)))
}
