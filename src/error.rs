use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("failed to parse icon markup: {0}")]
    Parse(#[from] usvg::Error),
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("icon markup contains no fillable path")]
    EmptyGlyph,
    #[error("icon of {width}x{height} pixels is too large to rasterize")]
    TooLarge { width: u32, height: u32 },
    #[error("invalid color `{0}`, expected #rrggbb")]
    InvalidColor(String),
}
