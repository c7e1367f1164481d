use crate::cpu_renderer::Canvas;
use crate::error::IconError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_png<W: Write>(wtr: W, canvas: &Canvas) -> Result<(), IconError> {
    let mut encoder = png::Encoder::new(wtr, canvas.width, canvas.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.pixels)?;
    writer.finish()?;
    Ok(())
}

pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, IconError> {
    let mut out = Vec::new();
    write_png(&mut out, canvas)?;
    Ok(out)
}

pub fn save_png_rgba8(path: &Path, canvas: &Canvas) -> Result<(), IconError> {
    let file = File::create(path)?;
    write_png(BufWriter::new(file), canvas)?;
    tracing::debug!(path = %path.display(), "saved png");
    Ok(())
}
