use crate::error::IconError;
use crate::icon::{IconComponent, IconProps};
use crate::svg_parser::{FillPath, parse_svg};
use std::fmt;
use std::str::FromStr;

/// Sub-samples per pixel axis used for anti-aliasing.
const SAMPLES: u32 = 4;
/// Largest canvas the preview renderer will allocate.
pub const MAX_PIXELS: usize = 8192 * 8192;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Rgb { red, green, blue }
    }
}

impl FromStr for Rgb {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IconError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// What the mounting context passes down to an icon: its inherited text color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub foreground: Rgb,
}

impl RenderContext {
    pub fn with_foreground(foreground: Rgb) -> Self {
        RenderContext { foreground }
    }
}

/// Straight-alpha RGBA8 pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, IconError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&pixels| pixels <= MAX_PIXELS)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or(IconError::TooLarge { width, height })?;
        Ok(Canvas {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let base = self.offset(x, y);
        [
            self.pixels[base],
            self.pixels[base + 1],
            self.pixels[base + 2],
            self.pixels[base + 3],
        ]
    }

    /// The alpha channel alone, i.e. the glyph's shape regardless of color.
    pub fn coverage(&self) -> Vec<u8> {
        self.pixels.chunks_exact(4).map(|px| px[3]).collect()
    }

    fn blend(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let base = self.offset(x, y);
        let dst = &mut self.pixels[base..base + 4];
        let sa = rgba[3] as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        for i in 0..3 {
            let c = (rgba[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa)) / out_a;
            dst[i] = c.round() as u8;
        }
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

/// Renders an icon into pixels as it would appear inside `ctx`. A color set
/// on the props takes precedence over the context's foreground.
pub fn rasterize(
    icon: &IconComponent,
    props: &IconProps,
    ctx: &RenderContext,
) -> Result<Canvas, IconError> {
    let mut props = props.clone();
    if props.color.is_none() {
        props.color = Some(ctx.foreground.to_string());
    }
    rasterize_markup(&icon.render(&props))
}

/// Rasterizes arbitrary markup. Only solid fills are painted: strokes, group
/// opacity, images and text are skipped, so stroke-only markup is an `EmptyGlyph`.
pub fn rasterize_markup(markup: &str) -> Result<Canvas, IconError> {
    let parsed = parse_svg(markup)?;
    let mut canvas = Canvas::new(parsed.width, parsed.height)?;
    for path in &parsed.paths {
        fill(&mut canvas, path);
    }
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        "rasterized icon"
    );
    Ok(canvas)
}

fn fill(canvas: &mut Canvas, path: &FillPath) {
    let top = path
        .segments
        .iter()
        .map(|seg| seg.top)
        .fold(f32::INFINITY, f32::min);
    let bottom = path
        .segments
        .iter()
        .map(|seg| seg.bottom)
        .fold(f32::NEG_INFINITY, f32::max);
    let first_row = top.floor().max(0.0) as u32;
    let last_row = (bottom.ceil().max(0.0) as u32).min(canvas.height);

    let step = 1.0 / SAMPLES as f32;
    for y in first_row..last_row {
        for x in 0..canvas.width {
            let mut hits = 0;
            for sy in 0..SAMPLES {
                for sx in 0..SAMPLES {
                    let px = x as f32 + (sx as f32 + 0.5) * step;
                    let py = y as f32 + (sy as f32 + 0.5) * step;
                    if path.contains(px, py) {
                        hits += 1;
                    }
                }
            }
            if hits == 0 {
                continue;
            }
            let coverage = hits as f32 / (SAMPLES * SAMPLES) as f32;
            let mut rgba = path.rgba;
            rgba[3] = (rgba[3] as f32 * coverage).round() as u8;
            canvas.blend(x, y, rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        assert_eq!("#ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }

    #[test]
    fn reject_bad_colors() {
        for bad in ["ff8000", "#ff80", "#gg0000", "#ff80000", "#+f0000"] {
            assert!(matches!(bad.parse::<Rgb>(), Err(IconError::InvalidColor(_))));
        }
    }

    #[test]
    fn pixel_aligned_square() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 4 4"><path d="M1 1h2v2H1z"/></svg>"#;
        let canvas = rasterize_markup(markup).unwrap();
        assert_eq!((canvas.width, canvas.height), (4, 4));
        assert_eq!(canvas.pixel(1, 1), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(2, 2), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(canvas.pixel(3, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn half_covered_pixel() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2 2"><path d="M0 0h1.5v2H0z"/></svg>"#;
        let canvas = rasterize_markup(markup).unwrap();
        assert_eq!(canvas.pixel(0, 0)[3], 255);
        assert_eq!(canvas.pixel(1, 0)[3], 128);
    }

    #[test]
    fn oversized_canvas_is_refused() {
        assert!(matches!(
            Canvas::new(40_000, 40_000),
            Err(IconError::TooLarge {
                width: 40_000,
                height: 40_000
            })
        ));
        assert!(matches!(
            Canvas::new(u32::MAX, u32::MAX),
            Err(IconError::TooLarge { .. })
        ));
        assert_eq!(Canvas::new(300, 200).unwrap().pixels.len(), 300 * 200 * 4);
    }

    #[test]
    fn stroke_only_markup_is_empty() {
        let markup = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 4 4"><path fill="none" stroke="#000000" d="M0 0L4 4"/></svg>"##;
        assert!(matches!(rasterize_markup(markup), Err(IconError::EmptyGlyph)));
    }

    #[test]
    fn later_paths_paint_over() {
        let markup = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 2 2"><path fill="#ff0000" d="M0 0h2v2H0z"/><path fill="#0000ff" d="M0 0h1v2H0z"/></svg>"##;
        let canvas = rasterize_markup(markup).unwrap();
        assert_eq!(canvas.pixel(0, 0), [0, 0, 255, 255]);
        assert_eq!(canvas.pixel(1, 0), [255, 0, 0, 255]);
    }
}
