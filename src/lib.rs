pub mod cpu_renderer;
pub mod error;
pub mod feather;
pub mod graphic;
pub mod icon;
pub mod png_writer;
pub mod segment;
pub mod svg_parser;

pub use cpu_renderer::{Canvas, RenderContext, Rgb, rasterize, rasterize_markup};
pub use error::IconError;
pub use feather::{FEATHER, FEATHER_BOXED, FEATHER_PLAIN};
pub use graphic::{Dimensions, FillRule, GlyphPath, VectorGraphicDefinition, ViewBox};
pub use icon::{IconComponent, IconProps, IconVariant, wrap};
