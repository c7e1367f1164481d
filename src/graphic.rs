use std::fmt;

/// Fill value that resolves to the inherited text color of the rendering context.
pub const CURRENT_COLOR: &str = "currentColor";

/// The internal coordinate box of a drawing (`minX minY width height`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewBox {
    pub const fn new(min_x: f32, min_y: f32, width: f32, height: f32) -> Self {
        ViewBox {
            min_x,
            min_y,
            width,
            height,
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.min_x, self.min_y, self.width, self.height
        )
    }
}

/// Explicit on-screen size in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn square(side: u32) -> Self {
        Dimensions {
            width: side,
            height: side,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

impl FillRule {
    pub fn as_attr(&self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// One drawing primitive: SVG path data plus its fill rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GlyphPath {
    pub data: &'static str,
    pub fill_rule: FillRule,
}

impl GlyphPath {
    pub const fn new(data: &'static str, fill_rule: FillRule) -> Self {
        GlyphPath { data, fill_rule }
    }
}

/// An immutable vector drawing. A fluid definition only declares its viewport
/// and scales to its container; a fixed one also pins width and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VectorGraphicDefinition {
    view_box: ViewBox,
    dimensions: Option<Dimensions>,
    paths: &'static [GlyphPath],
}

impl VectorGraphicDefinition {
    pub const fn fluid(view_box: ViewBox, paths: &'static [GlyphPath]) -> Self {
        VectorGraphicDefinition {
            view_box,
            dimensions: None,
            paths,
        }
    }

    pub const fn fixed(
        view_box: ViewBox,
        dimensions: Dimensions,
        paths: &'static [GlyphPath],
    ) -> Self {
        VectorGraphicDefinition {
            view_box,
            dimensions: Some(dimensions),
            paths,
        }
    }

    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    pub fn paths(&self) -> &'static [GlyphPath] {
        self.paths
    }

    pub fn is_fixed(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Returns true if both definitions draw the same glyph at the same
    /// intrinsic aspect ratio, whatever their explicit dimensions.
    pub fn same_glyph(&self, other: &Self) -> bool {
        self.paths == other.paths && self.view_box.aspect_ratio() == other.view_box.aspect_ratio()
    }
}
