//! The Feather glyph in its plain and boxed forms.

use crate::graphic::{Dimensions, FillRule, GlyphPath, VectorGraphicDefinition, ViewBox};
use crate::icon::{IconComponent, wrap};

const VIEW_BOX: ViewBox = ViewBox::new(0., 0., 16., 16.);

pub const FEATHER_PATHS: &[GlyphPath] = &[GlyphPath::new(
    "M14.1 1.9c-3.6-.5-7.2.6-9.3 3.1-1.6 1.9-2 4.4-1.5 6.6L1.7 13.3a.75.75 0 1 0 1.06 1.06l1.7-1.7c2.2.5 4.7.1 6.6-1.5 2.5-2.1 3.6-5.7 3.1-9.3a.75.75 0 0 0-.06-.2z\
     M10.1 10.1c-1.4 1.2-3.2 1.6-4.8 1.3l3.5-3.5a.75.75 0 0 0-1.06-1.06l-3.5 3.5c-.3-1.6.1-3.4 1.3-4.8 1.6-1.9 4.3-2.9 7-2.8.1 2.7-.9 5.4-2.4 6.9z",
    FillRule::EvenOdd,
)];

pub const FEATHER_PLAIN: VectorGraphicDefinition =
    VectorGraphicDefinition::fluid(VIEW_BOX, FEATHER_PATHS);

pub const FEATHER_BOXED: VectorGraphicDefinition =
    VectorGraphicDefinition::fixed(VIEW_BOX, Dimensions::square(16), FEATHER_PATHS);

pub const FEATHER: IconComponent = wrap(FEATHER_PLAIN, FEATHER_BOXED);
