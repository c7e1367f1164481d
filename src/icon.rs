use crate::graphic::{CURRENT_COLOR, Dimensions, VectorGraphicDefinition};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Selects which of the two wrapped definitions gets rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum IconVariant {
    /// Viewport only, scales to its container.
    #[default]
    Plain,
    /// Fixed intrinsic width and height.
    Boxed,
}

/// Presentation attributes passed through to the rendered element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub variant: IconVariant,
    /// Height in pixels; width follows the viewport's aspect ratio.
    pub size: Option<u32>,
    /// Sets the `color` the glyph's `currentColor` fill resolves to.
    pub color: Option<String>,
    /// Accessible label. Icons without a non-blank one are hidden from assistive tech.
    pub title: Option<String>,
    pub class: Option<String>,
}

impl IconProps {
    pub fn boxed() -> Self {
        IconProps {
            variant: IconVariant::Boxed,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// A stateless renderable icon holding a plain and a boxed definition of the same glyph.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IconComponent {
    plain: VectorGraphicDefinition,
    boxed: VectorGraphicDefinition,
}

/// Wraps two definitions of one glyph into an icon component.
pub const fn wrap(plain: VectorGraphicDefinition, boxed: VectorGraphicDefinition) -> IconComponent {
    IconComponent { plain, boxed }
}

impl IconComponent {
    pub fn plain(&self) -> &VectorGraphicDefinition {
        &self.plain
    }

    pub fn boxed(&self) -> &VectorGraphicDefinition {
        &self.boxed
    }

    pub fn definition(&self, variant: IconVariant) -> &VectorGraphicDefinition {
        match variant {
            IconVariant::Plain => &self.plain,
            IconVariant::Boxed => &self.boxed,
        }
    }

    /// Renders the selected variant as SVG markup.
    pub fn render(&self, props: &IconProps) -> String {
        let def = self.definition(props.variant);
        let view_box = def.view_box();
        let dimensions = match props.size {
            Some(size) => Some(Dimensions {
                width: (size as f32 * view_box.aspect_ratio()).round() as u32,
                height: size,
            }),
            None => def.dimensions(),
        };
        tracing::debug!(variant = ?props.variant, ?dimensions, "rendering icon");

        let mut out = format!(r#"<svg xmlns="{SVG_NS}" viewBox="{view_box}""#);
        if let Some(Dimensions { width, height }) = dimensions {
            out.push_str(&format!(r#" width="{width}" height="{height}""#));
        }
        if let Some(color) = &props.color {
            out.push_str(&format!(r#" color="{}""#, escape(color)));
        }
        if let Some(class) = &props.class {
            out.push_str(&format!(r#" class="{}""#, escape(class)));
        }
        let title = props.title.as_deref().map(str::trim).filter(|t| !t.is_empty());
        match title {
            Some(title) => {
                let title = escape(title);
                out.push_str(&format!(
                    r#" role="img" aria-label="{title}"><title>{title}</title>"#
                ));
            }
            None => out.push_str(r#" aria-hidden="true">"#),
        }
        for path in def.paths() {
            out.push_str(&format!(
                r#"<path fill="{CURRENT_COLOR}" fill-rule="{}" d="{}"/>"#,
                path.fill_rule.as_attr(),
                escape(path.data)
            ));
        }
        out.push_str("</svg>");
        out
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
