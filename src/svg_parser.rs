use crate::error::IconError;
use crate::graphic::FillRule;
use crate::segment::{LineSegment, flatten};
use usvg::{Group, Node, Paint, Path};

/// A flattened, fully transformed path ready for filling.
#[derive(Debug)]
pub struct FillPath {
    pub segments: Vec<LineSegment>,
    pub fill_rule: FillRule,
    pub rgba: [u8; 4],
}

impl FillPath {
    pub fn winding(&self, x: f32, y: f32) -> i32 {
        self.segments.iter().map(|seg| seg.crossing(x, y)).sum()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let winding = self.winding(x, y);
        match self.fill_rule {
            FillRule::NonZero => winding != 0,
            FillRule::EvenOdd => winding % 2 != 0,
        }
    }
}

pub struct ParsedSvg {
    pub paths: Vec<FillPath>,
    pub width: u32,
    pub height: u32,
}

pub fn visit_group<'a>(g: &'a Group, paths: &mut Vec<&'a Path>) {
    for node in g.children() {
        match node {
            Node::Path(p) => paths.push(&**p),
            Node::Group(child) => visit_group(child, paths),
            Node::Image(_) => {}
            Node::Text(_) => {}
        }
    }
}

fn fill_path(path: &Path) -> Option<FillPath> {
    if !path.is_visible() {
        return None;
    }
    let fill = path.fill()?;
    // Only solid fills are produced by icon markup.
    let Paint::Color(color) = fill.paint() else {
        return None;
    };
    let data = path.data().clone().transform(path.abs_transform())?;
    let mut segments = vec![];
    if flatten(&data, &mut segments) == 0 {
        return None;
    }
    let fill_rule = match fill.rule() {
        usvg::FillRule::NonZero => FillRule::NonZero,
        usvg::FillRule::EvenOdd => FillRule::EvenOdd,
    };
    Some(FillPath {
        segments,
        fill_rule,
        rgba: [
            color.red,
            color.green,
            color.blue,
            (fill.opacity().get() * 255.0).round() as u8,
        ],
    })
}

/// Parses SVG markup, resolving `currentColor` against the root `color` attribute.
pub fn parse_svg(markup: &str) -> Result<ParsedSvg, IconError> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(markup, &opt)?;

    let mut nodes: Vec<&Path> = vec![];
    visit_group(tree.root(), &mut nodes);
    let paths: Vec<FillPath> = nodes.into_iter().filter_map(fill_path).collect();
    if paths.is_empty() {
        return Err(IconError::EmptyGlyph);
    }

    let size = tree.size();
    let width = size.width().ceil().max(1.0) as u32;
    let height = size.height().ceil().max(1.0) as u32;
    tracing::debug!(paths = paths.len(), width, height, "parsed icon markup");

    Ok(ParsedSvg {
        paths,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8" color="#00ff00"><path fill="currentColor" d="M2 2h4v4H2z"/></svg>"##;

    #[test]
    fn resolves_current_color() {
        let parsed = parse_svg(SQUARE).unwrap();
        assert_eq!(parsed.paths.len(), 1);
        assert_eq!(parsed.paths[0].rgba, [0, 255, 0, 255]);
        assert_eq!((parsed.width, parsed.height), (8, 8));
    }

    #[test]
    fn viewbox_scales_to_size() {
        let markup = SQUARE.replace(
            r#"viewBox="0 0 8 8""#,
            r#"viewBox="0 0 8 8" width="16" height="16""#,
        );
        let parsed = parse_svg(&markup).unwrap();
        assert_eq!((parsed.width, parsed.height), (16, 16));
        assert!(parsed.paths[0].contains(10., 10.));
        assert!(!parsed.paths[0].contains(2., 2.));
    }

    #[test]
    fn evenodd_leaves_a_hole() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8"><path fill-rule="evenodd" d="M0 0h8v8H0zM2 2h4v4H2z"/></svg>"#;
        let parsed = parse_svg(markup).unwrap();
        let path = &parsed.paths[0];
        assert_eq!(path.fill_rule, FillRule::EvenOdd);
        assert!(path.contains(1., 1.));
        assert!(!path.contains(4., 4.));
    }

    #[test]
    fn no_paths_is_an_error() {
        let markup = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8"></svg>"#;
        assert!(matches!(parse_svg(markup), Err(IconError::EmptyGlyph)));
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(matches!(parse_svg("<svg"), Err(IconError::Parse(_))));
    }
}
