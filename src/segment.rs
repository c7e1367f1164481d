use usvg::tiny_skia_path::{Path, PathSegment, Point};

const EPS: f32 = 1e-6;
/// Line pieces each quadratic or cubic curve is split into.
const CURVE_STEPS: usize = 16;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineSegment {
    // Coefficients for the implicit line equation ax + by + c = 0, normalized so a >= 0.
    a: f32,
    b: f32,
    c: f32,
    pub top: f32,
    pub bottom: f32,
    /// +1 when the segment runs downwards in SVG coordinates, -1 upwards.
    pub winding: i32,
}

impl LineSegment {
    /// Returns None for horizontal segments, which never cross a horizontal ray.
    pub fn new(p0: Point, p1: Point) -> Option<Self> {
        if (p1.y - p0.y).abs() < EPS {
            return None;
        }
        let mut a = p0.y - p1.y;
        let mut b = p1.x - p0.x;
        let mut c = p0.x * p1.y - p1.x * p0.y;
        if a < 0.0 {
            a = -a;
            b = -b;
            c = -c;
        }
        Some(LineSegment {
            a,
            b,
            c,
            top: p0.y.min(p1.y),
            bottom: p0.y.max(p1.y),
            winding: if p1.y > p0.y { 1 } else { -1 },
        })
    }

    #[inline(always)]
    pub fn eval(&self, x: f32, y: f32) -> f32 {
        self.a * x + self.b * y + self.c
    }

    #[inline(always)]
    pub fn is_left(&self, x: f32, y: f32) -> bool {
        self.eval(x, y) < 0.
    }

    /// Returns the winding contribution of this segment to a ray cast from
    /// (x, y) towards +x.
    pub fn crossing(&self, x: f32, y: f32) -> i32 {
        if y >= self.top && y < self.bottom && self.is_left(x, y) {
            self.winding
        } else {
            0
        }
    }
}

/// Flattens a path into line segments. Open subpaths are closed, since
/// filling treats them as closed anyway.
pub fn flatten(path: &Path, out: &mut Vec<LineSegment>) -> usize {
    let before = out.len();
    let mut start: Option<Point> = None;
    let mut curr: Option<Point> = None;

    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(point) => {
                if let (Some(a), Some(b)) = (curr, start) {
                    push(out, a, b);
                }
                start = Some(point);
                curr = Some(point);
            }
            PathSegment::LineTo(point) => {
                let a = curr.unwrap_or(point);
                push(out, a, point);
                curr = Some(point);
            }
            PathSegment::QuadTo(p1, p2) => {
                let p0 = curr.unwrap_or(p1);
                let mut prev = p0;
                for i in 1..=CURVE_STEPS {
                    let next = quad_point(p0, p1, p2, i as f32 / CURVE_STEPS as f32);
                    push(out, prev, next);
                    prev = next;
                }
                curr = Some(p2);
            }
            PathSegment::CubicTo(p1, p2, p3) => {
                let p0 = curr.unwrap_or(p1);
                let mut prev = p0;
                for i in 1..=CURVE_STEPS {
                    let next = cubic_point(p0, p1, p2, p3, i as f32 / CURVE_STEPS as f32);
                    push(out, prev, next);
                    prev = next;
                }
                curr = Some(p3);
            }
            PathSegment::Close => {
                if let (Some(a), Some(b)) = (curr, start) {
                    push(out, a, b);
                }
                curr = start;
            }
        }
    }
    if let (Some(a), Some(b)) = (curr, start) {
        push(out, a, b);
    }
    out.len() - before
}

fn push(out: &mut Vec<LineSegment>, a: Point, b: Point) {
    if let Some(seg) = LineSegment::new(a, b) {
        out.push(seg);
    }
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::from_xy(
        mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    )
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let (w0, w1, w2, w3) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
    Point::from_xy(
        w0 * p0.x + w1 * p1.x + w2 * p2.x + w3 * p3.x,
        w0 * p0.y + w1 * p1.y + w2 * p2.y + w3 * p3.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use usvg::tiny_skia_path::PathBuilder;

    #[test]
    fn horizontal_is_skipped() {
        let a = Point::from_xy(0., 1.);
        let b = Point::from_xy(5., 1.);
        assert!(LineSegment::new(a, b).is_none());
    }

    #[test]
    fn winding_follows_direction() {
        let down = LineSegment::new(Point::from_xy(0., 0.), Point::from_xy(1., 1.)).unwrap();
        let up = LineSegment::new(Point::from_xy(1., 1.), Point::from_xy(0., 0.)).unwrap();
        assert_eq!(down.winding, 1);
        assert_eq!(up.winding, -1);
    }

    #[test]
    fn is_left_pt1() {
        let seg = LineSegment::new(Point::from_xy(2., 0.), Point::from_xy(0., 3.)).unwrap();
        assert!(seg.is_left(0.5, 1.));
    }

    #[test]
    fn is_left_either_direction() {
        let seg = LineSegment::new(Point::from_xy(0., 3.), Point::from_xy(2., 0.)).unwrap();
        assert!(seg.is_left(0.5, 1.));
    }

    #[test]
    fn is_right() {
        let seg = LineSegment::new(Point::from_xy(0., 0.), Point::from_xy(3., 2.)).unwrap();
        assert!(!seg.is_left(1.51, 1.));
    }

    #[test]
    fn crossing_outside_span_is_zero() {
        let seg = LineSegment::new(Point::from_xy(4., 0.), Point::from_xy(4., 2.)).unwrap();
        assert_eq!(seg.crossing(0., 1.), 1);
        assert_eq!(seg.crossing(0., 2.), 0);
        assert_eq!(seg.crossing(5., 1.), 0);
    }

    #[test]
    fn flatten_closes_open_subpath() {
        let mut pb = PathBuilder::new();
        pb.move_to(0., 0.);
        pb.line_to(4., 0.);
        pb.line_to(4., 4.);
        pb.line_to(0., 4.);
        let path = pb.finish().unwrap();
        let mut segs = vec![];
        // Two horizontal edges drop out, two vertical ones remain.
        assert_eq!(flatten(&path, &mut segs), 2);
        let w: i32 = segs.iter().map(|s| s.crossing(-1., 2.)).sum();
        assert_eq!(w, 0);
        let w: i32 = segs.iter().map(|s| s.crossing(2., 2.)).sum();
        assert_eq!(w.abs(), 1);
    }

    #[test]
    fn flatten_splits_curves() {
        let mut pb = PathBuilder::new();
        pb.move_to(0., 0.);
        pb.cubic_to(0., 4., 4., 4., 4., 0.);
        pb.close();
        let path = pb.finish().unwrap();
        let mut segs = vec![];
        assert!(flatten(&path, &mut segs) > CURVE_STEPS / 2);
    }
}
