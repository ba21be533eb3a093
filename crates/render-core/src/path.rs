use carta_types::{Point, Rect};

/// Control point distance for approximating a quarter circle with one cubic
/// Bézier segment.
pub const KAPPA: f32 = 0.5523;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
    FillStroke,
}

/// Accumulates path segments in page millimetres.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    segments: Vec<PathSegment>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.segments.push(PathSegment::LineTo(Point::new(x, y)));
        self
    }

    pub fn curve_to(mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32)) -> Self {
        self.segments.push(PathSegment::CurveTo(
            Point::new(c1.0, c1.1),
            Point::new(c2.0, c2.1),
            Point::new(end.0, end.1),
        ));
        self
    }

    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    pub fn rect(self, rect: Rect) -> Self {
        self.move_to(rect.x, rect.y)
            .line_to(rect.right(), rect.y)
            .line_to(rect.right(), rect.bottom())
            .line_to(rect.x, rect.bottom())
            .close()
    }

    /// A rectangle with quarter-circle corners. The radius is clamped to half
    /// the shorter side.
    pub fn rounded_rect(self, rect: Rect, radius: f32) -> Self {
        let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if r == 0.0 {
            return self.rect(rect);
        }
        let k = r * KAPPA;
        let (l, t, rt, b) = (rect.x, rect.y, rect.right(), rect.bottom());
        self.move_to(l + r, t)
            .line_to(rt - r, t)
            .curve_to((rt - r + k, t), (rt, t + r - k), (rt, t + r))
            .line_to(rt, b - r)
            .curve_to((rt, b - r + k), (rt - r + k, b), (rt - r, b))
            .line_to(l + r, b)
            .curve_to((l + r - k, b), (l, b - r + k), (l, b - r))
            .line_to(l, t + r)
            .curve_to((l, t + r - k), (l + r - k, t), (l + r, t))
            .close()
    }

    pub fn ellipse(self, cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);
        self.move_to(cx + rx, cy)
            .curve_to((cx + rx, cy + ky), (cx + kx, cy + ry), (cx, cy + ry))
            .curve_to((cx - kx, cy + ry), (cx - rx, cy + ky), (cx - rx, cy))
            .curve_to((cx - rx, cy - ky), (cx - kx, cy - ry), (cx, cy - ry))
            .curve_to((cx + kx, cy - ry), (cx + rx, cy - ky), (cx + rx, cy))
            .close()
    }

    pub fn circle(self, cx: f32, cy: f32, r: f32) -> Self {
        self.ellipse(cx, cy, r, r)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn build(self) -> Vec<PathSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_has_four_curves() {
        let path = PathBuilder::new().circle(10.0, 10.0, 5.0).build();
        let curves = path
            .iter()
            .filter(|s| matches!(s, PathSegment::CurveTo(..)))
            .count();
        assert_eq!(curves, 4);
        assert_eq!(path.last(), Some(&PathSegment::Close));
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        assert_eq!(
            PathBuilder::new().rounded_rect(rect, 0.0),
            PathBuilder::new().rect(rect)
        );
    }

    #[test]
    fn test_radius_is_clamped() {
        let rect = Rect::new(0.0, 0.0, 20.0, 4.0);
        let path = PathBuilder::new().rounded_rect(rect, 10.0).build();
        assert_eq!(path[0], PathSegment::MoveTo(Point::new(2.0, 0.0)));
    }
}
