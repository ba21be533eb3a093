//! Geometry primitives in layout space (millimetres, origin top-left).

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrinks the rectangle by `amount` on every side. Never produces a
    /// negative size.
    pub fn inset(&self, amount: f32) -> Rect {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Rect::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Returns the largest rectangle with the given aspect ratio that fits in
    /// `self`, centered.
    pub fn fit_centered(&self, aspect: f32) -> Rect {
        if aspect <= 0.0 || !aspect.is_finite() {
            return *self;
        }
        let (mut w, mut h) = (self.width, self.width / aspect);
        if h > self.height {
            h = self.height;
            w = h * aspect;
        }
        Rect::new(
            self.x + (self.width - w) / 2.0,
            self.y + (self.height - h) / 2.0,
            w,
            h,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_never_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 10.0).inset(3.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 4.0);
    }

    #[test]
    fn test_fit_centered_keeps_aspect() {
        let r = Rect::new(0.0, 0.0, 40.0, 20.0).fit_centered(1.0);
        assert_eq!(r, Rect::new(10.0, 0.0, 20.0, 20.0));
    }
}
