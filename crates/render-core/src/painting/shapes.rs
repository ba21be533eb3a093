use crate::{Canvas, PaintMode, PathBuilder};
use carta_types::{Color, Rect};

const SHADOW_OFFSET: f32 = 0.8;
const SHADOW: Color = Color::gray(229);

pub fn rect<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, mode: PaintMode) {
    canvas.path(PathBuilder::new().rect(area).segments(), mode);
}

pub fn rounded_rect<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, radius: f32, mode: PaintMode) {
    let path = PathBuilder::new().rounded_rect(area, radius);
    canvas.path(path.segments(), mode);
}

pub fn circle<C: Canvas + ?Sized>(canvas: &mut C, cx: f32, cy: f32, r: f32, mode: PaintMode) {
    canvas.path(PathBuilder::new().circle(cx, cy, r).segments(), mode);
}

/// A rounded card with a hairline border. The shadow is a gray copy offset
/// down and to the right, painted first.
pub fn card<C: Canvas + ?Sized>(
    canvas: &mut C,
    area: Rect,
    radius: f32,
    fill: Color,
    border: Color,
    shadow: bool,
) {
    if shadow {
        canvas.set_fill_color(SHADOW);
        let offset = Rect::new(
            area.x + SHADOW_OFFSET,
            area.y + SHADOW_OFFSET,
            area.width,
            area.height,
        );
        rounded_rect(canvas, offset, radius, PaintMode::Fill);
    }
    canvas.set_fill_color(fill);
    canvas.set_stroke_color(border);
    canvas.set_line_width(0.3);
    rounded_rect(canvas, area, radius, PaintMode::FillStroke);
}

/// A tinted box with a small sun-and-mountain pictogram, standing in for a
/// missing photo.
pub fn image_placeholder<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, tint: Color) {
    canvas.set_fill_color(tint.lighten(0.85));
    rect(canvas, area, PaintMode::Fill);

    let icon = area.height.min(area.width) * 0.4;
    let c = area.center();
    let base = c.y + icon / 2.0;
    canvas.set_fill_color(tint.lighten(0.5));
    let mountain = PathBuilder::new()
        .move_to(c.x - icon / 2.0, base)
        .line_to(c.x - icon / 8.0, c.y - icon / 4.0)
        .line_to(c.x + icon / 8.0, c.y + icon / 8.0)
        .line_to(c.x + icon / 4.0, c.y)
        .line_to(c.x + icon / 2.0, base)
        .close();
    canvas.path(mountain.segments(), PaintMode::Fill);
    circle(
        canvas,
        c.x + icon / 4.0,
        c.y - icon / 3.0,
        icon / 9.0,
        PaintMode::Fill,
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    Plain,
    /// Double rule with small diamonds in the corners.
    Ornate,
}

pub fn frame<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, style: FrameStyle, color: Color) {
    canvas.set_stroke_color(color);
    match style {
        FrameStyle::Plain => {
            canvas.set_line_width(0.8);
            rect(canvas, area, PaintMode::Stroke);
        }
        FrameStyle::Ornate => {
            canvas.set_line_width(1.0);
            rect(canvas, area, PaintMode::Stroke);
            canvas.set_line_width(0.3);
            let inner = area.inset(2.5);
            rect(canvas, inner, PaintMode::Stroke);

            canvas.set_fill_color(color);
            for (x, y) in [
                (inner.x, inner.y),
                (inner.right(), inner.y),
                (inner.x, inner.bottom()),
                (inner.right(), inner.bottom()),
            ] {
                diamond(canvas, x, y, 1.4);
            }
        }
    }
}

pub(crate) fn diamond<C: Canvas + ?Sized>(canvas: &mut C, cx: f32, cy: f32, size: f32) {
    let h = size / 2.0;
    let path = PathBuilder::new()
        .move_to(cx, cy - h)
        .line_to(cx + h, cy)
        .line_to(cx, cy + h)
        .line_to(cx - h, cy)
        .close();
    canvas.path(path.segments(), PaintMode::Fill);
}
