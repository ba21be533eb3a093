use crate::error::RenderError;
use crate::path::{PaintMode, PathSegment};
use carta_layout::Paginate;
use carta_style::TextStyle;
use carta_types::{Color, ImageData, Rect};

/// A paged drawing surface.
///
/// Coordinates are millimetres from the top-left corner of the current page.
/// Every page of a document has the same size. Implementations start with
/// one open page; [`Paginate::start_new_page`] appends another and makes it
/// current.
pub trait Canvas: Paginate {
    /// `(width, height)` of every page in mm.
    fn page_size(&self) -> (f32, f32);

    fn page_count(&self) -> usize;

    /// Fill color for subsequent paths.
    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Dash pattern in mm; an empty slice restores solid lines.
    fn set_line_dash(&mut self, pattern: &[f32]);

    /// Draws a single left-aligned line of text with its baseline at
    /// `baseline_y`, in the style's own color.
    fn text(&mut self, text: &str, x: f32, baseline_y: f32, style: &TextStyle);

    fn path(&mut self, segments: &[PathSegment], mode: PaintMode);

    /// Stamps a raster image stretched to `area`.
    fn image(&mut self, data: &ImageData, area: Rect) -> Result<(), RenderError>;
}
