use crate::helpers::PageContext;
use crate::images::DecodedImage;
use crate::writer::{DocumentInfo, PdfWriter};
use carta_layout::Paginate;
use carta_render_core::{Canvas, PaintMode, PathSegment, RenderError};
use carta_style::{FontFace, PageSpec, TextStyle, mm_to_pt};
use carta_types::{Color, ImageData, Rect};
use lopdf::{Dictionary, Object, dictionary};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A [`Canvas`] that produces a PDF document.
///
/// Pages are buffered as content streams until [`LopdfCanvas::finish`]
/// assembles the file. Identical image bytes are embedded once and shared
/// across pages.
pub struct LopdfCanvas {
    writer: PdfWriter,
    width: f32,
    height: f32,
    pages: Vec<PageContext>,
    line_width: f32,
    dash: Vec<f32>,
    images: HashMap<u64, String>,
    xobjects: Dictionary,
}

impl LopdfCanvas {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        let mut canvas = Self {
            writer: PdfWriter::new("1.7"),
            width: width_mm,
            height: height_mm,
            pages: Vec::new(),
            line_width: 0.3,
            dash: Vec::new(),
            images: HashMap::new(),
            xobjects: Dictionary::new(),
        };
        canvas.open_page();
        canvas
    }

    pub fn for_page(spec: PageSpec) -> Self {
        let (w, h) = spec.dimensions_mm();
        Self::new(w, h)
    }

    fn open_page(&mut self) {
        let mut page = PageContext::new(self.height);
        // Line state carries over a page break.
        page.set_line_width(self.line_width);
        if !self.dash.is_empty() {
            page.set_line_dash(&self.dash);
        }
        self.pages.push(page);
    }

    fn page(&mut self) -> &mut PageContext {
        if self.pages.is_empty() {
            self.open_page();
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Registers `data` as an image XObject, reusing an earlier registration
    /// of the same bytes.
    fn register_image(&mut self, data: &ImageData) -> Result<String, RenderError> {
        let mut hasher = DefaultHasher::new();
        data.bytes().hash(&mut hasher);
        let key = hasher.finish();
        if let Some(name) = self.images.get(&key) {
            return Ok(name.clone());
        }

        let decoded = DecodedImage::decode(data)?;
        log::debug!(
            "Embedding {}x{} image ({} bytes)",
            decoded.width,
            decoded.height,
            data.len()
        );
        let id = self
            .writer
            .buffer_object(Object::Stream(decoded.into_xobject()));
        let name = format!("Im{}", self.images.len() + 1);
        self.xobjects.set(name.as_bytes(), id);
        self.images.insert(key, name.clone());
        Ok(name)
    }

    /// Writes every page and returns the serialized PDF.
    pub fn finish(mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        let (w, h) = (mm_to_pt(self.width), mm_to_pt(self.height));
        for page in std::mem::take(&mut self.pages) {
            let content_id = self.writer.write_content_stream(page.finish())?;
            self.writer.write_page(content_id, w, h);
        }

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            fonts.set(
                face.resource_name().as_bytes(),
                dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => face.postscript_name(),
                    "Encoding" => "WinAnsiEncoding",
                },
            );
        }
        let mut resources = dictionary! { "Font" => fonts };
        if !self.xobjects.is_empty() {
            resources.set("XObject", self.xobjects);
        }
        self.writer.finish(resources, info)
    }
}

impl Paginate for LopdfCanvas {
    fn start_new_page(&mut self) {
        self.open_page();
    }
}

impl Canvas for LopdfCanvas {
    fn page_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn set_fill_color(&mut self, color: Color) {
        self.page().set_fill_color(color);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.page().set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
        self.page().set_line_width(width);
    }

    fn set_line_dash(&mut self, pattern: &[f32]) {
        self.dash = pattern.to_vec();
        self.page().set_line_dash(pattern);
    }

    fn text(&mut self, text: &str, x: f32, baseline_y: f32, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        self.page()
            .draw_text(text, x, baseline_y, style.face, style.size, style.color);
    }

    fn path(&mut self, segments: &[PathSegment], mode: PaintMode) {
        self.page().draw_path(segments, mode);
    }

    fn image(&mut self, data: &ImageData, area: Rect) -> Result<(), RenderError> {
        let name = self.register_image(data)?;
        self.page()
            .draw_image(&name, area.x, area.y, area.width, area.height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta_render_core::PathBuilder;
    use image::{ImageFormat, Rgba, RgbaImage};
    use lopdf::Document;
    use lopdf::content::Content;
    use std::io::Cursor;

    fn sample_png() -> ImageData {
        let img = RgbaImage::from_pixel(4, 4, Rgba([200, 30, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        ImageData::new(bytes)
    }

    fn text_style() -> TextStyle {
        TextStyle::new(FontFace::HelveticaBold, 14.0, Color::BLACK)
    }

    #[test]
    fn test_pages_survive_a_round_trip() {
        let mut canvas = LopdfCanvas::for_page(PageSpec::A4_PORTRAIT);
        canvas.text("Page one", 20.0, 30.0, &text_style());
        canvas.start_new_page();
        canvas.text("Page two", 20.0, 30.0, &text_style());
        assert_eq!(canvas.page_count(), 2);

        let bytes = canvas.finish(&DocumentInfo::default()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_text_is_win_ansi_encoded() {
        let mut canvas = LopdfCanvas::new(105.0, 148.0);
        canvas.text("Crème 4,50 €", 10.0, 20.0, &text_style());
        let bytes = canvas.finish(&DocumentInfo::default()).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().get(&1).unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let shown: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| op.operands[0].as_str().ok().map(|s| s.to_vec()))
            .collect();
        assert_eq!(shown, vec![b"Cr\xe8me 4,50 \x80".to_vec()]);
    }

    #[test]
    fn test_repeated_image_is_embedded_once() {
        let mut canvas = LopdfCanvas::new(105.0, 148.0);
        let png = sample_png();
        canvas.image(&png, Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap();
        canvas.start_new_page();
        canvas.image(&png, Rect::new(10.0, 10.0, 20.0, 20.0)).unwrap();
        assert_eq!(canvas.images.len(), 1);

        let bytes = canvas.finish(&DocumentInfo::default()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_broken_image_is_reported_not_drawn() {
        let mut canvas = LopdfCanvas::new(105.0, 148.0);
        let result = canvas.image(&ImageData::new(vec![0u8; 8]), Rect::new(0.0, 0.0, 5.0, 5.0));
        assert!(matches!(result, Err(RenderError::Image(_))));
        assert!(canvas.xobjects.is_empty());
    }

    #[test]
    fn test_metadata_is_written() {
        let mut canvas = LopdfCanvas::new(210.0, 297.0);
        let path = PathBuilder::new().circle(50.0, 50.0, 10.0);
        canvas.set_fill_color(Color::rgb(16, 185, 129));
        canvas.path(path.segments(), PaintMode::Fill);
        let info = DocumentInfo {
            title: Some("Trattoria".into()),
            producer: Some("carta".into()),
        };
        let bytes = canvas.finish(&info).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Trattoria");
    }
}
