use carta_render_core::RenderError;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat, dictionary};

/// Metadata written to the document information dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub producer: Option<String>,
}

fn text_string(s: &str) -> Object {
    Object::String(crate::helpers::to_win_ansi(s), StringFormat::Literal)
}

/// Assembles pages, shared resources and the catalog into a
/// `lopdf::Document`.
pub(crate) struct PdfWriter {
    doc: Document,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
}

impl PdfWriter {
    pub fn new(version: &str) -> Self {
        let mut doc = Document::with_version(version);
        let pages_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
        }
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        self.doc.add_object(object)
    }

    pub fn write_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    /// Adds a page of `width` × `height` points showing `content_id`.
    pub fn write_page(&mut self, content_id: ObjectId, width: f32, height: f32) -> ObjectId {
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0.into(), 0.0.into(), width.into(), height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let id = self.buffer_object(page.into());
        self.page_ids.push(id);
        id
    }

    pub fn finish(mut self, resources: Dictionary, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        self.doc
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.doc.objects.insert(self.pages_id, pages_dict.into());

        let catalog_id = self.buffer_object(
            dictionary! { "Type" => "Catalog", "Pages" => self.pages_id }.into(),
        );
        self.doc.trailer.set("Root", catalog_id);

        let mut info_dict = dictionary! {
            "CreationDate" => Object::string_literal(
                chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string(),
            ),
        };
        if let Some(title) = &info.title {
            info_dict.set("Title", text_string(title));
        }
        if let Some(producer) = &info.producer {
            info_dict.set("Producer", text_string(producer));
        }
        let info_id = self.buffer_object(info_dict.into());
        self.doc.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
