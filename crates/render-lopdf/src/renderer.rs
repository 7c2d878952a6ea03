use cenik_layout::{DrawInstruction, Page};
use cenik_render_core::{DocumentRenderer, RenderError};
use cenik_types::PageGeometry;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};

/// Internal resource name of the single report font.
const FONT_NAME: &str = "F1";
/// The report is monospaced throughout.
const BASE_FONT: &str = "Courier";

/// A report renderer using the `lopdf` library.
///
/// Every instance owns its own document, font and page list, so concurrent
/// report builds never share renderer state.
pub struct LopdfRenderer {
    geometry: PageGeometry,
    document: Document,
    pages_id: Option<ObjectId>,
    resources_id: Option<ObjectId>,
    page_ids: Vec<ObjectId>,
}

impl LopdfRenderer {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            document: Document::with_version("1.5"),
            pages_id: None,
            resources_id: None,
            page_ids: Vec::new(),
        }
    }

    fn ids(&self) -> Result<(ObjectId, ObjectId), RenderError> {
        match (self.pages_id, self.resources_id) {
            (Some(pages), Some(resources)) => Ok((pages, resources)),
            _ => Err(RenderError::Other("document not started".into())),
        }
    }

    /// Encode one page's instructions into a content stream.
    ///
    /// Text runs in a single `BT`/`ET` section with one absolute text
    /// matrix per instruction; rules are stroked afterwards as plain line
    /// paths.
    fn page_content(&self, page: &Page) -> Result<Vec<u8>, RenderError> {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(FONT_NAME.into()),
                    self.geometry.font_size.into(),
                ],
            ),
        ];
        for instruction in page {
            if let DrawInstruction::Text { text, x, y } = instruction {
                operations.push(Operation::new(
                    "Tm",
                    vec![
                        1.0_f32.into(),
                        0.0_f32.into(),
                        0.0_f32.into(),
                        1.0_f32.into(),
                        (*x).into(),
                        (*y).into(),
                    ],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(text.as_str())],
                ));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        for instruction in page {
            if let DrawInstruction::Rule { x1, x2, y } = instruction {
                operations.push(Operation::new("w", vec![1.0_f32.into()]));
                operations.push(Operation::new("m", vec![(*x1).into(), (*y).into()]));
                operations.push(Operation::new("l", vec![(*x2).into(), (*y).into()]));
                operations.push(Operation::new("S", vec![]));
            }
        }

        let content = Content { operations };
        Ok(content.encode()?)
    }
}

impl DocumentRenderer for LopdfRenderer {
    fn begin_document(&mut self) -> Result<(), RenderError> {
        let pages_id = self.document.new_object_id();
        let font_id = self.document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => BASE_FONT,
            "Encoding" => "WinAnsiEncoding",
        });

        let mut fonts = Dictionary::new();
        fonts.set(FONT_NAME, Object::Reference(font_id));
        let resources_id = self.document.add_object(dictionary! {
            "Font" => fonts,
        });

        self.pages_id = Some(pages_id);
        self.resources_id = Some(resources_id);
        Ok(())
    }

    fn render_page(&mut self, page: &Page) -> Result<(), RenderError> {
        let (pages_id, resources_id) = self.ids()?;
        let encoded = self.page_content(page)?;
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), encoded));

        let page_id = self.document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.0_f32.into(),
                0.0_f32.into(),
                self.geometry.page_size.width.into(),
                self.geometry.page_size.height.into(),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
        let mut renderer = *self;
        let (pages_id, _) = renderer.ids().map_err(|_| {
            RenderError::Other("document was never started with begin_document".into())
        })?;

        let kids: Vec<Object> = renderer
            .page_ids
            .iter()
            .map(|id| Object::Reference(*id))
            .collect();
        let count = kids.len() as i64;
        renderer.document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = renderer.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        renderer.document.trailer.set("Root", catalog_id);
        renderer.document.compress();

        let mut bytes = Vec::new();
        renderer.document.save_to(&mut bytes)?;
        log::debug!("rendered {count} pages into {} bytes", bytes.len());
        Ok(bytes)
    }
}
