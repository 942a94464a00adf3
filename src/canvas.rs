//! Drawing surfaces the calendar can be rendered onto.
//!
//! Coordinates are in device units with the origin at the top-left corner of the page and `y`
//! growing downwards. Text is positioned by the left end of its baseline.

use crate::{
    config::{PageSize, Rgb},
    error::RenderError,
    font::{win_ansi, FontFace, TextExtents},
};
use log::{debug, info};
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream, StringFormat,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    mem,
    path::{Path, PathBuf},
};

/// An axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Extent to the right of `x`.
    pub width: f64,
    /// Extent below `y`.
    pub height: f64,
}

impl Rect {
    /// A rectangle with its top-left corner at `x`, `y`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square with its top-left corner at `x`, `y`.
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }
}

/// A single-page vector surface.
pub trait Canvas {
    /// Size of the page.
    fn page_size(&self) -> PageSize;

    /// Selects the face and size used by subsequent text calls.
    fn select_font(&mut self, face: FontFace, size: f64);

    /// The currently selected face and size.
    fn font(&self) -> (FontFace, f64);

    /// Measures `text` in the current font.
    fn text_extents(&self, text: &str) -> TextExtents {
        let (face, size) = self.font();
        face.text_extents(text, size)
    }

    /// Paints the inside of `rect`.
    fn fill_rect(&mut self, rect: Rect, colour: Rgb);

    /// Paints the outline of `rect`, centered on its edges.
    fn stroke_rect(&mut self, rect: Rect, colour: Rgb, line_width: f64);

    /// Paints `text` in the current font with its baseline starting at `x`, `y`.
    ///
    /// Fonts are the standard Helvetica faces, so only characters of the WinAnsi (Latin-1 and a
    /// few typographic marks) set can be shown.
    fn show_text(&mut self, x: f64, y: f64, text: &str, colour: Rgb);

    /// Completes the page. Nothing drawn afterwards is kept.
    fn finish(&mut self) -> Result<(), RenderError>;
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn colour_operands(colour: Rgb) -> Vec<Object> {
    vec![real(colour.0), real(colour.1), real(colour.2)]
}

/// A [Canvas] that writes a one-page PDF document.
///
/// The output file is created when the canvas is, so that a bad path is reported before anything
/// is drawn. Drawing operations are buffered and the document is written by [Canvas::finish].
pub struct PdfCanvas {
    path: PathBuf,
    out: Option<BufWriter<File>>,
    page: PageSize,
    font: (FontFace, f64),
    operations: Vec<Operation>,
}

impl PdfCanvas {
    /// Creates (or truncates) the file at `path` for a page of size `page`.
    ///
    /// # Errors
    ///
    /// - If the file can't be created, returns [RenderError::OutputCreation].
    pub fn create(path: impl AsRef<Path>, page: PageSize) -> Result<Self, RenderError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| RenderError::OutputCreation {
            path: path.clone(),
            source,
        })?;
        debug!("created output file {}", path.display());
        Ok(Self {
            path,
            out: Some(BufWriter::new(file)),
            page,
            font: (FontFace::REGULAR, 12.0),
            operations: Vec::new(),
        })
    }

    /// Where the document is written.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Converts a top-left based `y` to PDF user space.
    fn flip(&self, y: f64) -> f64 {
        self.page.height - y
    }

    fn rect_operation(&self, rect: Rect) -> Operation {
        Operation::new(
            "re",
            vec![
                real(rect.x),
                real(self.flip(rect.y + rect.height)),
                real(rect.width),
                real(rect.height),
            ],
        )
    }

    fn font_resources(doc: &mut Document) -> Dictionary {
        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        fonts
    }

    fn build_document(&mut self) -> Result<Document, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let fonts = Self::font_resources(&mut doc);
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let content = Content {
            operations: mem::take(&mut self.operations),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![Object::Integer(0), Object::Integer(0), real(self.page.width), real(self.page.height)],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.compress();
        Ok(doc)
    }
}

impl Canvas for PdfCanvas {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn select_font(&mut self, face: FontFace, size: f64) {
        self.font = (face, size);
    }

    fn font(&self) -> (FontFace, f64) {
        self.font
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) {
        let re = self.rect_operation(rect);
        self.operations.extend([
            Operation::new("rg", colour_operands(colour)),
            re,
            Operation::new("f", vec![]),
        ]);
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Rgb, line_width: f64) {
        let re = self.rect_operation(rect);
        self.operations.extend([
            Operation::new("RG", colour_operands(colour)),
            Operation::new("w", vec![real(line_width)]),
            re,
            Operation::new("S", vec![]),
        ]);
    }

    fn show_text(&mut self, x: f64, y: f64, text: &str, colour: Rgb) {
        let (face, size) = self.font;
        let baseline = self.flip(y);
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![face.resource_name().into(), real(size)]),
            Operation::new("rg", colour_operands(colour)),
            Operation::new("Td", vec![real(x), real(baseline)]),
            Operation::new(
                "Tj",
                vec![Object::String(win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        let Some(mut out) = self.out.take() else {
            return Ok(());
        };
        let mut doc = self.build_document()?;
        doc.save_to(&mut out)?;
        out.flush()?;
        info!("wrote {}", self.path.display());
        Ok(())
    }
}

/// One call made on a [RecordingCanvas].
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawOp {
    /// [Canvas::fill_rect]
    Fill { rect: Rect, colour: Rgb },
    /// [Canvas::stroke_rect]
    Stroke {
        rect: Rect,
        colour: Rgb,
        line_width: f64,
    },
    /// [Canvas::show_text], with the font selected at the time.
    Text {
        x: f64,
        y: f64,
        text: String,
        face: FontFace,
        size: f64,
        colour: Rgb,
    },
    /// [Canvas::finish]
    Finish,
}

/// A [Canvas] that keeps every drawing call in memory, in order.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    page: PageSize,
    font: (FontFace, f64),
    ops: Vec<DrawOp>,
    finished: bool,
}

impl RecordingCanvas {
    /// An empty canvas for a page of size `page`.
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            font: (FontFace::REGULAR, 12.0),
            ops: Vec::new(),
            finished: false,
        }
    }

    /// Every recorded call, oldest first.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Whether [Canvas::finish] has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The strings drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, op: DrawOp) {
        if !self.finished {
            self.ops.push(op);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> PageSize {
        self.page
    }

    fn select_font(&mut self, face: FontFace, size: f64) {
        self.font = (face, size);
    }

    fn font(&self) -> (FontFace, f64) {
        self.font
    }

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) {
        self.record(DrawOp::Fill { rect, colour });
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Rgb, line_width: f64) {
        self.record(DrawOp::Stroke {
            rect,
            colour,
            line_width,
        });
    }

    fn show_text(&mut self, x: f64, y: f64, text: &str, colour: Rgb) {
        let (face, size) = self.font;
        self.record(DrawOp::Text {
            x,
            y,
            text: text.to_owned(),
            face,
            size,
            colour,
        });
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.record(DrawOp::Finish);
        self.finished = true;
        Ok(())
    }
}
