//! PDF output using `pdf-writer`.

use std::io::Cursor;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::debug;

use super::encoding::encode_win_ansi;
use super::layout::{DocumentLayout, FontStyle, Page};
use crate::reports::Collection;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Renders a collection into a paginated PDF.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    title: String,
    layout: DocumentLayout,
}

impl DocumentRenderer {
    /// Creates a renderer with the default A4 layout.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layout: DocumentLayout::default(),
        }
    }

    /// Replaces the page geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: DocumentLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Title printed at the top of the first page.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lays out the collection without producing PDF bytes.
    #[must_use]
    pub fn paginate(&self, collection: &Collection) -> Vec<Page> {
        self.layout.paginate(&self.title, collection)
    }

    /// Renders the collection. The returned stream is positioned at its start.
    #[must_use]
    pub fn render(&self, collection: &Collection) -> Cursor<Vec<u8>> {
        let pages = self.paginate(collection);
        let bytes = write_pdf(&self.layout, &pages);
        debug!(
            reports = collection.len(),
            pages = pages.len(),
            bytes = bytes.len(),
            "Document rendered"
        );
        Cursor::new(bytes)
    }
}

/// Hands out consecutive object ids.
struct RefAllocator(i32);

impl RefAllocator {
    fn next(&mut self) -> Ref {
        self.0 += 1;
        Ref::new(self.0)
    }
}

fn write_pdf(layout: &DocumentLayout, pages: &[Page]) -> Vec<u8> {
    let mut refs = RefAllocator(0);
    let catalog_id = refs.next();
    let tree_id = refs.next();
    let regular_id = refs.next();
    let bold_id = refs.next();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (refs.next(), refs.next())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|&(page_id, _)| page_id))
        .count(i32::try_from(page_ids.len()).unwrap_or(i32::MAX));

    let media_box = Rect::new(0.0, 0.0, layout.page_width, layout.page_height);
    for (page, &(page_id, content_id)) in pages.iter().zip(&page_ids) {
        let mut page_dict = pdf.page(page_id);
        page_dict.media_box(media_box);
        page_dict.parent(tree_id);
        page_dict.contents(content_id);
        page_dict
            .resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page_dict.finish();

        pdf.stream(content_id, &page_content(page));
    }

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

fn page_content(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    for line in &page.lines {
        let font = match line.style {
            FontStyle::Regular => REGULAR,
            FontStyle::Bold => BOLD,
        };
        let text = encode_win_ansi(&line.text);
        content.begin_text();
        content.set_font(font, line.size);
        content.next_line(line.x, line.y);
        content.show(Str(&text));
        content.end_text();
    }
    content.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Report;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn long_collection() -> Collection {
        let mut report = Report::new("Onboarding");
        report.steps = (1..=150).map(|i| format!("Task number {i}")).collect();
        Collection::from(vec![report])
    }

    #[test]
    fn test_render_produces_pdf_at_start_of_stream() {
        let renderer = DocumentRenderer::new("Reports / Processes");

        let stream = renderer.render(&Collection::new());

        assert_eq!(stream.position(), 0);
        assert!(stream.get_ref().starts_with(b"%PDF-"));
    }

    #[test]
    fn test_multi_page_document_prints_title_once() {
        let renderer = DocumentRenderer::new("Reports / Processes");
        let collection = long_collection();

        let pages = renderer.paginate(&collection);
        let bytes = renderer.render(&collection).into_inner();

        assert!(pages.len() > 1);
        assert_eq!(count(&bytes, b"(Reports / Processes)"), 1);
        assert_eq!(count(&bytes, b"(150. Task number 150)"), 1);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
    }

    #[test]
    fn test_page_objects_match_layout() {
        let renderer = DocumentRenderer::new("T");
        let collection = long_collection();

        let pages = renderer.paginate(&collection).len();
        let bytes = renderer.render(&collection).into_inner();

        let page_objects = count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages");
        assert_eq!(page_objects, pages);
    }

    #[test]
    fn test_non_ascii_text_is_win_ansi_encoded() {
        let renderer = DocumentRenderer::new("Relatórios / Processos");

        let bytes = renderer.render(&Collection::new()).into_inner();

        let encoded = encode_win_ansi("Relatórios / Processos");
        let hex: String = encoded.iter().map(|b| format!("{b:02x}")).collect();
        let literal = [b"(".as_slice(), encoded.as_slice(), b")".as_slice()].concat();
        let as_hex = count(&bytes.to_ascii_lowercase(), format!("<{hex}>").as_bytes());
        assert_eq!(as_hex + count(&bytes, &literal), 1);
        assert_eq!(count(&bytes, "Relatórios".as_bytes()), 0);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 2);
    }
}
