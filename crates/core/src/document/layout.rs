//! Page geometry and pagination.

use crate::reports::Collection;

/// Font weight of a placed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

/// A line of text at a fixed position on a page. Coordinates are PDF points
/// with the origin at the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    /// Text to draw.
    pub text: String,
    /// Left edge.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    /// Font weight.
    pub style: FontStyle,
    /// Font size in points.
    pub size: f32,
}

/// One physical page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Lines in drawing order.
    pub lines: Vec<PlacedLine>,
}

/// Fixed page geometry and line metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    /// Page width.
    pub page_width: f32,
    /// Page height.
    pub page_height: f32,
    /// Distance from the page top to the first baseline.
    pub top_margin: f32,
    /// A new page starts once the cursor drops below this height.
    pub bottom_margin: f32,
    /// Left edge of the title and report headers.
    pub header_x: f32,
    /// Left edge of steps.
    pub step_x: f32,
    /// Title font size.
    pub title_size: f32,
    /// Report header font size.
    pub header_size: f32,
    /// Step font size.
    pub body_size: f32,
    /// Cursor advance after the title.
    pub title_advance: f32,
    /// Cursor advance after a report header.
    pub header_advance: f32,
    /// Cursor advance after a step.
    pub step_advance: f32,
    /// Extra gap after each report.
    pub report_gap: f32,
}

impl DocumentLayout {
    /// A4 portrait width in points.
    pub const A4_WIDTH: f32 = 595.275_6;
    /// A4 portrait height in points.
    pub const A4_HEIGHT: f32 = 841.889_8;

    /// Baseline of the first line on a page.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.page_height - self.top_margin
    }

    /// Lays the collection out onto pages.
    ///
    /// The title is placed once, on the first page. Each report gets a bold,
    /// 1-based numbered header followed by its numbered steps; a page break
    /// happens before any header or step whose baseline would fall below the
    /// bottom margin.
    #[must_use]
    pub fn paginate(&self, title: &str, collection: &Collection) -> Vec<Page> {
        let mut cursor = PageCursor::new(self);

        cursor.place(title.to_string(), self.header_x, FontStyle::Bold, self.title_size);
        cursor.advance(self.title_advance);

        for (i, report) in collection.iter().enumerate() {
            cursor.break_if_full();
            cursor.place(
                format!("{}. {}", i + 1, report.name),
                self.header_x,
                FontStyle::Bold,
                self.header_size,
            );
            cursor.advance(self.header_advance);

            for (j, step) in report.steps.iter().enumerate() {
                cursor.break_if_full();
                cursor.place(
                    format!("{}. {step}", j + 1),
                    self.step_x,
                    FontStyle::Regular,
                    self.body_size,
                );
                cursor.advance(self.step_advance);
            }

            cursor.advance(self.report_gap);
        }

        cursor.finish()
    }
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            page_width: Self::A4_WIDTH,
            page_height: Self::A4_HEIGHT,
            top_margin: 40.0,
            bottom_margin: 80.0,
            header_x: 40.0,
            step_x: 60.0,
            title_size: 16.0,
            header_size: 12.0,
            body_size: 11.0,
            title_advance: 30.0,
            header_advance: 18.0,
            step_advance: 14.0,
            report_gap: 10.0,
        }
    }
}

struct PageCursor<'a> {
    layout: &'a DocumentLayout,
    pages: Vec<Page>,
    current: Page,
    y: f32,
}

impl<'a> PageCursor<'a> {
    fn new(layout: &'a DocumentLayout) -> Self {
        Self {
            layout,
            pages: Vec::new(),
            current: Page::default(),
            y: layout.top(),
        }
    }

    fn place(&mut self, text: String, x: f32, style: FontStyle, size: f32) {
        self.current.lines.push(PlacedLine {
            text,
            x,
            y: self.y,
            style,
            size,
        });
    }

    fn advance(&mut self, by: f32) {
        self.y -= by;
    }

    fn break_if_full(&mut self) {
        if self.y < self.layout.bottom_margin {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.layout.top();
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}
