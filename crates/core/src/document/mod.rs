//! Paginated PDF export of the collection.
//!
//! Layout and output are separate steps: [`DocumentLayout::paginate`] places
//! every line on a page, and [`DocumentRenderer::render`] writes the placed
//! lines as PDF using the standard Helvetica fonts.

mod encoding;
mod layout;
mod pdf;

pub use encoding::encode_win_ansi;
pub use layout::{DocumentLayout, FontStyle, Page, PlacedLine};
pub use pdf::DocumentRenderer;
