//! Overlay surface collaborator and its render model.
//!
//! The actual overlay (DOM construction, styling, focus) lives in host glue;
//! the session hands it a fully prepared [`ListRender`] and selection
//! updates, and tells it when to tear down. The view shows its own "No tabs
//! found" placeholder when `rows` is empty.

use crate::tab::TabId;

/// One rendered list row, display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub id: TabId,
    /// Title with `<mark>` emphasis around literal query occurrences, with
    /// the "Untitled" fallback already applied.
    pub title_markup: String,
    /// Hostname line, or "No URL".
    pub host: String,
    /// Icon address; `None` hides the icon slot entirely.
    pub favicon: Option<String>,
}

/// Everything the overlay needs to redraw its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRender {
    pub rows: Vec<RowModel>,
    /// Summary line, e.g. "3 of 12 tabs".
    pub count_line: String,
    /// Cursor position within `rows`, if any.
    pub selected: Option<usize>,
}

/// The overlay surface.
pub trait OverlayView {
    /// Construct the empty overlay (search box, count line, empty list).
    fn open(&mut self);

    /// Replace the list contents.
    fn render(&mut self, list: &ListRender);

    /// Move the selection highlight without re-rendering rows.
    fn update_selection(&mut self, selected: Option<usize>);

    /// Ensure the row at `index` is inside the visible scroll region.
    fn scroll_into_view(&mut self, index: usize);

    /// Remove the overlay from the page. Called exactly once per session.
    fn teardown(&mut self);
}
