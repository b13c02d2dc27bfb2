//! The form document store
//!
//! [`FormDocument`] owns every page and element of the form being edited,
//! plus the editor flags around it (current page, selection, sidebar,
//! preview mode). All operations are synchronous and total: out-of-range
//! indices, unknown ids and deleting the last page are ignored rather than
//! reported.
//!
//! ## Preview mode
//!
//! ```text
//!            toggle_preview_mode()
//!   Editing ──────────────────────▶ Previewing
//!      ▲   (clears selection,           │
//!      │    closes sidebar)             │
//!      └────────────────────────────────┘
//!            toggle_preview_mode()
//!              (no side effect)
//! ```

use crate::element::{Element, ElementPatch};
use crate::page::FormPage;
use formula_core::{ElementId, ElementType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Editor Mode
// ============================================================================

/// Whether the form is being edited or previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    Editing,
    Previewing,
}

impl EditorMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Editing => EditorMode::Previewing,
            EditorMode::Previewing => EditorMode::Editing,
        }
    }
}

// ============================================================================
// Form Document
// ============================================================================

/// In-memory form being built
///
/// Invariants: there is always at least one page, and `current_page_index`
/// always indexes an existing page.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDocument {
    pages: Vec<FormPage>,
    current_page_index: usize,
    selected: Option<Element>,
    sidebar_open: bool,
    mode: EditorMode,
}

impl Default for FormDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl FormDocument {
    /// Create a document with one empty page
    pub fn new() -> Self {
        Self {
            pages: vec![FormPage::new()],
            current_page_index: 0,
            selected: None,
            sidebar_open: false,
            mode: EditorMode::Editing,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// All pages in order
    pub fn pages(&self) -> &[FormPage] {
        &self.pages
    }

    /// Number of pages
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Zero-based index of the page being shown
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// The page being shown
    pub fn current_page(&self) -> &FormPage {
        &self.pages[self.current_page_index]
    }

    fn current_page_mut(&mut self) -> &mut FormPage {
        &mut self.pages[self.current_page_index]
    }

    /// Snapshot of the selected element
    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_ref()
    }

    /// Whether the element with `id` is the selected one
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected.as_ref().is_some_and(|e| e.id == id)
    }

    /// Whether the element palette is open
    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Current editor mode
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Whether the form is being previewed
    pub fn preview_mode(&self) -> bool {
        self.mode == EditorMode::Previewing
    }

    /// Whether there is a previous page to go back to
    pub fn has_previous_page(&self) -> bool {
        self.current_page_index > 0
    }

    /// Whether there is a next page to go to
    pub fn has_next_page(&self) -> bool {
        self.current_page_index + 1 < self.pages.len()
    }

    // ========================================================================
    // Element Operations
    // ========================================================================

    /// Append a new element of `element_type` to the current page and select it
    pub fn add_element(&mut self, element_type: ElementType) -> ElementId {
        let element = Element::new(element_type);
        let id = element.id;
        tracing::debug!(
            "Adding {} element {} to page {}",
            element_type,
            id,
            self.current_page_index + 1
        );
        self.selected = Some(element.clone());
        self.current_page_mut().push(element);
        id
    }

    /// Remove an element from the current page; unknown ids are ignored
    pub fn remove_element(&mut self, id: ElementId) {
        if self.current_page_mut().remove(id).is_none() {
            tracing::debug!("Ignoring removal of unknown element {}", id);
            return;
        }
        if self.is_selected(id) {
            self.selected = None;
        }
    }

    /// Apply a patch to an element of the current page
    ///
    /// Content is replaced wholesale. The selection snapshot is refreshed
    /// when the patched element is selected. Unknown ids are ignored.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        let refresh_selection = self.is_selected(id);
        let Some(updated) = self.current_page_mut().update(id, patch) else {
            tracing::debug!("Ignoring update of unknown element {}", id);
            return;
        };
        if refresh_selection {
            let snapshot = updated.clone();
            self.selected = Some(snapshot);
        }
    }

    /// Look up an element on the current page
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.current_page().get(id)
    }

    // ========================================================================
    // Page Operations
    // ========================================================================

    /// Append an empty page and move to it
    pub fn add_page(&mut self) {
        self.pages.push(FormPage::new());
        self.current_page_index = self.pages.len() - 1;
        tracing::debug!("Added page {}", self.pages.len());
    }

    /// Delete the page at `index`
    ///
    /// Refused when only one page remains or the index is out of range.
    /// Deleting at or before the current page moves the current index back
    /// by one (never below zero). Always clears the selection on success.
    pub fn delete_page(&mut self, index: usize) {
        if self.pages.len() <= 1 {
            tracing::warn!("Refusing to delete the last remaining page");
            return;
        }
        if index >= self.pages.len() {
            tracing::debug!("Ignoring deletion of missing page {}", index);
            return;
        }

        self.pages.remove(index);
        if index <= self.current_page_index {
            self.current_page_index = self.current_page_index.saturating_sub(1);
        }
        self.current_page_index = self.current_page_index.min(self.pages.len() - 1);
        self.selected = None;
        tracing::debug!(
            "Deleted page {}, now on page {} of {}",
            index + 1,
            self.current_page_index + 1,
            self.pages.len()
        );
    }

    /// Move to the page at `index` if it exists; always clears the selection
    pub fn go_to_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current_page_index = index;
        }
        self.selected = None;
    }

    /// Move back one page (no-op on the first page)
    pub fn previous_page(&mut self) {
        match self.current_page_index.checked_sub(1) {
            Some(index) => self.go_to_page(index),
            None => self.selected = None,
        }
    }

    /// Move forward one page (no-op on the last page)
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page_index + 1);
    }

    // ========================================================================
    // UI Flags
    // ========================================================================

    /// Open or close the element palette
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Select an element (or clear the selection); ignored while previewing
    pub fn select_element(&mut self, element: Option<&Element>) {
        if self.preview_mode() {
            return;
        }
        self.selected = element.cloned();
    }

    /// Switch between editing and previewing
    ///
    /// Entering preview clears the selection and closes the sidebar.
    pub fn toggle_preview_mode(&mut self) {
        if self.mode == EditorMode::Editing {
            self.selected = None;
            self.sidebar_open = false;
        }
        self.mode = self.mode.toggled();
        tracing::debug!("Editor mode is now {:?}", self.mode);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementContent;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_document() {
        let doc = FormDocument::new();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.current_page_index(), 0);
        assert!(doc.current_page().is_empty());
        assert!(doc.selected_element().is_none());
        assert!(!doc.sidebar_open());
        assert_eq!(doc.mode(), EditorMode::Editing);
    }

    #[test]
    fn test_add_heading_selects_it() {
        let mut doc = FormDocument::new();
        let id = doc.add_element(ElementType::Heading);

        let page = doc.current_page();
        assert_eq!(page.len(), 1);
        assert_eq!(page.elements[0].element_type, ElementType::Heading);
        assert_eq!(
            page.elements[0].content,
            ElementContent::TextBlock {
                title: Some("Heading".to_string()),
                subheader: Some("Type a subheader".to_string()),
            }
        );
        assert!(doc.is_selected(id));
    }

    #[test]
    fn test_add_table_then_column() {
        let mut doc = FormDocument::new();
        let id = doc.add_element(ElementType::InputTable);

        let content = doc.element(id).unwrap().content.clone();
        let ElementContent::Table { columns, rows, .. } = &content else {
            panic!("expected table content");
        };
        assert_eq!(columns.len(), 4);
        assert_eq!(rows.len(), 4);

        doc.update_element(id, ElementPatch::content(content.with_added_column()));
        let ElementContent::Table { columns, .. } = &doc.element(id).unwrap().content else {
            panic!("expected table content");
        };
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[4].header, "Column 5");
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut doc = FormDocument::new();
        let first = doc.add_element(ElementType::ShortText);
        let second = doc.add_element(ElementType::Email);
        assert!(doc.is_selected(second));

        doc.remove_element(first);
        assert!(doc.is_selected(second));

        doc.remove_element(second);
        assert!(doc.selected_element().is_none());
        assert!(doc.current_page().is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut doc = FormDocument::new();
        doc.add_element(ElementType::Divider);
        doc.remove_element(uuid::Uuid::new_v4());
        assert_eq!(doc.current_page().len(), 1);
    }

    #[test]
    fn test_update_options_preserves_order() {
        let mut doc = FormDocument::new();
        let id = doc.add_element(ElementType::Dropdown);
        let options = vec!["Zeta".to_string(), "Alpha".to_string(), "Mu".to_string()];

        let content = doc.element(id).unwrap().content.clone();
        doc.update_element(id, ElementPatch::content(content.with_options(options.clone())));

        assert_eq!(doc.element(id).unwrap().content.options().unwrap(), &options[..]);
    }

    #[test]
    fn test_update_refreshes_selection_snapshot() {
        let mut doc = FormDocument::new();
        let id = doc.add_element(ElementType::Heading);
        let content = doc.element(id).unwrap().content.clone().with_title("Welcome");
        doc.update_element(id, ElementPatch::content(content));

        assert_eq!(doc.selected_element().unwrap().display_title(), "Welcome");
    }

    #[test]
    fn test_update_unselected_leaves_selection() {
        let mut doc = FormDocument::new();
        let first = doc.add_element(ElementType::Heading);
        let second = doc.add_element(ElementType::Paragraph);

        let content = doc.element(first).unwrap().content.clone().with_title("Changed");
        doc.update_element(first, ElementPatch::content(content));

        let selected = doc.selected_element().unwrap();
        assert_eq!(selected.id, second);
        assert_eq!(selected.display_title(), "Paragraph Heading");
    }

    #[test]
    fn test_add_page_moves_to_it() {
        let mut doc = FormDocument::new();
        doc.add_page();
        doc.add_page();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.current_page_index(), 2);

        doc.go_to_page(0);
        doc.add_page();
        assert_eq!(doc.current_page_index(), 3);
    }

    #[test]
    fn test_elements_stay_on_their_page() {
        let mut doc = FormDocument::new();
        doc.add_element(ElementType::Heading);
        doc.add_page();
        doc.add_element(ElementType::Email);
        doc.add_element(ElementType::Phone);

        doc.go_to_page(0);
        assert_eq!(doc.current_page().len(), 1);
        assert_eq!(doc.pages()[1].len(), 2);
    }

    #[test]
    fn test_delete_first_of_two_pages() {
        let mut doc = FormDocument::new();
        doc.add_page();
        assert_eq!(doc.current_page_index(), 1);

        doc.delete_page(0);
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.current_page_index(), 0);
    }

    #[test]
    fn test_delete_last_page_refused() {
        let mut doc = FormDocument::new();
        let id = doc.add_element(ElementType::Heading);
        doc.delete_page(0);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.is_selected(id));
    }

    #[test]
    fn test_delete_after_current_keeps_index() {
        let mut doc = FormDocument::new();
        doc.add_page();
        doc.add_page();
        doc.go_to_page(0);

        doc.delete_page(2);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.current_page_index(), 0);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let mut doc = FormDocument::new();
        doc.add_page();
        doc.delete_page(7);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.current_page_index(), 1);
    }

    #[test]
    fn test_go_to_page_out_of_range() {
        let mut doc = FormDocument::new();
        doc.add_page();
        let id = doc.add_element(ElementType::Email);

        doc.go_to_page(5);
        assert_eq!(doc.current_page_index(), 1);
        assert!(!doc.is_selected(id));
    }

    #[test]
    fn test_previous_and_next() {
        let mut doc = FormDocument::new();
        doc.add_page();
        assert!(doc.has_previous_page());
        assert!(!doc.has_next_page());

        doc.next_page();
        assert_eq!(doc.current_page_index(), 1);

        doc.previous_page();
        doc.previous_page();
        assert_eq!(doc.current_page_index(), 0);
        assert!(doc.has_next_page());
    }

    #[test]
    fn test_preview_clears_selection_and_sidebar() {
        let mut doc = FormDocument::new();
        doc.add_element(ElementType::Heading);
        doc.toggle_sidebar();
        assert!(doc.sidebar_open());

        doc.toggle_preview_mode();
        assert!(doc.preview_mode());
        assert!(doc.selected_element().is_none());
        assert!(!doc.sidebar_open());
    }

    #[test]
    fn test_selection_frozen_while_previewing() {
        let mut doc = FormDocument::new();
        doc.add_element(ElementType::Heading);
        let element = doc.current_page().elements[0].clone();

        doc.toggle_preview_mode();
        doc.select_element(Some(&element));
        assert!(doc.selected_element().is_none());

        doc.toggle_preview_mode();
        assert_eq!(doc.mode(), EditorMode::Editing);
        assert!(doc.selected_element().is_none());

        doc.select_element(Some(&element));
        assert!(doc.is_selected(element.id));
        doc.select_element(None);
        assert!(doc.selected_element().is_none());
    }

    #[test]
    fn test_leaving_preview_keeps_sidebar_state() {
        let mut doc = FormDocument::new();
        doc.toggle_preview_mode();
        doc.toggle_sidebar();
        doc.toggle_preview_mode();
        assert!(doc.sidebar_open());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        RemoveExisting(usize),
        RemoveUnknown,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..ElementType::ALL.len()).prop_map(Op::Add),
            any::<usize>().prop_map(Op::RemoveExisting),
            Just(Op::RemoveUnknown),
        ]
    }

    proptest! {
        #[test]
        fn prop_element_count_tracks_adds_and_removals(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut doc = FormDocument::new();
            let mut expected = 0usize;
            for op in ops {
                match op {
                    Op::Add(i) => {
                        doc.add_element(ElementType::ALL[i]);
                        expected += 1;
                    }
                    Op::RemoveExisting(n) => {
                        let ids: Vec<_> = doc.current_page().elements.iter().map(|e| e.id).collect();
                        if !ids.is_empty() {
                            doc.remove_element(ids[n % ids.len()]);
                            expected -= 1;
                        }
                    }
                    Op::RemoveUnknown => doc.remove_element(uuid::Uuid::new_v4()),
                }
                prop_assert_eq!(doc.current_page().len(), expected);
            }
        }

        #[test]
        fn prop_page_count_never_below_one(adds in 0usize..6, deletes in prop::collection::vec(0usize..8, 0..20)) {
            let mut doc = FormDocument::new();
            for _ in 0..adds {
                doc.add_page();
            }
            for index in deletes {
                doc.delete_page(index);
                prop_assert!(doc.page_count() >= 1);
                prop_assert!(doc.current_page_index() < doc.page_count());
            }
        }

        #[test]
        fn prop_delete_at_or_before_current_steps_back(extra in 1usize..6, current_seed in any::<usize>(), index_seed in any::<usize>()) {
            let mut doc = FormDocument::new();
            for _ in 0..extra {
                doc.add_page();
            }
            let current = current_seed % doc.page_count();
            doc.go_to_page(current);
            let index = index_seed % (current + 1);

            doc.delete_page(index);
            prop_assert_eq!(doc.current_page_index(), current.saturating_sub(1));
        }

        #[test]
        fn prop_entering_preview_resets_flags(adds in 0usize..4, open in any::<bool>(), select_first in any::<bool>()) {
            let mut doc = FormDocument::new();
            for _ in 0..adds {
                doc.add_element(ElementType::ShortText);
            }
            if open {
                doc.toggle_sidebar();
            }
            if select_first {
                let first = doc.current_page().elements.first().cloned();
                doc.select_element(first.as_ref());
            }

            doc.toggle_preview_mode();
            prop_assert!(doc.selected_element().is_none());
            prop_assert!(!doc.sidebar_open());
        }
    }
}
