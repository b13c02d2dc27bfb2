//! Form pages
//!
//! A page is an ordered list of elements presented together.

use crate::element::{Element, ElementPatch};
use formula_core::{ElementId, PageId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered group of elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPage {
    /// Unique identifier for this page
    pub id: PageId,

    /// Elements in display order
    pub elements: Vec<Element>,
}

impl Default for FormPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            elements: Vec::new(),
        }
    }

    /// Number of elements on the page
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the page has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by ID
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Append an element
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by ID, returning it if it was present
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Patch an element by ID, returning the updated element if present
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> Option<&Element> {
        let element = self.elements.iter_mut().find(|e| e.id == id)?;
        element.apply(patch);
        Some(element)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::ElementType;

    #[test]
    fn test_page_new() {
        let page = FormPage::new();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
    }

    #[test]
    fn test_page_remove_keeps_order() {
        let mut page = FormPage::new();
        let a = Element::new(ElementType::Heading);
        let b = Element::new(ElementType::Email);
        let c = Element::new(ElementType::Divider);
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        page.push(a);
        page.push(b);
        page.push(c);

        assert!(page.remove(b_id).is_some());
        let ids: Vec<_> = page.elements.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a_id, c_id]);

        assert!(page.remove(b_id).is_none());
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_page_update_missing() {
        let mut page = FormPage::new();
        assert!(
            page.update(uuid::Uuid::new_v4(), ElementPatch::required(true))
                .is_none()
        );
    }
}
