//! Element catalog
//!
//! Static registry of every element type offered in the builder palette,
//! with the glyph shown next to it and the sidebar tab it belongs to.
//! The catalog holds no state; the sidebar lists it and the element
//! renderer uses it for the fallback placeholder.

use crate::types::{ElementCategory, ElementType};

/// One palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Element type created when this entry is picked
    pub element_type: ElementType,
    /// Glyph shown in the palette and in fallback renders
    pub icon: &'static str,
    /// Sidebar tab
    pub category: ElementCategory,
}

impl CatalogEntry {
    const fn new(element_type: ElementType, icon: &'static str, category: ElementCategory) -> Self {
        Self {
            element_type,
            icon,
            category,
        }
    }

    /// Display label for the palette button
    pub fn label(&self) -> String {
        self.element_type.display_name()
    }
}

use ElementCategory::{Basic, Widgets};

/// The palette, in the order it is presented
pub static CATALOG: [CatalogEntry; 25] = [
    CatalogEntry::new(ElementType::Heading, "🔠", Basic),
    CatalogEntry::new(ElementType::FullName, "👤", Basic),
    CatalogEntry::new(ElementType::Email, "✉️", Basic),
    CatalogEntry::new(ElementType::Address, "📍", Basic),
    CatalogEntry::new(ElementType::Phone, "📞", Basic),
    CatalogEntry::new(ElementType::DatePicker, "📅", Basic),
    CatalogEntry::new(ElementType::Appointment, "🕘", Basic),
    CatalogEntry::new(ElementType::Signature, "✍️", Basic),
    CatalogEntry::new(ElementType::ShortText, "📝", Basic),
    CatalogEntry::new(ElementType::LongText, "📄", Basic),
    CatalogEntry::new(ElementType::Paragraph, "¶", Basic),
    CatalogEntry::new(ElementType::Dropdown, "🔽", Basic),
    CatalogEntry::new(ElementType::SingleChoice, "🔘", Basic),
    CatalogEntry::new(ElementType::MultipleChoice, "☑️", Basic),
    CatalogEntry::new(ElementType::Image, "🖼️", Widgets),
    CatalogEntry::new(ElementType::FileUpload, "📤", Widgets),
    CatalogEntry::new(ElementType::Time, "⏰", Widgets),
    CatalogEntry::new(ElementType::Captcha, "🤖", Widgets),
    CatalogEntry::new(ElementType::Spinner, "📊", Widgets),
    CatalogEntry::new(ElementType::InputTable, "▦", Widgets),
    CatalogEntry::new(ElementType::StarRating, "⭐", Widgets),
    CatalogEntry::new(ElementType::ScaleRating, "📏", Widgets),
    CatalogEntry::new(ElementType::Divider, "➗", Widgets),
    CatalogEntry::new(ElementType::SectionCollapse, "🗂️", Widgets),
    CatalogEntry::new(ElementType::PageBreak, "✂️", Widgets),
];

/// Look up the catalog entry for a type
pub fn entry(element_type: ElementType) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.element_type == element_type)
}

/// Icon for a type (a neutral glyph if the type were ever missing)
pub fn icon_for(element_type: ElementType) -> &'static str {
    entry(element_type).map(|e| e.icon).unwrap_or("▫️")
}

/// Entries listed under one sidebar tab, in palette order
pub fn by_category(category: ElementCategory) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |e| e.category == category)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_covers_every_type_once() {
        let types: HashSet<_> = CATALOG.iter().map(|e| e.element_type).collect();
        assert_eq!(types.len(), CATALOG.len());
        for ty in ElementType::ALL {
            assert!(entry(ty).is_some(), "{ty} missing from catalog");
        }
    }

    #[test]
    fn test_category_split() {
        assert_eq!(by_category(ElementCategory::Basic).count(), 14);
        assert_eq!(by_category(ElementCategory::Widgets).count(), 11);
    }

    #[test]
    fn test_basic_tab_order() {
        let first: Vec<_> = by_category(ElementCategory::Basic)
            .take(3)
            .map(|e| e.element_type)
            .collect();
        assert_eq!(
            first,
            vec![ElementType::Heading, ElementType::FullName, ElementType::Email]
        );
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(icon_for(ElementType::StarRating), "⭐");
        assert_eq!(entry(ElementType::Image).unwrap().category, ElementCategory::Widgets);
    }

    #[test]
    fn test_entry_label() {
        assert_eq!(entry(ElementType::PageBreak).unwrap().label(), "Page Break");
    }
}
