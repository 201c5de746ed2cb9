//! Field extraction from a single advertisement page.
//!
//! Each field is resolved on its own: a missing marker or unreadable value
//! falls back to the field's zero value and never affects the other fields.

use epcrawl_core::AdRecord;
use scraper::{ElementRef, Html};

use crate::markers::{self, element_text};
use crate::normalize::{normalize_count, normalize_decimal};

/// Extracts price, title, room count and both areas from an advertisement.
///
/// Pure and deterministic: the same document always yields the same record.
#[must_use]
pub fn extract_fields(document: &Html) -> AdRecord {
    let price = read_field("price", markers::price(document), |el| {
        normalize_decimal(&element_text(el))
    });
    let title = read_field("title", markers::title(document), |el| {
        element_text(el).trim().to_owned()
    });
    let room = read_field("room", markers::room(document), |el| {
        normalize_count(&element_text(el))
    });
    let (area_bati, area_terrain) = extract_areas(document);

    AdRecord {
        price,
        title,
        area_bati,
        area_terrain,
        room,
    }
}

/// Extracts `(area_bati, area_terrain)` from the combined area container.
///
/// The container holds the building area as its own text and, for
/// properties with a plot, the land area in a nested element. The nested
/// element's text is read separately and left out of the building-area
/// text, so the two numbers are never concatenated into one digit string.
/// The document is not modified.
#[must_use]
pub fn extract_areas(document: &Html) -> (f64, f64) {
    let Some(container) = markers::area(document) else {
        tracing::debug!("area marker absent");
        return (0.0, 0.0);
    };

    match markers::land_area(container) {
        Some(land) => {
            let area_terrain = normalize_decimal(&element_text(land));
            let area_bati = normalize_decimal(&text_excluding(container, land));
            (area_bati, area_terrain)
        }
        None => (normalize_decimal(&element_text(container)), 0.0),
    }
}

fn read_field<'a, T: Default>(
    name: &'static str,
    element: Option<ElementRef<'a>>,
    read: impl FnOnce(ElementRef<'a>) -> T,
) -> T {
    if let Some(el) = element {
        read(el)
    } else {
        tracing::debug!(field = name, "marker absent; using default");
        T::default()
    }
}

/// Text of `container` without the text that sits inside `excluded`.
fn text_excluding(container: ElementRef<'_>, excluded: ElementRef<'_>) -> String {
    let excluded_id = excluded.id();
    container
        .descendants()
        .filter(|node| !node.ancestors().any(|a| a.id() == excluded_id))
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
