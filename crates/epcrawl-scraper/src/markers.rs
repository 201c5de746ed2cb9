//! Structural identifiers of the etreproprio.com markup.
//!
//! Each accessor takes a parsed document (or container) and returns the
//! element it names, if present. Everything the extractors know about the
//! site's markup lives here; a redesign of the site means editing this file.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// Relative path prefix shared by every advertisement page.
pub const LISTING_PATH_PREFIX: &str = "/immobilier-";

static RESULTS_CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| selector("div.ep-search-list-wrapper"));
static ANCHOR_WITH_HREF: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector("div.ep-price"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("div.ep-title"));
static ROOM: LazyLock<Selector> = LazyLock::new(|| selector("div.ep-room"));
static AREA: LazyLock<Selector> = LazyLock::new(|| selector("div.ep-area"));
static LAND_AREA: LazyLock<Selector> = LazyLock::new(|| selector(".ep-area-land"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// The element wrapping every result anchor on a search-results page.
#[must_use]
pub fn results_container(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&RESULTS_CONTAINER).next()
}

/// Anchors carrying an `href` inside the results container, in document order.
pub fn anchors<'a>(container: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    container.select(&ANCHOR_WITH_HREF)
}

#[must_use]
pub fn price(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&PRICE).next()
}

#[must_use]
pub fn title(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&TITLE).next()
}

#[must_use]
pub fn room(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&ROOM).next()
}

/// The combined area container: building area as its own text, land area
/// (when the property has a plot) in a nested [`land_area`] element.
#[must_use]
pub fn area(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&AREA).next()
}

/// The land-area element nested inside an [`area`] container.
#[must_use]
pub fn land_area<'a>(area_container: ElementRef<'a>) -> Option<ElementRef<'a>> {
    area_container.select(&LAND_AREA).next()
}

/// Concatenated text of `element` and all of its descendants.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
