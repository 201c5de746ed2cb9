use serde::{Deserialize, Serialize};

/// One real-estate advertisement, extracted and typed.
///
/// Every field is always populated: a missing or unreadable value on the
/// source page resolves to the type's zero value instead of being absent.
/// The currency of `price` is implicit (the source site lists euros only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    pub price: f64,
    pub title: String,
    /// Building / living area in square meters.
    pub area_bati: f64,
    /// Land area in square meters; `0.0` for listings without a plot.
    pub area_terrain: f64,
    pub room: u32,
}

impl AdRecord {
    /// Column names in export order, matching the serialized field order.
    pub const COLUMNS: [&'static str; 5] = ["price", "title", "area_bati", "area_terrain", "room"];

    /// Returns `true` if the listing exposes a land area.
    #[must_use]
    pub fn has_land(&self) -> bool {
        self.area_terrain > 0.0
    }

    /// Returns `true` if nothing at all could be extracted, which usually
    /// means the advertisement markup changed or the page was not an ad.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }
}
