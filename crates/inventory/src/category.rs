//! Item categories, resolved once per item from its display name.

use serde::{Deserialize, Serialize};

/// Name of the aging cheese whose quality rises over time.
pub const AGED_BRIE: &str = "Aged Brie";

/// Name of the event ticket whose quality surges near the concert date.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the legendary item that never ages and is never sold.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

/// Aging category of an item.
///
/// The set is closed: category is derived by exact, case-sensitive match of
/// the item name against the known names above, and every other name falls
/// through to [`Category::Regular`]. Unrecognized names are never rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Quality rises by 1/day, and by 2/day once past the sell-by date.
    AgingCheese,
    /// Quality rises faster as the event approaches, then collapses to zero.
    EventTicket,
    /// Frozen: neither quality nor sell-in ever changes.
    Legendary,
    /// Quality falls by 1/day, by 2/day once expired, floored at zero.
    Regular,
}

impl Category {
    /// Resolve the category for an item name.
    pub fn from_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Category::AgingCheese,
            BACKSTAGE_PASS => Category::EventTicket,
            SULFURAS => Category::Legendary,
            _ => Category::Regular,
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}
