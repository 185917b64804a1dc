//! The item record and its value objects.

use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult, ValueObject};

use crate::category::Category;

/// Desirability score of an item.
///
/// Nominal range is `[0, 50]` for every category except the legendary one
/// (conventionally pinned at [`Quality::LEGENDARY`]). The constructor is
/// total: out-of-range values are accepted as supplied and never corrected.
/// Raises and drops are guarded at the moment each ±1 step applies, so a
/// value already at a boundary is left untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Floor for every category.
    pub const MIN: Quality = Quality(0);

    /// Cap for every non-legendary category.
    pub const MAX: Quality = Quality(50);

    /// Conventional fixed score of legendary stock.
    pub const LEGENDARY: Quality = Quality(80);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// One step up, only if the current value is below the cap.
    ///
    /// A value at or above 50 is returned unchanged - the guard prevents
    /// exceeding the cap, it does not correct excess supplied externally.
    #[must_use]
    pub fn raised(self) -> Self {
        if self.0 < Self::MAX.0 {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One step down, only if the current value is above the floor.
    #[must_use]
    pub fn lowered(self) -> Self {
        if self.0 > Self::MIN.0 {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl ValueObject for Quality {}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Days remaining until an item's sell-by date. Goes negative once expired;
/// there is no floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// One day closer to (or past) the sell-by date.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self(self.0 - 1)
    }

    /// True once the sell-by date has passed.
    pub fn is_expired(self) -> bool {
        self.0 < 0
    }
}

impl ValueObject for SellIn {}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A shop item.
///
/// Plain record: items are constructed externally with whatever values the
/// caller supplies, mutated in place by the updater, and read back after
/// each pass. The name doubles as the category selector (see
/// [`Category::from_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub sell_in: SellIn,
    pub quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::new(quality),
        }
    }

    /// Aging category, resolved from the name.
    pub fn category(&self) -> Category {
        Category::from_name(&self.name)
    }

    /// Diagnostic check of the quality-bounds invariant.
    ///
    /// Non-legendary quality must sit in `[0, 50]`; legendary stock is
    /// exempt. The daily update never calls this - it validates nothing -
    /// but test suites use it to assert the invariant holds after any
    /// number of days.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if self.category().is_legendary() {
            return Ok(());
        }
        if self.quality < Quality::MIN || self.quality > Quality::MAX {
            return Err(DomainError::invariant(format!(
                "quality {} outside [{}, {}] for item {:?}",
                self.quality,
                Quality::MIN,
                Quality::MAX,
                self.name
            )));
        }
        Ok(())
    }
}
