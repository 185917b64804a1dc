//! Daily inventory update rules.
//!
//! [`update_one_day`] is the whole contract: advance every item by exactly
//! one simulated day, in place, sequentially, preserving order. The routine
//! is total - it validates nothing, rejects nothing, and never fails.

use tracing::{debug, trace};

use crate::category::Category;
use crate::item::{Item, Quality};

/// Tickets gain an extra point per day once the event is this close.
const SURGE_WINDOW: i32 = 11;

/// And one more on top of that inside the final stretch.
const FINAL_WINDOW: i32 = 6;

/// Advance every item in the sequence by one day.
pub fn update_one_day(items: &mut [Item]) {
    debug!(count = items.len(), "advancing inventory by one day");
    for item in items.iter_mut() {
        advance(item);
    }
}

/// Advance every item by `days` days. Equivalent to calling
/// [`update_one_day`] `days` times.
pub fn update_days(items: &mut [Item], days: u32) {
    for _ in 0..days {
        update_one_day(items);
    }
}

fn advance(item: &mut Item) {
    let category = item.category();

    // Legendary stock neither ages nor has to be sold.
    if category.is_legendary() {
        return;
    }

    item.quality = aged_quality(category, item.quality, item.sell_in.value());
    item.sell_in = item.sell_in.advanced();
    if item.sell_in.is_expired() {
        item.quality = expired_quality(category, item.quality);
    }

    trace!(
        name = %item.name,
        sell_in = item.sell_in.value(),
        quality = item.quality.value(),
        "item aged"
    );
}

/// Quality step applied before the sell-in decrement. Ticket windows are
/// evaluated on the pre-decrement sell-in; every ±1 is guarded individually,
/// so a running value never passes the cap.
fn aged_quality(category: Category, quality: Quality, sell_in: i32) -> Quality {
    match category {
        Category::Regular => quality.lowered(),
        Category::AgingCheese => quality.raised(),
        Category::EventTicket => {
            let mut quality = quality.raised();
            if sell_in < SURGE_WINDOW {
                quality = quality.raised();
            }
            if sell_in < FINAL_WINDOW {
                quality = quality.raised();
            }
            quality
        }
        Category::Legendary => quality,
    }
}

/// Extra quality step applied only when the decremented sell-in is negative.
fn expired_quality(category: Category, quality: Quality) -> Quality {
    match category {
        // Expired regular items degrade twice as fast overall.
        Category::Regular => quality.lowered(),
        // The cheese improves further once past its date.
        Category::AgingCheese => quality.raised(),
        // Tickets are worthless after the concert, whatever they were worth
        // before - assigned outright, not stepped down.
        Category::EventTicket => Quality::MIN,
        Category::Legendary => quality,
    }
}
