//! Inventory domain module.
//!
//! This crate contains the shop's daily aging rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Items are
//! constructed externally; [`update_one_day`] advances every item by exactly
//! one day, in place.

pub mod category;
pub mod item;
pub mod updater;

pub use category::{AGED_BRIE, BACKSTAGE_PASS, Category, SULFURAS};
pub use item::{Item, Quality, SellIn};
pub use updater::{update_days, update_one_day};
