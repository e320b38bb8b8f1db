//! Inventory domain module.
//!
//! Items, their rule categories, the day-advance rules and the inn that
//! stores items in order. Pure domain logic: no IO, no logging, no storage.

pub mod category;
pub mod inn;
pub mod item;
pub mod rules;

pub use category::{AGED_BRIE, BACKSTAGE_PASS, Category, SULFURAS};
pub use inn::{AdvanceDay, DayAdvanced, Inn, InnCommand, InnEvent, InnId, ItemStocked, StockItem};
pub use item::Item;
pub use rules::{
    LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY, advance_item, advance_one_day, next_day,
    next_quality,
};
