use serde::{Deserialize, Serialize};

/// Name of the legendary item.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// Name of the item that improves with age.
pub const AGED_BRIE: &str = "Aged Brie";
/// Name of the concert ticket.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Rule category of an item, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Quality is frozen; only `sell_in` moves.
    Legendary,
    /// Quality rises as `sell_in` shrinks.
    AgingPositive,
    /// Quality rises towards the event, then drops to zero.
    EventTicket,
    /// Everything else: quality degrades.
    Ordinary,
}

impl Category {
    /// Classify by exact name match. Unknown names are `Ordinary`.
    pub fn of(name: &str) -> Self {
        match name {
            SULFURAS => Category::Legendary,
            AGED_BRIE => Category::AgingPositive,
            BACKSTAGE_PASS => Category::EventTicket,
            _ => Category::Ordinary,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgingPositive => "aging_positive",
            Category::EventTicket => "event_ticket",
            Category::Ordinary => "ordinary",
        }
    }

    pub fn is_legendary(self) -> bool {
        self == Category::Legendary
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
