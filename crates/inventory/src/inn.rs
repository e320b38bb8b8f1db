use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gildedrose_core::{
    Aggregate, AggregateId, AggregateRoot, DomainError, DomainResult, ExpectedVersion,
};
use gildedrose_events::Event;

use crate::item::Item;
use crate::rules;

/// Inn identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InnId(pub AggregateId);

impl InnId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InnId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Inn.
///
/// Ordered item store. Items keep their insertion order; the inn exclusively
/// owns them and advances them one day at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inn {
    id: InnId,
    items: Vec<Item>,
    day: u64,
    version: u64,
}

impl Inn {
    pub fn new(id: InnId) -> Self {
        Self {
            id,
            items: Vec::new(),
            day: 0,
            version: 0,
        }
    }

    pub fn id_typed(&self) -> InnId {
        self.id
    }

    /// Append an item to the store.
    pub fn set_item(&mut self, item: Item) {
        self.items.push(item);
        self.version += 1;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn item(&self, index: usize) -> DomainResult<&Item> {
        self.items.get(index).ok_or_else(DomainError::not_found)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of day-advances applied so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    /// Advance every item by one day.
    pub fn one_day(&mut self) {
        rules::advance_one_day(&mut self.items);
        self.day += 1;
        self.version += 1;
    }

    /// Advance `days` times, one day at a time.
    pub fn simulate(&mut self, days: u32) {
        for _ in 0..days {
            self.one_day();
        }
    }
}

impl AggregateRoot for Inn {
    type Id = InnId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: StockItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub inn_id: InnId,
    pub name: String,
    pub sell_in: i32,
    pub quality: i32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdvanceDay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceDay {
    pub inn_id: InnId,
    pub expected_version: ExpectedVersion,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InnCommand {
    StockItem(StockItem),
    AdvanceDay(AdvanceDay),
}

/// Event: ItemStocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStocked {
    pub inn_id: InnId,
    pub item: Item,
    pub occurred_at: DateTime<Utc>,
}

/// Event: DayAdvanced. Carries the resulting state of every item, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAdvanced {
    pub inn_id: InnId,
    pub day: u64,
    pub items: Vec<Item>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InnEvent {
    ItemStocked(ItemStocked),
    DayAdvanced(DayAdvanced),
}

impl Event for InnEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InnEvent::ItemStocked(_) => "inventory.inn.item_stocked",
            InnEvent::DayAdvanced(_) => "inventory.inn.day_advanced",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InnEvent::ItemStocked(e) => e.occurred_at,
            InnEvent::DayAdvanced(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Inn {
    type Command = InnCommand;
    type Event = InnEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InnEvent::ItemStocked(e) => {
                self.items.push(e.item.clone());
            }
            InnEvent::DayAdvanced(e) => {
                self.items = e.items.clone();
                self.day = e.day;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InnCommand::StockItem(cmd) => self.handle_stock(cmd),
            InnCommand::AdvanceDay(cmd) => self.handle_advance(cmd),
        }
    }
}

impl Inn {
    fn ensure_inn_id(&self, inn_id: InnId) -> Result<(), DomainError> {
        if self.id != inn_id {
            return Err(DomainError::invariant("inn_id mismatch"));
        }
        Ok(())
    }

    fn handle_stock(&self, cmd: &StockItem) -> Result<Vec<InnEvent>, DomainError> {
        self.ensure_inn_id(cmd.inn_id)?;
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(vec![InnEvent::ItemStocked(ItemStocked {
            inn_id: cmd.inn_id,
            item: Item::new(cmd.name.clone(), cmd.sell_in, cmd.quality),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_advance(&self, cmd: &AdvanceDay) -> Result<Vec<InnEvent>, DomainError> {
        self.ensure_inn_id(cmd.inn_id)?;
        cmd.expected_version.check(self.version)?;

        Ok(vec![InnEvent::DayAdvanced(DayAdvanced {
            inn_id: cmd.inn_id,
            day: self.day + 1,
            items: rules::next_day(&self.items),
            occurred_at: cmd.occurred_at,
        })])
    }
}
