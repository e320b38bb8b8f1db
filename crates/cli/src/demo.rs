use gildedrose_core::AggregateId;
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASS, Inn, InnId, Item, SULFURAS};

/// The inn's opening stock.
pub fn stocked_inn() -> Inn {
    let mut inn = Inn::new(InnId::new(AggregateId::new()));
    inn.set_item(Item::new("+5 Dexterity Vest", 10, 20));
    inn.set_item(Item::new(AGED_BRIE, 2, 0));
    inn.set_item(Item::new("Elixir of the Mongoose", 5, 7));
    inn.set_item(Item::new(SULFURAS, 0, 80));
    inn.set_item(Item::new(BACKSTAGE_PASS, 15, 20));
    inn.set_item(Item::new("Conjured Mana Cake", 3, 6));
    inn
}
