use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One tradeable good.
///
/// The category is resolved from the name at construction and is not part of
/// the serialized form; deserializing recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemFields")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    #[serde(skip_serializing)]
    category: Category,
}

#[derive(Deserialize)]
struct ItemFields {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemFields> for Item {
    fn from(fields: ItemFields) -> Self {
        Item::new(fields.name, fields.sell_in, fields.quality)
    }
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let category = Category::of(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_sell_in(&mut self, sell_in: i32) {
        self.sell_in = sell_in;
    }

    pub fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, SULFURAS};

    #[test]
    fn new_resolves_category_from_name() {
        assert_eq!(Item::new(SULFURAS, 0, 80).category(), Category::Legendary);
        assert_eq!(Item::new(AGED_BRIE, 2, 0).category(), Category::AgingPositive);
        assert_eq!(
            Item::new("Elixir of the Mongoose", 5, 7).category(),
            Category::Ordinary
        );
    }

    #[test]
    fn out_of_range_values_are_accepted_at_construction() {
        let item = Item::new("Cursed Ring", -3, 51);
        assert_eq!(item.sell_in(), -3);
        assert_eq!(item.quality(), 51);
    }

    #[test]
    fn setters_overwrite_fields() {
        let mut item = Item::new("Elixir of the Mongoose", 5, 7);
        item.set_sell_in(1);
        item.set_quality(2);
        assert_eq!((item.sell_in(), item.quality()), (1, 2));
        assert_eq!(item.name(), "Elixir of the Mongoose");
    }

    #[test]
    fn display_lists_name_sell_in_and_quality() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn serialized_form_omits_category() {
        let json = serde_json::to_value(Item::new(AGED_BRIE, 2, 0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sell_in": 2, "quality": 0 })
        );
    }

    #[test]
    fn deserializing_recomputes_category() {
        let item: Item = serde_json::from_str(
            r#"{ "name": "Sulfuras, Hand of Ragnaros", "sell_in": -1, "quality": 80 }"#,
        )
        .unwrap();
        assert_eq!(item.category(), Category::Legendary);
        assert_eq!(item, Item::new(SULFURAS, -1, 80));
    }
}
