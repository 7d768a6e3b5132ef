//! In-memory inventory store.

use crate::core::{CalendarDate, FoodItem};
use crate::inventory::SHELF_CAPACITY;
use tracing::debug;

/// Outcome of [`Inventory::find_oldest_expired_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OldestExpired<'a> {
    /// The inventory holds no items.
    EmptyInventory,
    /// Items exist but none is expired.
    NoneExpired,
    /// The expired item with the smallest use-by string.
    Found(&'a FoodItem),
}

impl<'a> OldestExpired<'a> {
    /// The found item, if any.
    #[must_use]
    pub const fn into_found(self) -> Option<&'a FoodItem> {
        match self {
            Self::Found(item) => Some(item),
            Self::EmptyInventory | Self::NoneExpired => None,
        }
    }
}

/// Outcome of [`Inventory::list_expired_item_names`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpiredNames<'a> {
    /// The inventory holds no items.
    EmptyInventory,
    /// Names of expired items in insertion order, possibly none.
    Names(Vec<&'a str>),
}

/// Ordered collection of food items.
///
/// No operation fails: a missing name or an empty store is reported through
/// return values.
///
/// # Examples
///
/// ```
/// use larder::core::{CalendarDate, FoodItem, Location};
/// use larder::inventory::{Inventory, OldestExpired};
///
/// let today = CalendarDate::new(2025, 1, 15);
/// let mut inventory = Inventory::new();
/// inventory.add_item(
///     FoodItem::new_on("cheese", "2025-01-02", None, Location::fridge(1, 1), today).unwrap(),
/// );
///
/// match inventory.find_oldest_expired_item(today) {
///     OldestExpired::Found(item) => assert_eq!(item.name(), "cheese"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<FoodItem>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item, taking ownership of it.
    ///
    /// Neither duplicate names nor shelf capacity are checked here; callers
    /// consult [`Inventory::is_shelf_full`] before building a fridge item.
    pub fn add_item(&mut self, item: FoodItem) {
        debug!(name = item.name(), use_by = item.use_by(), "item added");
        self.items.push(item);
    }

    /// Removes the first item named exactly `name` and returns it.
    ///
    /// Returns `None` and leaves the store unchanged when no item matches.
    pub fn remove_item(&mut self, name: &str) -> Option<FoodItem> {
        let Some(index) = self.items.iter().position(|item| item.name() == name) else {
            debug!(name, "remove skipped, no such item");
            return None;
        };
        debug!(name, "item removed");
        Some(self.items.remove(index))
    }

    /// Number of fridge items on the given shelf.
    #[must_use]
    pub fn shelf_occupancy(&self, fridge_number: u32, shelf_number: u32) -> usize {
        self.items
            .iter()
            .filter(|item| item.fridge_slot() == Some((fridge_number, shelf_number)))
            .count()
    }

    /// Returns `true` once the shelf holds [`SHELF_CAPACITY`] fridge items.
    ///
    /// Freezer items never count towards a shelf.
    #[must_use]
    pub fn is_shelf_full(&self, fridge_number: u32, shelf_number: u32) -> bool {
        let full = self.shelf_occupancy(fridge_number, shelf_number) >= SHELF_CAPACITY;
        if full {
            debug!(fridge_number, shelf_number, "shelf full");
        }
        full
    }

    /// Finds the expired item with the lexicographically smallest use-by
    /// string.
    ///
    /// Expiry compares the parsed date with `today`; the choice among
    /// expired items compares the raw strings, so it agrees with date order
    /// only for zero-padded dates. Ties keep the earliest inserted item.
    #[must_use]
    pub fn find_oldest_expired_item(&self, today: CalendarDate) -> OldestExpired<'_> {
        if self.items.is_empty() {
            return OldestExpired::EmptyInventory;
        }

        let mut oldest: Option<&FoodItem> = None;
        for item in self.items.iter().filter(|item| item.is_expired(today)) {
            if oldest.is_none_or(|best| item.use_by() < best.use_by()) {
                oldest = Some(item);
            }
        }

        debug!(%today, found = oldest.map(FoodItem::name), "oldest expired lookup");
        oldest.map_or(OldestExpired::NoneExpired, OldestExpired::Found)
    }

    /// Names of all items whose use-by date is strictly before `today`, in
    /// insertion order.
    #[must_use]
    pub fn list_expired_item_names(&self, today: CalendarDate) -> ExpiredNames<'_> {
        if self.items.is_empty() {
            return ExpiredNames::EmptyInventory;
        }

        let names: Vec<&str> = self
            .items
            .iter()
            .filter(|item| item.is_expired(today))
            .map(FoodItem::name)
            .collect();
        debug!(%today, expired = names.len(), "expired names listed");
        ExpiredNames::Names(names)
    }

    /// First item named exactly `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FoodItem> {
        self.items.iter()
    }

    /// Number of items held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the inventory holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Releases every item.
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "inventory cleared");
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a FoodItem;
    type IntoIter = std::slice::Iter<'a, FoodItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Location};

    fn today() -> CalendarDate {
        CalendarDate::new(2025, 1, 15)
    }

    fn fridge(name: &str, use_by: &str, fridge: u32, shelf: u32) -> FoodItem {
        FoodItem::new_on(name, use_by, None, Location::fridge(fridge, shelf), today()).unwrap()
    }

    fn freezer(name: &str, use_by: &str) -> FoodItem {
        FoodItem::new_on(name, use_by, None, Location::freezer("drawer 1"), today()).unwrap()
    }

    #[test]
    fn test_add_and_remove() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("milk", "2025-01-20", 1, 1));
        inventory.add_item(fridge("eggs", "2025-01-25", 1, 2));
        assert_eq!(inventory.len(), 2);

        let removed = inventory.remove_item("milk").unwrap();
        assert_eq!(removed.name(), "milk");
        assert_eq!(inventory.len(), 1);
        assert!(inventory.get("milk").is_none());
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("milk", "2025-01-20", 1, 1));
        inventory.add_item(fridge("milk", "2025-01-30", 2, 1));

        inventory.remove_item("milk");
        let left = inventory.get("milk").unwrap();
        assert_eq!(left.use_by(), "2025-01-30");
    }

    #[test]
    fn test_remove_is_case_sensitive() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("Milk", "2025-01-20", 1, 1));
        assert!(inventory.remove_item("milk").is_none());
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let mut inventory = Inventory::new();
        assert!(inventory.remove_item("anything").is_none());
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_shelf_capacity() {
        let mut inventory = Inventory::new();
        assert!(!inventory.is_shelf_full(1, 1));
        inventory.add_item(fridge("a", "2025-02-01", 1, 1));
        assert!(!inventory.is_shelf_full(1, 1));
        inventory.add_item(fridge("b", "2025-02-01", 1, 1));
        assert!(inventory.is_shelf_full(1, 1));

        assert!(!inventory.is_shelf_full(1, 2));
        assert!(!inventory.is_shelf_full(2, 1));
    }

    #[test]
    fn test_shelf_ignores_freezer_items() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("a", "2025-02-01", 1, 1));
        inventory.add_item(freezer("b", "2025-02-01"));
        inventory.add_item(freezer("c", "2025-02-01"));
        assert_eq!(inventory.shelf_occupancy(1, 1), 1);
        assert!(!inventory.is_shelf_full(1, 1));
    }

    #[test]
    fn test_add_does_not_enforce_capacity() {
        let mut inventory = Inventory::new();
        for name in ["a", "b", "c"] {
            inventory.add_item(fridge(name, "2025-02-01", 1, 1));
        }
        assert_eq!(inventory.shelf_occupancy(1, 1), 3);
    }

    #[test]
    fn test_oldest_expired() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("recent", "2021-06-15", 1, 1));
        inventory.add_item(freezer("ancient", "2020-01-01"));
        inventory.add_item(fridge("fresh", "2030-01-01", 1, 2));

        assert_eq!(
            inventory
                .find_oldest_expired_item(today())
                .into_found()
                .map(FoodItem::name),
            Some("ancient")
        );
    }

    #[test]
    fn test_oldest_expired_tie_keeps_first() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("first", "2024-05-05", 1, 1));
        inventory.add_item(fridge("second", "2024-05-05", 1, 2));

        let OldestExpired::Found(item) = inventory.find_oldest_expired_item(today()) else {
            unreachable!("expected an expired item");
        };
        assert_eq!(item.name(), "first");
    }

    #[test]
    fn test_oldest_uses_string_order() {
        // "2024-10-01" sorts before "2024-9-01" as text
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("september", "2024-9-01", 1, 1));
        inventory.add_item(fridge("october", "2024-10-01", 1, 2));

        let OldestExpired::Found(item) = inventory.find_oldest_expired_item(today()) else {
            unreachable!("expected an expired item");
        };
        assert_eq!(item.name(), "october");
    }

    #[test]
    fn test_oldest_empty_and_none_expired() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.find_oldest_expired_item(today()),
            OldestExpired::EmptyInventory
        );

        inventory.add_item(fridge("fresh", "2025-01-15", 1, 1));
        assert_eq!(
            inventory.find_oldest_expired_item(today()),
            OldestExpired::NoneExpired
        );
    }

    #[test]
    fn test_list_expired_names_in_order() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("b", "2024-12-31", 1, 1));
        inventory.add_item(fridge("fresh", "2025-01-16", 1, 1));
        inventory.add_item(freezer("a", "2025-01-14"));

        assert_eq!(
            inventory.list_expired_item_names(today()),
            ExpiredNames::Names(vec!["b", "a"])
        );
    }

    #[test]
    fn test_list_expired_empty_vs_none() {
        let mut inventory = Inventory::new();
        assert_eq!(
            inventory.list_expired_item_names(today()),
            ExpiredNames::EmptyInventory
        );

        inventory.add_item(fridge("fresh", "2030-01-01", 1, 1));
        assert_eq!(
            inventory.list_expired_item_names(today()),
            ExpiredNames::Names(vec![])
        );
    }

    #[test]
    fn test_unparseable_use_by_never_expires() {
        let mut inventory = Inventory::new();
        inventory.add_item(fridge("odd", "someday", 1, 1));
        assert_eq!(
            inventory.find_oldest_expired_item(today()),
            OldestExpired::NoneExpired
        );
    }

    #[test]
    fn test_clear_and_iter() {
        let mut inventory = Inventory::new();
        inventory.add_item(
            FoodItem::new_on(
                "kale",
                "2025-01-30",
                Some(Category::Vegetable),
                Location::fridge(1, 1),
                today(),
            )
            .unwrap(),
        );
        inventory.add_item(freezer("fish", "2025-05-01"));

        let names: Vec<&str> = inventory.iter().map(FoodItem::name).collect();
        assert_eq!(names, vec!["kale", "fish"]);

        inventory.clear();
        assert!(inventory.is_empty());
    }
}
