//! Food items and where they are stored.
//!
//! A [`FoodItem`] carries the fields every stored item shares (name, use-by
//! date, frozen-on date, optional category) plus a [`Location`] saying
//! whether it sits on a fridge shelf or somewhere in a freezer.

use crate::core::date::{CalendarDate, Clock};
use crate::error::ItemError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category, selected from a numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Menu entry 1.
    Vegetable,
    /// Menu entry 2.
    Fruit,
    /// Menu entry 3.
    Milk,
    /// Menu entry 4.
    Meat,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 4] = [Self::Vegetable, Self::Fruit, Self::Milk, Self::Meat];

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetable => "vegetable",
            Self::Fruit => "fruit",
            Self::Milk => "milk",
            Self::Meat => "meat",
        }
    }

    /// Capitalized menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vegetable => "Vegetable",
            Self::Fruit => "Fruit",
            Self::Milk => "Milk",
            Self::Meat => "Meat",
        }
    }

    /// Looks up a category by its 1-based menu number.
    #[must_use]
    pub const fn from_menu_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Vegetable),
            2 => Some(Self::Fruit),
            3 => Some(Self::Milk),
            4 => Some(Self::Meat),
            _ => None,
        }
    }

    /// The 1-based menu number.
    #[must_use]
    pub const fn menu_number(self) -> u32 {
        match self {
            Self::Vegetable => 1,
            Self::Fruit => 2,
            Self::Milk => 3,
            Self::Meat => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of storage, without the placement details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// A fridge shelf.
    Fridge,
    /// A freezer position.
    Freezer,
}

/// Where an item is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "storage", rename_all = "lowercase")]
pub enum Location {
    /// On a numbered shelf of a numbered fridge. Shelves hold a limited
    /// number of items (see [`crate::inventory::SHELF_CAPACITY`]).
    Fridge {
        /// Fridge unit, starting at 1.
        fridge_number: u32,
        /// Shelf within the fridge, starting at 1.
        shelf_number: u32,
    },
    /// Anywhere in a freezer, described freely.
    Freezer {
        /// Free-form position, e.g. "top drawer".
        position: String,
    },
}

impl Location {
    /// A fridge shelf.
    #[must_use]
    pub const fn fridge(fridge_number: u32, shelf_number: u32) -> Self {
        Self::Fridge {
            fridge_number,
            shelf_number,
        }
    }

    /// A freezer position.
    #[must_use]
    pub fn freezer(position: impl Into<String>) -> Self {
        Self::Freezer {
            position: position.into(),
        }
    }

    /// The storage kind.
    #[must_use]
    pub const fn kind(&self) -> StorageKind {
        match self {
            Self::Fridge { .. } => StorageKind::Fridge,
            Self::Freezer { .. } => StorageKind::Freezer,
        }
    }
}

/// A perishable item tracked by the inventory.
///
/// Items are immutable once built. `frozen_on` is fixed at construction.
///
/// # Examples
///
/// ```
/// use larder::core::{CalendarDate, Category, FoodItem, Location};
///
/// let item = FoodItem::new_on(
///     "spinach",
///     "2025-02-01",
///     Some(Category::Vegetable),
///     Location::fridge(1, 2),
///     CalendarDate::new(2025, 1, 20),
/// )
/// .unwrap();
/// assert_eq!(item.fridge_slot(), Some((1, 2)));
/// assert_eq!(item.frozen_on().to_string(), "2025-1-20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodItem {
    name: String,
    use_by: String,
    frozen_on: CalendarDate,
    category: Option<Category>,
    location: Location,
}

impl FoodItem {
    /// Creates an item frozen on today's local date.
    ///
    /// # Errors
    ///
    /// See [`FoodItem::new_on`].
    pub fn new(
        name: impl Into<String>,
        use_by: impl Into<String>,
        category: Option<Category>,
        location: Location,
    ) -> Result<Self, ItemError> {
        Self::new_on(name, use_by, category, location, CalendarDate::today())
    }

    /// Creates an item frozen on the clock's current date.
    ///
    /// # Errors
    ///
    /// See [`FoodItem::new_on`].
    pub fn new_with_clock(
        name: impl Into<String>,
        use_by: impl Into<String>,
        category: Option<Category>,
        location: Location,
        clock: &dyn Clock,
    ) -> Result<Self, ItemError> {
        Self::new_on(name, use_by, category, location, clock.today())
    }

    /// Creates an item with an explicit frozen-on date.
    ///
    /// The use-by date is stored verbatim; its format is validated upstream.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError`] if the name or use-by date is blank, or a
    /// fridge location uses fridge or shelf number zero.
    pub fn new_on(
        name: impl Into<String>,
        use_by: impl Into<String>,
        category: Option<Category>,
        location: Location,
        frozen_on: CalendarDate,
    ) -> Result<Self, ItemError> {
        let name = name.into();
        let use_by = use_by.into();

        if name.trim().is_empty() {
            return Err(ItemError::EmptyName);
        }
        if use_by.trim().is_empty() {
            return Err(ItemError::EmptyUseBy);
        }
        if let Location::Fridge {
            fridge_number,
            shelf_number,
        } = location
        {
            if fridge_number == 0 {
                return Err(ItemError::ZeroFridgeNumber);
            }
            if shelf_number == 0 {
                return Err(ItemError::ZeroShelfNumber);
            }
        }

        Ok(Self {
            name,
            use_by,
            frozen_on,
            category,
            location,
        })
    }

    /// Item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Use-by date exactly as supplied.
    #[must_use]
    pub fn use_by(&self) -> &str {
        &self.use_by
    }

    /// The use-by date parsed as `int-int-int`, if it parses.
    #[must_use]
    pub fn use_by_date(&self) -> Option<CalendarDate> {
        CalendarDate::parse(&self.use_by)
    }

    /// Date the item was recorded.
    #[must_use]
    pub const fn frozen_on(&self) -> CalendarDate {
        self.frozen_on
    }

    /// Category, if one was chosen.
    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Storage location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// `(fridge_number, shelf_number)` for fridge items.
    #[must_use]
    pub const fn fridge_slot(&self) -> Option<(u32, u32)> {
        match self.location {
            Location::Fridge {
                fridge_number,
                shelf_number,
            } => Some((fridge_number, shelf_number)),
            Location::Freezer { .. } => None,
        }
    }

    /// Freezer position for freezer items.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        match &self.location {
            Location::Freezer { position } => Some(position),
            Location::Fridge { .. } => None,
        }
    }

    /// Returns `true` if the use-by date is strictly before `today`.
    ///
    /// An unparseable use-by date never counts as expired.
    #[must_use]
    pub fn is_expired(&self, today: CalendarDate) -> bool {
        self.use_by_date().is_some_and(|date| date.is_before(today))
    }

    /// A structured record of the fields relevant to this item's variant.
    #[must_use]
    pub fn details(&self) -> ItemDetails<'_> {
        ItemDetails {
            name: &self.name,
            use_by: &self.use_by,
            frozen_on: self.frozen_on.to_string(),
            category: self.category,
            location: &self.location,
        }
    }
}

/// Renderable view of a [`FoodItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetails<'a> {
    /// Item name.
    pub name: &'a str,
    /// Use-by date as supplied.
    pub use_by: &'a str,
    /// Frozen-on date, unpadded `Y-M-D`.
    pub frozen_on: String,
    /// Category, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Storage placement.
    #[serde(flatten)]
    pub location: &'a Location,
}

impl ItemDetails<'_> {
    /// Labelled values in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("Name", self.name.to_string()),
            ("Use By", self.use_by.to_string()),
            ("Frozen On", self.frozen_on.clone()),
        ];
        if let Some(category) = self.category {
            fields.push(("Category", category.to_string()));
        }
        match self.location {
            Location::Fridge {
                fridge_number,
                shelf_number,
            } => {
                fields.push(("Fridge Number", fridge_number.to_string()));
                fields.push(("Shelf Number", shelf_number.to_string()));
            }
            Location::Freezer { position } => {
                fields.push(("Position", position.clone()));
            }
        }
        fields
    }
}
