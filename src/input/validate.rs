//! Validators for prompt answers.

use crate::core::{CalendarDate, Category, StorageKind};
use crate::error::InputError;

/// Length of a `YYYY-MM-DD` date.
const DATE_LEN: usize = 10;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// 1. Add Item
    AddItem,
    /// 2. Remove Item
    RemoveItem,
    /// 3. Display Oldest Item
    ShowOldest,
    /// 4. Show All Expired Item Names
    ShowExpired,
    /// 5. Exit
    Exit,
}

impl MenuChoice {
    /// All entries in menu order.
    pub const ALL: [Self; 5] = [
        Self::AddItem,
        Self::RemoveItem,
        Self::ShowOldest,
        Self::ShowExpired,
        Self::Exit,
    ];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddItem => "Add Item",
            Self::RemoveItem => "Remove Item",
            Self::ShowOldest => "Display Oldest Item",
            Self::ShowExpired => "Show All Expired Item Names",
            Self::Exit => "Exit",
        }
    }

    /// 1-based menu number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::AddItem => 1,
            Self::RemoveItem => 2,
            Self::ShowOldest => 3,
            Self::ShowExpired => 4,
            Self::Exit => 5,
        }
    }
}

/// Checks a `YYYY-MM-DD` date.
///
/// The string must be exactly ten bytes and read as `int-int-int` with a
/// non-negative year, month 1-12 and day 1-31. Day bounds do not depend on
/// the month.
///
/// # Examples
///
/// ```
/// use larder::input::is_valid_date;
///
/// assert!(is_valid_date("2024-02-31"));
/// assert!(!is_valid_date("2024-2-3"));
/// assert!(!is_valid_date("2024-13-01"));
/// ```
#[must_use]
pub fn is_valid_date(date: &str) -> bool {
    if date.len() != DATE_LEN {
        return false;
    }
    CalendarDate::parse(date).is_some_and(|d| {
        d.year() >= 0 && (1..=12).contains(&d.month()) && (1..=31).contains(&d.day())
    })
}

/// Validates a use-by date and returns it trimmed.
pub fn parse_date(input: &str) -> Result<String, InputError> {
    let date = input.trim();
    if is_valid_date(date) {
        Ok(date.to_string())
    } else {
        Err(InputError::InvalidDate {
            input: input.to_string(),
        })
    }
}

/// Validates a date and parses it into a [`CalendarDate`].
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate, InputError> {
    let date = parse_date(input)?;
    CalendarDate::parse(&date).ok_or_else(|| InputError::InvalidDate {
        input: input.to_string(),
    })
}

/// Accepts any non-blank answer and returns it trimmed.
pub fn parse_text(input: &str, field: &'static str) -> Result<String, InputError> {
    let text = input.trim();
    if text.is_empty() {
        Err(InputError::Blank { field })
    } else {
        Ok(text.to_string())
    }
}

/// Returns `true` for a non-empty string of ASCII digits.
#[must_use]
pub fn is_integer(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a non-negative decimal integer.
pub fn parse_integer(input: &str) -> Result<u32, InputError> {
    let trimmed = input.trim();
    if !is_integer(trimmed) {
        return Err(InputError::NotAnInteger {
            input: input.to_string(),
        });
    }
    trimmed.parse().map_err(|_| InputError::OutOfRange {
        input: input.to_string(),
        min: 0,
        max: u32::MAX,
    })
}

/// Parses a positive decimal integer (fridge and shelf numbers).
pub fn parse_positive(input: &str) -> Result<u32, InputError> {
    match parse_integer(input)? {
        0 => Err(InputError::OutOfRange {
            input: input.to_string(),
            min: 1,
            max: u32::MAX,
        }),
        n => Ok(n),
    }
}

/// Maps a category menu number (1-4) to a [`Category`].
pub fn parse_category(input: &str) -> Result<Category, InputError> {
    parse_integer(input)
        .ok()
        .and_then(Category::from_menu_number)
        .ok_or_else(|| InputError::UnknownCategory {
            input: input.to_string(),
        })
}

/// Maps a storage menu number (1 fridge, 2 freezer) to a [`StorageKind`].
pub fn parse_storage(input: &str) -> Result<StorageKind, InputError> {
    match parse_integer(input) {
        Ok(1) => Ok(StorageKind::Fridge),
        Ok(2) => Ok(StorageKind::Freezer),
        _ => Err(InputError::UnknownStorage {
            input: input.to_string(),
        }),
    }
}

/// Maps a main menu number (1-5) to a [`MenuChoice`].
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputError> {
    let number = parse_integer(input).map_err(|_| InputError::InvalidChoice {
        input: input.to_string(),
    })?;
    MenuChoice::ALL
        .into_iter()
        .find(|choice| choice.number() == number)
        .ok_or_else(|| InputError::InvalidChoice {
            input: input.to_string(),
        })
}
