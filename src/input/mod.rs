//! Input validation for Larder.
//!
//! Pure functions that turn raw answers typed at the interactive prompt
//! into typed values. Every function trims its input first and none of them
//! touch global state.

pub mod validate;

pub use validate::{
    MenuChoice, is_integer, is_valid_date, parse_calendar_date, parse_category, parse_date,
    parse_integer, parse_menu_choice, parse_positive, parse_storage, parse_text,
};
