//! Core types for the bdays birthday tracker.
//!
//! Everything here is pure: callers pass in "today" explicitly and get the
//! same answer for the same inputs.
//! - `anniversary`, `offset` and `grid` form the recurring date engine
//! - `birthday` and `category` describe records exchanged with the API
//! - `overview` and `stats` back the list and dashboard views

pub mod anniversary;
pub mod birthday;
pub mod category;
pub mod config;
pub mod error;
pub mod grid;
pub mod offset;
pub mod overview;
pub mod stats;

pub use anniversary::{AnniversaryDate, days_in_month, days_in_month_number};
pub use birthday::{Birthday, BirthdayInput};
pub use category::{Category, CategoryFilter};
pub use error::{BdaysError, BdaysResult, InvalidDateError};
pub use grid::{CalendarGrid, DisplayedMonth, GridDay, build_month_grid};
pub use offset::{next_occurrence_offset, signed_offset};
