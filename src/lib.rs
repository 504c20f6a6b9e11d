//! datatable - an interactive table for the terminal.
//!
//! Displays rows of scalar values under a column schema, with per-row
//! details expansion, multi-row selection with bulk delete, and inline cell
//! editing. The host owns the rows; the [`ui::DataTable`] widget reports
//! every change as a fresh collection.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod table;
pub mod ui;
