//! Core library for Wind Prices, a browser for the WIND server price list.
//! Loads the generated catalog document, then filters, sorts, paginates and
//! summarizes it; the economic code travels along as reference tables.

pub mod config;
pub mod document;
pub mod error;
mod gui;
pub mod item;
pub mod normalize;
pub mod policy;
pub mod projection;
pub mod statics;
pub mod stats;
pub mod store;

pub use config::BrowserConfig;
pub use document::{CatalogDocument, CatalogSource, DocumentFormat, FileSource, TextSource};
pub use error::CatalogError;
pub use gui::run_gui;
pub use item::Item;
pub use projection::{PriceMode, RowView};
pub use stats::CatalogStats;
pub use store::{CatalogStore, LoadState, SortMode};
