//! Catalog domain module (stock items and services).
//!
//! Each entry carries the classification code (HSN or SAC) and the GST rate
//! that sales and purchase vouchers are tagged and taxed with.

pub mod catalog;

pub use catalog::{CatalogEntry, ClassificationCode};
