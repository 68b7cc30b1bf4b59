//! Goods-and-Services-Tax computation.
//!
//! Pure arithmetic: no reference data, no randomness. Callers decide the
//! supply kind from the parties involved.

pub mod gst;

pub use gst::{GstBreakdown, GstRate, SupplyKind, TaxComponent, TaxType, compute_gst};
