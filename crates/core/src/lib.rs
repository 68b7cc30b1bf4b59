//! `tallygen-core`: shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error model,
//! fixed-point money and the value-object marker.

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{Money, div_round_half_even};
pub use value_object::ValueObject;
