//! Parties domain module (customers and suppliers).
//!
//! Counterparty reference data plus the GST registration rules needed to
//! decide whether a supply is intrastate or interstate.

pub mod gstin;
pub mod party;

pub use gstin::{Gstin, state_code};
pub use party::{Party, PartyKind};
