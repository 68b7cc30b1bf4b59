use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, DomainResult, ValueObject};

use crate::gstin::Gstin;

/// Party kind: customer (sundry debtor) or supplier (sundry creditor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    Customer,
    Supplier,
}

/// A counterparty: its ledger name, home state and GST registration.
///
/// The name doubles as the receivable/payable ledger account in vouchers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    kind: PartyKind,
    name: String,
    state: String,
    gstin: Gstin,
}

impl ValueObject for Party {}

impl Party {
    pub fn new(
        kind: PartyKind,
        name: impl Into<String>,
        state: impl Into<String>,
        gstin: Gstin,
    ) -> DomainResult<Self> {
        let party = Self {
            kind,
            name: name.into(),
            state: state.into(),
            gstin,
        };
        party.validate()?;
        Ok(party)
    }

    /// Shorthand for built-in reference tables.
    pub fn customer(name: &str, state: &str, gstin: &str) -> DomainResult<Self> {
        Self::new(PartyKind::Customer, name, state, Gstin::parse(gstin)?)
    }

    /// Shorthand for built-in reference tables.
    pub fn supplier(name: &str, state: &str, gstin: &str) -> DomainResult<Self> {
        Self::new(PartyKind::Supplier, name, state, Gstin::parse(gstin)?)
    }

    pub fn kind(&self) -> PartyKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn gstin(&self) -> &Gstin {
        &self.gstin
    }

    /// Whether a supply between `home_state` and this party crosses a state border.
    pub fn is_interstate_from(&self, home_state: &str) -> bool {
        self.state != home_state
    }

    /// Re-checks the invariants `new` enforces.
    ///
    /// Deserialized parties bypass `new`, so profile validation calls this.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("party name cannot be empty"));
        }
        if self.state.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "party {:?} has no state",
                self.name
            )));
        }
        if !self.gstin.matches_state(&self.state) {
            return Err(DomainError::validation(format!(
                "GSTIN {} of {:?} does not belong to {}",
                self.gstin, self.name, self.state
            )));
        }
        Ok(())
    }
}
