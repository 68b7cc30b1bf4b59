//! Built-in company profiles.

mod services;
mod trading;

pub use services::services;
pub use trading::trading;

use chrono::NaiveDate;

use tallygen_core::{DomainError, DomainResult};

use crate::profile::CompanyProfile;

/// Names accepted by [`by_name`].
pub const BUILT_IN: [&str; 2] = ["trading", "services"];

pub fn by_name(name: &str) -> DomainResult<CompanyProfile> {
    match name {
        "trading" => trading(),
        "services" => services(),
        other => Err(DomainError::not_found(format!(
            "profile {other:?} (expected one of {BUILT_IN:?})"
        ))),
    }
}

fn date(y: i32, m: u32, d: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation(format!("invalid date {y}-{m}-{d}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_built_in_names() {
        assert_eq!(by_name("trading").unwrap().company_name, "Test Trading Company");
        assert_eq!(by_name("services").unwrap().company_name, "Test Services Company");
    }

    #[test]
    fn unknown_name_is_not_found() {
        assert!(matches!(by_name("retail"), Err(DomainError::NotFound(_))));
    }
}
