use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, DomainResult, Money, ValueObject};
use tallygen_gst::GstRate;

/// Tax classification of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scheme", content = "code", rename_all = "UPPERCASE")]
pub enum ClassificationCode {
    /// Harmonized System of Nomenclature code (goods).
    Hsn(String),
    /// Services Accounting Code (services).
    Sac(String),
}

impl ValueObject for ClassificationCode {}

impl ClassificationCode {
    /// Element name used in the export (`HSN` or `SAC`).
    pub fn scheme(&self) -> &'static str {
        match self {
            ClassificationCode::Hsn(_) => "HSN",
            ClassificationCode::Sac(_) => "SAC",
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ClassificationCode::Hsn(code) | ClassificationCode::Sac(code) => code,
        }
    }
}

/// A stock item or service that can be sold or purchased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub classification: ClassificationCode,
    /// Per-unit (or per-hour, for services) rate.
    pub rate: Money,
    pub gst_rate: GstRate,
}

impl ValueObject for CatalogEntry {}

impl CatalogEntry {
    pub fn stock_item(name: &str, hsn: &str, rate_rupees: i64, gst_percent: u32) -> Self {
        Self {
            name: name.to_string(),
            classification: ClassificationCode::Hsn(hsn.to_string()),
            rate: Money::from_rupees(rate_rupees),
            gst_rate: GstRate::percent(gst_percent),
        }
    }

    pub fn service(name: &str, sac: &str, rate_rupees: i64, gst_percent: u32) -> Self {
        Self {
            name: name.to_string(),
            classification: ClassificationCode::Sac(sac.to_string()),
            rate: Money::from_rupees(rate_rupees),
            gst_rate: GstRate::percent(gst_percent),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("catalog entry name cannot be empty"));
        }
        let code = self.classification.code();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "{} code {code:?} of {:?} must be numeric",
                self.classification.scheme(),
                self.name
            )));
        }
        if self.rate <= Money::ZERO || self.rate.paise() % 100 != 0 {
            return Err(DomainError::validation(format!(
                "rate of {:?} must be a positive whole number of rupees",
                self.name
            )));
        }
        if self.gst_rate.validate().is_err() {
            return Err(DomainError::validation(format!(
                "GST rate {}% of {:?} must be an even whole percentage up to 100",
                self.gst_rate, self.name
            )));
        }
        Ok(())
    }
}
