use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, DomainResult, Money, ValueObject};

/// A GST rate in basis points (`1800` = 18%).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GstRate(u32);

impl ValueObject for GstRate {}

impl GstRate {
    pub const fn from_basis_points(bp: u32) -> Self {
        Self(bp)
    }

    pub const fn percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// The rate each of CGST and SGST charges on an intrastate supply.
    ///
    /// Exact for rates accepted by [`GstRate::validate`].
    pub const fn half(self) -> Self {
        Self(self.0 / 2)
    }

    /// Accepts even whole percentages from 0 to 100.
    ///
    /// Anything else has no exact CGST/SGST half, so the pair would not add
    /// up to the IGST amount on the same base.
    pub fn validate(self) -> DomainResult<()> {
        if self.0 % 200 != 0 || self.0 > 10_000 {
            return Err(DomainError::validation(format!(
                "GST rate {self}% must be an even whole percentage up to 100"
            )));
        }
        Ok(())
    }
}

/// Renders as a percentage without trailing zeros: `18`, `2.5`, `0.25`.
impl core::fmt::Display for GstRate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}")
        }
    }
}

/// Whether a supply stays inside the home state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyKind {
    /// Same state: CGST + SGST.
    Intrastate,
    /// Different states: IGST.
    Interstate,
}

impl SupplyKind {
    pub fn between(home_state: &str, counterparty_state: &str) -> Self {
        if home_state == counterparty_state {
            SupplyKind::Intrastate
        } else {
            SupplyKind::Interstate
        }
    }

    pub fn is_interstate(self) -> bool {
        self == SupplyKind::Interstate
    }
}

/// GST component, as written to `TAXTYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxType {
    Igst,
    Cgst,
    Sgst,
}

impl TaxType {
    pub fn as_str(self) -> &'static str {
        match self {
            TaxType::Igst => "IGST",
            TaxType::Cgst => "CGST",
            TaxType::Sgst => "SGST",
        }
    }
}

impl core::fmt::Display for TaxType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tax posting derived from a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxComponent {
    pub tax_type: TaxType,
    pub rate: GstRate,
    pub amount: Money,
}

/// Result of [`compute_gst`]: exactly one of IGST or the CGST/SGST pair is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstBreakdown {
    pub supply: SupplyKind,
    pub rate: GstRate,
    pub igst: Money,
    pub cgst: Money,
    pub sgst: Money,
}

impl ValueObject for GstBreakdown {}

impl GstBreakdown {
    pub fn total(&self) -> Money {
        self.igst + self.cgst + self.sgst
    }

    /// The postings this breakdown produces, in ledger order.
    pub fn components(&self) -> Vec<TaxComponent> {
        match self.supply {
            SupplyKind::Interstate => vec![TaxComponent {
                tax_type: TaxType::Igst,
                rate: self.rate,
                amount: self.igst,
            }],
            SupplyKind::Intrastate => vec![
                TaxComponent {
                    tax_type: TaxType::Cgst,
                    rate: self.rate.half(),
                    amount: self.cgst,
                },
                TaxComponent {
                    tax_type: TaxType::Sgst,
                    rate: self.rate.half(),
                    amount: self.sgst,
                },
            ],
        }
    }
}

/// Computes GST on `base` at `rate`.
///
/// Interstate: `igst = base * rate / 100`. Intrastate: `cgst = sgst = base * rate / 200`.
/// Each component is rounded half-to-even to the paisa. For a validated rate on
/// a whole-rupee base every component is exact and the CGST/SGST pair sums to
/// the IGST amount. Other inputs still compute, but the pair may land one
/// paisa away from IGST.
pub fn compute_gst(base: Money, rate: GstRate, supply: SupplyKind) -> GstBreakdown {
    let bp = rate.basis_points() as i64;
    match supply {
        SupplyKind::Interstate => GstBreakdown {
            supply,
            rate,
            igst: base.mul_ratio(bp, 10_000),
            cgst: Money::ZERO,
            sgst: Money::ZERO,
        },
        SupplyKind::Intrastate => {
            let half = base.mul_ratio(bp, 20_000);
            GstBreakdown {
                supply,
                rate,
                igst: Money::ZERO,
                cgst: half,
                sgst: half,
            }
        }
    }
}
