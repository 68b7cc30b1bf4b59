//! Company profile: everything that differs between generated companies.
//!
//! A profile bundles the static reference data (parties, catalog, banks,
//! expense tables) with the numeric knobs (daily volume, voucher mix, amount
//! ranges). The engine itself holds no company-specific constants.

use core::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use tallygen_accounting::{KeywordMap, VoucherKind};
use tallygen_core::{DomainError, DomainResult, Money};
use tallygen_gst::GstRate;
use tallygen_parties::{Gstin, Party};
use tallygen_products::CatalogEntry;

use crate::calendar::BusinessCalendar;

/// Largest amount, in rupees, any single drawn or computed line may carry.
pub const MAX_LINE_RUPEES: i64 = 1_000_000_000_000;

/// Generation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub excluded_weekday: Weekday,
}

impl DateWindow {
    pub fn calendar(&self) -> DomainResult<BusinessCalendar> {
        BusinessCalendar::new(self.start, self.end, self.excluded_weekday)
    }
}

/// Relative weights of the six voucher kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherMix {
    pub sales: u32,
    pub purchase: u32,
    pub payment: u32,
    pub receipt: u32,
    pub contra: u32,
    pub journal: u32,
}

impl VoucherMix {
    pub fn weight(&self, kind: VoucherKind) -> u32 {
        match kind {
            VoucherKind::Sales => self.sales,
            VoucherKind::Purchase => self.purchase,
            VoucherKind::Payment => self.payment,
            VoucherKind::Receipt => self.receipt,
            VoucherKind::Contra => self.contra,
            VoucherKind::Journal => self.journal,
        }
    }

    /// Weights in [`VoucherKind::ALL`] order.
    pub fn weights(&self) -> [u32; 6] {
        VoucherKind::ALL.map(|kind| self.weight(kind))
    }
}

/// How sales vouchers are composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum SalesPolicy {
    /// Goods sold by quantity; revenue ledger depends on the supply kind.
    Itemized {
        items: RangeInclusive<usize>,
        quantity: RangeInclusive<i64>,
        local_ledger: String,
        interstate_ledger: String,
    },
    /// Services billed by the hour or as a fixed project fee.
    Engagement {
        services: RangeInclusive<usize>,
        hours: RangeInclusive<i64>,
        project_fee: RangeInclusive<i64>,
        /// Probability that a service line is billed by the hour.
        hourly_share: f64,
        income_ledgers: KeywordMap<String>,
    },
}

/// A vendor-specific bill template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorBill {
    pub expense_ledger: String,
    pub amount: RangeInclusive<i64>,
    pub narration: String,
}

/// How purchase vouchers are composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum PurchasePolicy {
    Itemized {
        items: RangeInclusive<usize>,
        quantity: RangeInclusive<i64>,
        local_ledger: String,
        interstate_ledger: String,
    },
    /// One expense line per bill, chosen by keyword on the vendor name.
    VendorBills { bills: KeywordMap<VendorBill> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub ledger: String,
    pub amount: RangeInclusive<i64>,
    pub narration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptEntry {
    pub ledger: String,
    pub narration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptPolicy {
    pub amount: RangeInclusive<i64>,
    pub entries: Vec<ReceiptEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContraPolicy {
    pub amount: RangeInclusive<i64>,
    pub cash_ledger: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalTemplate {
    pub category: String,
    pub narration: String,
    pub debit_ledger: String,
    pub credit_ledger: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalPolicy {
    pub amount: RangeInclusive<i64>,
    pub entries: Vec<JournalTemplate>,
}

/// A complete company description driving one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub gstin: Gstin,
    pub home_state: String,
    pub window: DateWindow,
    pub daily_vouchers: RangeInclusive<u32>,
    pub mix: VoucherMix,
    /// Rate applied where no catalog entry is involved (vendor bills).
    pub standard_gst_rate: GstRate,
    pub customers: Vec<Party>,
    pub suppliers: Vec<Party>,
    pub catalog: Vec<CatalogEntry>,
    pub banks: Vec<String>,
    pub sales: SalesPolicy,
    pub purchases: PurchasePolicy,
    pub payments: Vec<PaymentEntry>,
    pub receipts: ReceiptPolicy,
    pub contra: ContraPolicy,
    pub journals: JournalPolicy,
}

impl CompanyProfile {
    /// Fail fast on reference data that would produce degenerate output.
    pub fn validate(&self) -> DomainResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(DomainError::validation("company name cannot be empty"));
        }
        if !self.gstin.matches_state(&self.home_state) {
            return Err(DomainError::validation(format!(
                "company GSTIN {} does not belong to {}",
                self.gstin, self.home_state
            )));
        }
        self.window.calendar()?;

        non_empty_range(&self.daily_vouchers, "daily voucher count")?;
        if *self.daily_vouchers.start() == 0 {
            return Err(DomainError::validation("daily voucher count must be at least 1"));
        }
        if self.mix.weights().iter().all(|w| *w == 0) {
            return Err(DomainError::validation("voucher mix weights are all zero"));
        }

        non_empty("customers", &self.customers)?;
        non_empty("suppliers", &self.suppliers)?;
        non_empty("catalog", &self.catalog)?;
        non_empty("banks", &self.banks)?;
        for party in self.customers.iter().chain(&self.suppliers) {
            party.validate()?;
        }
        for entry in &self.catalog {
            entry.validate()?;
        }
        if self.standard_gst_rate.validate().is_err() {
            return Err(DomainError::validation(format!(
                "standard GST rate {}% must be an even whole percentage up to 100",
                self.standard_gst_rate
            )));
        }

        match &self.sales {
            SalesPolicy::Itemized { items, quantity, .. } => {
                self.sample_size(items, "sales items")?;
                positive_range(quantity, "sales quantity")?;
                self.line_amounts_fit(*quantity.end(), "sales quantity")?;
            }
            SalesPolicy::Engagement {
                services,
                hours,
                project_fee,
                hourly_share,
                income_ledgers,
            } => {
                self.sample_size(services, "services per invoice")?;
                positive_range(hours, "billable hours")?;
                self.line_amounts_fit(*hours.end(), "billable hours")?;
                positive_range(project_fee, "project fee")?;
                if !(0.0..=1.0).contains(hourly_share) {
                    return Err(DomainError::validation("hourly share must be within 0..=1"));
                }
                income_ledgers.validate()?;
            }
        }

        match &self.purchases {
            PurchasePolicy::Itemized { items, quantity, .. } => {
                self.sample_size(items, "purchase items")?;
                positive_range(quantity, "purchase quantity")?;
                self.line_amounts_fit(*quantity.end(), "purchase quantity")?;
            }
            PurchasePolicy::VendorBills { bills } => {
                bills.validate()?;
                for bill in bills.values() {
                    positive_range(&bill.amount, &bill.expense_ledger)?;
                }
            }
        }

        non_empty("payment entries", &self.payments)?;
        for entry in &self.payments {
            positive_range(&entry.amount, &entry.ledger)?;
        }
        non_empty("receipt entries", &self.receipts.entries)?;
        positive_range(&self.receipts.amount, "receipt amount")?;
        positive_range(&self.contra.amount, "contra amount")?;
        non_empty("journal entries", &self.journals.entries)?;
        positive_range(&self.journals.amount, "journal amount")?;

        Ok(())
    }

    /// Distinct-sample sizes must fit the catalog.
    fn sample_size(&self, range: &RangeInclusive<usize>, what: &str) -> DomainResult<()> {
        non_empty_range(range, what)?;
        if *range.start() == 0 || *range.end() > self.catalog.len() {
            return Err(DomainError::validation(format!(
                "{what} must be between 1 and the catalog size ({}), got {}..={}",
                self.catalog.len(),
                range.start(),
                range.end()
            )));
        }
        Ok(())
    }

    /// Every catalog rate times `multiplier` must stay within [`MAX_LINE_RUPEES`].
    fn line_amounts_fit(&self, multiplier: i64, what: &str) -> DomainResult<()> {
        let cap = Money::from_rupees(MAX_LINE_RUPEES);
        for entry in &self.catalog {
            match entry.rate.checked_mul(multiplier) {
                Some(amount) if amount <= cap => {}
                _ => {
                    return Err(DomainError::validation(format!(
                        "{what} up to {multiplier} at the rate of {:?} exceeds {MAX_LINE_RUPEES} rupees per line",
                        entry.name
                    )));
                }
            }
        }
        Ok(())
    }
}

fn non_empty<T>(what: &str, items: &[T]) -> DomainResult<()> {
    if items.is_empty() {
        return Err(DomainError::validation(format!("{what} cannot be empty")));
    }
    Ok(())
}

fn non_empty_range<T: PartialOrd + core::fmt::Display>(
    range: &RangeInclusive<T>,
    what: &str,
) -> DomainResult<()> {
    if range.start() > range.end() {
        return Err(DomainError::validation(format!(
            "{what} range is empty ({}..={})",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

fn positive_range(range: &RangeInclusive<i64>, what: &str) -> DomainResult<()> {
    non_empty_range(range, what)?;
    if *range.start() <= 0 || *range.end() > MAX_LINE_RUPEES {
        return Err(DomainError::validation(format!(
            "{what} range must be within 1..={MAX_LINE_RUPEES}, got {}..={}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}
