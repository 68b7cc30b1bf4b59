use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tallygen_core::{DomainError, DomainResult, Money, ValueObject};
use tallygen_gst::{GstRate, TaxType};
use tallygen_products::ClassificationCode;

/// Voucher type (determines the builder and the per-kind number sequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VoucherKind {
    Sales,
    Purchase,
    Payment,
    Receipt,
    Contra,
    Journal,
}

impl VoucherKind {
    pub const ALL: [VoucherKind; 6] = [
        VoucherKind::Sales,
        VoucherKind::Purchase,
        VoucherKind::Payment,
        VoucherKind::Receipt,
        VoucherKind::Contra,
        VoucherKind::Journal,
    ];

    /// Name written to `VOUCHERTYPENAME`.
    pub fn as_str(self) -> &'static str {
        match self {
            VoucherKind::Sales => "Sales",
            VoucherKind::Purchase => "Purchase",
            VoucherKind::Payment => "Payment",
            VoucherKind::Receipt => "Receipt",
            VoucherKind::Contra => "Contra",
            VoucherKind::Journal => "Journal",
        }
    }

    /// Position in [`VoucherKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for VoucherKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GST tagging on a tax posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetail {
    pub tax_type: TaxType,
    pub rate: GstRate,
}

/// One posting within a voucher (immutable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    pub ledger: String,
    /// Positive = debit, negative = credit.
    pub amount: Money,
    pub tax: Option<TaxDetail>,
    pub classification: Option<ClassificationCode>,
}

impl ValueObject for LedgerLine {}

impl LedgerLine {
    pub fn debit(ledger: impl Into<String>, amount: Money) -> Self {
        Self {
            ledger: ledger.into(),
            amount: amount.abs(),
            tax: None,
            classification: None,
        }
    }

    pub fn credit(ledger: impl Into<String>, amount: Money) -> Self {
        Self {
            ledger: ledger.into(),
            amount: -amount.abs(),
            tax: None,
            classification: None,
        }
    }

    pub fn with_tax(mut self, tax_type: TaxType, rate: GstRate) -> Self {
        self.tax = Some(TaxDetail { tax_type, rate });
        self
    }

    pub fn with_classification(mut self, code: ClassificationCode) -> Self {
        self.classification = Some(code);
        self
    }

    pub fn is_debit(&self) -> bool {
        self.amount > Money::ZERO
    }
}

/// A balanced accounting transaction.
///
/// Construction enforces the double-entry invariant: the signed line amounts
/// sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    kind: VoucherKind,
    date: NaiveDate,
    number: u32,
    narration: Option<String>,
    lines: Vec<LedgerLine>,
}

impl Voucher {
    pub fn new(
        kind: VoucherKind,
        date: NaiveDate,
        number: u32,
        narration: impl Into<String>,
        lines: Vec<LedgerLine>,
    ) -> DomainResult<Self> {
        if number == 0 {
            return Err(DomainError::validation("voucher numbers start at 1"));
        }
        if lines.len() < 2 {
            return Err(DomainError::validation(
                "voucher must have at least one debit and one credit line",
            ));
        }
        if let Some(line) = lines.iter().find(|l| l.amount.is_zero()) {
            return Err(DomainError::validation(format!(
                "ledger line {:?} has a zero amount",
                line.ledger
            )));
        }

        let balance: Money = lines.iter().map(|l| l.amount).sum();
        if !balance.is_zero() {
            return Err(DomainError::invariant(format!(
                "debits must equal credits ({kind} #{number} is off by {balance})"
            )));
        }

        let narration = narration.into();
        Ok(Self {
            kind,
            date,
            number,
            narration: (!narration.is_empty()).then_some(narration),
            lines,
        })
    }

    pub fn kind(&self) -> VoucherKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    pub fn lines(&self) -> &[LedgerLine] {
        &self.lines
    }

    /// Sum of debit amounts (equal to the magnitude of the credit sum).
    pub fn total(&self) -> Money {
        self.lines.iter().filter(|l| l.is_debit()).map(|l| l.amount).sum()
    }

    pub fn lines_for(&self, ledger: &str) -> impl Iterator<Item = &LedgerLine> {
        self.lines.iter().filter(move |l| l.ledger == ledger)
    }
}
