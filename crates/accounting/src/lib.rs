//! Accounting module (double-entry vouchers).
//!
//! Pure domain logic only: no IO, no randomness, no export format concerns.

pub mod keyword_map;
pub mod voucher;

pub use keyword_map::{KeywordMap, KeywordRule};
pub use voucher::{LedgerLine, TaxDetail, Voucher, VoucherKind};
