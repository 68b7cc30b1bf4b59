//! Voucher generation engine.
//!
//! One engine, parameterized by a [`CompanyProfile`]: the calendar decides
//! which days get vouchers, the assembler decides how many and of which kind,
//! and the builders produce each balanced voucher from the profile's reference
//! data and the session's random source.

pub mod assembler;
pub mod builders;
pub mod calendar;
pub mod profile;
pub mod profiles;
pub mod session;

pub use assembler::{Assembly, DocumentAssembler, GenerationSummary};
pub use calendar::{BusinessCalendar, BusinessDays};
pub use profile::{
    CompanyProfile, ContraPolicy, DateWindow, JournalPolicy, JournalTemplate, PaymentEntry,
    PurchasePolicy, ReceiptEntry, ReceiptPolicy, SalesPolicy, VendorBill, VoucherMix,
};
pub use session::{GenerationSession, VoucherCounters};
