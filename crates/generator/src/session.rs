//! Per-run generation state: the random source and the voucher counters.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tallygen_accounting::{Voucher, VoucherKind};
use tallygen_core::DomainResult;

use crate::builders;
use crate::profile::CompanyProfile;

/// Next voucher number per kind; every kind starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoucherCounters {
    next: [u32; 6],
}

impl Default for VoucherCounters {
    fn default() -> Self {
        Self { next: [1; 6] }
    }
}

impl VoucherCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next number for `kind`.
    pub fn next(&mut self, kind: VoucherKind) -> u32 {
        let slot = &mut self.next[kind.index()];
        let number = *slot;
        *slot += 1;
        number
    }

}

/// One generation run.
///
/// Owns the only random source used while generating; builders borrow it per
/// call. Seed it for reproducible output.
#[derive(Debug)]
pub struct GenerationSession<R = StdRng> {
    rng: R,
    seed: Option<u64>,
    counters: VoucherCounters,
}

impl GenerationSession<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
            counters: VoucherCounters::new(),
        }
    }

    /// Picks a fresh seed from OS entropy; the seed stays readable via [`Self::seed`].
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random::<u64>())
    }
}

impl<R: Rng> GenerationSession<R> {
    /// Wraps an already-constructed generator (e.g. a mock in tests).
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            seed: None,
            counters: VoucherCounters::new(),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Builds the next voucher of `kind`, consuming one number from its sequence.
    pub fn build(
        &mut self,
        profile: &CompanyProfile,
        kind: VoucherKind,
        date: NaiveDate,
    ) -> DomainResult<Voucher> {
        let number = self.counters.next(kind);
        builders::build_voucher(kind, profile, date, number, &mut self.rng)
    }
}
