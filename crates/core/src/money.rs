//! Fixed-point money in paise (1/100 rupee).

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Signed monetary amount in the smallest currency unit (paise).
///
/// Ledger lines use the sign for the posting side: debits are positive,
/// credits are negative.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `None` when the amount does not fit in `i64` paise.
    pub const fn checked_from_rupees(rupees: i64) -> Option<Self> {
        match rupees.checked_mul(100) {
            Some(paise) => Some(Self(paise)),
            None => None,
        }
    }

    pub const fn checked_add(self, rhs: Money) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(paise) => Some(Self(paise)),
            None => None,
        }
    }

    pub const fn checked_mul(self, quantity: i64) -> Option<Self> {
        match self.0.checked_mul(quantity) {
            Some(paise) => Some(Self(paise)),
            None => None,
        }
    }

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// `self * numerator / denominator`, rounded half-to-even to the paisa.
    ///
    /// Intermediate arithmetic is done in `i128`, so any `i64` amount times a
    /// basis-point rate cannot overflow. `denominator` must be positive.
    pub fn mul_ratio(self, numerator: i64, denominator: i64) -> Self {
        let scaled = div_round_half_even(
            self.0 as i128 * numerator as i128,
            denominator as i128,
        );
        Self(scaled as i64)
    }
}

/// Integer division rounding half-to-even (banker's rounding).
///
/// `denominator` must be positive.
pub fn div_round_half_even(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0, "denominator must be positive");

    let quotient = numerator.div_euclid(denominator);
    let remainder = numerator.rem_euclid(denominator);
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// Renders as signed decimal text with two fractional digits, e.g. `-25000.00`.
impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_uses_two_decimals_and_sign() {
        assert_eq!(Money::from_rupees(25_000).to_string(), "25000.00");
        assert_eq!(Money::from_rupees(-25_000).to_string(), "-25000.00");
        assert_eq!(Money::from_paise(5).to_string(), "0.05");
        assert_eq!(Money::from_paise(-5).to_string(), "-0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn half_even_rounding_picks_even_neighbour() {
        assert_eq!(div_round_half_even(5, 2), 2);
        assert_eq!(div_round_half_even(7, 2), 4);
        assert_eq!(div_round_half_even(-5, 2), -2);
        assert_eq!(div_round_half_even(-7, 2), -4);
        assert_eq!(div_round_half_even(10, 3), 3);
        assert_eq!(div_round_half_even(11, 3), 4);
    }

    #[test]
    fn mul_ratio_applies_percentage() {
        let base = Money::from_rupees(10_000);
        assert_eq!(base.mul_ratio(1_800, 10_000), Money::from_rupees(1_800));
        assert_eq!(base.mul_ratio(1_800, 20_000), Money::from_rupees(900));
        // 0.01 * 18% = 0.0018 rupee -> rounds to 0 paise.
        assert_eq!(Money::from_paise(1).mul_ratio(1_800, 10_000), Money::ZERO);
    }

    #[test]
    fn sum_and_arithmetic() {
        let lines = [
            Money::from_rupees(100),
            Money::from_rupees(-40),
            Money::from_rupees(-60),
        ];
        assert_eq!(lines.iter().sum::<Money>(), Money::ZERO);
        assert_eq!(-Money::from_rupees(5), Money::from_rupees(-5));
        let mut running = Money::from_rupees(5) - Money::from_rupees(2);
        running += Money::from_paise(50);
        assert_eq!(running, Money::from_paise(350));
        assert_eq!(Money::from_rupees(5).abs(), Money::from_rupees(-5).abs());
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        assert_eq!(Money::checked_from_rupees(250), Some(Money::from_paise(25_000)));
        assert_eq!(Money::checked_from_rupees(i64::MAX / 10), None);
        assert_eq!(Money::from_rupees(300).checked_mul(3), Some(Money::from_rupees(900)));
        assert_eq!(Money::from_paise(i64::MAX / 2).checked_mul(3), None);
        assert_eq!(Money::from_paise(i64::MAX).checked_add(Money::from_paise(1)), None);
        assert_eq!(
            Money::from_rupees(1).checked_add(Money::from_rupees(2)),
            Some(Money::from_rupees(3))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Rounded result never strays more than half a unit from the exact quotient.
        #[test]
        fn rounding_error_is_at_most_half(n in -1_000_000_000i128..1_000_000_000i128, d in 1i128..100_000i128) {
            let q = div_round_half_even(n, d);
            let diff = (q * d - n).abs() * 2;
            prop_assert!(diff <= d);
        }
    }
}
