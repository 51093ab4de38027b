use anchor_lang::prelude::*;
use std::result::Result;

use crate::error::VestingError;

/// Percentage in fractional form, e.g. `1/20` for 5%.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PercentageFraction {
    pub dividend: u64,
    pub divisor: u64,
}

impl PercentageFraction {
    pub const SIZE: usize = 8 + 8;

    pub const fn new(dividend: u64, divisor: u64) -> Self {
        Self { dividend, divisor }
    }

    pub fn validate(&self) -> Result<(), VestingError> {
        if self.divisor == 0 {
            return Err(VestingError::InvalidPercentageDivisor);
        }
        Ok(())
    }

    /// `floor(amount * dividend / divisor)`.
    pub fn apply(&self, amount: u64) -> Result<u64, VestingError> {
        self.validate()?;
        let v = (amount as u128)
            .checked_mul(self.dividend as u128)
            .ok_or(VestingError::MathOverflow)?
            / (self.divisor as u128);
        u64::try_from(v).map_err(|_| VestingError::MathOverflow)
    }
}

/// Rejects a listing/cliff pair whose percentages sum above 100%.
/// Cross-multiplied so no rounding is involved.
pub fn ensure_within_whole(
    listing: &PercentageFraction,
    cliff: &PercentageFraction,
) -> Result<(), VestingError> {
    listing.validate()?;
    cliff.validate()?;

    // u64 * u64 always fits in u128; only the sum can overflow, and an
    // overflowing sum is necessarily above the whole.
    let lhs = (listing.dividend as u128 * cliff.divisor as u128)
        .checked_add(cliff.dividend as u128 * listing.divisor as u128)
        .ok_or(VestingError::PercentageOverflow)?;
    let whole = listing.divisor as u128 * cliff.divisor as u128;
    if lhs > whole {
        return Err(VestingError::PercentageOverflow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_is_rejected() {
        let f = PercentageFraction::new(1, 0);
        assert!(matches!(f.validate(), Err(VestingError::InvalidPercentageDivisor)));
        assert!(matches!(f.apply(100), Err(VestingError::InvalidPercentageDivisor)));
    }

    #[test]
    fn apply_floors() {
        assert_eq!(PercentageFraction::new(1, 20).apply(199).unwrap(), 9);
        assert_eq!(PercentageFraction::new(1, 10).apply(199).unwrap(), 19);
        assert_eq!(PercentageFraction::new(0, 1).apply(199).unwrap(), 0);
        assert_eq!(PercentageFraction::new(1, 1).apply(u64::MAX).unwrap(), u64::MAX);
    }

    #[test]
    fn listing_plus_cliff_bound() {
        let half = PercentageFraction::new(1, 2);
        assert!(ensure_within_whole(&half, &half).is_ok());
        assert!(ensure_within_whole(&PercentageFraction::new(1, 20), &PercentageFraction::new(1, 10)).is_ok());

        let two_thirds = PercentageFraction::new(2, 3);
        assert!(matches!(
            ensure_within_whole(&two_thirds, &two_thirds),
            Err(VestingError::PercentageOverflow)
        ));
        assert!(matches!(
            ensure_within_whole(&PercentageFraction::new(2, 1), &PercentageFraction::new(1, 1)),
            Err(VestingError::PercentageOverflow)
        ));
        assert!(matches!(
            ensure_within_whole(&PercentageFraction::new(u64::MAX, 1), &PercentageFraction::new(u64::MAX, 1)),
            Err(VestingError::PercentageOverflow)
        ));
    }

    #[test]
    fn divisor_checked_before_sum() {
        // 2/3 + 1/0 reports the divisor, not the overflow.
        assert!(matches!(
            ensure_within_whole(&PercentageFraction::new(2, 3), &PercentageFraction::new(1, 0)),
            Err(VestingError::InvalidPercentageDivisor)
        ));
    }
}
