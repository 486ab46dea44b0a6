use anchor_lang::prelude::*;

use crate::constants::{ADVISOR_PERCENT, MENTOR_PERCENT, PARTNER_PERCENT};
use crate::error::VestingError;

/// Role buckets sharing the single vesting schedule. Each bucket owns a
/// fixed percentage of the mint's total supply (5/10/15, with the remaining
/// 70% held outside this program).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Advisor,
    Partner,
    Mentor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Advisor, Role::Partner, Role::Mentor];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn percent(&self) -> u64 {
        match self {
            Role::Advisor => ADVISOR_PERCENT,
            Role::Partner => PARTNER_PERCENT,
            Role::Mentor => MENTOR_PERCENT,
        }
    }

    /// Bucket entitlement derived once at initialization:
    /// floor(total_supply * percent / 100), truncating toward zero.
    pub fn allocation_from_supply(&self, total_supply: u64) -> std::result::Result<u64, VestingError> {
        let v = (total_supply as u128)
            .checked_mul(self.percent() as u128)
            .ok_or(VestingError::MathOverflow)?
            .checked_div(100)
            .ok_or(VestingError::MathOverflow)?;
        u64::try_from(v).map_err(|_| VestingError::MathOverflow)
    }
}
