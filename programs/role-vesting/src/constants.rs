//! Program-wide constants.

/// Percentage of the mint's total supply allocated to the advisor bucket.
pub const ADVISOR_PERCENT: u64 = 5;

/// Percentage of the mint's total supply allocated to the partner bucket.
pub const PARTNER_PERCENT: u64 = 10;

/// Percentage of the mint's total supply allocated to the mentor bucket.
pub const MENTOR_PERCENT: u64 = 15;

/// Number of role buckets.
pub const ROLE_COUNT: usize = 3;

/// Max beneficiaries stored on-chain per role bucket.
pub const MAX_BENEFICIARIES_PER_ROLE: usize = 32;
