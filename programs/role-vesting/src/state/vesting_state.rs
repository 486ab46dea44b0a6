use anchor_lang::prelude::*;

use crate::constants::ROLE_COUNT;
use crate::state::Role;

/// Singleton vesting state PDA: the one-time schedule, the fixed per-bucket
/// allocation table, and the cumulative paid counters.
#[account]
pub struct VestingState {
    /// Token mint.
    pub mint: Pubkey,
    /// Admin authority.
    pub admin: Pubkey,
    /// Whether `create_schedule` has run. False means nothing is unlocked.
    pub schedule_started: bool,
    /// Schedule start timestamp (Unix seconds); 0 until started.
    pub start_ts: i64,
    /// Cliff length in seconds; nothing unlocks before start + cliff.
    pub cliff_seconds: i64,
    /// Linear unlock window in seconds after the cliff.
    pub duration_seconds: i64,
    /// Fixed bucket entitlements, indexed by `Role`, derived from the mint
    /// supply at initialization and never changed.
    pub bucket_allocations: [u64; ROLE_COUNT],
    /// Cumulative amount paid out per bucket; monotonically non-decreasing,
    /// never ahead of the unlock curve.
    pub total_paid: [u64; ROLE_COUNT],
}

impl VestingState {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        1 +  // schedule_started
        8 +  // start_ts
        8 +  // cliff_seconds
        8 +  // duration_seconds
        8 * ROLE_COUNT + // bucket_allocations
        8 * ROLE_COUNT; // total_paid

    pub fn allocation(&self, role: Role) -> u64 {
        self.bucket_allocations[role.index()]
    }

    pub fn paid(&self, role: Role) -> u64 {
        self.total_paid[role.index()]
    }

    /// Sum of all bucket entitlements (the 30% slice escrowed in the vault).
    pub fn vested_total(&self) -> u128 {
        self.bucket_allocations.iter().map(|&a| a as u128).sum()
    }
}
