use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::VestingError;
use crate::state::{Beneficiaries, Role, VestingState};

// NOTE: the `withdraw` handler body lives in `src/lib.rs`; delegating a
// handler that walks `remaining_accounts` across modules trips Anchor
// `Context` lifetime invariance.

/// Permissionless bucket payout. Remaining accounts carry one token account
/// per bucket member, in registration order.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Withdrawn {
    pub role: Role,
    pub amount_per_member: u64,
    pub member_count: u32,
}
