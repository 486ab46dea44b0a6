use anchor_lang::prelude::*;

use crate::state::{Beneficiaries, Role, VestingState};
use crate::utils::release;

/// Read-style instruction: emits the current unlock position of a bucket for
/// off-chain consumers. No state is mutated.
pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, role: Role) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;

    let unlocked = if st.schedule_started {
        release::unlocked_amount(
            st.allocation(role),
            st.start_ts,
            st.cliff_seconds,
            st.duration_seconds,
            now,
        )?
    } else {
        0
    };
    let paid = st.paid(role);

    emit!(ReleaseQuote {
        role,
        unlocked,
        paid,
        deliverable: unlocked.saturating_sub(paid),
        member_count: ctx.accounts.beneficiaries.member_count(role) as u32,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitReleaseQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,
}

#[event]
pub struct ReleaseQuote {
    pub role: Role,
    pub unlocked: u64,
    pub paid: u64,
    pub deliverable: u64,
    pub member_count: u32,
}
