use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    cliff_seconds: i64,
    duration_seconds: i64,
) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);
    require!(!st.schedule_started, VestingError::ScheduleAlreadyStarted);
    require!(cliff_seconds >= 0, VestingError::InvalidConfig);
    require!(duration_seconds > 0, VestingError::InvalidConfig);

    // One-way transition; no update or cancel path exists.
    let now = Clock::get()?.unix_timestamp;
    st.schedule_started = true;
    st.start_ts = now;
    st.cliff_seconds = cliff_seconds;
    st.duration_seconds = duration_seconds;

    emit!(ScheduleCreated {
        start_ts: now,
        cliff_seconds,
        duration_seconds,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleCreated {
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub duration_seconds: i64,
}
