use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_BENEFICIARIES_PER_ROLE, ROLE_COUNT};
use crate::state::{Beneficiaries, Role, VestingState};

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let supply = ctx.accounts.mint.supply;

    let st = &mut ctx.accounts.vesting_state;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.schedule_started = false;
    st.start_ts = 0;
    st.cliff_seconds = 0;
    st.duration_seconds = 0;
    for role in Role::ALL {
        st.bucket_allocations[role.index()] = role.allocation_from_supply(supply)?;
    }
    st.total_paid = [0; ROLE_COUNT];

    let beneficiaries = &mut ctx.accounts.beneficiaries;
    beneficiaries.counts = [0; ROLE_COUNT];
    beneficiaries.wallets = [[Pubkey::default(); MAX_BENEFICIARIES_PER_ROLE]; ROLE_COUNT];

    emit!(VestingInitialized {
        mint: st.mint,
        admin: st.admin,
        advisor_allocation: st.allocation(Role::Advisor),
        partner_allocation: st.allocation(Role::Partner),
        mentor_allocation: st.allocation(Role::Mentor),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = admin,
        space = Beneficiaries::space(),
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub advisor_allocation: u64,
    pub partner_allocation: u64,
    pub mentor_allocation: u64,
}
