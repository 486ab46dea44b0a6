use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::{Beneficiaries, Role, VestingState};

pub fn add_beneficiary(ctx: Context<AddBeneficiary>, wallet: Pubkey, role: Role) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);
    require!(wallet != Pubkey::default(), VestingError::InvalidPubkey);

    // Registration is not gated on schedule state; buckets may grow before
    // and after the schedule starts.
    let beneficiaries = &mut ctx.accounts.beneficiaries;
    beneficiaries.push(role, wallet)?;

    emit!(BeneficiaryAdded {
        wallet,
        role,
        bucket_count: beneficiaries.member_count(role) as u32,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiary<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"beneficiaries", vesting_state.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, Beneficiaries>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct BeneficiaryAdded {
    pub wallet: Pubkey,
    pub role: Role,
    pub bucket_count: u32,
}
