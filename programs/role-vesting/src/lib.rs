use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use error::VestingError;
use instructions::*;
use state::Role;
use utils::release;

declare_id!("2Ut9RKeaqo895gVTEZ6fgG9WJ2sZAPfws5Hp3WGkcAg8");

#[program]
pub mod role_vesting {
    use super::*;

    /// Create the vesting state, beneficiary registry and escrow vault.
    /// Bucket allocations are fixed here from the mint's current supply.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Register a wallet into a role bucket (admin only).
    pub fn add_beneficiary(ctx: Context<AddBeneficiary>, wallet: Pubkey, role: Role) -> Result<()> {
        instructions::add_beneficiary(ctx, wallet, role)
    }

    /// Start the single shared schedule (admin only, at most once).
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        cliff_seconds: i64,
        duration_seconds: i64,
    ) -> Result<()> {
        instructions::create_schedule(ctx, cliff_seconds, duration_seconds)
    }

    /// Fund the vault with the vested slice before the schedule starts.
    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens(ctx, amount)
    }

    /// Emit the current unlock position of a bucket (read-only).
    pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, role: Role) -> Result<()> {
        instructions::emit_release_quote(ctx, role)
    }

    /// Pay the unlocked-but-unpaid amount of one bucket equally to all of its
    /// members. Remaining accounts carry each member's token account in
    /// registration order. Any failed transfer aborts the whole instruction,
    /// so no partial distribution is ever observable.
    ///
    /// NOTE: handler body lives here; delegating a handler that walks
    /// `remaining_accounts` across modules trips `Context` lifetime
    /// invariance.
    pub fn withdraw<'info>(
        ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
        role: Role,
    ) -> Result<()> {
        let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
        let vesting_state_bump = ctx.bumps.vesting_state;

        let st = &ctx.accounts.vesting_state;
        // An unstarted schedule unlocks nothing, same observable outcome as
        // calling during the cliff.
        require!(st.schedule_started, VestingError::NothingToRelease);

        let now = Clock::get()?.unix_timestamp;
        let unlocked = release::unlocked_amount(
            st.allocation(role),
            st.start_ts,
            st.cliff_seconds,
            st.duration_seconds,
            now,
        )?;
        let already_paid = st.paid(role);
        let deliverable = unlocked
            .checked_sub(already_paid)
            .ok_or(VestingError::MathOverflow)?;
        require!(deliverable > 0, VestingError::NothingToRelease);

        let beneficiaries = &ctx.accounts.beneficiaries;
        let member_count = beneficiaries.member_count(role);
        require!(member_count > 0, VestingError::EmptyBucket);
        let (share, paid_out) = release::equal_share(deliverable, member_count as u64)?;

        require!(
            ctx.remaining_accounts.len() == member_count,
            VestingError::BeneficiaryAccountMismatch
        );
        require!(
            ctx.accounts.vault.amount >= paid_out,
            VestingError::InsufficientVaultBalance
        );

        let mint = st.mint;
        let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
        for (i, member_account) in ctx.remaining_accounts.iter().enumerate() {
            let member = beneficiaries.member_at(role, i)?;
            let member_token: Account<TokenAccount> = Account::try_from(member_account)?;
            require_keys_eq!(member_token.mint, mint, VestingError::InvalidTokenMint);
            require_keys_eq!(
                member_token.owner,
                member,
                VestingError::BeneficiaryAccountMismatch
            );

            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.vault.to_account_info(),
                        to: member_account.to_account_info(),
                        authority: vesting_state_ai.clone(),
                    },
                    signer_seeds,
                ),
                share,
            )?;
        }

        // Only the evenly divisible portion counts as paid; division dust
        // stays deliverable for later rounds.
        let st = &mut ctx.accounts.vesting_state;
        st.total_paid[role.index()] = already_paid
            .checked_add(paid_out)
            .ok_or(VestingError::MathOverflow)?;

        emit!(Withdrawn {
            role,
            amount_per_member: share,
            member_count: member_count as u32,
        });

        Ok(())
    }
}
