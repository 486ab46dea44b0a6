use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingState;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, VestingError::UnauthorizedAdmin);
    require!(!st.schedule_started, VestingError::DepositAfterStart);

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    // The vault only ever escrows the 30% vested slice.
    let post = (ctx.accounts.vault.amount as u128)
        .checked_add(amount as u128)
        .ok_or(VestingError::MathOverflow)?;
    require!(post <= st.vested_total(), VestingError::OverDeposit);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        admin: ctx.accounts.vesting_state.admin,
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub admin: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
