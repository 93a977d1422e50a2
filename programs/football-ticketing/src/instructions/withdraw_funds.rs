use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::state::TicketLedger;
use crate::constants::*;

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<u64> {
    let authority_key = ctx.accounts.authority.key();

    // Balance is zeroed and the guard locked before any lamports move
    let amount = ctx.accounts.ledger.begin_withdrawal(&authority_key)?;

    let ledger_key = ctx.accounts.ledger.key();
    let vault_bump = ctx.accounts.ledger.vault_bump;
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, ledger_key.as_ref(), &[vault_bump]];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.authority.to_account_info(),
            },
            &[vault_seeds],
        ),
        amount,
    )?;

    ctx.accounts.ledger.finish_withdrawal();

    emit!(FundsWithdrawn {
        ledger: ledger_key,
        admin: authority_key,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Withdrew {} lamports to admin", amount);

    Ok(amount)
}

#[event]
pub struct FundsWithdrawn {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
