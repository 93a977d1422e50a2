use anchor_lang::prelude::*;
use crate::state::TicketLedger;
use crate::constants::*;

/// Shared by `pause` and `unpause`
#[derive(Accounts)]
pub struct TogglePause<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,
}

pub fn pause(ctx: Context<TogglePause>) -> Result<()> {
    set_paused(ctx, true)
}

pub fn unpause(ctx: Context<TogglePause>) -> Result<()> {
    set_paused(ctx, false)
}

fn set_paused(ctx: Context<TogglePause>, paused: bool) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    ctx.accounts.ledger.set_paused(&authority_key, paused)?;

    emit!(PauseStatusChanged {
        ledger: ctx.accounts.ledger.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket sales pause status: {}", paused);

    Ok(())
}

#[event]
pub struct PauseStatusChanged {
    pub ledger: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
