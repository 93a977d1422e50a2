use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::state::TicketLedger;
use crate::constants::*;

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = TicketLedger::SIZE,
        seeds = [LEDGER_SEED, admin.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, TicketLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let admin_key = ctx.accounts.admin.key();
    let ledger = &mut ctx.accounts.ledger;
    ledger.initialize(admin_key, ctx.bumps.ledger, ctx.bumps.vault);
    let ticket_price = ledger.ticket_price;

    // Rent reserve for the vault, never part of the withdrawable balance
    let rent_reserve = Rent::get()?.minimum_balance(0);
    let shortfall = rent_reserve.saturating_sub(ctx.accounts.vault.lamports());
    if shortfall > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.admin.to_account_info(),
                    to: ctx.accounts.vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    emit!(LedgerInitialized {
        ledger: ctx.accounts.ledger.key(),
        admin: admin_key,
        ticket_price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket ledger initialized with price: {} lamports", ticket_price);

    Ok(())
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub ticket_price: u64,
    pub timestamp: i64,
}
