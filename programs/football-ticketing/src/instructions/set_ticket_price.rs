use anchor_lang::prelude::*;
use crate::state::TicketLedger;
use crate::constants::*;

#[derive(Accounts)]
pub struct SetTicketPrice<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,
}

pub fn set_ticket_price(ctx: Context<SetTicketPrice>, new_price: u64) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    let old_price = ctx
        .accounts
        .ledger
        .set_ticket_price(&authority_key, new_price)?;

    emit!(TicketPriceUpdated {
        ledger: ctx.accounts.ledger.key(),
        old_price,
        new_price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Ticket price updated from {} to {} lamports", old_price, new_price);

    Ok(())
}

#[event]
pub struct TicketPriceUpdated {
    pub ledger: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
    pub timestamp: i64,
}
