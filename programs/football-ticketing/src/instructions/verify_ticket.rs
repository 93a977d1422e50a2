use anchor_lang::prelude::*;
use crate::state::{Ticket, TicketLedger};
use crate::constants::*;

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct VerifyTicket<'info> {
    pub validator: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,

    /// CHECK: Deserialized in the handler so an unsold id fails with TicketNotFound
    #[account(
        mut,
        seeds = [TICKET_SEED, ledger.key().as_ref(), ticket_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: UncheckedAccount<'info>,
}

pub fn verify_ticket(ctx: Context<VerifyTicket>, ticket_id: u64) -> Result<()> {
    let validator_key = ctx.accounts.validator.key();
    ctx.accounts
        .ledger
        .authorize_verification(&validator_key, ticket_id)?;

    let ticket_info = ctx.accounts.ticket.to_account_info();
    let mut ticket = Ticket::load(&ticket_info, ticket_id)?;

    // Mark ticket as used (immutable!)
    let timestamp = Clock::get()?.unix_timestamp;
    ticket.redeem(timestamp)?;
    ticket.store(&ticket_info)?;

    emit!(TicketVerified {
        ledger: ctx.accounts.ledger.key(),
        ticket_id,
        owner: ticket.owner,
        match_id: ticket.match_id,
        validator: validator_key,
        timestamp,
    });

    msg!("Ticket {} verified and marked as USED", ticket_id);

    Ok(())
}

#[event]
pub struct TicketVerified {
    pub ledger: Pubkey,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub match_id: u64,
    pub validator: Pubkey,
    pub timestamp: i64,
}
