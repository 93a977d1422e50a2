//! Read-only instructions. Results are returned through Anchor return data.

use anchor_lang::prelude::*;
use crate::state::{LedgerSummary, Ticket, TicketLedger};
use crate::errors::TicketLedgerError;
use crate::constants::*;

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct GetTicket<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,

    /// CHECK: Deserialized in the handler so an unsold id fails with TicketNotFound
    #[account(
        seeds = [TICKET_SEED, ledger.key().as_ref(), ticket_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: UncheckedAccount<'info>,
}

pub fn get_ticket(ctx: Context<GetTicket>, ticket_id: u64) -> Result<Ticket> {
    require!(
        ctx.accounts.ledger.ticket_exists(ticket_id),
        TicketLedgerError::TicketNotFound
    );
    Ticket::load(&ctx.accounts.ticket.to_account_info(), ticket_id)
}

#[derive(Accounts)]
pub struct GetLedgerSummary<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,
}

pub fn get_ledger_summary(ctx: Context<GetLedgerSummary>) -> Result<LedgerSummary> {
    Ok(ctx.accounts.ledger.summary())
}
