#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{LedgerSummary, Ticket};

declare_id!("6s2gX53sJdiwQYx79qRwJPbHyWbjRXfoQAw2s1MN5a7m");

#[program]
pub mod football_ticketing {
    use super::*;

    /// Create the ledger with the signer as its admin.
    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    /// Buy one ticket for `match_id`, paying exactly the current price.
    /// Returns the new ticket id.
    pub fn purchase_ticket(
        ctx: Context<PurchaseTicket>,
        match_id: u64,
        paid_amount: u64,
    ) -> Result<u64> {
        instructions::purchase_ticket::purchase_ticket(ctx, match_id, paid_amount)
    }

    pub fn verify_ticket(ctx: Context<VerifyTicket>, ticket_id: u64) -> Result<()> {
        instructions::verify_ticket::verify_ticket(ctx, ticket_id)
    }

    pub fn set_ticket_price(ctx: Context<SetTicketPrice>, new_price: u64) -> Result<()> {
        instructions::set_ticket_price::set_ticket_price(ctx, new_price)
    }

    pub fn pause(ctx: Context<TogglePause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<TogglePause>) -> Result<()> {
        instructions::pause::unpause(ctx)
    }

    /// Sweep the whole balance to the admin. Returns the swept amount.
    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<u64> {
        instructions::withdraw_funds::withdraw_funds(ctx)
    }

    pub fn get_ticket(ctx: Context<GetTicket>, ticket_id: u64) -> Result<Ticket> {
        instructions::views::get_ticket(ctx, ticket_id)
    }

    pub fn get_ledger_summary(ctx: Context<GetLedgerSummary>) -> Result<LedgerSummary> {
        instructions::views::get_ledger_summary(ctx)
    }
}


#[cfg(test)]
mod tests;
