use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::state::{Ticket, TicketLedger};
use crate::constants::*;

#[derive(Accounts)]
pub struct PurchaseTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, TicketLedger>,

    #[account(
        init,
        payer = buyer,
        space = Ticket::SIZE,
        seeds = [
            TICKET_SEED,
            ledger.key().as_ref(),
            ledger.ticket_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn purchase_ticket(
    ctx: Context<PurchaseTicket>,
    match_id: u64,
    paid_amount: u64,
) -> Result<u64> {
    let current_time = Clock::get()?.unix_timestamp;
    let buyer_key = ctx.accounts.buyer.key();

    let record = ctx.accounts.ledger.record_purchase(
        buyer_key,
        match_id,
        paid_amount,
        current_time,
        ctx.bumps.ticket,
    )?;
    let ticket_id = record.id;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        paid_amount,
    )?;

    ctx.accounts.ticket.set_inner(record);

    emit!(TicketPurchased {
        ledger: ctx.accounts.ledger.key(),
        buyer: buyer_key,
        ticket_id,
        match_id,
        price: paid_amount,
        timestamp: current_time,
    });

    msg!("Purchased ticket #{} for match {}", ticket_id, match_id);

    Ok(ticket_id)
}

#[event]
pub struct TicketPurchased {
    pub ledger: Pubkey,
    pub buyer: Pubkey,
    pub ticket_id: u64,
    pub match_id: u64,
    pub price: u64,
    pub timestamp: i64,
}
