use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::constants::*;

pub fn validate_price_bounds(price: u64) -> Result<()> {
    require!(
        price >= MIN_TICKET_PRICE,
        TicketLedgerError::InvalidTicketPrice
    );

    require!(
        price <= MAX_TICKET_PRICE,
        TicketLedgerError::InvalidTicketPrice
    );

    Ok(())
}

pub fn validate_match_id(match_id: u64) -> Result<()> {
    require!(
        match_id >= MIN_MATCH_ID,
        TicketLedgerError::InvalidMatchId
    );

    Ok(())
}
