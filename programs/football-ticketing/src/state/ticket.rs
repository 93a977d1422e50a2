use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,                    // 8 bytes - Position in the ledger
    pub owner: Pubkey,              // 32 bytes - Purchasing wallet
    pub match_id: u64,              // 8 bytes - Match the ticket admits to
    pub is_used: bool,              // 1 byte - Has been scanned
    pub price_paid: u64,            // 8 bytes - Price at purchase time
    pub purchased_at: i64,          // 8 bytes - Unix timestamp
    pub verified_at: Option<i64>,   // 1 + 8 bytes - When scanned
    pub bump: u8,                   // 1 byte - PDA bump
}

impl Ticket {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Marks the ticket as redeemed. There is no way back to unused.
    pub fn redeem(&mut self, now: i64) -> Result<()> {
        require!(!self.is_used, TicketLedgerError::TicketAlreadyUsed);

        self.is_used = true;
        self.verified_at = Some(now);
        Ok(())
    }

    /// Reads the ticket stored at `info`, which must be the PDA for `ticket_id`.
    pub fn load(info: &AccountInfo, ticket_id: u64) -> Result<Self> {
        require!(
            info.owner == &crate::ID && !info.data_is_empty(),
            TicketLedgerError::TicketNotFound
        );

        let data = info.try_borrow_data()?;
        let ticket = Ticket::try_deserialize(&mut &data[..])?;
        require!(ticket.id == ticket_id, TicketLedgerError::TicketNotFound);
        Ok(ticket)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}
