use anchor_lang::prelude::*;
use crate::constants::DEFAULT_TICKET_PRICE;
use crate::errors::TicketLedgerError;
use crate::state::Ticket;
use crate::utils::validation::{validate_match_id, validate_price_bounds};
use crate::utils::{safe_add, ReentrancyGuard};

#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct TicketLedger {
    pub admin: Pubkey,              // 32 bytes - Fixed at initialization
    pub ticket_price: u64,          // 8 bytes - Price in lamports
    pub paused: bool,               // 1 byte - Blocks purchases only
    pub ticket_count: u64,          // 8 bytes - Next ticket id
    pub balance: u64,               // 8 bytes - Withdrawable lamports in the vault
    pub total_collected: u64,       // 8 bytes
    pub total_withdrawn: u64,       // 8 bytes
    pub guard: ReentrancyGuard,     // 1 byte
    pub bump: u8,                   // 1 byte
    pub vault_bump: u8,             // 1 byte
}

impl TicketLedger {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn initialize(&mut self, admin: Pubkey, bump: u8, vault_bump: u8) {
        self.admin = admin;
        self.ticket_price = DEFAULT_TICKET_PRICE;
        self.paused = false;
        self.ticket_count = 0;
        self.balance = 0;
        self.total_collected = 0;
        self.total_withdrawn = 0;
        self.guard = ReentrancyGuard::default();
        self.bump = bump;
        self.vault_bump = vault_bump;
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, TicketLedgerError::NotAdmin);
        Ok(())
    }

    pub fn ticket_exists(&self, ticket_id: u64) -> bool {
        ticket_id < self.ticket_count
    }

    pub fn validate_purchase(&self, match_id: u64, paid_amount: u64) -> Result<()> {
        require!(!self.paused, TicketLedgerError::ContractIsPaused);
        validate_match_id(match_id)?;
        require!(
            paid_amount == self.ticket_price,
            TicketLedgerError::IncorrectEtherSent
        );
        Ok(())
    }

    /// Appends a ticket for `owner` and credits the payment to the balance.
    ///
    /// The returned record is what the caller writes into the ticket PDA.
    /// Nothing on the ledger changes unless every check passes.
    pub fn record_purchase(
        &mut self,
        owner: Pubkey,
        match_id: u64,
        paid_amount: u64,
        now: i64,
        bump: u8,
    ) -> Result<Ticket> {
        self.validate_purchase(match_id, paid_amount)?;

        let ticket_count = safe_add(self.ticket_count, 1)?;
        let balance = safe_add(self.balance, paid_amount)?;
        let total_collected = safe_add(self.total_collected, paid_amount)?;

        let ticket = Ticket {
            id: self.ticket_count,
            owner,
            match_id,
            is_used: false,
            price_paid: paid_amount,
            purchased_at: now,
            verified_at: None,
            bump,
        };

        self.ticket_count = ticket_count;
        self.balance = balance;
        self.total_collected = total_collected;

        Ok(ticket)
    }

    pub fn authorize_verification(&self, caller: &Pubkey, ticket_id: u64) -> Result<()> {
        self.ensure_admin(caller)?;
        require!(
            self.ticket_exists(ticket_id),
            TicketLedgerError::TicketNotFound
        );
        Ok(())
    }

    /// Returns the previous price.
    pub fn set_ticket_price(&mut self, caller: &Pubkey, new_price: u64) -> Result<u64> {
        self.ensure_admin(caller)?;
        validate_price_bounds(new_price)?;

        let old_price = self.ticket_price;
        self.ticket_price = new_price;
        Ok(old_price)
    }

    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        self.ensure_admin(caller)?;
        self.paused = paused;
        Ok(())
    }

    /// Takes the lock and zeroes the balance ahead of the vault transfer.
    /// Returns the amount the caller must move to the admin.
    pub fn begin_withdrawal(&mut self, caller: &Pubkey) -> Result<u64> {
        self.ensure_admin(caller)?;
        self.guard.ensure_unlocked()?;
        require!(self.balance > 0, TicketLedgerError::NoFundsToWithdraw);

        let amount = self.balance;
        let total_withdrawn = safe_add(self.total_withdrawn, amount)?;

        self.guard.lock()?;
        self.balance = 0;
        self.total_withdrawn = total_withdrawn;

        Ok(amount)
    }

    pub fn finish_withdrawal(&mut self) {
        self.guard.unlock();
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            admin: self.admin,
            ticket_price: self.ticket_price,
            paused: self.paused,
            ticket_count: self.ticket_count,
            balance: self.balance,
            total_collected: self.total_collected,
            total_withdrawn: self.total_withdrawn,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub admin: Pubkey,
    pub ticket_price: u64,
    pub paused: bool,
    pub ticket_count: u64,
    pub balance: u64,
    pub total_collected: u64,
    pub total_withdrawn: u64,
}
