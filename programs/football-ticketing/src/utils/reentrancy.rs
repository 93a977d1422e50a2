use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;

/// Lock embedded in the ledger account and held while lamports leave the vault.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ReentrancyGuard {
    pub is_locked: bool,
}

impl ReentrancyGuard {
    pub fn ensure_unlocked(&self) -> Result<()> {
        require!(!self.is_locked, TicketLedgerError::ReentrancyLocked);
        Ok(())
    }

    pub fn lock(&mut self) -> Result<()> {
        self.ensure_unlocked()?;
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.is_locked = false;
    }
}
