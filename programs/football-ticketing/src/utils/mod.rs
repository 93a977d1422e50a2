pub mod validation;
pub mod reentrancy;

use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;

pub use reentrancy::ReentrancyGuard;

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(TicketLedgerError::MathOverflow.into())
}
