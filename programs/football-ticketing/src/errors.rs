use anchor_lang::prelude::*;

#[error_code]
pub enum TicketLedgerError {
    #[msg("Only the ledger admin can perform this action")]
    NotAdmin,

    #[msg("Match id must be greater than zero")]
    InvalidMatchId,

    #[msg("Payment must equal the current ticket price")]
    IncorrectEtherSent,

    #[msg("Ticket sales are paused")]
    ContractIsPaused,

    #[msg("Ticket has already been used")]
    TicketAlreadyUsed,

    #[msg("Ticket does not exist")]
    TicketNotFound,

    #[msg("Ticket price is out of bounds")]
    InvalidTicketPrice,

    #[msg("No funds to withdraw")]
    NoFundsToWithdraw,

    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,

    #[msg("Math overflow")]
    MathOverflow,
}
