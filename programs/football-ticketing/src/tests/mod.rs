use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::state::TicketLedger;
use crate::utils::ReentrancyGuard;

mod security_tests;

pub(crate) fn new_ledger(admin: Pubkey) -> TicketLedger {
    let mut ledger = TicketLedger {
        admin: Pubkey::default(),
        ticket_price: 0,
        paused: true,
        ticket_count: 0,
        balance: 0,
        total_collected: 0,
        total_withdrawn: 0,
        guard: ReentrancyGuard::default(),
        bump: 0,
        vault_bump: 0,
    };
    ledger.initialize(admin, 255, 254);
    ledger
}

pub(crate) fn assert_ledger_error<T: std::fmt::Debug>(
    result: Result<T>,
    expected: TicketLedgerError,
) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}
