use anchor_lang::prelude::*;
use super::{assert_ledger_error, new_ledger};
use crate::constants::*;
use crate::errors::TicketLedgerError;
use crate::state::Ticket;
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::safe_add;

#[test]
fn test_reentrancy_lock_unlock() {
    let mut guard = ReentrancyGuard::default();

    // Test locking
    assert!(guard.lock().is_ok());
    assert!(guard.is_locked);

    // Test double lock fails
    assert_ledger_error(guard.lock(), TicketLedgerError::ReentrancyLocked);

    // Test unlock
    guard.unlock();
    assert!(!guard.is_locked);

    // Test can lock again after unlock
    assert!(guard.lock().is_ok());
}

#[test]
fn test_withdrawal_cannot_reenter() {
    let admin = Pubkey::new_unique();
    let mut ledger = new_ledger(admin);
    ledger
        .record_purchase(Pubkey::new_unique(), 1, DEFAULT_TICKET_PRICE, 0, 255)
        .unwrap();

    let amount = ledger.begin_withdrawal(&admin).unwrap();
    assert_eq!(amount, DEFAULT_TICKET_PRICE);

    // A second sweep while the transfer is in flight
    assert_ledger_error(
        ledger.begin_withdrawal(&admin),
        TicketLedgerError::ReentrancyLocked,
    );
    assert_eq!(ledger.balance, 0);
    assert_eq!(ledger.total_withdrawn, DEFAULT_TICKET_PRICE);

    ledger.finish_withdrawal();
    assert_ledger_error(
        ledger.begin_withdrawal(&admin),
        TicketLedgerError::NoFundsToWithdraw,
    );
}

#[test]
fn test_admin_operations_reject_non_admin() {
    let admin = Pubkey::new_unique();
    let intruder = Pubkey::new_unique();
    let mut ledger = new_ledger(admin);
    ledger
        .record_purchase(Pubkey::new_unique(), 1, DEFAULT_TICKET_PRICE, 0, 255)
        .unwrap();
    let before = ledger.clone();

    assert_ledger_error(
        ledger.authorize_verification(&intruder, 0),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.set_ticket_price(&intruder, 1),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.set_paused(&intruder, true),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.set_paused(&intruder, false),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.begin_withdrawal(&intruder),
        TicketLedgerError::NotAdmin,
    );

    assert_eq!(ledger, before);
}

#[test]
fn test_not_admin_takes_precedence() {
    let admin = Pubkey::new_unique();
    let intruder = Pubkey::new_unique();
    let mut ledger = new_ledger(admin);

    // Unknown ticket, empty balance and bad price all lose to NotAdmin
    assert_ledger_error(
        ledger.authorize_verification(&intruder, 42),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.begin_withdrawal(&intruder),
        TicketLedgerError::NotAdmin,
    );
    assert_ledger_error(
        ledger.set_ticket_price(&intruder, 0),
        TicketLedgerError::NotAdmin,
    );
}

#[test]
fn test_price_validation_bounds() {
    use crate::utils::validation::*;

    // Test minimum price
    assert!(validate_price_bounds(MIN_TICKET_PRICE).is_ok());
    assert_ledger_error(validate_price_bounds(0), TicketLedgerError::InvalidTicketPrice);

    // Test maximum price
    assert!(validate_price_bounds(MAX_TICKET_PRICE).is_ok());
    assert_ledger_error(
        validate_price_bounds(MAX_TICKET_PRICE + 1),
        TicketLedgerError::InvalidTicketPrice,
    );
}

#[test]
fn test_zero_price_rejected() {
    let admin = Pubkey::new_unique();
    let mut ledger = new_ledger(admin);

    assert_ledger_error(
        ledger.set_ticket_price(&admin, 0),
        TicketLedgerError::InvalidTicketPrice,
    );
    assert_eq!(ledger.ticket_price, DEFAULT_TICKET_PRICE);
}

#[test]
fn test_overflow_protection() {
    assert!(safe_add(u64::MAX, 1).is_err());
    assert_eq!(safe_add(100, 200).unwrap(), 300);
}

#[test]
fn test_purchase_overflow_leaves_ledger_unchanged() {
    let admin = Pubkey::new_unique();
    let mut ledger = new_ledger(admin);
    ledger.balance = u64::MAX;
    let before = ledger.clone();

    assert_ledger_error(
        ledger.record_purchase(Pubkey::new_unique(), 1, DEFAULT_TICKET_PRICE, 0, 255),
        TicketLedgerError::MathOverflow,
    );
    assert_eq!(ledger, before);
}

#[test]
fn test_ticket_account_round_trip() {
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let mut data = vec![0u8; Ticket::SIZE];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

    let mut ticket = Ticket {
        id: 3,
        owner: Pubkey::new_unique(),
        match_id: 9,
        is_used: false,
        price_paid: DEFAULT_TICKET_PRICE,
        purchased_at: 10,
        verified_at: None,
        bump: 200,
    };
    ticket.store(&info).unwrap();

    let mut loaded = Ticket::load(&info, 3).unwrap();
    assert_eq!(loaded, ticket);

    loaded.redeem(20).unwrap();
    loaded.store(&info).unwrap();
    ticket = Ticket::load(&info, 3).unwrap();
    assert!(ticket.is_used);
    assert_eq!(ticket.verified_at, Some(20));

    // Stored under a different id
    assert_ledger_error(Ticket::load(&info, 4), TicketLedgerError::TicketNotFound);
}

#[test]
fn test_missing_ticket_account() {
    let key = Pubkey::new_unique();
    let program_owner = crate::ID;
    let system_owner = anchor_lang::solana_program::system_program::ID;

    // Never initialized: no data
    let mut lamports = 0u64;
    let mut empty: Vec<u8> = vec![];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut empty, &program_owner, false, 0);
    assert_ledger_error(Ticket::load(&info, 0), TicketLedgerError::TicketNotFound);

    // Not owned by this program
    let mut lamports = 0u64;
    let mut data = vec![0u8; Ticket::SIZE];
    let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &system_owner, false, 0);
    assert_ledger_error(Ticket::load(&info, 0), TicketLedgerError::TicketNotFound);
}
