use anchor_lang::prelude::*;
use crate::state::{Ticket, TicketLedger};

#[test]
fn test_ledger_size() {
    // 76 bytes of data + 8 bytes discriminator
    assert_eq!(TicketLedger::INIT_SPACE, 32 + 8 + 1 + 8 + 8 + 8 + 8 + 1 + 1 + 1);
    assert_eq!(TicketLedger::SIZE, 84);
}

#[test]
fn test_ticket_size() {
    // 75 bytes of data + 8 bytes discriminator
    assert_eq!(Ticket::INIT_SPACE, 8 + 32 + 8 + 1 + 8 + 8 + 9 + 1);
    assert_eq!(Ticket::SIZE, 83);
}

#[test]
fn test_ticket_fits_its_account() {
    let ticket = Ticket {
        id: u64::MAX,
        owner: Pubkey::new_unique(),
        match_id: u64::MAX,
        is_used: true,
        price_paid: u64::MAX,
        purchased_at: i64::MAX,
        verified_at: Some(i64::MAX),
        bump: 255,
    };

    let mut data = Vec::new();
    ticket.try_serialize(&mut data).unwrap();
    assert_eq!(data.len(), Ticket::SIZE);
}
