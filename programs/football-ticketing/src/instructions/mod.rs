pub mod initialize_ledger;
pub mod purchase_ticket;
pub mod verify_ticket;
pub mod set_ticket_price;
pub mod pause;
pub mod withdraw_funds;
pub mod views;

pub use initialize_ledger::*;
pub use purchase_ticket::*;
pub use verify_ticket::*;
pub use set_ticket_price::*;
pub use pause::*;
pub use withdraw_funds::*;
pub use views::*;
