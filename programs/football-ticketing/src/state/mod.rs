pub mod ledger;
pub mod ticket;

#[cfg(test)]
mod tests;

pub use ledger::*;
pub use ticket::*;
