// Seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const VAULT_SEED: &[u8] = b"vault";

// Financial constants
pub const DEFAULT_TICKET_PRICE: u64 = 50_000_000;         // 0.05 SOL
pub const MIN_TICKET_PRICE: u64 = 1;                      // Free tickets are not sold
pub const MAX_TICKET_PRICE: u64 = 1_000_000_000_000;     // 1000 SOL

// Match ids start at 1, zero is reserved as "no match"
pub const MIN_MATCH_ID: u64 = 1;
