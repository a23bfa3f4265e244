// Entity Models
// "Identity persists, values change"
//
// Each entity has:
// - Stable identity (UUID) that NEVER changes
// - Values that change only through validated operations

pub mod account;

pub use account::{AccountError, BankAccount, Movement, MovementKind, StatementError};
