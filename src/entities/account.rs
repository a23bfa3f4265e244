// 💳 Bank Account Entity - Guarded balance with movement history
//
// "Balance is a VALUE (changes with every movement), Account UUID is IDENTITY"
//
// Rules:
// - Balance starts at 0.0 and never goes below zero
// - Only deposit/withdraw mutate the balance
// - Negative (or non-finite) amounts are rejected before anything changes
// - A deposit that would overflow the balance to infinity is rejected too
// - Every successful movement is appended to the history, failed ones never are

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT ERROR
// ============================================================================

/// Why a deposit or withdrawal was refused
#[derive(Debug, Clone, PartialEq)]
pub enum AccountError {
    /// Amount was negative, NaN, infinite, or would overflow the balance
    InvalidAmount { operation: MovementKind, amount: f64 },

    /// Withdrawal larger than the current balance
    InsufficientFunds { requested: f64, available: f64 },
}

impl AccountError {
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, AccountError::InvalidAmount { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountError::InvalidAmount { operation, amount } if !amount.is_finite() => {
                write!(f, "Cannot {} non-finite amount: {}", operation.verb(), amount)
            }
            AccountError::InvalidAmount { operation, amount } if *amount < 0.0 => {
                write!(f, "Cannot {} negative amount", operation.verb())
            }
            AccountError::InvalidAmount { operation, amount } => write!(
                f,
                "Cannot {} {}: balance would overflow",
                operation.verb(),
                amount
            ),
            AccountError::InsufficientFunds { requested, available } => write!(
                f,
                "Insufficient balance: requested {}, available {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for AccountError {}

/// A statement that could not have been produced by deposits and withdrawals
#[derive(Debug, Clone, PartialEq)]
pub struct StatementError {
    pub field: String,
    pub message: String,
}

impl StatementError {
    fn new(field: &str, message: String) -> Self {
        StatementError {
            field: field.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid statement {}: {}", self.field, self.message)
    }
}

impl std::error::Error for StatementError {}

// ============================================================================
// MOVEMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "Deposit",
            MovementKind::Withdrawal => "Withdrawal",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdraw",
        }
    }
}

/// One successful deposit or withdrawal (append-only, never edited)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: String,
    pub kind: MovementKind,
    pub amount: f64,
    pub balance_after: f64,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    fn new(kind: MovementKind, amount: f64, balance_after: f64) -> Self {
        Movement {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            amount,
            balance_after,
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// BANK ACCOUNT
// ============================================================================

/// In-memory account holding a non-negative balance
///
/// Identity: UUID (never changes)
/// Value: balance (changes only through `deposit` / `withdraw`)
///
/// Deserializing goes through `RawAccount` so a restored statement
/// still satisfies the balance rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawAccount")]
pub struct BankAccount {
    id: String,
    opened_at: DateTime<Utc>,
    balance: f64,
    movements: Vec<Movement>,
}

impl BankAccount {
    /// Open a new account with a zero balance
    pub fn new() -> Self {
        BankAccount {
            id: uuid::Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            balance: 0.0,
            movements: Vec::new(),
        }
    }

    /// Add `amount` to the balance
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is negative, not finite, or would overflow the balance
    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        validate_amount(MovementKind::Deposit, amount)?;

        let new_balance = self.balance + amount;
        if !new_balance.is_finite() {
            return Err(AccountError::InvalidAmount {
                operation: MovementKind::Deposit,
                amount,
            });
        }

        self.balance = new_balance;
        self.record(MovementKind::Deposit, amount);
        Ok(())
    }

    /// Take `amount` out of the balance
    ///
    /// # Errors
    /// * `InvalidAmount` - amount is negative or not finite
    /// * `InsufficientFunds` - amount is larger than the current balance
    pub fn withdraw(&mut self, amount: f64) -> Result<(), AccountError> {
        validate_amount(MovementKind::Withdrawal, amount)?;

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.record(MovementKind::Withdrawal, amount);
        Ok(())
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Successful movements, oldest first
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Pretty JSON snapshot of the account and its history
    pub fn statement_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .with_context(|| format!("Failed to serialize statement for account {}", self.id))
    }

    fn record(&mut self, kind: MovementKind, amount: f64) {
        self.movements.push(Movement::new(kind, amount, self.balance));
    }
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire shape of a `BankAccount`
#[derive(Deserialize)]
struct RawAccount {
    id: String,
    opened_at: DateTime<Utc>,
    balance: f64,
    movements: Vec<Movement>,
}

impl TryFrom<RawAccount> for BankAccount {
    type Error = StatementError;

    fn try_from(raw: RawAccount) -> Result<Self, Self::Error> {
        if !raw.balance.is_finite() || raw.balance < 0.0 {
            return Err(StatementError::new(
                "balance",
                format!("must be finite and non-negative, got {}", raw.balance),
            ));
        }

        // Replay the history: every step must be a valid movement
        let mut replayed = 0.0;
        for (i, movement) in raw.movements.iter().enumerate() {
            if !movement.amount.is_finite() || movement.amount < 0.0 {
                return Err(StatementError::new(
                    "movements",
                    format!("movement {} has invalid amount {}", i, movement.amount),
                ));
            }
            replayed = match movement.kind {
                MovementKind::Deposit => replayed + movement.amount,
                MovementKind::Withdrawal if movement.amount <= replayed => {
                    replayed - movement.amount
                }
                MovementKind::Withdrawal => {
                    return Err(StatementError::new(
                        "movements",
                        format!("movement {} overdraws the account", i),
                    ));
                }
            };
            if replayed != movement.balance_after {
                return Err(StatementError::new(
                    "movements",
                    format!(
                        "movement {} records balance {}, expected {}",
                        i, movement.balance_after, replayed
                    ),
                ));
            }
        }

        if replayed != raw.balance {
            return Err(StatementError::new(
                "balance",
                format!("{} does not match movement history ({})", raw.balance, replayed),
            ));
        }

        Ok(BankAccount {
            id: raw.id,
            opened_at: raw.opened_at,
            balance: raw.balance,
            movements: raw.movements,
        })
    }
}

fn validate_amount(operation: MovementKind, amount: f64) -> Result<(), AccountError> {
    // NaN compares false against everything, so check finiteness explicitly
    if !amount.is_finite() || amount < 0.0 {
        return Err(AccountError::InvalidAmount { operation, amount });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
