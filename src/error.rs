//! Bank Error Types
//!
//! The full error surface of the engine. Recognition is structural: callers
//! and the engine itself match on variants, never on rendered messages.

use thiserror::Error;

use crate::coin::Coin;

/// Errors surfaced by transfer operations.
///
/// Fatal conditions (missing module accounts, a reserve unable to satisfy a
/// carry) are panics rather than variants: no in-band recovery preserves the
/// engine invariants once they fire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    /// Input coins are malformed: unsorted, duplicated, or non-positive.
    #[error("invalid coins: {0}")]
    InvalidCoins(String),

    /// Sender balance cannot cover the requested amount. The underlying
    /// ledger reports this in integer units; the engine rewrites it to the
    /// extended denomination before surfacing.
    #[error("spendable balance {balance} is smaller than {requested}")]
    InsufficientFunds { balance: Coin, requested: Coin },

    /// A facade rule was violated: reserve named as counterparty, or a
    /// blocked address named as recipient.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A denomination is not currently enabled for sending.
    #[error("send disabled for {0}")]
    SendDisabled(String),

    /// Any other failure reported by the underlying ledger. Propagated
    /// verbatim.
    #[error("ledger error: {0}")]
    Ledger(String),
}

impl BankError {
    /// Check whether this is an insufficient-funds failure.
    ///
    /// The rewrite step keys off this, so it must stay a variant check.
    #[inline]
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, BankError::InsufficientFunds { .. })
    }
}
