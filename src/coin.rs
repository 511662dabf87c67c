//! Coin Types
//!
//! A `Coin` is an amount of a single denomination; `Coins` is a multi-denom
//! amount set in the canonical form the underlying ledger expects: sorted by
//! denom, denoms unique, every amount positive.
//!
//! `Coins` does NOT enforce validity at construction. The underlying ledger
//! validates at use, and transfer operations must surface the same
//! `InvalidCoins` error it would, so the engine revalidates inside `send`
//! rather than making invalid values unrepresentable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core_types::Amount;
use crate::denom::{CONVERSION_FACTOR, EXTENDED_DENOM, INTEGER_DENOM};
use crate::error::BankError;

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Amount,
}

impl Coin {
    /// Create a new coin.
    pub fn new(denom: impl Into<String>, amount: Amount) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A multi-denomination amount set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Empty coin set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// A set holding a single coin.
    pub fn one(denom: impl Into<String>, amount: Amount) -> Self {
        Self(vec![Coin::new(denom, amount)])
    }

    /// Check canonical form: strictly ascending denoms (which also rules out
    /// duplicates) and positive amounts. An empty set is valid.
    pub fn is_valid(&self) -> bool {
        if self.0.iter().any(|c| c.amount == 0) {
            return false;
        }
        self.0.windows(2).all(|w| w[0].denom < w[1].denom)
    }

    /// Validate canonical form, reporting the offending set on failure.
    pub fn validate(&self) -> Result<(), BankError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(BankError::InvalidCoins(self.to_string()))
        }
    }

    /// Amount of `denom` in this set, zero if absent.
    pub fn amount_of(&self, denom: &str) -> Amount {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    /// This set with every coin of `denom` removed.
    pub fn without(&self, denom: &str) -> Coins {
        Coins(self.0.iter().filter(|c| c.denom != denom).cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Total value of the extended and integer denoms expressed in extended
    /// units: `extended + integer * CONVERSION_FACTOR`. Other denoms do not
    /// contribute. Returns `None` on overflow, which indicates corrupt
    /// balances upstream.
    pub fn extended_equivalent(&self) -> Option<Amount> {
        self.amount_of(INTEGER_DENOM)
            .checked_mul(CONVERSION_FACTOR)?
            .checked_add(self.amount_of(EXTENDED_DENOM))
    }
}

impl From<Vec<Coin>> for Coins {
    fn from(coins: Vec<Coin>) -> Self {
        Self(coins)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for coin in &self.0 {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", coin)?;
            first = false;
        }
        Ok(())
    }
}
