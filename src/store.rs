//! Fractional balance store
//!
//! The authoritative `address -> fractional balance` mapping. Every entry is
//! strictly below [`CONVERSION_FACTOR`]; absent entries read as zero. The
//! transfer engine is the only writer during a transfer.

use rustc_hash::FxHashMap;

use crate::core_types::{Address, Amount};
use crate::denom::CONVERSION_FACTOR;

/// Persistent mapping of per-account fractional balances.
///
/// Zero balances are removed rather than stored, so enumeration yields only
/// accounts with outstanding fractional value.
#[derive(Debug, Clone, Default)]
pub struct FractionalStore {
    balances: FxHashMap<Address, Amount>,
}

impl FractionalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fractional balance of an account, zero if unset.
    #[inline]
    pub fn balance(&self, addr: &Address) -> Amount {
        self.balances.get(addr).copied().unwrap_or(0)
    }

    /// Set an account's fractional balance.
    ///
    /// Panics if `amount >= CONVERSION_FACTOR`; the arithmetic layer
    /// guarantees in-range results, so a violation is a bug.
    pub fn set_balance(&mut self, addr: Address, amount: Amount) {
        assert!(
            amount < CONVERSION_FACTOR,
            "fractional balance must be less than the conversion factor"
        );

        if amount == 0 {
            self.balances.remove(&addr);
        } else {
            self.balances.insert(addr, amount);
        }
    }

    /// Sum of all fractional balances. The reserve's integer balance must
    /// cover this at all times.
    pub fn total(&self) -> Amount {
        self.balances.values().sum()
    }

    /// Enumerate non-zero fractional balances, for genesis export.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, Amount)> {
        self.balances.iter().map(|(addr, amount)| (addr, *amount))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
