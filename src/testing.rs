//! In-memory host backend
//!
//! Implements the capability traits over plain maps so the engine can be
//! exercised without a real ledger. Used by the crate's own tests and by
//! hosts that want a reference double.
//!
//! `send_coins_in_tx` stands in for the host's ambient transaction: it
//! snapshots the whole engine and restores it when the send errors, which is
//! the rollback behavior a real store context provides.

use rustc_hash::FxHashMap;

use crate::backend::{AccountRegistry, UnderlyingBank};
use crate::coin::{Coin, Coins};
use crate::core_types::{Address, Amount};
use crate::engine::PreciseBank;
use crate::error::BankError;

/// Module address derivation used by the in-memory fixtures: the module
/// name's bytes, zero-padded to the address width. Deterministic, so the
/// bank and the registry agree without shared state. Real hosts bring their
/// own scheme through [`AccountRegistry`].
pub fn module_address(name: &str) -> Address {
    let mut bytes = [0u8; 20];
    for (slot, b) in bytes.iter_mut().zip(name.as_bytes()) {
        *slot = *b;
    }
    Address::new(bytes)
}

/// In-memory integer-denomination ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    balances: FxHashMap<Address, FxHashMap<String, Amount>>,
    blocked: Vec<Address>,
    disabled: Vec<String>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a balance directly, for funding test accounts.
    pub fn set_balance(&mut self, addr: Address, denom: &str, amount: Amount) {
        let account = self.balances.entry(addr).or_default();
        if amount == 0 {
            account.remove(denom);
        } else {
            account.insert(denom.to_string(), amount);
        }
    }

    /// Mark an address as blocked for module-facade receives.
    pub fn block_address(&mut self, addr: Address) {
        self.blocked.push(addr);
    }

    /// Disable sends of a denomination.
    pub fn disable_send(&mut self, denom: &str) {
        self.disabled.push(denom.to_string());
    }

    /// Total of `denom` across all accounts, for conservation checks.
    pub fn total_of(&self, denom: &str) -> Amount {
        self.balances
            .values()
            .filter_map(|account| account.get(denom))
            .sum()
    }
}

impl UnderlyingBank for InMemoryBank {
    fn send_coins(&mut self, from: &Address, to: &Address, coins: &Coins) -> Result<(), BankError> {
        coins.validate()?;

        // Validate everything first so a failed send never leaves a partial
        // debit behind.
        for coin in coins.iter() {
            let have = self.balance(from, &coin.denom);
            if have < coin.amount {
                return Err(BankError::InsufficientFunds {
                    balance: Coin::new(coin.denom.clone(), have),
                    requested: coin.clone(),
                });
            }
            if from != to && self.balance(to, &coin.denom).checked_add(coin.amount).is_none() {
                return Err(BankError::Ledger(format!("balance overflow for {to}")));
            }
        }

        for coin in coins.iter() {
            let debited = self.balance(from, &coin.denom) - coin.amount;
            self.set_balance(*from, &coin.denom, debited);
            let credited = self.balance(to, &coin.denom) + coin.amount;
            self.set_balance(*to, &coin.denom, credited);
        }

        Ok(())
    }

    fn send_coins_from_account_to_module(
        &mut self,
        from: &Address,
        recipient_module: &str,
        coins: &Coins,
    ) -> Result<(), BankError> {
        let to = module_address(recipient_module);
        self.send_coins(from, &to, coins)
    }

    fn is_send_enabled(&self, coins: &Coins) -> Result<(), BankError> {
        for coin in coins.iter() {
            if self.disabled.iter().any(|d| d == &coin.denom) {
                return Err(BankError::SendDisabled(coin.denom.clone()));
            }
        }
        Ok(())
    }

    fn balance(&self, addr: &Address, denom: &str) -> Amount {
        self.balances
            .get(addr)
            .and_then(|account| account.get(denom))
            .copied()
            .unwrap_or(0)
    }

    fn blocked_addr(&self, addr: &Address) -> bool {
        self.blocked.contains(addr)
    }
}

/// In-memory module account registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    modules: Vec<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module account, returning its derived address.
    pub fn register(&mut self, name: &str) -> Address {
        if !self.has_module_account(name) {
            self.modules.push(name.to_string());
        }
        module_address(name)
    }
}

impl AccountRegistry for InMemoryRegistry {
    fn module_address(&self, name: &str) -> Option<Address> {
        self.has_module_account(name).then(|| module_address(name))
    }

    fn has_module_account(&self, name: &str) -> bool {
        self.modules.iter().any(|m| m == name)
    }
}

/// Run a send inside a snapshot-rollback transaction.
///
/// On error the engine is restored to its pre-call state, matching the
/// all-or-nothing commit the ambient transaction of a real host provides.
pub fn send_coins_in_tx<B, R>(
    engine: &mut PreciseBank<B, R>,
    from: &Address,
    to: &Address,
    coins: &Coins,
) -> Result<(), BankError>
where
    B: UnderlyingBank + Clone,
    R: AccountRegistry + Clone,
{
    let snapshot = engine.clone();
    let result = engine.send_coins(from, to, coins);
    if result.is_err() {
        *engine = snapshot;
    }
    result
}
