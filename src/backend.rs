//! Capability interfaces consumed by the engine
//!
//! The engine is polymorphic over the host it runs in. It consumes two
//! narrow capabilities: the underlying integer-denomination ledger and the
//! module account registry. Keeping these as traits keeps the core testable
//! against an in-memory fake (see [`crate::testing`]).
//!
//! All calls are ordinary synchronous invocations inside the host's ambient
//! transaction; the engine never suspends mid-transfer.

use crate::coin::Coins;
use crate::core_types::{Address, Amount};
use crate::error::BankError;

/// The underlying ledger holding integer-denomination balances.
pub trait UnderlyingBank {
    /// Transfer coins between two accounts.
    ///
    /// This is the raw send primitive: it does NOT consult the
    /// blocked-address set. Blocked-recipient enforcement belongs to the
    /// module facades, which is what lets the engine pay carries out of the
    /// reserve even though the reserve itself is a blocked account.
    fn send_coins(&mut self, from: &Address, to: &Address, coins: &Coins) -> Result<(), BankError>;

    /// Transfer coins from an account into a module account, bypassing the
    /// blocked check on the module recipient.
    fn send_coins_from_account_to_module(
        &mut self,
        from: &Address,
        recipient_module: &str,
        coins: &Coins,
    ) -> Result<(), BankError>;

    /// Check every denom in `coins` is enabled for sending.
    fn is_send_enabled(&self, coins: &Coins) -> Result<(), BankError>;

    /// Balance of `addr` in `denom`.
    fn balance(&self, addr: &Address, denom: &str) -> Amount;

    /// Whether `addr` may not receive funds through the module facades.
    fn blocked_addr(&self, addr: &Address) -> bool;
}

/// Registry of module accounts maintained by the host.
pub trait AccountRegistry {
    /// Address of the module account registered under `name`, if any.
    fn module_address(&self, name: &str) -> Option<Address>;

    /// Whether a module account is registered under `name`. Module accounts
    /// are registered at host init; a miss on the transfer path is fatal.
    fn has_module_account(&self, name: &str) -> bool;
}
