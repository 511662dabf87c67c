//! PreciseBank - split-balance transfer engine
//!
//! The single-threaded core that performs extended-denomination transfers
//! without loss of precision on top of a ledger that only stores integer
//! units.
//!
//! # Responsibilities
//!
//! 1. **Transfer state machine** - decompose extended amounts, classify
//!    borrow/carry, issue integer moves against the underlying ledger
//! 2. **Reserve management** - one module account whose integer balance
//!    backs every outstanding fractional balance
//! 3. **Module facades** - named-module transfer entry points with
//!    reserve-access and blocked-address rules
//! 4. **Extended balance view** - `integer * C + fractional` reads
//!
//! # Data Flow
//!
//! ```text
//! send_coins() → split → pass-through coins → UnderlyingBank
//!                      → extended portion   → send_extended_coins()
//!                                              ├─ integer move (direct)
//!                                              ├─ borrow/carry move (reserve)
//!                                              └─ fractional persist
//! ```
//!
//! Every operation runs to completion inside the host's ambient transaction;
//! an error return means the host must roll that transaction back.

use std::mem;

use tracing::{debug, warn};

use crate::backend::{AccountRegistry, UnderlyingBank};
use crate::coin::{Coin, Coins};
use crate::core_types::{Address, Amount};
use crate::denom::{CONVERSION_FACTOR, EXTENDED_DENOM, INTEGER_DENOM, RESERVE_MODULE};
use crate::error::BankError;
use crate::event::BankEvent;
use crate::fractional::{add_fractional, sub_fractional};
use crate::store::FractionalStore;

/// Split-balance transfer engine.
///
/// Owns the fractional balance store; the underlying ledger and the module
/// account registry are host capabilities. The reserve address is resolved
/// once at construction.
#[derive(Debug, Clone)]
pub struct PreciseBank<B, R> {
    bank: B,
    registry: R,
    fractional: FractionalStore,
    reserve: Address,
    events: Vec<BankEvent>,
}

impl<B: UnderlyingBank, R: AccountRegistry> PreciseBank<B, R> {
    /// Create an engine over the given host capabilities.
    ///
    /// Panics if the reserve module account has not been registered; module
    /// accounts are created at host init, so a miss is a wiring bug.
    pub fn new(bank: B, registry: R) -> Self {
        let reserve = registry
            .module_address(RESERVE_MODULE)
            .unwrap_or_else(|| panic!("module account {RESERVE_MODULE} does not exist"));

        Self {
            bank,
            registry,
            fractional: FractionalStore::new(),
            reserve,
            events: Vec::new(),
        }
    }

    // ============================================================
    // QUERY OPERATIONS (Read-Only)
    // ============================================================

    /// Balance of `addr` in `denom`.
    ///
    /// For the extended denom this is the true extended balance
    /// `integer * C + fractional`; every other denom is read straight from
    /// the underlying ledger.
    pub fn balance(&self, addr: &Address, denom: &str) -> Amount {
        if denom != EXTENDED_DENOM {
            return self.bank.balance(addr, denom);
        }

        let integer = self.bank.balance(addr, INTEGER_DENOM);
        integer
            .checked_mul(CONVERSION_FACTOR)
            .and_then(|scaled| scaled.checked_add(self.fractional.balance(addr)))
            .unwrap_or_else(|| panic!("extended balance of {addr} overflows"))
    }

    /// Fractional balance of `addr`, in `[0, C)`. Zero if unset.
    pub fn fractional_balance(&self, addr: &Address) -> Amount {
        self.fractional.balance(addr)
    }

    /// Enumerate non-zero fractional balances, for genesis export.
    pub fn fractional_balances(&self) -> impl Iterator<Item = (&Address, Amount)> {
        self.fractional.balances()
    }

    /// The reserve account address.
    pub fn reserve_address(&self) -> Address {
        self.reserve
    }

    /// Whether the reserve's integer balance covers the sum of all
    /// fractional balances. Diagnostic only; the transfer path never
    /// consults it.
    pub fn reserve_fully_backed(&self) -> bool {
        let backing = self.bank.balance(&self.reserve, INTEGER_DENOM);
        match backing.checked_mul(CONVERSION_FACTOR) {
            Some(scaled) => scaled >= self.fractional.total(),
            None => true,
        }
    }

    /// Check every denom in `coins` is enabled for sending. Pass-through to
    /// the underlying ledger; not consulted by `send_coins` itself.
    pub fn is_send_enabled_coins(&self, coins: &Coins) -> Result<(), BankError> {
        self.bank.is_send_enabled(coins)
    }

    /// Underlying ledger access, for host queries and test funding.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Drain the events emitted by successful sends since the last drain.
    pub fn take_events(&mut self) -> Vec<BankEvent> {
        mem::take(&mut self.events)
    }

    // ============================================================
    // GENESIS SURFACE
    // ============================================================

    /// Set an account's fractional balance directly.
    ///
    /// Genesis import only; transfers maintain fractional balances
    /// themselves. Panics if `amount >= C`.
    pub fn set_fractional_balance(&mut self, addr: Address, amount: Amount) {
        self.fractional.set_balance(addr, amount);
    }

    // ============================================================
    // TRANSFERS
    // ============================================================

    /// Transfer `coins` from `from` to `to`.
    ///
    /// Non-extended denominations pass through to the underlying ledger
    /// unchanged; the extended portion runs the split-balance state machine.
    /// On success with any net movement of extended value, emits transfer
    /// events denominated in the extended denom at full-equivalent value.
    ///
    /// # Errors
    /// - `InvalidCoins` if `coins` is not in canonical form
    /// - `InsufficientFunds` in extended units if the sender cannot cover
    ///   the extended portion
    /// - any underlying ledger error, propagated verbatim
    pub fn send_coins(
        &mut self,
        from: &Address,
        to: &Address,
        coins: &Coins,
    ) -> Result<(), BankError> {
        // Send-enabled is a message-server concern in the underlying ledger,
        // not a keeper one, so it is not checked here either.
        coins.validate()?;

        let extended_amount = coins.amount_of(EXTENDED_DENOM);
        let passthrough = coins.without(EXTENDED_DENOM);

        if !passthrough.is_empty() {
            self.bank.send_coins(from, to, &passthrough)?;
        }

        if extended_amount > 0 {
            self.send_extended_coins(from, to, extended_amount)?;
        }

        // One event set for the whole movement, valued in extended units:
        // the extended portion plus the integer-denom pass-through. Nothing
        // is emitted when no extended-equivalent value moved.
        match coins.extended_equivalent() {
            None => {
                warn!(
                    from = %from,
                    to = %to,
                    coins = %coins,
                    "skipping transfer events: extended equivalent overflows"
                );
            }
            Some(0) => {}
            Some(full) => {
                let amount = Coin::new(EXTENDED_DENOM, full);
                self.events.push(BankEvent::Transfer {
                    sender: *from,
                    recipient: *to,
                    amount: amount.clone(),
                });
                self.events.push(BankEvent::CoinSpent {
                    spender: *from,
                    amount: amount.clone(),
                });
                self.events.push(BankEvent::CoinReceived {
                    receiver: *to,
                    amount,
                });
            }
        }

        Ok(())
    }

    /// Transfer `amount` extended units from `from` to `to`.
    ///
    /// Covers the four combinations of sender-borrow and recipient-carry:
    ///
    /// | borrow | carry | extra integer movement            |
    /// |--------|-------|-----------------------------------|
    /// | T      | T     | direct transfer grows by 1        |
    /// | T      | F     | sender pays 1 into the reserve    |
    /// | F      | T     | reserve pays 1 to the recipient   |
    /// | F      | F     | none                              |
    fn send_extended_coins(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), BankError> {
        // Self-transfer short-circuit. The sender and recipient fractional
        // writes below would target the same key, so the second write would
        // overwrite the first and duplicate the fractional amount. Nothing
        // moves either way.
        if from == to {
            return Ok(());
        }

        // No explicit balance check here: when the fractional balance is
        // short, the borrow makes the integer send below fail, and that
        // failure is the error source the rewrite step expects.

        let sender_frac = self.fractional.balance(from);
        let recipient_frac = self.fractional.balance(to);

        let mut integer_amount = amount / CONVERSION_FACTOR;
        let fractional_amount = amount % CONVERSION_FACTOR;

        let (sender_new_frac, sender_borrows) = sub_fractional(sender_frac, fractional_amount);
        let (recipient_new_frac, recipient_carries) =
            add_fractional(recipient_frac, fractional_amount);

        debug!(
            from = %from,
            to = %to,
            amount = %amount,
            borrow = sender_borrows,
            carry = recipient_carries,
            "extended transfer"
        );

        // Borrow and carry cancel: the borrowed unit goes straight to the
        // recipient as part of the direct transfer, never touching the
        // reserve.
        if sender_borrows && recipient_carries {
            integer_amount += 1;
        }

        if integer_amount > 0 {
            let transfer = Coins::one(INTEGER_DENOM, integer_amount);
            if let Err(err) = self.bank.send_coins(from, to, &transfer) {
                return Err(self.extended_insufficient_funds(from, amount, err));
            }
        }

        // Borrow only: the sender breaks one integer unit by paying it into
        // the reserve.
        if sender_borrows && !recipient_carries {
            let borrow = Coins::one(INTEGER_DENOM, 1);
            if let Err(err) =
                self.bank
                    .send_coins_from_account_to_module(from, RESERVE_MODULE, &borrow)
            {
                return Err(self.extended_insufficient_funds(from, amount, err));
            }
        }

        // Carry only: the reserve promotes the recipient's overflow into one
        // integer unit. Uses the raw send primitive so blocked-address rules
        // on the recipient do not apply here; only the module facades
        // enforce them. The reserve covers every outstanding fractional
        // balance, so a failure here means corrupted state.
        if !sender_borrows && recipient_carries {
            let reserve = self.reserve;
            let carry = Coins::one(INTEGER_DENOM, 1);
            if let Err(err) = self.bank.send_coins(&reserve, to, &carry) {
                panic!("failed to carry fractional coins to {to}: {err}");
            }
        }

        self.fractional.set_balance(*from, sender_new_frac);
        self.fractional.set_balance(*to, recipient_new_frac);

        Ok(())
    }

    // ============================================================
    // MODULE FACADES
    // ============================================================

    /// Transfer from a user account into a named module account.
    ///
    /// Panics if the module account does not exist. Fails `Unauthorized`
    /// when the recipient is the reserve: external deposits would break the
    /// backing accounting.
    pub fn send_coins_from_account_to_module(
        &mut self,
        sender: &Address,
        recipient_module: &str,
        coins: &Coins,
    ) -> Result<(), BankError> {
        if !self.registry.has_module_account(recipient_module) {
            panic!("module account {recipient_module} does not exist");
        }

        if recipient_module == RESERVE_MODULE {
            return Err(BankError::Unauthorized(format!(
                "module account {RESERVE_MODULE} is not allowed to receive funds"
            )));
        }

        let recipient = self.module_address_or_panic(recipient_module);
        self.send_coins(sender, &recipient, coins)
    }

    /// Transfer from a named module account to a user account.
    ///
    /// Panics if the module account does not exist. Fails `Unauthorized`
    /// when the sender is the reserve or the recipient is blocked.
    pub fn send_coins_from_module_to_account(
        &mut self,
        sender_module: &str,
        recipient: &Address,
        coins: &Coins,
    ) -> Result<(), BankError> {
        let sender = self.module_address_or_panic(sender_module);

        if sender_module == RESERVE_MODULE {
            return Err(BankError::Unauthorized(format!(
                "module account {RESERVE_MODULE} is not allowed to send funds"
            )));
        }

        if self.bank.blocked_addr(recipient) {
            return Err(BankError::Unauthorized(format!(
                "{recipient} is not allowed to receive funds"
            )));
        }

        self.send_coins(&sender, recipient, coins)
    }

    /// Transfer between two named module accounts.
    ///
    /// Panics if either module account does not exist. Fails `Unauthorized`
    /// when the recipient is the reserve.
    pub fn send_coins_from_module_to_module(
        &mut self,
        sender_module: &str,
        recipient_module: &str,
        coins: &Coins,
    ) -> Result<(), BankError> {
        let sender = self.module_address_or_panic(sender_module);

        if !self.registry.has_module_account(recipient_module) {
            panic!("module account {recipient_module} does not exist");
        }

        if recipient_module == RESERVE_MODULE {
            return Err(BankError::Unauthorized(format!(
                "module account {RESERVE_MODULE} is not allowed to receive funds"
            )));
        }

        let recipient = self.module_address_or_panic(recipient_module);
        self.send_coins(&sender, &recipient, coins)
    }

    // ============================================================
    // INTERNAL HELPERS
    // ============================================================

    fn module_address_or_panic(&self, name: &str) -> Address {
        self.registry
            .module_address(name)
            .unwrap_or_else(|| panic!("module account {name} does not exist"))
    }

    /// Rewrite an integer-denom insufficient-funds error into extended
    /// units: the underlying ledger reports integer coins, but the caller
    /// sent extended coins and expects the error to talk about them. Any
    /// other error passes through untouched.
    ///
    /// The reported balance is labeled spendable but is the full extended
    /// balance; the underlying capability exposes no locked/vesting view to
    /// subtract.
    fn extended_insufficient_funds(
        &self,
        addr: &Address,
        amount: Amount,
        err: BankError,
    ) -> BankError {
        if !err.is_insufficient_funds() {
            return err;
        }

        BankError::InsufficientFunds {
            balance: Coin::new(EXTENDED_DENOM, self.balance(addr, EXTENDED_DENOM)),
            requested: Coin::new(EXTENDED_DENOM, amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{InMemoryBank, InMemoryRegistry, module_address};

    const C: Amount = CONVERSION_FACTOR;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn setup() -> PreciseBank<InMemoryBank, InMemoryRegistry> {
        let mut registry = InMemoryRegistry::new();
        registry.register(RESERVE_MODULE);
        PreciseBank::new(InMemoryBank::new(), registry)
    }

    fn fund_integer(pb: &mut PreciseBank<InMemoryBank, InMemoryRegistry>, a: Address, n: Amount) {
        pb.bank_mut().set_balance(a, INTEGER_DENOM, n);
    }

    #[test]
    #[should_panic(expected = "module account precisebank does not exist")]
    fn test_new_requires_reserve_account() {
        PreciseBank::new(InMemoryBank::new(), InMemoryRegistry::new());
    }

    #[test]
    fn test_reserve_address_is_resolved_at_init() {
        let pb = setup();
        assert_eq!(pb.reserve_address(), module_address(RESERVE_MODULE));
    }

    #[test]
    fn test_balance_view_combines_integer_and_fractional() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);
        pb.set_fractional_balance(addr(1), 123);

        assert_eq!(pb.balance(&addr(1), EXTENDED_DENOM), 5 * C + 123);
        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 5);
        assert_eq!(pb.balance(&addr(1), "other"), 0);
    }

    #[test]
    fn test_send_rejects_invalid_coins() {
        let mut pb = setup();
        let bad = Coins::one(EXTENDED_DENOM, 0);
        let err = pb.send_coins(&addr(1), &addr(2), &bad).unwrap_err();
        assert!(matches!(err, BankError::InvalidCoins(_)));
    }

    #[test]
    fn test_no_borrow_no_carry_keeps_reserve_untouched() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);
        pb.set_fractional_balance(addr(1), 500);

        pb.send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, 2 * C + 200))
            .unwrap();

        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 3);
        assert_eq!(pb.fractional_balance(&addr(1)), 300);
        assert_eq!(pb.balance(&addr(2), INTEGER_DENOM), 2);
        assert_eq!(pb.fractional_balance(&addr(2)), 200);
        assert_eq!(pb.balance(&pb.reserve_address(), INTEGER_DENOM), 0);
    }

    #[test]
    fn test_borrow_and_carry_cancel_through_direct_transfer() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);
        pb.set_fractional_balance(addr(1), C / 10);
        pb.set_fractional_balance(addr(2), 9 * C / 10);

        pb.send_coins(
            &addr(1),
            &addr(2),
            &Coins::one(EXTENDED_DENOM, C + 2 * C / 10),
        )
        .unwrap();

        // Direct move is i + 1 = 2; the reserve never participates.
        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 3);
        assert_eq!(pb.fractional_balance(&addr(1)), 9 * C / 10);
        assert_eq!(pb.balance(&addr(2), INTEGER_DENOM), 2);
        assert_eq!(pb.fractional_balance(&addr(2)), C / 10);
        assert_eq!(pb.balance(&pb.reserve_address(), INTEGER_DENOM), 0);
    }

    #[test]
    fn test_borrow_only_pays_reserve() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);

        pb.send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, 500))
            .unwrap();

        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 4);
        assert_eq!(pb.fractional_balance(&addr(1)), C - 500);
        assert_eq!(pb.fractional_balance(&addr(2)), 500);
        assert_eq!(pb.balance(&pb.reserve_address(), INTEGER_DENOM), 1);
    }

    #[test]
    fn test_carry_only_drains_reserve() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);

        // First send seeds both fractional balances and the reserve.
        pb.send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, C / 2))
            .unwrap();
        // Second send carries: the recipient fraction wraps, reserve pays
        // out, and the books return to zero.
        pb.send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, C / 2))
            .unwrap();

        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 4);
        assert_eq!(pb.fractional_balance(&addr(1)), 0);
        assert_eq!(pb.balance(&addr(2), INTEGER_DENOM), 1);
        assert_eq!(pb.fractional_balance(&addr(2)), 0);
        assert_eq!(pb.balance(&pb.reserve_address(), INTEGER_DENOM), 0);
    }

    #[test]
    fn test_self_transfer_leaves_state_untouched() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 1);
        pb.set_fractional_balance(addr(1), 400);

        pb.send_coins(&addr(1), &addr(1), &Coins::one(EXTENDED_DENOM, 700))
            .unwrap();

        assert_eq!(pb.balance(&addr(1), INTEGER_DENOM), 1);
        assert_eq!(pb.fractional_balance(&addr(1)), 400);
        assert_eq!(pb.balance(&pb.reserve_address(), INTEGER_DENOM), 0);
    }

    #[test]
    fn test_insufficient_funds_rewritten_to_extended() {
        let mut pb = setup();
        pb.set_fractional_balance(addr(1), 200);

        let err = pb
            .send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, C))
            .unwrap_err();

        assert_eq!(
            err,
            BankError::InsufficientFunds {
                balance: Coin::new(EXTENDED_DENOM, 200),
                requested: Coin::new(EXTENDED_DENOM, C),
            }
        );
    }

    #[test]
    fn test_passthrough_errors_are_not_rewritten() {
        let mut pb = setup();
        // Integer-denom-only send with no balance: the error stays in
        // integer units because the extended machinery never ran.
        let err = pb
            .send_coins(&addr(1), &addr(2), &Coins::one(INTEGER_DENOM, 3))
            .unwrap_err();

        assert_eq!(
            err,
            BankError::InsufficientFunds {
                balance: Coin::new(INTEGER_DENOM, 0),
                requested: Coin::new(INTEGER_DENOM, 3),
            }
        );
    }

    #[test]
    #[should_panic(expected = "failed to carry fractional coins")]
    fn test_carry_with_drained_reserve_is_fatal() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);

        // Corrupt the backing directly: fractional balances with no reserve
        // behind them.
        pb.set_fractional_balance(addr(2), C - 100);
        pb.set_fractional_balance(addr(1), 500);

        // No borrow (the sender fraction covers), recipient carries,
        // reserve is empty.
        pb.send_coins(&addr(1), &addr(2), &Coins::one(EXTENDED_DENOM, 200))
            .unwrap();
    }

    #[test]
    fn test_events_carry_full_equivalent_amount() {
        let mut pb = setup();
        fund_integer(&mut pb, addr(1), 5);
        pb.set_fractional_balance(addr(1), 500);

        let coins = Coins::from(vec![
            Coin::new(EXTENDED_DENOM, 300),
            Coin::new(INTEGER_DENOM, 2),
        ]);
        pb.send_coins(&addr(1), &addr(2), &coins).unwrap();

        let full = Coin::new(EXTENDED_DENOM, 2 * C + 300);
        assert_eq!(
            pb.take_events(),
            vec![
                BankEvent::Transfer {
                    sender: addr(1),
                    recipient: addr(2),
                    amount: full.clone(),
                },
                BankEvent::CoinSpent {
                    spender: addr(1),
                    amount: full.clone(),
                },
                BankEvent::CoinReceived {
                    receiver: addr(2),
                    amount: full,
                },
            ]
        );
        // Drained.
        assert!(pb.take_events().is_empty());
    }

    #[test]
    fn test_no_events_without_extended_equivalent_movement() {
        let mut pb = setup();
        pb.bank_mut().set_balance(addr(1), "other", 10);

        pb.send_coins(&addr(1), &addr(2), &Coins::one("other", 4))
            .unwrap();

        assert!(pb.take_events().is_empty());
    }

    #[test]
    fn test_facade_rejects_deposit_into_reserve() {
        let mut pb = setup();
        let err = pb
            .send_coins_from_account_to_module(
                &addr(1),
                RESERVE_MODULE,
                &Coins::one(EXTENDED_DENOM, 1),
            )
            .unwrap_err();
        assert!(matches!(err, BankError::Unauthorized(_)));
    }

    #[test]
    fn test_facade_rejects_reserve_as_sender() {
        let mut pb = setup();
        let err = pb
            .send_coins_from_module_to_account(
                RESERVE_MODULE,
                &addr(1),
                &Coins::one(EXTENDED_DENOM, 1),
            )
            .unwrap_err();
        assert!(matches!(err, BankError::Unauthorized(_)));
    }

    #[test]
    fn test_facade_rejects_blocked_recipient() {
        let mut registry = InMemoryRegistry::new();
        registry.register(RESERVE_MODULE);
        registry.register("distribution");
        let mut bank = InMemoryBank::new();
        bank.block_address(addr(9));
        let mut pb = PreciseBank::new(bank, registry);

        let err = pb
            .send_coins_from_module_to_account(
                "distribution",
                &addr(9),
                &Coins::one(EXTENDED_DENOM, 1),
            )
            .unwrap_err();
        assert!(matches!(err, BankError::Unauthorized(_)));
    }

    #[test]
    fn test_facade_module_to_module() {
        let mut registry = InMemoryRegistry::new();
        registry.register(RESERVE_MODULE);
        let fee_collector = registry.register("fee_collector");
        let distribution = registry.register("distribution");
        let mut bank = InMemoryBank::new();
        bank.set_balance(fee_collector, INTEGER_DENOM, 3);
        let mut pb = PreciseBank::new(bank, registry);

        pb.send_coins_from_module_to_module(
            "fee_collector",
            "distribution",
            &Coins::one(EXTENDED_DENOM, C),
        )
        .unwrap();

        assert_eq!(pb.balance(&fee_collector, INTEGER_DENOM), 2);
        assert_eq!(pb.balance(&distribution, INTEGER_DENOM), 1);
    }

    #[test]
    #[should_panic(expected = "module account missing does not exist")]
    fn test_facade_missing_module_is_fatal() {
        let mut pb = setup();
        let _ = pb.send_coins_from_account_to_module(
            &addr(1),
            "missing",
            &Coins::one(EXTENDED_DENOM, 1),
        );
    }

    #[test]
    fn test_is_send_enabled_passthrough() {
        let mut registry = InMemoryRegistry::new();
        registry.register(RESERVE_MODULE);
        let mut bank = InMemoryBank::new();
        bank.disable_send(EXTENDED_DENOM);
        let pb = PreciseBank::new(bank, registry);

        let err = pb
            .is_send_enabled_coins(&Coins::one(EXTENDED_DENOM, 1))
            .unwrap_err();
        assert_eq!(err, BankError::SendDisabled(EXTENDED_DENOM.to_string()));
        assert!(
            pb.is_send_enabled_coins(&Coins::one(INTEGER_DENOM, 1))
                .is_ok()
        );
    }
}
