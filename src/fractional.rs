//! Fractional balance arithmetic
//!
//! Pure borrow/carry arithmetic over fractional balances. Both operands must
//! be strictly below [`CONVERSION_FACTOR`]; a violation is a programming
//! error in the caller, not a recoverable condition, and panics.

use crate::core_types::Amount;
use crate::denom::CONVERSION_FACTOR;

/// Subtract a fractional amount from a fractional balance.
///
/// Returns the new balance and whether an integer borrow is required.
/// A borrow means the balance underflowed and one integer unit must be
/// broken into fractional units to keep the result in `[0, C)`.
pub fn sub_fractional(balance: Amount, amount: Amount) -> (Amount, bool) {
    assert!(
        balance < CONVERSION_FACTOR,
        "fractional balance must be less than the conversion factor"
    );
    assert!(
        amount < CONVERSION_FACTOR,
        "fractional amount must be less than the conversion factor"
    );

    if balance >= amount {
        (balance - amount, false)
    } else {
        (balance + CONVERSION_FACTOR - amount, true)
    }
}

/// Add a fractional amount to a fractional balance.
///
/// Returns the new balance and whether an integer carry is required.
/// A carry means the sum reached one whole integer unit, which must be
/// promoted out of the fractional domain to keep the result in `[0, C)`.
pub fn add_fractional(balance: Amount, amount: Amount) -> (Amount, bool) {
    assert!(
        balance < CONVERSION_FACTOR,
        "fractional balance must be less than the conversion factor"
    );
    assert!(
        amount < CONVERSION_FACTOR,
        "fractional amount must be less than the conversion factor"
    );

    // Cannot overflow: both operands are below 10^12.
    let sum = balance + amount;
    if sum < CONVERSION_FACTOR {
        (sum, false)
    } else {
        (sum - CONVERSION_FACTOR, true)
    }
}
