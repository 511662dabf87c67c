//! Denomination constants
//!
//! The engine serves exactly one denomination pair: an integer denom stored
//! by the underlying ledger and an extended denom with 12 additional
//! decimals overlaid by this crate.

use crate::core_types::Amount;

/// Coarse denomination persisted by the underlying ledger (6 decimals).
pub const INTEGER_DENOM: &str = "ucoin";

/// Fine denomination served by this engine (18 decimals).
pub const EXTENDED_DENOM: &str = "acoin";

/// How many extended units make up one integer unit:
/// `10^(extended decimals - integer decimals)`.
pub const CONVERSION_FACTOR: Amount = 1_000_000_000_000;

/// Module name of this engine. Doubles as the reserve account identifier
/// and as the guard token in the module-transfer facades.
pub const RESERVE_MODULE: &str = "precisebank";
