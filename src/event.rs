//! Transfer events
//!
//! Records emitted by successful sends. Every event is denominated in the
//! extended denom at the full-equivalent value of the movement, so consumers
//! see one precise amount regardless of how the transfer decomposed into
//! integer and fractional moves.

use serde::{Deserialize, Serialize};

use crate::coin::Coin;
use crate::core_types::Address;

/// A balance movement observed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankEvent {
    Transfer {
        sender: Address,
        recipient: Address,
        amount: Coin,
    },
    CoinSpent {
        spender: Address,
        amount: Coin,
    },
    CoinReceived {
        receiver: Address,
        amount: Coin,
    },
}
