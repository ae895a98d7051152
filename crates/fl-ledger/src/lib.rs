//! `fl-ledger` — orders and their fractional allocation across locations.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`order`]  | `Order`, `OrderContent`, `Fractions`                     |
//! | [`ledger`] | `InventoryLedger` (the only mutation entry point)        |
//! | [`error`]  | `LedgerError`, `LedgerResult<T>`                         |
//!
//! # Allocation model
//!
//! Each order is split into fractions over the round's known locations.  A
//! fresh ledger puts fraction 1 at the order's origin.  The part of an order
//! travelling in a vehicle is tracked outside the ledger (as a [`Fractions`]
//! map owned by the planner or simulator); together they always satisfy
//!
//! ```text
//! Σ_location ledger[location][order] + onboard[order] == 1   (± 1e-6)
//! ```
//!
//! [`InventoryLedger::update`] is the sole mutation primitive.  It clamps at
//! zero, so a fraction can never go negative.
//!
//! `Clone` is a full deep copy: the planning session and every simulation run
//! hold independent ledgers.

pub mod error;
pub mod ledger;
pub mod order;

#[cfg(test)]
mod tests;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{InventoryLedger, CONSERVATION_TOLERANCE};
pub use order::{Fractions, Order, OrderContent};
