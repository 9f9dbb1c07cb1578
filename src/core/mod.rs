//! Core business logic - pure, framework-agnostic computations.
//!
//! Every function in this layer operates on snapshots of the entity
//! collections and returns plain data. No function here touches the store,
//! performs I/O, or mutates its inputs; identical input always yields
//! identical output.

/// Expense aggregation by month, year, and category
pub mod aggregate;
/// Debt payoff progress and clamped payments
pub mod debt;
/// Jar allocation over regular income
pub mod jar;
/// Bounded visual size mapping for the bubble and grid views
pub mod layout;
/// Currency formatting
pub mod money;
