//! Core layer - Framework-agnostic business logic for the dealership ledger.
//!
//! Validation and domain rules are pure; the persistence modules are the only
//! code here that touches the database.

/// Derived financial figures (totals, profit, dashboard)
pub mod aggregate;
/// Expense persistence
pub mod expense;
/// Dealer profile persistence
pub mod profile;
/// Sales report, certificate data and diagnostics
pub mod report;
/// Business invariants over validated input
pub mod rules;
/// Input validation and coercion
pub mod validation;
/// Vehicle persistence
pub mod vehicle;
