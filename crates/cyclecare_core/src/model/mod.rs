//! Domain model for cycle tracking.
//!
//! # Responsibility
//! - Define user input (`CycleProfile`, `PeriodRecord`) and derived calendar
//!   marks (`DateMark`).
//!
//! # Invariants
//! - Input types are validated on construction and on deserialization.
//! - Marks are a pure function of input types and never stored.

pub mod cycle;
pub mod mark;
