//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate input parsing, prediction and XP awards into use cases.
//! - Keep UI/FFI layers decoupled from prediction details.

pub mod tracking_service;
