//! Flutter-facing bindings for CycleCare core.

pub mod api;
