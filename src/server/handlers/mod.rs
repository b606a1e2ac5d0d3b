// =====================================================
// FILE: src/server/handlers/mod.rs - HANDLER MODULES
// =====================================================

pub mod api;

pub use api::*;
