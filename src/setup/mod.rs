// =====================================================
// FILE: src/setup/mod.rs - SETUP MODULES
// =====================================================

pub mod setup_toml;
