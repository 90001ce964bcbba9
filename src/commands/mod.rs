//! Command implementations for the pkgsync CLI

pub mod sync;
