//! Shared client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! State lives in plain structs held by `RwSignal` context providers so the
//! navigation guard, pages, and chrome components read and mutate one
//! source of truth per domain.

pub mod session;
