//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading and writing shared state from
//! Leptos context providers.

pub mod nav_bar;
