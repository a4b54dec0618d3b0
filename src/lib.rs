//! # ttms-client
//!
//! Leptos + WASM frontend for the UTM student timetable application.
//!
//! This crate contains pages, components, the user session store, the route
//! table with its navigation guard, and the persisted-storage helpers the
//! store and guard share. Session state lives in a Leptos context provided
//! by the app shell; pages read it, the login page writes it.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;
