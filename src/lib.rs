//! # clinic-client
//!
//! Leptos + WASM frontend for the psychiatric clinic management system.
//! All persistence, business rules, and authentication decisions live in
//! the external REST backend; this crate owns the browser-side session
//! model (credential storage, session resolution, role-gated routing) and
//! the page scaffolding around it.
//!
//! Browser I/O (HTTP, localStorage) is gated behind the `hydrate` feature
//! so the session, role, and guard logic stays testable as plain Rust.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
