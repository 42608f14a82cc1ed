//! Backend REST plumbing: wire types, base-URL configuration, and the
//! auth endpoint helpers.

pub mod api;
pub mod config;
pub mod types;
