//! Browser-adjacent utilities.

pub mod credentials;
