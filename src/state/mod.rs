//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`role`, `session`, `resolver`) so components
//! depend on small focused models. Structs hold plain fields and are
//! provided to the tree as `RwSignal` context by `app`.

pub mod resolver;
pub mod role;
pub mod session;
