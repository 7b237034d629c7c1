//! Application layer: the record store lifecycle and the dashboard state that
//! turns view intents into derived summary and list views.
//!
//! All derived views are recomputed from the store on demand; the store is
//! the only shared state and is guarded by a `tokio` lock.

pub mod dashboard;
pub mod store;
