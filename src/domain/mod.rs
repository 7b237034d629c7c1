//! Domain layer: payment records and the pure derivations over them.

pub mod payment;
pub mod ports;
pub mod query;
pub mod summary;
