//! Adapters between the core and the outside world: display formatting,
//! document export and CSV files.

pub mod csv;
pub mod currency;
pub mod details;
pub mod export;
