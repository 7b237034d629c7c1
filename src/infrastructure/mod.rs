pub mod csv_source;
pub mod in_memory;
