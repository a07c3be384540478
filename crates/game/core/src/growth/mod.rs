//! Experience curves and the per-actor threshold table built from them.
pub mod curve;
pub mod table;

pub use table::ExpTable;
