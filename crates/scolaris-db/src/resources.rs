//! Per-resource store descriptors.
//!
//! Each module pairs a domain type with its table layout: the `SET`
//! fragments the engine splices into its queries, the bind functions
//! that supply the values, and the row struct that maps stored fields
//! back into the domain type.

mod category;
mod expense;
mod reason;
mod stock_item;
mod subject;
mod subject_group;
