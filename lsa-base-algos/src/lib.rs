//! Exact global aligners for the linear gap cost model.
//!
//! - [`NW`] fills the full table and traces back one optimal alignment.
//! - [`row`] computes a single row of the table in linear memory.
//! - [`Hirschberg`] uses forward and backward rows to split the problem in
//!   two halves, and recurses with linear memory.

pub mod cli;
mod hirschberg;
mod nw;
pub mod row;


pub use hirschberg::Hirschberg;
pub use nw::NW;
