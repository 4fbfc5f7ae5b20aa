//! Allocation - proportional breakdown for the pie view.

mod allocation_model;
mod allocation_service;

pub use allocation_model::AllocationSlice;
pub use allocation_service::allocate;
