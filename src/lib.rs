//! Shift Simulation Engine for CLT (Brazilian labor law) schedules
//!
//! This crate walks a work shift minute by minute to answer two questions:
//! when must an employee clock out to be credited a given net working time,
//! and how much net working time does a shift with a fixed exit credit.
//! Minutes inside the night window count at the reduced night hour, and a
//! single break is inserted once enough work has accrued.
//!
//! On top of the two simulators the crate plans whole working weeks for a
//! regime (redistributing the weekly target around fixed exit times) and
//! serves everything over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
