//! Payroll finishing engine for biweekly batches
//!
//! This crate classifies raw timekeeping exports into regular, overtime and
//! statutory hours, accrues statutory holiday entitlement pay, and reports
//! weekly-capped union benefit costs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
