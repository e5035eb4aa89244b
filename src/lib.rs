//! Philippine Payroll Deduction Engine
//!
//! This crate computes the statutory monthly deductions for Philippine
//! employees (SSS, PhilHealth, Pag-IBIG and withholding tax under the TRAIN
//! Law), derives net pay, and stores one payroll record per employee and pay
//! period. An axum HTTP API exposes employees, payroll calculation and
//! payroll history.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
