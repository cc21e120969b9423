//! Pattern Compass - Results-Report Composition Engine
//!
//! This crate turns a completed behavioral-pattern quiz (raw driver scores
//! plus the user's answer sheet) into the long personalized results report,
//! composed deterministically from pattern-keyed phrase tables.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
