//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. The composition engine is pure; its
//! single seam is the sink that receives the finished document.

mod report_sink;

pub use report_sink::ReportSink;
