//! erlang-charts: Erlang B/C teletraffic metrics and static charts.
//!
//! `core` holds the pure evaluator (`erlang_b`, `erlang_c`,
//! `avg_queue_length`) and the sweep helpers built on it. `api` turns sweeps
//! into report figures and render frames; `render` draws frames headlessly or,
//! with the `cairo-backend` feature, into PNG images.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Figure, ReportConfig, build_report};
pub use core::{avg_queue_length, erlang_b, erlang_c};
pub use error::{ChartError, ChartResult};
