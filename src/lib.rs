//! pricechart-rs: coordinate and interaction engine for a financial price
//! line chart.
//!
//! The crate maps an ordered price series onto pixel space (including a
//! business-day aware time scale), selects per-period axis ticks, resolves
//! pointer positions to samples, places the hover overlay and computes
//! drag-to-compare readouts. Drawing is delegated to a host `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, Period};
pub use error::{ChartError, ChartResult};
