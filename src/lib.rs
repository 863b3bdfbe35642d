//! plotgrid-rs: declarative multi-view plot composition over a 2D chart
//! engine.
//!
//! This crate translates plot option objects (chart type + field mappings +
//! styling) into scene-graph calls, lays several independent chart views out
//! in one canvas region, and keeps hover/highlight/tooltip state synchronized
//! across sibling views that share a grouping field.

pub mod api;
pub mod error;
pub mod interaction;
pub mod plots;
pub mod scene;
pub mod telemetry;

pub use api::{MultiViewPlot, MultiViewPlotConfig};
pub use error::{PlotError, PlotResult};
