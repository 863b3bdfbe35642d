//! Declarative plot options and the adaptors translating them into scene
//! calls.
//!
//! Adaptors are deliberately thin: each one maps its options onto geometry
//! groups and a group scale on the target view, nothing more.

mod area;
mod bar;
mod column;
mod gauge;
mod line;
mod pie;
mod progress;
mod registry;
mod ring_progress;
mod tiny;

pub mod multi_view;

pub use area::AreaOptions;
pub use bar::BarOptions;
pub use column::ColumnOptions;
pub use gauge::GaugeOptions;
pub use line::{LineOptions, PointStyle};
pub use multi_view::{MultiViewOptions, SubPlot, TooltipOptions};
pub use pie::PieOptions;
pub use progress::ProgressOptions;
pub use registry::{Registry, resolve};
pub use ring_progress::RingProgressOptions;
pub use tiny::{TinyAreaOptions, TinyColumnOptions, TinyLineOptions};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlotResult;
use crate::scene::{ViewId, ViewTree};

/// Options of one sub-plot, tagged by plot type.
///
/// The tag set is closed and versioned with the crate; `width`/`height`
/// never appear here because the container owns sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "kebab-case")]
pub enum PlotOptions {
    Line(LineOptions),
    Pie(PieOptions),
    Bar(BarOptions),
    Column(ColumnOptions),
    Area(AreaOptions),
    Gauge(GaugeOptions),
    TinyLine(TinyLineOptions),
    TinyColumn(TinyColumnOptions),
    TinyArea(TinyAreaOptions),
    RingProgress(RingProgressOptions),
    Progress(ProgressOptions),
}

impl PlotOptions {
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Pie(_) => "pie",
            Self::Bar(_) => "bar",
            Self::Column(_) => "column",
            Self::Area(_) => "area",
            Self::Gauge(_) => "gauge",
            Self::TinyLine(_) => "tiny-line",
            Self::TinyColumn(_) => "tiny-column",
            Self::TinyArea(_) => "tiny-area",
            Self::RingProgress(_) => "ring-progress",
            Self::Progress(_) => "progress",
        }
    }
}

/// Call context handed to an adaptor: the scene, the target view, and the
/// options the caller resolved the adaptor for.
pub struct AdaptorContext<'a> {
    pub scene: &'a mut ViewTree,
    pub view: ViewId,
    pub options: &'a PlotOptions,
}

/// Builder translating one plot type's options into scene calls against the
/// target view. Invoking one twice with equal inputs yields equal geometry.
pub type AdaptorFn = fn(AdaptorContext<'_>) -> PlotResult<()>;

/// Splits records into series by `field`, preserving first-seen order.
/// Without a field (or with no matching values) everything lands in one
/// series.
pub(crate) fn split_series(data: &[Value], field: Option<&str>) -> Vec<Vec<Value>> {
    let Some(field) = field else {
        return vec![data.to_vec()];
    };

    let mut series: IndexMap<String, Vec<Value>> = IndexMap::new();
    for record in data {
        let key = record
            .get(field)
            .map(Value::to_string)
            .unwrap_or_default();
        series.entry(key).or_default().push(record.clone());
    }

    if series.is_empty() {
        vec![Vec::new()]
    } else {
        series.into_values().collect()
    }
}
