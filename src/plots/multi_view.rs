//! Container composition: partition one canvas region into sub-views and
//! dispatch each one through the adaptor registry.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::PlotResult;
use crate::plots::{AdaptorContext, PlotOptions, registry};
use crate::scene::{Region, ViewId, ViewTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    pub show_markers: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self { show_markers: true }
    }
}

/// One sub-plot: where it goes and what it plots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubPlot {
    #[serde(default)]
    pub region: Region,
    #[serde(flatten)]
    pub plot: PlotOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultiViewOptions {
    pub plots: Vec<SubPlot>,
    pub tooltip: TooltipOptions,
}

/// Builds one child view per sub-plot under `container`.
///
/// A sub-view whose tag does not resolve, or whose adaptor fails, is logged
/// and skipped; the remaining sub-views still compose.
pub(crate) fn compose(
    scene: &mut ViewTree,
    container: ViewId,
    options: &MultiViewOptions,
) -> PlotResult<()> {
    for (index, sub) in options.plots.iter().enumerate() {
        let tag = sub.plot.type_tag();
        let Some(adaptor) = registry::resolve(tag) else {
            warn!(index, tag, "skipping sub-view with unresolved plot type");
            continue;
        };

        let built = match scene.add_child(container, sub.region) {
            Ok(view) => adaptor(AdaptorContext {
                scene,
                view,
                options: &sub.plot,
            }),
            Err(err) => Err(err),
        };
        if let Err(err) = built {
            warn!(index, tag, error = %err, "skipping sub-view after adaptor failure");
        }
    }
    Ok(())
}
