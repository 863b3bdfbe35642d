use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions};
use crate::scene::{ElementData, GeometryKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressOptions {
    pub percent: f64,
}

pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Progress(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "progress",
            got: ctx.options.type_tag(),
        });
    };
    if !(0.0..=1.0).contains(&options.percent) {
        return Err(PlotError::InvalidOptions(
            "progress percent must be within [0, 1]".to_owned(),
        ));
    }

    ctx.scene.add_geometry(
        ctx.view,
        GeometryKind::Indicator,
        vec![ElementData::Single(json!({ "percent": options.percent }))],
    )
}
