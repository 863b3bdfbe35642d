use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions};
use crate::scene::{ElementData, GeometryKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieOptions {
    pub data: Vec<Value>,
    pub angle_field: String,
    pub color_field: String,
    pub inner_radius: Option<f64>,
}

/// One slice element per record; the color field is the group scale.
pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Pie(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "pie",
            got: ctx.options.type_tag(),
        });
    };
    if options.angle_field.is_empty() {
        return Err(PlotError::InvalidOptions(
            "pie requires angleField".to_owned(),
        ));
    }

    let slices = options
        .data
        .iter()
        .cloned()
        .map(ElementData::Single)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Interval, slices)?;

    if !options.color_field.is_empty() {
        ctx.scene.set_group_scale(ctx.view, &options.color_field)?;
    }
    Ok(())
}
