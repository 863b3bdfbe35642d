use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions};
use crate::scene::{ElementData, GeometryKind};

/// Horizontal interval plot; `y_field` carries the category axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarOptions {
    pub data: Vec<Value>,
    pub x_field: String,
    pub y_field: String,
    pub series_field: Option<String>,
}

pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Bar(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "bar",
            got: ctx.options.type_tag(),
        });
    };
    if options.x_field.is_empty() || options.y_field.is_empty() {
        return Err(PlotError::InvalidOptions(
            "bar requires xField and yField".to_owned(),
        ));
    }

    let bars = options
        .data
        .iter()
        .cloned()
        .map(ElementData::Single)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Interval, bars)?;

    if let Some(field) = &options.series_field {
        ctx.scene.set_group_scale(ctx.view, field)?;
    }
    Ok(())
}
