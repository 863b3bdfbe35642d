use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions};
use crate::scene::{ElementData, GeometryKind};

/// Vertical interval plot; `x_field` carries the category axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnOptions {
    pub data: Vec<Value>,
    pub x_field: String,
    pub y_field: String,
    pub series_field: Option<String>,
}

pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Column(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "column",
            got: ctx.options.type_tag(),
        });
    };
    if options.x_field.is_empty() || options.y_field.is_empty() {
        return Err(PlotError::InvalidOptions(
            "column requires xField and yField".to_owned(),
        ));
    }

    let columns = options
        .data
        .iter()
        .cloned()
        .map(ElementData::Single)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Interval, columns)?;

    if let Some(field) = &options.series_field {
        ctx.scene.set_group_scale(ctx.view, field)?;
    }
    Ok(())
}
