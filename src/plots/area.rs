use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions, split_series};
use crate::scene::{ElementData, GeometryKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AreaOptions {
    pub data: Vec<Value>,
    pub x_field: String,
    pub y_field: String,
    pub series_field: Option<String>,
    pub smooth: bool,
}

/// One band element per series.
pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Area(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "area",
            got: ctx.options.type_tag(),
        });
    };
    if options.x_field.is_empty() || options.y_field.is_empty() {
        return Err(PlotError::InvalidOptions(
            "area requires xField and yField".to_owned(),
        ));
    }

    let bands = split_series(&options.data, options.series_field.as_deref())
        .into_iter()
        .map(ElementData::Series)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Area, bands)?;

    if let Some(field) = &options.series_field {
        ctx.scene.set_group_scale(ctx.view, field)?;
    }
    Ok(())
}
