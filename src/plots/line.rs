use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions, split_series};
use crate::scene::{ElementData, GeometryKind};

/// Marker styling; presence alone enables point markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PointStyle {
    pub size: Option<f64>,
    pub shape: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineOptions {
    pub data: Vec<Value>,
    pub x_field: String,
    pub y_field: String,
    pub series_field: Option<String>,
    pub point: Option<PointStyle>,
    pub smooth: bool,
}

/// One path element per series, plus one marker element per record when
/// `point` is configured.
pub(crate) fn adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::Line(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "line",
            got: ctx.options.type_tag(),
        });
    };
    if options.x_field.is_empty() || options.y_field.is_empty() {
        return Err(PlotError::InvalidOptions(
            "line requires xField and yField".to_owned(),
        ));
    }

    let paths = split_series(&options.data, options.series_field.as_deref())
        .into_iter()
        .map(ElementData::Series)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Line, paths)?;

    if options.point.is_some() {
        let markers = options
            .data
            .iter()
            .cloned()
            .map(ElementData::Single)
            .collect();
        ctx.scene.add_geometry(ctx.view, GeometryKind::Point, markers)?;
    }

    if let Some(field) = &options.series_field {
        ctx.scene.set_group_scale(ctx.view, field)?;
    }
    Ok(())
}
