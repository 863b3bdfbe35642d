//! Sparkline variants driven by a bare numeric vector. None of these carry a
//! group scale, so they never participate in cross-view association.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{PlotError, PlotResult};
use crate::plots::{AdaptorContext, PlotOptions};
use crate::scene::{ElementData, GeometryKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinyLineOptions {
    pub data: Vec<f64>,
    pub smooth: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinyColumnOptions {
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TinyAreaOptions {
    pub data: Vec<f64>,
    pub smooth: bool,
}

fn indexed_records(data: &[f64]) -> Vec<Value> {
    data.iter()
        .enumerate()
        .map(|(x, y)| json!({ "x": x, "y": y }))
        .collect()
}

pub(crate) fn line_adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::TinyLine(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "tiny-line",
            got: ctx.options.type_tag(),
        });
    };
    ctx.scene.add_geometry(
        ctx.view,
        GeometryKind::Line,
        vec![ElementData::Series(indexed_records(&options.data))],
    )
}

pub(crate) fn column_adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::TinyColumn(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "tiny-column",
            got: ctx.options.type_tag(),
        });
    };
    let columns = indexed_records(&options.data)
        .into_iter()
        .map(ElementData::Single)
        .collect();
    ctx.scene.add_geometry(ctx.view, GeometryKind::Interval, columns)
}

pub(crate) fn area_adaptor(ctx: AdaptorContext<'_>) -> PlotResult<()> {
    let PlotOptions::TinyArea(options) = ctx.options else {
        return Err(PlotError::OptionsMismatch {
            expected: "tiny-area",
            got: ctx.options.type_tag(),
        });
    };
    ctx.scene.add_geometry(
        ctx.view,
        GeometryKind::Area,
        vec![ElementData::Series(indexed_records(&options.data))],
    )
}
