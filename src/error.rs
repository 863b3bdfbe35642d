use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid region: start=({x0}, {y0}), end=({x1}, {y1})")]
    InvalidRegion { x0: f64, y0: f64, x1: f64, y1: f64 },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("adaptor for `{expected}` received `{got}` options")]
    OptionsMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("unknown view id")]
    UnknownView,

    #[error("unknown element id")]
    UnknownElement,
}
