//! Series, data points and plot options.

mod data;
mod generic;
mod kinds;
mod plot;
mod typed;

pub use data::DataPoint;
pub use generic::{DataLabels, Marker, SeriesEvents, SeriesOptions};
pub use kinds::{AreaOptions, ColumnOptions, LineCap, LineOptions, PieOptions, StepPosition};
pub use plot::PlotOptions;
pub use typed::{
    AreaPlotOptions, AreaSeries, ColumnPlotOptions, ColumnSeries, LinePlotOptions, LineSeries,
    PiePlotOptions, PieSeries, Series, SeriesBase, SeriesKind, TypedOptions, TypedSeries,
};
