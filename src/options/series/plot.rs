use crate::core::{OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::node_field;

use super::generic::SeriesOptions;
use super::typed::{AreaPlotOptions, ColumnPlotOptions, LinePlotOptions, PiePlotOptions};

/// Defaults applied to every series of a type (`plotOptions.<type>`) or to
/// all series (`plotOptions.series`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    pub area: Option<AreaPlotOptions>,
    pub areaspline: Option<AreaPlotOptions>,
    pub bar: Option<ColumnPlotOptions>,
    pub column: Option<ColumnPlotOptions>,
    pub line: Option<LinePlotOptions>,
    pub pie: Option<PiePlotOptions>,
    pub series: Option<SeriesOptions>,
    pub spline: Option<LinePlotOptions>,
}

impl PlotOptions {
    #[must_use]
    pub fn with_series(mut self, options: SeriesOptions) -> Self {
        self.series = Some(options);
        self
    }

    #[must_use]
    pub fn with_line(mut self, options: LinePlotOptions) -> Self {
        self.line = Some(options);
        self
    }

    #[must_use]
    pub fn with_column(mut self, options: ColumnPlotOptions) -> Self {
        self.column = Some(options);
        self
    }

    #[must_use]
    pub fn with_pie(mut self, options: PiePlotOptions) -> Self {
        self.pie = Some(options);
        self
    }
}

impl OptionNode for PlotOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("area", self.area.to_option_value()),
            ("areaspline", self.areaspline.to_option_value()),
            ("bar", self.bar.to_option_value()),
            ("column", self.column.to_option_value()),
            ("line", self.line.to_option_value()),
            ("pie", self.pie.to_option_value()),
            ("series", self.series.to_option_value()),
            ("spline", self.spline.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            area: read_field(map, "area")?,
            areaspline: read_field(map, "areaspline")?,
            bar: read_field(map, "bar")?,
            column: read_field(map, "column")?,
            line: read_field(map, "line")?,
            pie: read_field(map, "pie")?,
            series: read_field(map, "series")?,
            spline: read_field(map, "spline")?,
        })
    }
}

node_field!(PlotOptions);
