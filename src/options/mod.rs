//! Typed option nodes, from the top-level options object down.

pub mod accessibility;
pub mod axes;
pub mod chart;
pub mod common;
pub mod credits;
pub mod lang;
pub mod legend;
pub mod series;
pub mod title;
pub mod tooltip;

use std::collections::HashSet;

pub use accessibility::{
    Accessibility, AccessibilityPoint, KeyboardNavigation, LandmarkVerbosity, ScreenReaderSection,
};
pub use axes::{
    AxisLabels, AxisTitle, AxisTitleAlign, AxisType, Crosshair, CrosshairSetting, GenericAxis,
    PlotBand, PlotLabel, PlotLine, StackLabels, TickPosition, XAxis, YAxis,
};
pub use chart::{ChartEvents, ChartOptions, ZoomType};
pub use common::{
    Align, Animation, AnimationOptions, Cursor, DashStyle, NumberOrString, OneOrMany, Stacking,
    VerticalAlign,
};
pub use credits::{Credits, CreditsPosition};
pub use lang::Language;
pub use legend::{Legend, LegendLayout};
pub use series::{
    AreaOptions, AreaPlotOptions, AreaSeries, ColumnOptions, ColumnPlotOptions, ColumnSeries,
    DataLabels, DataPoint, LineCap, LineOptions, LinePlotOptions, LineSeries, Marker, PieOptions,
    PiePlotOptions, PieSeries, PlotOptions, Series, SeriesBase, SeriesEvents, SeriesKind,
    SeriesOptions, StepPosition, TypedOptions, TypedSeries,
};
pub use title::{Caption, Subtitle, Title, TitleBase};
pub use tooltip::{Tooltip, TooltipShape};

use crate::core::{Color, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::{OptionsError, OptionsResult};
use crate::node_field;

/// The options object passed to `Highcharts.chart()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighchartsOptions {
    pub accessibility: Option<Accessibility>,
    pub caption: Option<Caption>,
    pub chart: Option<ChartOptions>,
    /// Default colour cycle for series.
    pub colors: Option<Vec<Color>>,
    pub credits: Option<Credits>,
    pub legend: Option<Legend>,
    pub plot_options: Option<PlotOptions>,
    pub series: Option<Vec<Series>>,
    pub subtitle: Option<Subtitle>,
    pub title: Option<Title>,
    pub tooltip: Option<Tooltip>,
    pub x_axis: Option<OneOrMany<XAxis>>,
    pub y_axis: Option<OneOrMany<YAxis>>,
}

impl HighchartsOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Title::new(title));
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(Subtitle::new(subtitle));
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: ChartOptions) -> Self {
        self.chart = Some(chart);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: XAxis) -> Self {
        self.x_axis = Some(OneOrMany::One(axis));
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: YAxis) -> Self {
        self.y_axis = Some(OneOrMany::One(axis));
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_credits(mut self, credits: Credits) -> Self {
        self.credits = Some(credits);
        self
    }

    #[must_use]
    pub fn with_plot_options(mut self, plot_options: PlotOptions) -> Self {
        self.plot_options = Some(plot_options);
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: impl Into<Series>) -> Self {
        self.add_series(series);
        self
    }

    pub fn add_series(&mut self, series: impl Into<Series>) {
        self.series.get_or_insert_with(Vec::new).push(series.into());
    }

    /// Looks a series up by its `id`.
    #[must_use]
    pub fn series_by_id(&self, id: &str) -> Option<&Series> {
        self.series
            .as_deref()?
            .iter()
            .find(|series| series.base().id.as_deref() == Some(id))
    }
}

impl OptionNode for HighchartsOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("accessibility", self.accessibility.to_option_value()),
            ("caption", self.caption.to_option_value()),
            ("chart", self.chart.to_option_value()),
            ("colors", self.colors.to_option_value()),
            ("credits", self.credits.to_option_value()),
            ("legend", self.legend.to_option_value()),
            ("plotOptions", self.plot_options.to_option_value()),
            ("series", self.series.to_option_value()),
            ("subtitle", self.subtitle.to_option_value()),
            ("title", self.title.to_option_value()),
            ("tooltip", self.tooltip.to_option_value()),
            ("xAxis", self.x_axis.to_option_value()),
            ("yAxis", self.y_axis.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            accessibility: read_field(map, "accessibility")?,
            caption: read_field(map, "caption")?,
            chart: read_field(map, "chart")?,
            colors: read_field(map, "colors")?,
            credits: read_field(map, "credits")?,
            legend: read_field(map, "legend")?,
            plot_options: read_field(map, "plotOptions")?,
            series: read_field(map, "series")?,
            subtitle: read_field(map, "subtitle")?,
            title: read_field(map, "title")?,
            tooltip: read_field(map, "tooltip")?,
            x_axis: read_field(map, "xAxis")?,
            y_axis: read_field(map, "yAxis")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        let mut seen = HashSet::new();
        for series in self.series.iter().flatten() {
            if let Some(id) = series.base().id.as_deref() {
                if !seen.insert(id) {
                    return Err(OptionsError::invalid_value(
                        "series",
                        format!("duplicate series id `{id}`"),
                    ));
                }
            }
        }
        Ok(())
    }
}

node_field!(HighchartsOptions);
