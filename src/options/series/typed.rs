//! Series composed from the series base, type-specific settings and the
//! generic series settings.

use tracing::debug;

use crate::core::{OptionField, OptionMap, OptionNode, OptionValue, consolidate, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::options::common::NumberOrString;
use crate::{node_field, string_enum};

use super::data::DataPoint;
use super::generic::SeriesOptions;
use super::kinds::{AreaOptions, ColumnOptions, LineOptions, PieOptions};

string_enum! {
    pub enum SeriesKind {
        Line => "line",
        Spline => "spline",
        Area => "area",
        AreaSpline => "areaspline",
        Column => "column",
        Bar => "bar",
        Pie => "pie",
    }
}

/// Type-specific settings layered over the generic ones. This is the shape
/// of both `plotOptions.<type>` and the option part of a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedOptions<T> {
    pub generic: SeriesOptions,
    pub specific: T,
}

impl<T> TypedOptions<T> {
    #[must_use]
    pub fn new(generic: SeriesOptions, specific: T) -> Self {
        Self { generic, specific }
    }
}

impl<T: OptionNode> OptionNode for TypedOptions<T> {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([self.specific.to_untrimmed_map(), self.generic.to_untrimmed_map()])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            generic: SeriesOptions::from_map(map)?,
            specific: T::from_map(map)?,
        })
    }
}

pub type LinePlotOptions = TypedOptions<LineOptions>;
pub type AreaPlotOptions = TypedOptions<AreaOptions>;
pub type ColumnPlotOptions = TypedOptions<ColumnOptions>;
pub type PiePlotOptions = TypedOptions<PieOptions>;

/// Identity and data of a single series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesBase {
    pub data: Option<Vec<DataPoint>>,
    pub id: Option<String>,
    pub index: Option<u32>,
    pub legend_index: Option<u32>,
    pub name: Option<String>,
    pub stack: Option<NumberOrString>,
    pub r#type: Option<SeriesKind>,
    /// Axis index or id.
    pub x_axis: Option<NumberOrString>,
    pub y_axis: Option<NumberOrString>,
}

impl OptionNode for SeriesBase {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("data", self.data.to_option_value()),
            ("id", self.id.to_option_value()),
            ("index", self.index.to_option_value()),
            ("legendIndex", self.legend_index.to_option_value()),
            ("name", self.name.to_option_value()),
            ("stack", self.stack.to_option_value()),
            ("type", self.r#type.to_option_value()),
            ("xAxis", self.x_axis.to_option_value()),
            ("yAxis", self.y_axis.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            data: read_field(map, "data")?,
            id: read_field(map, "id")?,
            index: read_field(map, "index")?,
            legend_index: read_field(map, "legendIndex")?,
            name: read_field(map, "name")?,
            stack: read_field(map, "stack")?,
            r#type: read_field(map, "type")?,
            x_axis: read_field(map, "xAxis")?,
            y_axis: read_field(map, "yAxis")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypedSeries<T> {
    pub base: SeriesBase,
    pub options: TypedOptions<T>,
}

impl<T: OptionNode> TypedSeries<T> {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_data<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        self.base.data = Some(points.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_generic(mut self, generic: SeriesOptions) -> Self {
        self.options.generic = generic;
        self
    }

    #[must_use]
    pub fn with_specific(mut self, specific: T) -> Self {
        self.options.specific = specific;
        self
    }
}

impl<T: OptionNode> OptionNode for TypedSeries<T> {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([self.base.to_untrimmed_map(), self.options.to_untrimmed_map()])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            base: SeriesBase::from_map(map)?,
            options: TypedOptions::from_map(map)?,
        })
    }
}

pub type LineSeries = TypedSeries<LineOptions>;
pub type AreaSeries = TypedSeries<AreaOptions>;
pub type ColumnSeries = TypedSeries<ColumnOptions>;
pub type PieSeries = TypedSeries<PieOptions>;

/// One entry of the top-level `series` array, dispatched on its `type` key.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Spline(LineSeries),
    Area(AreaSeries),
    AreaSpline(AreaSeries),
    Column(ColumnSeries),
    Bar(ColumnSeries),
    Pie(PieSeries),
}

impl Default for Series {
    fn default() -> Self {
        Self::Line(LineSeries::default())
    }
}

impl Series {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Line(_) => SeriesKind::Line,
            Self::Spline(_) => SeriesKind::Spline,
            Self::Area(_) => SeriesKind::Area,
            Self::AreaSpline(_) => SeriesKind::AreaSpline,
            Self::Column(_) => SeriesKind::Column,
            Self::Bar(_) => SeriesKind::Bar,
            Self::Pie(_) => SeriesKind::Pie,
        }
    }

    #[must_use]
    pub fn base(&self) -> &SeriesBase {
        match self {
            Self::Line(series) | Self::Spline(series) => &series.base,
            Self::Area(series) | Self::AreaSpline(series) => &series.base,
            Self::Column(series) | Self::Bar(series) => &series.base,
            Self::Pie(series) => &series.base,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    /// Builds a series of `kind`; the map's own `type` key is ignored.
    pub fn from_map_as(kind: SeriesKind, map: &OptionMap) -> OptionsResult<Self> {
        Ok(match kind {
            SeriesKind::Line => Self::Line(LineSeries::from_map(map)?),
            SeriesKind::Spline => Self::Spline(LineSeries::from_map(map)?),
            SeriesKind::Area => Self::Area(AreaSeries::from_map(map)?),
            SeriesKind::AreaSpline => Self::AreaSpline(AreaSeries::from_map(map)?),
            SeriesKind::Column => Self::Column(ColumnSeries::from_map(map)?),
            SeriesKind::Bar => Self::Bar(ColumnSeries::from_map(map)?),
            SeriesKind::Pie => Self::Pie(PieSeries::from_map(map)?),
        })
    }
}

impl OptionNode for Series {
    fn to_untrimmed_map(&self) -> OptionMap {
        let mut map = match self {
            Self::Line(series) | Self::Spline(series) => series.to_untrimmed_map(),
            Self::Area(series) | Self::AreaSpline(series) => series.to_untrimmed_map(),
            Self::Column(series) | Self::Bar(series) => series.to_untrimmed_map(),
            Self::Pie(series) => series.to_untrimmed_map(),
        };
        map.insert("type".to_owned(), self.kind().to_option_value());
        map
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        let kind: Option<SeriesKind> = read_field(map, "type")?;
        let kind = kind.unwrap_or_else(|| {
            debug!("series without a type, reading it as a line series");
            SeriesKind::Line
        });
        Self::from_map_as(kind, map)
    }
}

impl From<LineSeries> for Series {
    fn from(series: LineSeries) -> Self {
        Self::Line(series)
    }
}

impl From<AreaSeries> for Series {
    fn from(series: AreaSeries) -> Self {
        Self::Area(series)
    }
}

impl From<ColumnSeries> for Series {
    fn from(series: ColumnSeries) -> Self {
        Self::Column(series)
    }
}

impl From<PieSeries> for Series {
    fn from(series: PieSeries) -> Self {
        Self::Pie(series)
    }
}

impl OptionField for Series {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Object(self.to_untrimmed_map())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Object(map) => Self::from_map(map),
            other => Err(crate::error::OptionsError::invalid_value(
                field,
                format!("expected series object, got {}", other.kind_name()),
            )),
        }
    }
}

node_field!(
    SeriesBase,
    LinePlotOptions,
    AreaPlotOptions,
    ColumnPlotOptions,
    PiePlotOptions,
    LineSeries,
    AreaSeries,
    ColumnSeries,
    PieSeries,
);
