//! Axis options. `xAxis` and `yAxis` share [`GenericAxis`] and add their own
//! settings on top of it.

use crate::core::{
    Color, CssStyle, Nullable, OptionField, OptionMap, OptionNode, OptionValue, consolidate,
    read_field, untrimmed,
};
use crate::error::{OptionsError, OptionsResult};
use crate::js::CallbackFunction;
use crate::{node_field, string_enum};

use super::common::{Align, DashStyle, VerticalAlign, check_non_negative};

string_enum! {
    pub enum AxisType {
        Linear => "linear",
        Logarithmic => "logarithmic",
        Datetime => "datetime",
        Category => "category",
        Treegrid => "treegrid",
    }
}

string_enum! {
    /// Position of an axis title along the axis.
    pub enum AxisTitleAlign {
        Low => "low",
        Middle => "middle",
        High => "high",
    }
}

string_enum! {
    pub enum TickPosition {
        Inside => "inside",
        Outside => "outside",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisLabels {
    pub align: Option<Align>,
    pub enabled: Option<bool>,
    pub format: Option<String>,
    pub formatter: Option<CallbackFunction>,
    pub rotation: Option<f64>,
    pub step: Option<u32>,
    pub style: Option<CssStyle>,
    pub use_html: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AxisLabels {
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: CallbackFunction) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }
}

impl OptionNode for AxisLabels {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("format", self.format.to_option_value()),
            ("formatter", self.formatter.to_option_value()),
            ("rotation", self.rotation.to_option_value()),
            ("step", self.step.to_option_value()),
            ("style", self.style.to_option_value()),
            ("useHTML", self.use_html.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            enabled: read_field(map, "enabled")?,
            format: read_field(map, "format")?,
            formatter: read_field(map, "formatter")?,
            rotation: read_field(map, "rotation")?,
            step: read_field(map, "step")?,
            style: read_field(map, "style")?,
            use_html: read_field(map, "useHTML")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTitle {
    pub align: Option<AxisTitleAlign>,
    pub margin: Option<f64>,
    pub offset: Option<f64>,
    pub rotation: Option<f64>,
    pub style: Option<CssStyle>,
    /// `null` hides the title.
    pub text: Option<Nullable<String>>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AxisTitle {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(Nullable::Value(text.into())),
            ..Self::default()
        }
    }

    /// A title that explicitly suppresses the default axis title.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            text: Some(Nullable::Null),
            ..Self::default()
        }
    }
}

impl OptionNode for AxisTitle {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("margin", self.margin.to_option_value()),
            ("offset", self.offset.to_option_value()),
            ("rotation", self.rotation.to_option_value()),
            ("style", self.style.to_option_value()),
            ("text", self.text.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            margin: read_field(map, "margin")?,
            offset: read_field(map, "offset")?,
            rotation: read_field(map, "rotation")?,
            style: read_field(map, "style")?,
            text: read_field(map, "text")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

/// Label drawn on a plot line or plot band.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotLabel {
    pub align: Option<Align>,
    pub rotation: Option<f64>,
    pub style: Option<CssStyle>,
    pub text: Option<String>,
    pub vertical_align: Option<VerticalAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl OptionNode for PlotLabel {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("rotation", self.rotation.to_option_value()),
            ("style", self.style.to_option_value()),
            ("text", self.text.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            rotation: read_field(map, "rotation")?,
            style: read_field(map, "style")?,
            text: read_field(map, "text")?,
            vertical_align: read_field(map, "verticalAlign")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotLine {
    pub class_name: Option<String>,
    pub color: Option<Color>,
    pub dash_style: Option<DashStyle>,
    pub id: Option<String>,
    pub label: Option<PlotLabel>,
    pub value: Option<f64>,
    pub width: Option<f64>,
    pub z_index: Option<i32>,
}

impl PlotLine {
    #[must_use]
    pub fn at(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(PlotLabel {
            text: Some(text.into()),
            ..PlotLabel::default()
        });
        self
    }
}

impl OptionNode for PlotLine {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("className", self.class_name.to_option_value()),
            ("color", self.color.to_option_value()),
            ("dashStyle", self.dash_style.to_option_value()),
            ("id", self.id.to_option_value()),
            ("label", self.label.to_option_value()),
            ("value", self.value.to_option_value()),
            ("width", self.width.to_option_value()),
            ("zIndex", self.z_index.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            class_name: read_field(map, "className")?,
            color: read_field(map, "color")?,
            dash_style: read_field(map, "dashStyle")?,
            id: read_field(map, "id")?,
            label: read_field(map, "label")?,
            value: read_field(map, "value")?,
            width: read_field(map, "width")?,
            z_index: read_field(map, "zIndex")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("width", self.width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotBand {
    pub border_color: Option<Color>,
    pub border_width: Option<f64>,
    pub class_name: Option<String>,
    pub color: Option<Color>,
    pub from: Option<f64>,
    pub id: Option<String>,
    pub label: Option<PlotLabel>,
    pub to: Option<f64>,
    pub z_index: Option<i32>,
}

impl PlotBand {
    #[must_use]
    pub fn between(from: f64, to: f64) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl OptionNode for PlotBand {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("borderColor", self.border_color.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("className", self.class_name.to_option_value()),
            ("color", self.color.to_option_value()),
            ("from", self.from.to_option_value()),
            ("id", self.id.to_option_value()),
            ("label", self.label.to_option_value()),
            ("to", self.to.to_option_value()),
            ("zIndex", self.z_index.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            border_color: read_field(map, "borderColor")?,
            border_width: read_field(map, "borderWidth")?,
            class_name: read_field(map, "className")?,
            color: read_field(map, "color")?,
            from: read_field(map, "from")?,
            id: read_field(map, "id")?,
            label: read_field(map, "label")?,
            to: read_field(map, "to")?,
            z_index: read_field(map, "zIndex")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderWidth", self.border_width)?;
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(OptionsError::invalid_value(
                    "from",
                    format!("band start {from} is after its end {to}"),
                ));
            }
        }
        Ok(())
    }
}

/// Settings common to every cartesian axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericAxis {
    pub allow_decimals: Option<bool>,
    pub categories: Option<Vec<String>>,
    pub ceiling: Option<f64>,
    pub floor: Option<f64>,
    pub grid_line_color: Option<Color>,
    pub grid_line_dash_style: Option<DashStyle>,
    pub grid_line_width: Option<f64>,
    pub id: Option<String>,
    pub labels: Option<AxisLabels>,
    pub line_color: Option<Color>,
    pub line_width: Option<f64>,
    /// `null` lets the axis compute its extreme from the data.
    pub max: Option<Nullable<f64>>,
    pub max_padding: Option<f64>,
    pub min: Option<Nullable<f64>>,
    pub min_padding: Option<f64>,
    pub opposite: Option<bool>,
    pub plot_bands: Option<Vec<PlotBand>>,
    pub plot_lines: Option<Vec<PlotLine>>,
    pub reversed: Option<bool>,
    pub tick_amount: Option<u32>,
    pub tick_interval: Option<f64>,
    pub tick_length: Option<f64>,
    pub tick_position: Option<TickPosition>,
    pub title: Option<AxisTitle>,
    pub r#type: Option<AxisType>,
    pub visible: Option<bool>,
}

impl OptionNode for GenericAxis {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("allowDecimals", self.allow_decimals.to_option_value()),
            ("categories", self.categories.to_option_value()),
            ("ceiling", self.ceiling.to_option_value()),
            ("floor", self.floor.to_option_value()),
            ("gridLineColor", self.grid_line_color.to_option_value()),
            ("gridLineDashStyle", self.grid_line_dash_style.to_option_value()),
            ("gridLineWidth", self.grid_line_width.to_option_value()),
            ("id", self.id.to_option_value()),
            ("labels", self.labels.to_option_value()),
            ("lineColor", self.line_color.to_option_value()),
            ("lineWidth", self.line_width.to_option_value()),
            ("max", self.max.to_option_value()),
            ("maxPadding", self.max_padding.to_option_value()),
            ("min", self.min.to_option_value()),
            ("minPadding", self.min_padding.to_option_value()),
            ("opposite", self.opposite.to_option_value()),
            ("plotBands", self.plot_bands.to_option_value()),
            ("plotLines", self.plot_lines.to_option_value()),
            ("reversed", self.reversed.to_option_value()),
            ("tickAmount", self.tick_amount.to_option_value()),
            ("tickInterval", self.tick_interval.to_option_value()),
            ("tickLength", self.tick_length.to_option_value()),
            ("tickPosition", self.tick_position.to_option_value()),
            ("title", self.title.to_option_value()),
            ("type", self.r#type.to_option_value()),
            ("visible", self.visible.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            allow_decimals: read_field(map, "allowDecimals")?,
            categories: read_field(map, "categories")?,
            ceiling: read_field(map, "ceiling")?,
            floor: read_field(map, "floor")?,
            grid_line_color: read_field(map, "gridLineColor")?,
            grid_line_dash_style: read_field(map, "gridLineDashStyle")?,
            grid_line_width: read_field(map, "gridLineWidth")?,
            id: read_field(map, "id")?,
            labels: read_field(map, "labels")?,
            line_color: read_field(map, "lineColor")?,
            line_width: read_field(map, "lineWidth")?,
            max: read_field(map, "max")?,
            max_padding: read_field(map, "maxPadding")?,
            min: read_field(map, "min")?,
            min_padding: read_field(map, "minPadding")?,
            opposite: read_field(map, "opposite")?,
            plot_bands: read_field(map, "plotBands")?,
            plot_lines: read_field(map, "plotLines")?,
            reversed: read_field(map, "reversed")?,
            tick_amount: read_field(map, "tickAmount")?,
            tick_interval: read_field(map, "tickInterval")?,
            tick_length: read_field(map, "tickLength")?,
            tick_position: read_field(map, "tickPosition")?,
            title: read_field(map, "title")?,
            r#type: read_field(map, "type")?,
            visible: read_field(map, "visible")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("gridLineWidth", self.grid_line_width)?;
        check_non_negative("lineWidth", self.line_width)?;
        check_non_negative("tickLength", self.tick_length)?;
        if let Some(interval) = self.tick_interval {
            if !(interval.is_finite() && interval > 0.0) {
                return Err(OptionsError::invalid_value(
                    "tickInterval",
                    format!("{interval} must be positive"),
                ));
            }
        }
        let extreme = |value: &Option<Nullable<f64>>| value.as_ref().and_then(|v| v.value().copied());
        if let (Some(min), Some(max)) = (extreme(&self.min), extreme(&self.max)) {
            if min > max {
                return Err(OptionsError::invalid_value(
                    "min",
                    format!("axis minimum {min} exceeds maximum {max}"),
                ));
            }
        }
        Ok(())
    }
}

macro_rules! axis_builders {
    ($axis:ty) => {
        impl $axis {
            #[must_use]
            pub fn with_title(mut self, text: impl Into<String>) -> Self {
                self.generic.title = Some(AxisTitle::new(text));
                self
            }

            #[must_use]
            pub fn with_type(mut self, axis_type: AxisType) -> Self {
                self.generic.r#type = Some(axis_type);
                self
            }

            #[must_use]
            pub fn with_categories<I, S>(mut self, categories: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.generic.categories = Some(categories.into_iter().map(Into::into).collect());
                self
            }

            #[must_use]
            pub fn with_extremes(mut self, min: f64, max: f64) -> Self {
                self.generic.min = Some(Nullable::Value(min));
                self.generic.max = Some(Nullable::Value(max));
                self
            }

            #[must_use]
            pub fn with_plot_line(mut self, line: PlotLine) -> Self {
                self.generic.plot_lines.get_or_insert_with(Vec::new).push(line);
                self
            }

            #[must_use]
            pub fn with_plot_band(mut self, band: PlotBand) -> Self {
                self.generic.plot_bands.get_or_insert_with(Vec::new).push(band);
                self
            }

            #[must_use]
            pub fn with_labels(mut self, labels: AxisLabels) -> Self {
                self.generic.labels = Some(labels);
                self
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Crosshair {
    pub class_name: Option<String>,
    pub color: Option<Color>,
    pub dash_style: Option<DashStyle>,
    pub snap: Option<bool>,
    pub width: Option<f64>,
    pub z_index: Option<i32>,
}

impl OptionNode for Crosshair {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("className", self.class_name.to_option_value()),
            ("color", self.color.to_option_value()),
            ("dashStyle", self.dash_style.to_option_value()),
            ("snap", self.snap.to_option_value()),
            ("width", self.width.to_option_value()),
            ("zIndex", self.z_index.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            class_name: read_field(map, "className")?,
            color: read_field(map, "color")?,
            dash_style: read_field(map, "dashStyle")?,
            snap: read_field(map, "snap")?,
            width: read_field(map, "width")?,
            z_index: read_field(map, "zIndex")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("width", self.width)
    }
}

/// `crosshair: true` or a crosshair configuration object.
#[derive(Debug, Clone, PartialEq)]
pub enum CrosshairSetting {
    Enabled(bool),
    Options(Crosshair),
}

impl OptionField for CrosshairSetting {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Enabled(enabled) => OptionValue::Bool(*enabled),
            Self::Options(options) => options.to_option_value(),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Bool(enabled) => Ok(Self::Enabled(*enabled)),
            OptionValue::Object(_) => Crosshair::from_option_value(value, field).map(Self::Options),
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected boolean or crosshair object, got {}", other.kind_name()),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct XAxis {
    pub generic: GenericAxis,
    pub crosshair: Option<CrosshairSetting>,
}

axis_builders!(XAxis);

impl XAxis {
    #[must_use]
    pub fn with_crosshair(mut self, crosshair: CrosshairSetting) -> Self {
        self.crosshair = Some(crosshair);
        self
    }
}

impl OptionNode for XAxis {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([
            untrimmed([("crosshair", self.crosshair.to_option_value())]),
            self.generic.to_untrimmed_map(),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            generic: GenericAxis::from_map(map)?,
            crosshair: read_field(map, "crosshair")?,
        })
    }
}

/// Totals drawn on top of stacked columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackLabels {
    pub align: Option<Align>,
    pub enabled: Option<bool>,
    pub format: Option<String>,
    pub formatter: Option<CallbackFunction>,
    pub style: Option<CssStyle>,
    pub vertical_align: Option<VerticalAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl OptionNode for StackLabels {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("format", self.format.to_option_value()),
            ("formatter", self.formatter.to_option_value()),
            ("style", self.style.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            enabled: read_field(map, "enabled")?,
            format: read_field(map, "format")?,
            formatter: read_field(map, "formatter")?,
            style: read_field(map, "style")?,
            vertical_align: read_field(map, "verticalAlign")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YAxis {
    pub generic: GenericAxis,
    pub reversed_stacks: Option<bool>,
    pub stack_labels: Option<StackLabels>,
}

axis_builders!(YAxis);

impl YAxis {
    #[must_use]
    pub fn with_stack_labels(mut self, labels: StackLabels) -> Self {
        self.stack_labels = Some(labels);
        self
    }
}

impl OptionNode for YAxis {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([
            untrimmed([
                ("reversedStacks", self.reversed_stacks.to_option_value()),
                ("stackLabels", self.stack_labels.to_option_value()),
            ]),
            self.generic.to_untrimmed_map(),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            generic: GenericAxis::from_map(map)?,
            reversed_stacks: read_field(map, "reversedStacks")?,
            stack_labels: read_field(map, "stackLabels")?,
        })
    }
}

node_field!(
    AxisLabels,
    AxisTitle,
    PlotLabel,
    PlotLine,
    PlotBand,
    GenericAxis,
    Crosshair,
    XAxis,
    StackLabels,
    YAxis,
);
