//! Settings specific to one family of series types.

use crate::core::{Color, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::{OptionsError, OptionsResult};
use crate::options::common::{NumberOrString, check_non_negative, check_unit_interval};
use crate::{node_field, string_enum};

string_enum! {
    pub enum LineCap {
        Round => "round",
        Square => "square",
    }
}

string_enum! {
    /// Where a stepped line changes level relative to the point.
    pub enum StepPosition {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

/// `line` and `spline` series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOptions {
    pub linecap: Option<LineCap>,
    pub step: Option<StepPosition>,
}

impl OptionNode for LineOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("linecap", self.linecap.to_option_value()),
            ("step", self.step.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            linecap: read_field(map, "linecap")?,
            step: read_field(map, "step")?,
        })
    }
}

/// `area` and `areaspline` series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaOptions {
    pub fill_color: Option<Color>,
    pub fill_opacity: Option<f64>,
    pub line_color: Option<Color>,
    pub negative_fill_color: Option<Color>,
    pub track_by_area: Option<bool>,
}

impl OptionNode for AreaOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("fillColor", self.fill_color.to_option_value()),
            ("fillOpacity", self.fill_opacity.to_option_value()),
            ("lineColor", self.line_color.to_option_value()),
            ("negativeFillColor", self.negative_fill_color.to_option_value()),
            ("trackByArea", self.track_by_area.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            fill_color: read_field(map, "fillColor")?,
            fill_opacity: read_field(map, "fillOpacity")?,
            line_color: read_field(map, "lineColor")?,
            negative_fill_color: read_field(map, "negativeFillColor")?,
            track_by_area: read_field(map, "trackByArea")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_unit_interval("fillOpacity", self.fill_opacity)
    }
}

/// `column` and `bar` series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnOptions {
    pub border_color: Option<Color>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub color_by_point: Option<bool>,
    pub colors: Option<Vec<Color>>,
    pub group_padding: Option<f64>,
    pub grouping: Option<bool>,
    pub max_point_width: Option<f64>,
    pub min_point_length: Option<f64>,
    pub point_padding: Option<f64>,
    pub point_width: Option<f64>,
}

impl OptionNode for ColumnOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("borderColor", self.border_color.to_option_value()),
            ("borderRadius", self.border_radius.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("colorByPoint", self.color_by_point.to_option_value()),
            ("colors", self.colors.to_option_value()),
            ("groupPadding", self.group_padding.to_option_value()),
            ("grouping", self.grouping.to_option_value()),
            ("maxPointWidth", self.max_point_width.to_option_value()),
            ("minPointLength", self.min_point_length.to_option_value()),
            ("pointPadding", self.point_padding.to_option_value()),
            ("pointWidth", self.point_width.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            border_color: read_field(map, "borderColor")?,
            border_radius: read_field(map, "borderRadius")?,
            border_width: read_field(map, "borderWidth")?,
            color_by_point: read_field(map, "colorByPoint")?,
            colors: read_field(map, "colors")?,
            group_padding: read_field(map, "groupPadding")?,
            grouping: read_field(map, "grouping")?,
            max_point_width: read_field(map, "maxPointWidth")?,
            min_point_length: read_field(map, "minPointLength")?,
            point_padding: read_field(map, "pointPadding")?,
            point_width: read_field(map, "pointWidth")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("borderWidth", self.border_width)?;
        check_unit_interval("groupPadding", self.group_padding)?;
        check_unit_interval("pointPadding", self.point_padding)?;
        check_non_negative("maxPointWidth", self.max_point_width)?;
        check_non_negative("pointWidth", self.point_width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieOptions {
    /// Centre as `[x, y]`, each in pixels or a percentage of the plot area.
    pub center: Option<Vec<NumberOrString>>,
    pub colors: Option<Vec<Color>>,
    pub end_angle: Option<f64>,
    pub ignore_hidden_point: Option<bool>,
    pub inner_size: Option<NumberOrString>,
    pub min_size: Option<NumberOrString>,
    pub size: Option<NumberOrString>,
    pub sliced_offset: Option<f64>,
    pub start_angle: Option<f64>,
}

impl PieOptions {
    /// Turns the pie into a donut with the given inner size.
    #[must_use]
    pub fn donut(inner_size: impl Into<NumberOrString>) -> Self {
        Self {
            inner_size: Some(inner_size.into()),
            ..Self::default()
        }
    }
}

impl OptionNode for PieOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("center", self.center.to_option_value()),
            ("colors", self.colors.to_option_value()),
            ("endAngle", self.end_angle.to_option_value()),
            ("ignoreHiddenPoint", self.ignore_hidden_point.to_option_value()),
            ("innerSize", self.inner_size.to_option_value()),
            ("minSize", self.min_size.to_option_value()),
            ("size", self.size.to_option_value()),
            ("slicedOffset", self.sliced_offset.to_option_value()),
            ("startAngle", self.start_angle.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            center: read_field(map, "center")?,
            colors: read_field(map, "colors")?,
            end_angle: read_field(map, "endAngle")?,
            ignore_hidden_point: read_field(map, "ignoreHiddenPoint")?,
            inner_size: read_field(map, "innerSize")?,
            min_size: read_field(map, "minSize")?,
            size: read_field(map, "size")?,
            sliced_offset: read_field(map, "slicedOffset")?,
            start_angle: read_field(map, "startAngle")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        if let Some(center) = &self.center {
            if center.len() != 2 {
                return Err(OptionsError::invalid_value(
                    "center",
                    format!("expected [x, y], got {} values", center.len()),
                ));
            }
        }
        check_non_negative("slicedOffset", self.sliced_offset)
    }
}

node_field!(LineOptions, AreaOptions, ColumnOptions, PieOptions);
