//! Options shared by every series type, whether set per series or under
//! `plotOptions.series`.

use crate::core::{Color, CssStyle, Nullable, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::js::CallbackFunction;
use crate::node_field;
use crate::options::common::{
    Align, Animation, Cursor, DashStyle, NumberOrString, Stacking, VerticalAlign,
    check_non_negative, check_unit_interval,
};
use crate::options::tooltip::Tooltip;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataLabels {
    pub align: Option<Align>,
    pub allow_overlap: Option<bool>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub color: Option<Color>,
    pub crop: Option<bool>,
    /// Distance from the pie edge; a pixel value or a percentage.
    pub distance: Option<NumberOrString>,
    pub enabled: Option<bool>,
    pub format: Option<String>,
    pub formatter: Option<CallbackFunction>,
    pub inside: Option<bool>,
    pub rotation: Option<f64>,
    pub style: Option<CssStyle>,
    pub use_html: Option<bool>,
    pub vertical_align: Option<VerticalAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z_index: Option<i32>,
}

impl DataLabels {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: Some(true),
            ..Self::default()
        }
    }

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
}

impl OptionNode for DataLabels {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("allowOverlap", self.allow_overlap.to_option_value()),
            ("backgroundColor", self.background_color.to_option_value()),
            ("borderColor", self.border_color.to_option_value()),
            ("borderRadius", self.border_radius.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("color", self.color.to_option_value()),
            ("crop", self.crop.to_option_value()),
            ("distance", self.distance.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("format", self.format.to_option_value()),
            ("formatter", self.formatter.to_option_value()),
            ("inside", self.inside.to_option_value()),
            ("rotation", self.rotation.to_option_value()),
            ("style", self.style.to_option_value()),
            ("useHTML", self.use_html.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
            ("zIndex", self.z_index.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            align: read_field(map, "align")?,
            allow_overlap: read_field(map, "allowOverlap")?,
            background_color: read_field(map, "backgroundColor")?,
            border_color: read_field(map, "borderColor")?,
            border_radius: read_field(map, "borderRadius")?,
            border_width: read_field(map, "borderWidth")?,
            color: read_field(map, "color")?,
            crop: read_field(map, "crop")?,
            distance: read_field(map, "distance")?,
            enabled: read_field(map, "enabled")?,
            format: read_field(map, "format")?,
            formatter: read_field(map, "formatter")?,
            inside: read_field(map, "inside")?,
            rotation: read_field(map, "rotation")?,
            style: read_field(map, "style")?,
            use_html: read_field(map, "useHTML")?,
            vertical_align: read_field(map, "verticalAlign")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
            z_index: read_field(map, "zIndex")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("borderWidth", self.border_width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marker {
    pub enabled: Option<bool>,
    pub fill_color: Option<Color>,
    pub height: Option<f64>,
    pub line_color: Option<Color>,
    pub line_width: Option<f64>,
    pub radius: Option<f64>,
    /// `circle`, `square`, `diamond`, `triangle`, `triangle-down` or
    /// `url(...)` for an image.
    pub symbol: Option<String>,
    pub width: Option<f64>,
}

impl Marker {
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl OptionNode for Marker {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("enabled", self.enabled.to_option_value()),
            ("fillColor", self.fill_color.to_option_value()),
            ("height", self.height.to_option_value()),
            ("lineColor", self.line_color.to_option_value()),
            ("lineWidth", self.line_width.to_option_value()),
            ("radius", self.radius.to_option_value()),
            ("symbol", self.symbol.to_option_value()),
            ("width", self.width.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            enabled: read_field(map, "enabled")?,
            fill_color: read_field(map, "fillColor")?,
            height: read_field(map, "height")?,
            line_color: read_field(map, "lineColor")?,
            line_width: read_field(map, "lineWidth")?,
            radius: read_field(map, "radius")?,
            symbol: read_field(map, "symbol")?,
            width: read_field(map, "width")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("height", self.height)?;
        check_non_negative("lineWidth", self.line_width)?;
        check_non_negative("radius", self.radius)?;
        check_non_negative("width", self.width)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesEvents {
    pub after_animate: Option<CallbackFunction>,
    pub checkbox_click: Option<CallbackFunction>,
    pub click: Option<CallbackFunction>,
    pub hide: Option<CallbackFunction>,
    pub legend_item_click: Option<CallbackFunction>,
    pub mouse_out: Option<CallbackFunction>,
    pub mouse_over: Option<CallbackFunction>,
    pub show: Option<CallbackFunction>,
}

impl OptionNode for SeriesEvents {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("afterAnimate", self.after_animate.to_option_value()),
            ("checkboxClick", self.checkbox_click.to_option_value()),
            ("click", self.click.to_option_value()),
            ("hide", self.hide.to_option_value()),
            ("legendItemClick", self.legend_item_click.to_option_value()),
            ("mouseOut", self.mouse_out.to_option_value()),
            ("mouseOver", self.mouse_over.to_option_value()),
            ("show", self.show.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            after_animate: read_field(map, "afterAnimate")?,
            checkbox_click: read_field(map, "checkboxClick")?,
            click: read_field(map, "click")?,
            hide: read_field(map, "hide")?,
            legend_item_click: read_field(map, "legendItemClick")?,
            mouse_out: read_field(map, "mouseOut")?,
            mouse_over: read_field(map, "mouseOver")?,
            show: read_field(map, "show")?,
        })
    }
}

/// Settings every series type understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesOptions {
    pub allow_point_select: Option<bool>,
    pub animation: Option<Animation>,
    pub class_name: Option<String>,
    pub clip: Option<bool>,
    pub color: Option<Color>,
    pub color_index: Option<u32>,
    pub connect_nulls: Option<bool>,
    pub cursor: Option<Cursor>,
    pub dash_style: Option<DashStyle>,
    pub data_labels: Option<DataLabels>,
    pub enable_mouse_tracking: Option<bool>,
    pub events: Option<SeriesEvents>,
    /// Names the array positions used when points are given as arrays.
    pub keys: Option<Vec<String>>,
    pub line_width: Option<f64>,
    pub marker: Option<Marker>,
    pub opacity: Option<f64>,
    pub point_interval: Option<f64>,
    pub point_start: Option<f64>,
    pub selected: Option<bool>,
    pub show_in_legend: Option<bool>,
    pub stacking: Option<Stacking>,
    /// `null` draws areas and columns from the axis minimum.
    pub threshold: Option<Nullable<f64>>,
    pub tooltip: Option<Tooltip>,
    pub turbo_threshold: Option<u32>,
    pub visible: Option<bool>,
    pub z_index: Option<i32>,
}

impl OptionNode for SeriesOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("allowPointSelect", self.allow_point_select.to_option_value()),
            ("animation", self.animation.to_option_value()),
            ("className", self.class_name.to_option_value()),
            ("clip", self.clip.to_option_value()),
            ("color", self.color.to_option_value()),
            ("colorIndex", self.color_index.to_option_value()),
            ("connectNulls", self.connect_nulls.to_option_value()),
            ("cursor", self.cursor.to_option_value()),
            ("dashStyle", self.dash_style.to_option_value()),
            ("dataLabels", self.data_labels.to_option_value()),
            ("enableMouseTracking", self.enable_mouse_tracking.to_option_value()),
            ("events", self.events.to_option_value()),
            ("keys", self.keys.to_option_value()),
            ("lineWidth", self.line_width.to_option_value()),
            ("marker", self.marker.to_option_value()),
            ("opacity", self.opacity.to_option_value()),
            ("pointInterval", self.point_interval.to_option_value()),
            ("pointStart", self.point_start.to_option_value()),
            ("selected", self.selected.to_option_value()),
            ("showInLegend", self.show_in_legend.to_option_value()),
            ("stacking", self.stacking.to_option_value()),
            ("threshold", self.threshold.to_option_value()),
            ("tooltip", self.tooltip.to_option_value()),
            ("turboThreshold", self.turbo_threshold.to_option_value()),
            ("visible", self.visible.to_option_value()),
            ("zIndex", self.z_index.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            allow_point_select: read_field(map, "allowPointSelect")?,
            animation: read_field(map, "animation")?,
            class_name: read_field(map, "className")?,
            clip: read_field(map, "clip")?,
            color: read_field(map, "color")?,
            color_index: read_field(map, "colorIndex")?,
            connect_nulls: read_field(map, "connectNulls")?,
            cursor: read_field(map, "cursor")?,
            dash_style: read_field(map, "dashStyle")?,
            data_labels: read_field(map, "dataLabels")?,
            enable_mouse_tracking: read_field(map, "enableMouseTracking")?,
            events: read_field(map, "events")?,
            keys: read_field(map, "keys")?,
            line_width: read_field(map, "lineWidth")?,
            marker: read_field(map, "marker")?,
            opacity: read_field(map, "opacity")?,
            point_interval: read_field(map, "pointInterval")?,
            point_start: read_field(map, "pointStart")?,
            selected: read_field(map, "selected")?,
            show_in_legend: read_field(map, "showInLegend")?,
            stacking: read_field(map, "stacking")?,
            threshold: read_field(map, "threshold")?,
            tooltip: read_field(map, "tooltip")?,
            turbo_threshold: read_field(map, "turboThreshold")?,
            visible: read_field(map, "visible")?,
            z_index: read_field(map, "zIndex")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("lineWidth", self.line_width)?;
        check_non_negative("pointInterval", self.point_interval)?;
        check_unit_interval("opacity", self.opacity)
    }
}

node_field!(DataLabels, Marker, SeriesEvents, SeriesOptions);
