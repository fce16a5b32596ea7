use crate::core::{Color, CssStyle, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::js::CallbackFunction;
use crate::{node_field, string_enum};

use super::common::check_non_negative;

string_enum! {
    pub enum TooltipShape {
        Callout => "callout",
        Circle => "circle",
        Rect => "rect",
        Square => "square",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub animation: Option<bool>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub class_name: Option<String>,
    pub enabled: Option<bool>,
    pub follow_pointer: Option<bool>,
    pub footer_format: Option<String>,
    pub format: Option<String>,
    /// Overrides every format string when set.
    pub formatter: Option<CallbackFunction>,
    pub header_format: Option<String>,
    pub hide_delay: Option<f64>,
    pub null_format: Option<String>,
    pub outside: Option<bool>,
    pub padding: Option<f64>,
    pub point_format: Option<String>,
    pub point_formatter: Option<CallbackFunction>,
    pub shadow: Option<bool>,
    pub shape: Option<TooltipShape>,
    pub shared: Option<bool>,
    pub split: Option<bool>,
    pub style: Option<CssStyle>,
    pub use_html: Option<bool>,
    pub value_decimals: Option<u32>,
    pub value_prefix: Option<String>,
    pub value_suffix: Option<String>,
    pub x_date_format: Option<String>,
}

impl Tooltip {
    #[must_use]
    pub fn shared() -> Self {
        Self {
            shared: Some(true),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: CallbackFunction) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_point_format(mut self, format: impl Into<String>) -> Self {
        self.point_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_value_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.value_suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn with_value_decimals(mut self, decimals: u32) -> Self {
        self.value_decimals = Some(decimals);
        self
    }
}

impl OptionNode for Tooltip {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("animation", self.animation.to_option_value()),
            ("backgroundColor", self.background_color.to_option_value()),
            ("borderColor", self.border_color.to_option_value()),
            ("borderRadius", self.border_radius.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("className", self.class_name.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("followPointer", self.follow_pointer.to_option_value()),
            ("footerFormat", self.footer_format.to_option_value()),
            ("format", self.format.to_option_value()),
            ("formatter", self.formatter.to_option_value()),
            ("headerFormat", self.header_format.to_option_value()),
            ("hideDelay", self.hide_delay.to_option_value()),
            ("nullFormat", self.null_format.to_option_value()),
            ("outside", self.outside.to_option_value()),
            ("padding", self.padding.to_option_value()),
            ("pointFormat", self.point_format.to_option_value()),
            ("pointFormatter", self.point_formatter.to_option_value()),
            ("shadow", self.shadow.to_option_value()),
            ("shape", self.shape.to_option_value()),
            ("shared", self.shared.to_option_value()),
            ("split", self.split.to_option_value()),
            ("style", self.style.to_option_value()),
            ("useHTML", self.use_html.to_option_value()),
            ("valueDecimals", self.value_decimals.to_option_value()),
            ("valuePrefix", self.value_prefix.to_option_value()),
            ("valueSuffix", self.value_suffix.to_option_value()),
            ("xDateFormat", self.x_date_format.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            animation: read_field(map, "animation")?,
            background_color: read_field(map, "backgroundColor")?,
            border_color: read_field(map, "borderColor")?,
            border_radius: read_field(map, "borderRadius")?,
            border_width: read_field(map, "borderWidth")?,
            class_name: read_field(map, "className")?,
            enabled: read_field(map, "enabled")?,
            follow_pointer: read_field(map, "followPointer")?,
            footer_format: read_field(map, "footerFormat")?,
            format: read_field(map, "format")?,
            formatter: read_field(map, "formatter")?,
            header_format: read_field(map, "headerFormat")?,
            hide_delay: read_field(map, "hideDelay")?,
            null_format: read_field(map, "nullFormat")?,
            outside: read_field(map, "outside")?,
            padding: read_field(map, "padding")?,
            point_format: read_field(map, "pointFormat")?,
            point_formatter: read_field(map, "pointFormatter")?,
            shadow: read_field(map, "shadow")?,
            shape: read_field(map, "shape")?,
            shared: read_field(map, "shared")?,
            split: read_field(map, "split")?,
            style: read_field(map, "style")?,
            use_html: read_field(map, "useHTML")?,
            value_decimals: read_field(map, "valueDecimals")?,
            value_prefix: read_field(map, "valuePrefix")?,
            value_suffix: read_field(map, "valueSuffix")?,
            x_date_format: read_field(map, "xDateFormat")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderWidth", self.border_width)?;
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("hideDelay", self.hide_delay)?;
        check_non_negative("padding", self.padding)
    }
}

node_field!(Tooltip);
