//! Accessibility module options.

use crate::core::{OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::js::CallbackFunction;
use crate::{node_field, string_enum};

string_enum! {
    pub enum LandmarkVerbosity {
        All => "all",
        One => "one",
        Disabled => "disabled",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyboardNavigation {
    pub enabled: Option<bool>,
    /// Tab order of chart components, such as `['series', 'zoom', 'legend']`.
    pub order: Option<Vec<String>>,
    pub wrap_around: Option<bool>,
}

impl OptionNode for KeyboardNavigation {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("enabled", self.enabled.to_option_value()),
            ("order", self.order.to_option_value()),
            ("wrapAround", self.wrap_around.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            enabled: read_field(map, "enabled")?,
            order: read_field(map, "order")?,
            wrap_around: read_field(map, "wrapAround")?,
        })
    }
}

/// How individual points are announced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessibilityPoint {
    pub date_format: Option<String>,
    pub describe_null: Option<bool>,
    pub description_formatter: Option<CallbackFunction>,
    pub value_decimals: Option<u32>,
    pub value_description_format: Option<String>,
    pub value_prefix: Option<String>,
    pub value_suffix: Option<String>,
}

impl OptionNode for AccessibilityPoint {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("dateFormat", self.date_format.to_option_value()),
            ("describeNull", self.describe_null.to_option_value()),
            ("descriptionFormatter", self.description_formatter.to_option_value()),
            ("valueDecimals", self.value_decimals.to_option_value()),
            ("valueDescriptionFormat", self.value_description_format.to_option_value()),
            ("valuePrefix", self.value_prefix.to_option_value()),
            ("valueSuffix", self.value_suffix.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            date_format: read_field(map, "dateFormat")?,
            describe_null: read_field(map, "describeNull")?,
            description_formatter: read_field(map, "descriptionFormatter")?,
            value_decimals: read_field(map, "valueDecimals")?,
            value_description_format: read_field(map, "valueDescriptionFormat")?,
            value_prefix: read_field(map, "valuePrefix")?,
            value_suffix: read_field(map, "valueSuffix")?,
        })
    }
}

/// Hidden text read before and after the chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenReaderSection {
    pub after_chart_format: Option<String>,
    pub axis_range_date_format: Option<String>,
    pub before_chart_format: Option<String>,
    pub on_play_as_sound_click: Option<CallbackFunction>,
    pub on_view_data_table_click: Option<CallbackFunction>,
}

impl OptionNode for ScreenReaderSection {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("afterChartFormat", self.after_chart_format.to_option_value()),
            ("axisRangeDateFormat", self.axis_range_date_format.to_option_value()),
            ("beforeChartFormat", self.before_chart_format.to_option_value()),
            ("onPlayAsSoundClick", self.on_play_as_sound_click.to_option_value()),
            ("onViewDataTableClick", self.on_view_data_table_click.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            after_chart_format: read_field(map, "afterChartFormat")?,
            axis_range_date_format: read_field(map, "axisRangeDateFormat")?,
            before_chart_format: read_field(map, "beforeChartFormat")?,
            on_play_as_sound_click: read_field(map, "onPlayAsSoundClick")?,
            on_view_data_table_click: read_field(map, "onViewDataTableClick")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accessibility {
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub keyboard_navigation: Option<KeyboardNavigation>,
    pub landmark_verbosity: Option<LandmarkVerbosity>,
    pub point: Option<AccessibilityPoint>,
    pub screen_reader_section: Option<ScreenReaderSection>,
    pub type_description: Option<String>,
}

impl Accessibility {
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_keyboard_navigation(mut self, navigation: KeyboardNavigation) -> Self {
        self.keyboard_navigation = Some(navigation);
        self
    }
}

impl OptionNode for Accessibility {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("description", self.description.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("keyboardNavigation", self.keyboard_navigation.to_option_value()),
            ("landmarkVerbosity", self.landmark_verbosity.to_option_value()),
            ("point", self.point.to_option_value()),
            ("screenReaderSection", self.screen_reader_section.to_option_value()),
            ("typeDescription", self.type_description.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            description: read_field(map, "description")?,
            enabled: read_field(map, "enabled")?,
            keyboard_navigation: read_field(map, "keyboardNavigation")?,
            landmark_verbosity: read_field(map, "landmarkVerbosity")?,
            point: read_field(map, "point")?,
            screen_reader_section: read_field(map, "screenReaderSection")?,
            type_description: read_field(map, "typeDescription")?,
        })
    }
}

node_field!(
    KeyboardNavigation,
    AccessibilityPoint,
    ScreenReaderSection,
    Accessibility,
);
