//! Value shapes shared by several option nodes.

use crate::core::{OptionField, OptionMap, OptionNode, OptionValue, read_field, untrimmed};
use crate::error::{OptionsError, OptionsResult};
use crate::{node_field, string_enum};

string_enum! {
    pub enum Align {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

string_enum! {
    pub enum VerticalAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

string_enum! {
    pub enum DashStyle {
        Solid => "Solid",
        ShortDash => "ShortDash",
        ShortDot => "ShortDot",
        ShortDashDot => "ShortDashDot",
        ShortDashDotDot => "ShortDashDotDot",
        Dot => "Dot",
        Dash => "Dash",
        LongDash => "LongDash",
        DashDot => "DashDot",
        LongDashDot => "LongDashDot",
        LongDashDotDot => "LongDashDotDot",
    }
}

string_enum! {
    pub enum Cursor {
        Default => "default",
        Pointer => "pointer",
        Help => "help",
        Crosshair => "crosshair",
        None => "none",
    }
}

string_enum! {
    pub enum Stacking {
        Normal => "normal",
        Percent => "percent",
        Stream => "stream",
        Overlap => "overlap",
    }
}

/// A pixel value or a percentage string such as `'50%'`.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl From<f64> for NumberOrString {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl OptionField for NumberOrString {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Number(value) => OptionValue::Number(*value),
            Self::Text(value) => OptionValue::String(value.clone()),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Number(value) if value.is_finite() => Ok(Self::Number(*value)),
            OptionValue::String(text) if !text.trim().is_empty() => Ok(Self::Text(text.clone())),
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected number or non-empty string, got {}", other.kind_name()),
            )),
        }
    }
}

/// Highcharts accepts either a single object or an array of them for
/// options such as `xAxis`; the original shape is kept for emission.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(value: Vec<T>) -> Self {
        Self::Many(value)
    }
}

impl<T: OptionField> OptionField for OneOrMany<T> {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::One(item) => item.to_option_value(),
            Self::Many(items) => items.to_option_value(),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Array(_) => Vec::<T>::from_option_value(value, field).map(Self::Many),
            other => T::from_option_value(other, field).map(Self::One),
        }
    }
}

/// Animation settings for a chart or series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationOptions {
    pub defer: Option<f64>,
    pub duration: Option<f64>,
    pub easing: Option<String>,
}

impl OptionNode for AnimationOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("defer", self.defer.to_option_value()),
            ("duration", self.duration.to_option_value()),
            ("easing", self.easing.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            defer: read_field(map, "defer")?,
            duration: read_field(map, "duration")?,
            easing: read_field(map, "easing")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        for (field, value) in [("defer", self.defer), ("duration", self.duration)] {
            if value.is_some_and(|v| !v.is_finite() || v < 0.0) {
                return Err(OptionsError::invalid_value(field, "must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

node_field!(AnimationOptions);

/// `animation: false` or `animation: { duration: 500 }`.
#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    Enabled(bool),
    Options(AnimationOptions),
}

impl OptionField for Animation {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Enabled(enabled) => OptionValue::Bool(*enabled),
            Self::Options(options) => options.to_option_value(),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Bool(enabled) => Ok(Self::Enabled(*enabled)),
            OptionValue::Object(_) => {
                AnimationOptions::from_option_value(value, field).map(Self::Options)
            }
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected boolean or animation object, got {}", other.kind_name()),
            )),
        }
    }
}

pub(crate) fn check_non_negative(field: &str, value: Option<f64>) -> OptionsResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(OptionsError::invalid_value(
            field,
            format!("{v} must be finite and >= 0"),
        )),
        _ => Ok(()),
    }
}

pub(crate) fn check_unit_interval(field: &str, value: Option<f64>) -> OptionsResult<()> {
    match value {
        Some(v) if !(0.0..=1.0).contains(&v) => Err(OptionsError::invalid_value(
            field,
            format!("{v} is outside [0, 1]"),
        )),
        _ => Ok(()),
    }
}
