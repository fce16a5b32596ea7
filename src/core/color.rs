//! Colour values: plain CSS colours, gradients and pattern fills.
//!
//! A colour field accepts any of the three shapes; the variant is picked by
//! looking for the keys that characterize gradients and patterns.

use tracing::debug;

use crate::error::{OptionsError, OptionsResult};
use crate::js;
use crate::node_field;

use super::field::{OptionField, read_field, untrimmed};
use super::node::OptionNode;
use super::value::{Nullable, OptionMap, OptionValue, map_from_json_str};

const GRADIENT_KEYS: [&str; 3] = ["linearGradient", "radialGradient", "stops"];
const PATTERN_KEYS: [&str; 2] = ["patternOptions", "pattern"];

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Plain(String),
    Gradient(Gradient),
    Pattern(Pattern),
}

impl Color {
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    #[must_use]
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

impl From<Gradient> for Color {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

impl From<Pattern> for Color {
    fn from(value: Pattern) -> Self {
        Self::Pattern(value)
    }
}

impl OptionField for Color {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Plain(value) => OptionValue::String(value.clone()),
            Self::Gradient(gradient) => OptionValue::Object(gradient.to_untrimmed_map()),
            Self::Pattern(pattern) => OptionValue::Object(pattern.to_untrimmed_map()),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match validate_color(value, field)? {
            Some(Nullable::Value(color)) => Ok(color),
            _ => Err(OptionsError::invalid_value(field, "a colour value is required")),
        }
    }
}

/// Interprets a dynamic value as a colour.
///
/// Returns `None` for an unset value and `Some(Nullable::Null)` for an
/// explicit null.
pub fn validate_color(value: &OptionValue, field: &str) -> OptionsResult<Option<Nullable<Color>>> {
    match value {
        OptionValue::Undefined => Ok(None),
        OptionValue::Null => Ok(Some(Nullable::Null)),
        OptionValue::Object(map) => color_from_map(map, field).map(|c| Some(Nullable::Value(c))),
        OptionValue::String(text) => {
            if text.trim().is_empty() {
                return Err(OptionsError::invalid_value(field, "colour string is empty"));
            }
            let looks_structured = GRADIENT_KEYS
                .iter()
                .chain(PATTERN_KEYS.iter())
                .any(|key| text.contains(key));
            if looks_structured {
                match structured_color_from_str(text, field) {
                    Ok(color) => return Ok(Some(Nullable::Value(color))),
                    Err(err) => {
                        debug!(field, error = %err, "colour string is not a gradient or pattern, keeping it as plain text");
                    }
                }
            }
            Ok(Some(Nullable::Value(Color::Plain(text.clone()))))
        }
        other => Err(OptionsError::invalid_value(
            field,
            format!("expected colour string, gradient or pattern, got {}", other.kind_name()),
        )),
    }
}

fn structured_color_from_str(text: &str, field: &str) -> OptionsResult<Color> {
    let map = match map_from_json_str(text) {
        Ok(map) => map,
        Err(_) => js::parse_options_map(text)?,
    };
    color_from_map(&map, field)
}

fn color_from_map(map: &OptionMap, field: &str) -> OptionsResult<Color> {
    if GRADIENT_KEYS.iter().any(|key| map.contains_key(*key)) {
        return Gradient::from_map(map).map(Color::Gradient);
    }
    if PATTERN_KEYS.iter().any(|key| map.contains_key(*key)) {
        return Pattern::from_map(map).map(Color::Pattern);
    }
    Err(OptionsError::invalid_value(
        field,
        "object colour must define a gradient or a pattern",
    ))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearGradient {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

impl LinearGradient {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: Some(x1),
            y1: Some(y1),
            x2: Some(x2),
            y2: Some(y2),
        }
    }
}

impl OptionNode for LinearGradient {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("x1", self.x1.to_option_value()),
            ("y1", self.y1.to_option_value()),
            ("x2", self.x2.to_option_value()),
            ("y2", self.y2.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            x1: read_field(map, "x1")?,
            y1: read_field(map, "y1")?,
            x2: read_field(map, "x2")?,
            y2: read_field(map, "y2")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadialGradient {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
}

impl OptionNode for RadialGradient {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("cx", self.cx.to_option_value()),
            ("cy", self.cy.to_option_value()),
            ("r", self.r.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            cx: read_field(map, "cx")?,
            cy: read_field(map, "cy")?,
            r: read_field(map, "r")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        if let Some(r) = self.r {
            if !r.is_finite() || r < 0.0 {
                return Err(OptionsError::invalid_value("r", "radius must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

/// One colour stop, serialized as `[offset, color]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

impl GradientStop {
    #[must_use]
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

impl OptionField for GradientStop {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Array(vec![
            OptionValue::Number(self.offset),
            OptionValue::String(self.color.clone()),
        ])
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Array(items) if items.len() == 2 => {
                let offset = f64::from_option_value(&items[0], field)?;
                if !(0.0..=1.0).contains(&offset) {
                    return Err(OptionsError::invalid_value(
                        field,
                        format!("gradient stop offset {offset} is outside [0, 1]"),
                    ));
                }
                Ok(Self {
                    offset,
                    color: String::from_option_value(&items[1], field)?,
                })
            }
            _ => Err(OptionsError::invalid_value(
                field,
                "gradient stop must be an [offset, color] pair",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    pub linear_gradient: Option<LinearGradient>,
    pub radial_gradient: Option<RadialGradient>,
    pub stops: Option<Vec<GradientStop>>,
}

impl Gradient {
    #[must_use]
    pub fn linear(geometry: LinearGradient, stops: Vec<GradientStop>) -> Self {
        Self {
            linear_gradient: Some(geometry),
            radial_gradient: None,
            stops: Some(stops),
        }
    }

    #[must_use]
    pub fn radial(geometry: RadialGradient, stops: Vec<GradientStop>) -> Self {
        Self {
            linear_gradient: None,
            radial_gradient: Some(geometry),
            stops: Some(stops),
        }
    }
}

impl OptionNode for Gradient {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("linearGradient", self.linear_gradient.to_option_value()),
            ("radialGradient", self.radial_gradient.to_option_value()),
            ("stops", self.stops.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            linear_gradient: read_field(map, "linearGradient")?,
            radial_gradient: read_field(map, "radialGradient")?,
            stops: read_field(map, "stops")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        if self.linear_gradient.is_some() && self.radial_gradient.is_some() {
            return Err(OptionsError::invalid_value(
                "linearGradient",
                "a gradient cannot be both linear and radial",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternOptions {
    pub path: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub color: Option<String>,
    pub opacity: Option<f64>,
    pub background_color: Option<String>,
    pub image: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub id: Option<String>,
    pub pattern_transform: Option<String>,
}

impl OptionNode for PatternOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("path", self.path.to_option_value()),
            ("width", self.width.to_option_value()),
            ("height", self.height.to_option_value()),
            ("color", self.color.to_option_value()),
            ("opacity", self.opacity.to_option_value()),
            ("backgroundColor", self.background_color.to_option_value()),
            ("image", self.image.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
            ("id", self.id.to_option_value()),
            ("patternTransform", self.pattern_transform.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        // SVG paths may also be given as `{ d: "..." }`.
        let path = match map.get("path") {
            Some(OptionValue::Object(inner)) => read_field(inner, "d")?,
            _ => read_field(map, "path")?,
        };
        Self {
            path,
            width: read_field(map, "width")?,
            height: read_field(map, "height")?,
            color: read_field(map, "color")?,
            opacity: read_field(map, "opacity")?,
            background_color: read_field(map, "backgroundColor")?,
            image: read_field(map, "image")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
            id: read_field(map, "id")?,
            pattern_transform: read_field(map, "patternTransform")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        if let Some(opacity) = self.opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(OptionsError::invalid_value(
                    "opacity",
                    format!("{opacity} is outside [0, 1]"),
                ));
            }
        }
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                return Err(OptionsError::invalid_value(field, "must be finite and > 0"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    pub pattern_options: Option<PatternOptions>,
    pub pattern_index: Option<u32>,
    pub animation: Option<bool>,
}

impl OptionNode for Pattern {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("pattern", self.pattern_options.to_option_value()),
            ("patternIndex", self.pattern_index.to_option_value()),
            ("animation", self.animation.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        let pattern_options = match read_field(map, "pattern")? {
            Some(options) => Some(options),
            None => read_field(map, "patternOptions")?,
        };
        Ok(Self {
            pattern_options,
            pattern_index: read_field(map, "patternIndex")?,
            animation: read_field(map, "animation")?,
        })
    }
}

node_field!(LinearGradient, RadialGradient, Gradient, PatternOptions, Pattern);
