//! Data points.
//!
//! A point that only carries coordinates is written in the short array form
//! Highcharts accepts (`5`, `[1, 5]` or `['Apples', 5]`); anything richer is
//! written as an object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core::{
    Color, Nullable, OptionField, OptionMap, OptionNode, OptionValue, read_field, untrimmed,
};
use crate::error::{OptionsError, OptionsResult};

use super::generic::{DataLabels, Marker};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPoint {
    pub class_name: Option<String>,
    pub color: Option<Color>,
    pub color_index: Option<u32>,
    pub custom: Option<OptionMap>,
    pub data_labels: Option<DataLabels>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub marker: Option<Marker>,
    pub name: Option<String>,
    pub selected: Option<bool>,
    /// Pie slices only.
    pub sliced: Option<bool>,
    pub x: Option<f64>,
    /// `null` leaves a gap in line and area series.
    pub y: Option<Nullable<f64>>,
}

impl DataPoint {
    #[must_use]
    pub fn y(value: f64) -> Self {
        Self {
            y: Some(Nullable::Value(value)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(Nullable::Value(y)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn named(name: impl Into<String>, y: f64) -> Self {
        Self {
            name: Some(name.into()),
            y: Some(Nullable::Value(y)),
            ..Self::default()
        }
    }

    /// A point on a datetime axis; `x` is written as epoch milliseconds.
    #[must_use]
    pub fn timed(time: DateTime<Utc>, y: f64) -> Self {
        Self {
            x: OptionValue::from_datetime(time).as_f64(),
            y: Some(Nullable::Value(y)),
            ..Self::default()
        }
    }

    /// A point from an exact decimal value, such as a currency amount.
    pub fn from_decimal(y: Decimal) -> OptionsResult<Self> {
        let value = OptionValue::from_decimal(y)?;
        Ok(Self {
            y: Some(Nullable::from_option_value(&value, "y")?),
            ..Self::default()
        })
    }

    /// A missing value, drawn as a gap.
    #[must_use]
    pub fn gap() -> Self {
        Self {
            y: Some(Nullable::Null),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The short array form, when the point carries nothing beyond
    /// `x`, `name` and `y`.
    #[must_use]
    pub fn to_array(&self) -> Option<OptionValue> {
        let y = self.y.as_ref()?.to_option_value();
        let only_coordinates = Self {
            x: self.x,
            name: self.name.clone(),
            y: self.y.clone(),
            ..Self::default()
        } == *self;
        if !only_coordinates {
            return None;
        }
        match (self.x, &self.name) {
            (None, None) => Some(y),
            (Some(x), None) => Some(OptionValue::Array(vec![OptionValue::Number(x), y])),
            (None, Some(name)) => Some(OptionValue::Array(vec![OptionValue::String(name.clone()), y])),
            (Some(_), Some(_)) => None,
        }
    }

    fn from_array(items: &[OptionValue], field: &str) -> OptionsResult<Self> {
        let y = |value: &OptionValue| Nullable::<f64>::from_option_value(value, field);
        match items {
            [value] => Ok(Self {
                y: Some(y(value)?),
                ..Self::default()
            }),
            [OptionValue::String(name), value] => Ok(Self {
                name: Some(name.clone()),
                y: Some(y(value)?),
                ..Self::default()
            }),
            [x, value] => Ok(Self {
                x: Option::<f64>::from_option_value(x, field)?,
                y: Some(y(value)?),
                ..Self::default()
            }),
            _ => Err(OptionsError::invalid_value(
                field,
                format!(
                    "array points need one or two entries, got {}; use an object for more",
                    items.len()
                ),
            )),
        }
    }
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        Self::y(value)
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::xy(x, y)
    }
}

impl From<(&str, f64)> for DataPoint {
    fn from((name, y): (&str, f64)) -> Self {
        Self::named(name, y)
    }
}

impl OptionNode for DataPoint {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("className", self.class_name.to_option_value()),
            ("color", self.color.to_option_value()),
            ("colorIndex", self.color_index.to_option_value()),
            ("custom", self.custom.to_option_value()),
            ("dataLabels", self.data_labels.to_option_value()),
            ("description", self.description.to_option_value()),
            ("id", self.id.to_option_value()),
            ("marker", self.marker.to_option_value()),
            ("name", self.name.to_option_value()),
            ("selected", self.selected.to_option_value()),
            ("sliced", self.sliced.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            class_name: read_field(map, "className")?,
            color: read_field(map, "color")?,
            color_index: read_field(map, "colorIndex")?,
            custom: read_field(map, "custom")?,
            data_labels: read_field(map, "dataLabels")?,
            description: read_field(map, "description")?,
            id: read_field(map, "id")?,
            marker: read_field(map, "marker")?,
            name: read_field(map, "name")?,
            selected: read_field(map, "selected")?,
            sliced: read_field(map, "sliced")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

impl OptionField for DataPoint {
    fn to_option_value(&self) -> OptionValue {
        self.to_array()
            .unwrap_or_else(|| OptionValue::Object(self.to_untrimmed_map()))
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Number(_) | OptionValue::Null => Ok(Self {
                y: Some(Nullable::from_option_value(value, field)?),
                ..Self::default()
            }),
            OptionValue::Array(items) => Self::from_array(items, field),
            OptionValue::Object(map) => Self::from_map(map),
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected number, array or object point, got {}", other.kind_name()),
            )),
        }
    }
}
