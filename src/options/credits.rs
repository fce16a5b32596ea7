use crate::core::{CssStyle, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::node_field;

use super::common::{Align, VerticalAlign};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditsPosition {
    pub align: Option<Align>,
    pub vertical_align: Option<VerticalAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl OptionNode for CreditsPosition {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            vertical_align: read_field(map, "verticalAlign")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

/// The credits label in the lower right corner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credits {
    pub enabled: Option<bool>,
    pub href: Option<String>,
    pub position: Option<CreditsPosition>,
    pub style: Option<CssStyle>,
    pub text: Option<String>,
}

impl Credits {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: CreditsPosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl OptionNode for Credits {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("enabled", self.enabled.to_option_value()),
            ("href", self.href.to_option_value()),
            ("position", self.position.to_option_value()),
            ("style", self.style.to_option_value()),
            ("text", self.text.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            enabled: read_field(map, "enabled")?,
            href: read_field(map, "href")?,
            position: read_field(map, "position")?,
            style: read_field(map, "style")?,
            text: read_field(map, "text")?,
        })
    }
}

node_field!(CreditsPosition, Credits);
