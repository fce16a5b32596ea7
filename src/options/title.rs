//! Chart title, subtitle and caption.
//!
//! The three nodes share [`TitleBase`]; each one layers its own settings on
//! top through [`consolidate`].

use crate::core::{CssStyle, OptionField, OptionMap, OptionNode, consolidate, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::node_field;

use super::common::{Align, VerticalAlign};

/// Settings shared by titles, subtitles and captions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleBase {
    pub align: Option<Align>,
    pub floating: Option<bool>,
    pub style: Option<CssStyle>,
    pub text: Option<String>,
    pub use_html: Option<bool>,
    pub vertical_align: Option<VerticalAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl OptionNode for TitleBase {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("floating", self.floating.to_option_value()),
            ("style", self.style.to_option_value()),
            ("text", self.text.to_option_value()),
            ("useHTML", self.use_html.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            align: read_field(map, "align")?,
            floating: read_field(map, "floating")?,
            style: read_field(map, "style")?,
            text: read_field(map, "text")?,
            use_html: read_field(map, "useHTML")?,
            vertical_align: read_field(map, "verticalAlign")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        })
    }
}

macro_rules! title_builders {
    ($node:ty) => {
        impl $node {
            #[must_use]
            pub fn new(text: impl Into<String>) -> Self {
                Self::default().with_text(text)
            }

            #[must_use]
            pub fn with_text(mut self, text: impl Into<String>) -> Self {
                self.base.text = Some(text.into());
                self
            }

            #[must_use]
            pub fn with_align(mut self, align: Align) -> Self {
                self.base.align = Some(align);
                self
            }

            #[must_use]
            pub fn with_vertical_align(mut self, align: VerticalAlign) -> Self {
                self.base.vertical_align = Some(align);
                self
            }

            #[must_use]
            pub fn with_style(mut self, style: CssStyle) -> Self {
                self.base.style = Some(style);
                self
            }

            #[must_use]
            pub fn with_offset(mut self, x: f64, y: f64) -> Self {
                self.base.x = Some(x);
                self.base.y = Some(y);
                self
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub base: TitleBase,
    /// Space between the title and the plot area.
    pub margin: Option<f64>,
}

impl Title {
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }
}

title_builders!(Title);

impl OptionNode for Title {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([
            untrimmed([("margin", self.margin.to_option_value())]),
            self.base.to_untrimmed_map(),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            base: TitleBase::from_map(map)?,
            margin: read_field(map, "margin")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        super::common::check_non_negative("margin", self.margin)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subtitle {
    pub base: TitleBase,
}

title_builders!(Subtitle);

impl OptionNode for Subtitle {
    fn to_untrimmed_map(&self) -> OptionMap {
        self.base.to_untrimmed_map()
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            base: TitleBase::from_map(map)?,
        })
    }
}

/// Text below the plot area, typically a description or a source note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Caption {
    pub base: TitleBase,
    pub margin: Option<f64>,
}

title_builders!(Caption);

impl OptionNode for Caption {
    fn to_untrimmed_map(&self) -> OptionMap {
        consolidate([
            untrimmed([("margin", self.margin.to_option_value())]),
            self.base.to_untrimmed_map(),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            base: TitleBase::from_map(map)?,
            margin: read_field(map, "margin")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        super::common::check_non_negative("margin", self.margin)
    }
}

node_field!(TitleBase, Title, Subtitle, Caption);
