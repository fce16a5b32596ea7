use crate::core::{Color, CssStyle, OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::OptionsResult;
use crate::js::CallbackFunction;
use crate::{node_field, string_enum};

use super::common::{Align, VerticalAlign, check_non_negative};

string_enum! {
    pub enum LegendLayout {
        Horizontal => "horizontal",
        Vertical => "vertical",
        Proximate => "proximate",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub align: Option<Align>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub enabled: Option<bool>,
    pub floating: Option<bool>,
    pub item_distance: Option<f64>,
    pub item_hidden_style: Option<CssStyle>,
    pub item_hover_style: Option<CssStyle>,
    pub item_style: Option<CssStyle>,
    pub label_format: Option<String>,
    pub label_formatter: Option<CallbackFunction>,
    pub layout: Option<LegendLayout>,
    pub max_height: Option<f64>,
    pub reversed: Option<bool>,
    pub symbol_height: Option<f64>,
    pub symbol_radius: Option<f64>,
    pub symbol_width: Option<f64>,
    pub use_html: Option<bool>,
    pub vertical_align: Option<VerticalAlign>,
    pub width: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Legend {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LegendLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_position(mut self, align: Align, vertical_align: VerticalAlign) -> Self {
        self.align = Some(align);
        self.vertical_align = Some(vertical_align);
        self
    }

    #[must_use]
    pub fn with_label_formatter(mut self, formatter: CallbackFunction) -> Self {
        self.label_formatter = Some(formatter);
        self
    }
}

impl OptionNode for Legend {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("align", self.align.to_option_value()),
            ("backgroundColor", self.background_color.to_option_value()),
            ("borderColor", self.border_color.to_option_value()),
            ("borderRadius", self.border_radius.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("enabled", self.enabled.to_option_value()),
            ("floating", self.floating.to_option_value()),
            ("itemDistance", self.item_distance.to_option_value()),
            ("itemHiddenStyle", self.item_hidden_style.to_option_value()),
            ("itemHoverStyle", self.item_hover_style.to_option_value()),
            ("itemStyle", self.item_style.to_option_value()),
            ("labelFormat", self.label_format.to_option_value()),
            ("labelFormatter", self.label_formatter.to_option_value()),
            ("layout", self.layout.to_option_value()),
            ("maxHeight", self.max_height.to_option_value()),
            ("reversed", self.reversed.to_option_value()),
            ("symbolHeight", self.symbol_height.to_option_value()),
            ("symbolRadius", self.symbol_radius.to_option_value()),
            ("symbolWidth", self.symbol_width.to_option_value()),
            ("useHTML", self.use_html.to_option_value()),
            ("verticalAlign", self.vertical_align.to_option_value()),
            ("width", self.width.to_option_value()),
            ("x", self.x.to_option_value()),
            ("y", self.y.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            align: read_field(map, "align")?,
            background_color: read_field(map, "backgroundColor")?,
            border_color: read_field(map, "borderColor")?,
            border_radius: read_field(map, "borderRadius")?,
            border_width: read_field(map, "borderWidth")?,
            enabled: read_field(map, "enabled")?,
            floating: read_field(map, "floating")?,
            item_distance: read_field(map, "itemDistance")?,
            item_hidden_style: read_field(map, "itemHiddenStyle")?,
            item_hover_style: read_field(map, "itemHoverStyle")?,
            item_style: read_field(map, "itemStyle")?,
            label_format: read_field(map, "labelFormat")?,
            label_formatter: read_field(map, "labelFormatter")?,
            layout: read_field(map, "layout")?,
            max_height: read_field(map, "maxHeight")?,
            reversed: read_field(map, "reversed")?,
            symbol_height: read_field(map, "symbolHeight")?,
            symbol_radius: read_field(map, "symbolRadius")?,
            symbol_width: read_field(map, "symbolWidth")?,
            use_html: read_field(map, "useHTML")?,
            vertical_align: read_field(map, "verticalAlign")?,
            width: read_field(map, "width")?,
            x: read_field(map, "x")?,
            y: read_field(map, "y")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderWidth", self.border_width)?;
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("itemDistance", self.item_distance)?;
        check_non_negative("maxHeight", self.max_height)?;
        check_non_negative("symbolHeight", self.symbol_height)?;
        check_non_negative("symbolWidth", self.symbol_width)
    }
}

node_field!(Legend);
