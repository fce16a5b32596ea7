//! The `chart` options object: canvas size, colours, margins and events.

use crate::core::{
    Color, CssStyle, Nullable, OptionField, OptionMap, OptionNode, OptionValue, read_field, untrimmed,
};
use crate::error::{OptionsError, OptionsResult};
use crate::js::CallbackFunction;
use crate::{node_field, string_enum};

use super::common::{Animation, NumberOrString, check_non_negative};

string_enum! {
    pub enum ZoomType {
        X => "x",
        Y => "y",
        XY => "xy",
    }
}

/// Event handlers attached to the chart itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartEvents {
    pub add_series: Option<CallbackFunction>,
    pub after_print: Option<CallbackFunction>,
    pub before_print: Option<CallbackFunction>,
    pub click: Option<CallbackFunction>,
    pub load: Option<CallbackFunction>,
    pub redraw: Option<CallbackFunction>,
    pub render: Option<CallbackFunction>,
    pub selection: Option<CallbackFunction>,
}

impl ChartEvents {
    #[must_use]
    pub fn with_load(mut self, callback: CallbackFunction) -> Self {
        self.load = Some(callback);
        self
    }

    #[must_use]
    pub fn with_click(mut self, callback: CallbackFunction) -> Self {
        self.click = Some(callback);
        self
    }
}

impl OptionNode for ChartEvents {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("addSeries", self.add_series.to_option_value()),
            ("afterPrint", self.after_print.to_option_value()),
            ("beforePrint", self.before_print.to_option_value()),
            ("click", self.click.to_option_value()),
            ("load", self.load.to_option_value()),
            ("redraw", self.redraw.to_option_value()),
            ("render", self.render.to_option_value()),
            ("selection", self.selection.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            add_series: read_field(map, "addSeries")?,
            after_print: read_field(map, "afterPrint")?,
            before_print: read_field(map, "beforePrint")?,
            click: read_field(map, "click")?,
            load: read_field(map, "load")?,
            redraw: read_field(map, "redraw")?,
            render: read_field(map, "render")?,
            selection: read_field(map, "selection")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptions {
    pub align_ticks: Option<bool>,
    pub animation: Option<Animation>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub class_name: Option<String>,
    pub color_count: Option<u32>,
    pub events: Option<ChartEvents>,
    /// `null` restores the height computed from the container.
    pub height: Option<Nullable<NumberOrString>>,
    pub inverted: Option<bool>,
    /// Outer margins, `[top, right, bottom, left]`.
    pub margin: Option<Vec<f64>>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub margin_top: Option<f64>,
    pub plot_background_color: Option<Color>,
    pub plot_border_color: Option<Color>,
    pub plot_border_width: Option<f64>,
    pub polar: Option<bool>,
    pub reflow: Option<bool>,
    pub render_to: Option<String>,
    pub spacing: Option<Vec<f64>>,
    pub style: Option<CssStyle>,
    pub styled_mode: Option<bool>,
    pub r#type: Option<String>,
    pub width: Option<Nullable<NumberOrString>>,
    pub zoom_type: Option<ZoomType>,
}

impl ChartOptions {
    #[must_use]
    pub fn with_type(mut self, series_type: impl Into<String>) -> Self {
        self.r#type = Some(series_type.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: impl Into<NumberOrString>, height: impl Into<NumberOrString>) -> Self {
        self.width = Some(Nullable::Value(width.into()));
        self.height = Some(Nullable::Value(height.into()));
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: ChartEvents) -> Self {
        self.events = Some(events);
        self
    }

    #[must_use]
    pub fn with_zoom_type(mut self, zoom_type: ZoomType) -> Self {
        self.zoom_type = Some(zoom_type);
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = Some(inverted);
        self
    }
}

impl OptionNode for ChartOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("alignTicks", self.align_ticks.to_option_value()),
            ("animation", self.animation.to_option_value()),
            ("backgroundColor", self.background_color.to_option_value()),
            ("borderColor", self.border_color.to_option_value()),
            ("borderRadius", self.border_radius.to_option_value()),
            ("borderWidth", self.border_width.to_option_value()),
            ("className", self.class_name.to_option_value()),
            ("colorCount", self.color_count.to_option_value()),
            ("events", self.events.to_option_value()),
            ("height", self.height.to_option_value()),
            ("inverted", self.inverted.to_option_value()),
            ("margin", self.margin.to_option_value()),
            ("marginBottom", self.margin_bottom.to_option_value()),
            ("marginLeft", self.margin_left.to_option_value()),
            ("marginRight", self.margin_right.to_option_value()),
            ("marginTop", self.margin_top.to_option_value()),
            ("plotBackgroundColor", self.plot_background_color.to_option_value()),
            ("plotBorderColor", self.plot_border_color.to_option_value()),
            ("plotBorderWidth", self.plot_border_width.to_option_value()),
            ("polar", self.polar.to_option_value()),
            ("reflow", self.reflow.to_option_value()),
            ("renderTo", self.render_to.to_option_value()),
            ("spacing", self.spacing.to_option_value()),
            ("style", self.style.to_option_value()),
            ("styledMode", self.styled_mode.to_option_value()),
            ("type", self.r#type.to_option_value()),
            ("width", self.width.to_option_value()),
            ("zoomType", self.zoom_type.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        let margin = match map.get("margin") {
            // A single number applies to all four sides.
            Some(value @ OptionValue::Number(_)) => {
                Some(vec![f64::from_option_value(value, "margin")?; 4])
            }
            _ => read_field(map, "margin")?,
        };
        Self {
            align_ticks: read_field(map, "alignTicks")?,
            animation: read_field(map, "animation")?,
            background_color: read_field(map, "backgroundColor")?,
            border_color: read_field(map, "borderColor")?,
            border_radius: read_field(map, "borderRadius")?,
            border_width: read_field(map, "borderWidth")?,
            class_name: read_field(map, "className")?,
            color_count: read_field(map, "colorCount")?,
            events: read_field(map, "events")?,
            height: read_field(map, "height")?,
            inverted: read_field(map, "inverted")?,
            margin,
            margin_bottom: read_field(map, "marginBottom")?,
            margin_left: read_field(map, "marginLeft")?,
            margin_right: read_field(map, "marginRight")?,
            margin_top: read_field(map, "marginTop")?,
            plot_background_color: read_field(map, "plotBackgroundColor")?,
            plot_border_color: read_field(map, "plotBorderColor")?,
            plot_border_width: read_field(map, "plotBorderWidth")?,
            polar: read_field(map, "polar")?,
            reflow: read_field(map, "reflow")?,
            render_to: read_field(map, "renderTo")?,
            spacing: read_field(map, "spacing")?,
            style: read_field(map, "style")?,
            styled_mode: read_field(map, "styledMode")?,
            r#type: read_field(map, "type")?,
            width: read_field(map, "width")?,
            zoom_type: read_field(map, "zoomType")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_non_negative("borderWidth", self.border_width)?;
        check_non_negative("borderRadius", self.border_radius)?;
        check_non_negative("plotBorderWidth", self.plot_border_width)?;
        for (field, size) in [("width", &self.width), ("height", &self.height)] {
            if let Some(Nullable::Value(NumberOrString::Number(value))) = size {
                check_non_negative(field, Some(*value))?;
            }
        }
        for (field, sides) in [("margin", &self.margin), ("spacing", &self.spacing)] {
            let count = sides.as_ref().map_or(1, Vec::len);
            if !(1..=4).contains(&count) {
                return Err(OptionsError::invalid_value(
                    field,
                    format!("expected 1 to 4 values, got {count}"),
                ));
            }
        }
        Ok(())
    }
}

node_field!(ChartEvents, ChartOptions);
