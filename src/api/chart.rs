//! Page-level wrappers: the `Highcharts.chart(...)` call that renders a chart
//! and the `Highcharts.setOptions(...)` call that sets shared defaults.

use tracing::{debug, trace};

use crate::core::{
    Nullable, OptionField, OptionMap, OptionNode, OptionValue, TrimMode, map_from_json_str,
    map_to_json_string, read_field, trim_map, untrimmed,
};
use crate::error::{OptionsError, OptionsResult};
use crate::js::{CallbackFunction, ChartCall, parse_chart_call, quote_js_string};
use crate::options::{HighchartsOptions, Language};
use crate::string_enum;

use super::config::LiteralConfig;

string_enum! {
    /// The Highcharts function that builds the chart.
    pub enum ChartConstructor {
        Chart => "chart",
        StockChart => "stockChart",
        MapChart => "mapChart",
        GanttChart => "ganttChart",
    }
}

/// A chart bound to a DOM container.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Id of the `<div>` the chart renders into. `None` emits `null`, which
    /// leaves the target to `chart.renderTo`.
    pub container: Option<String>,
    /// When set, the chart is assigned to a `const` with this name.
    pub variable_name: Option<String>,
    pub options: HighchartsOptions,
    /// Called once the chart has loaded.
    pub callback: Option<CallbackFunction>,
    pub constructor: ChartConstructor,
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            container: Some("highcharts_target_div".to_owned()),
            variable_name: None,
            options: HighchartsOptions::default(),
            callback: None,
            constructor: ChartConstructor::Chart,
        }
    }
}

impl Chart {
    #[must_use]
    pub fn new(container: impl Into<String>, options: HighchartsOptions) -> Self {
        Self {
            container: Some(container.into()),
            options,
            ..Self::default()
        }
    }

    /// Wraps options that are already configured, keeping the default container.
    #[must_use]
    pub fn from_options(options: HighchartsOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_callback(mut self, callback: CallbackFunction) -> Self {
        self.callback = Some(callback);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, constructor: ChartConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    pub fn validate(&self) -> OptionsResult<()> {
        if let Some(name) = &self.variable_name {
            if !crate::core::is_js_identifier(name) {
                return Err(OptionsError::invalid_value(
                    "variableName",
                    format!("`{name}` is not a valid javascript identifier"),
                ));
            }
        }
        if matches!(&self.container, Some(container) if container.trim().is_empty()) {
            return Err(OptionsError::invalid_value("container", "must not be empty"));
        }
        self.options.validate()
    }

    /// The chart as a script that renders it once the DOM is ready.
    #[must_use]
    pub fn to_js_literal(&self) -> String {
        self.to_js_literal_with(&LiteralConfig::default())
    }

    #[must_use]
    pub fn to_js_literal_with(&self, config: &LiteralConfig) -> String {
        let call = self.constructor_call(config);
        let assignment = match &self.variable_name {
            Some(name) => format!("const {name} = {call}"),
            None => call,
        };
        trace!(constructor = %self.constructor, "emitting chart script");
        format!(
            "document.addEventListener('DOMContentLoaded', function() {{\n{assignment};\n}});"
        )
    }

    fn constructor_call(&self, config: &LiteralConfig) -> String {
        let container = self
            .container
            .as_deref()
            .map_or_else(|| "null".to_owned(), quote_js_string);
        let options = self
            .options
            .to_js_literal_with(config)
            .unwrap_or_else(|| "{}".to_owned());
        match &self.callback {
            Some(callback) => format!(
                "Highcharts.{}({container},\n{options},\n{})",
                self.constructor,
                callback.to_js_literal()
            ),
            None => format!("Highcharts.{}({container},\n{options})", self.constructor),
        }
    }

    /// A standalone HTML page that loads Highcharts from `script_url` and
    /// renders the chart.
    #[must_use]
    pub fn to_html_page(&self, script_url: &str) -> String {
        let container = self.container.as_deref().unwrap_or("highcharts_target_div");
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <script src=\"{script_url}\"></script>\n</head>\n<body>\n\
             <div id=\"{container}\"></div>\n<script>\n{}\n</script>\n</body>\n</html>\n",
            self.to_js_literal()
        )
    }

    /// Parses a script produced by [`Chart::to_js_literal`], with or without
    /// the `DOMContentLoaded` wrapper.
    pub fn from_js_literal(source: &str) -> OptionsResult<Self> {
        let call = parse_chart_call(source)?;
        Self::from_chart_call(&call)
    }

    fn from_chart_call(call: &ChartCall) -> OptionsResult<Self> {
        let constructor = ChartConstructor::parse(&call.constructor, "constructor")?;

        // `Highcharts.chart(options)` takes the target from `chart.renderTo`.
        let (container, rest) = match call.arguments.as_slice() {
            [OptionValue::String(container), rest @ ..] => (Some(container.clone()), rest),
            [OptionValue::Null | OptionValue::Undefined, rest @ ..] => (None, rest),
            rest => {
                debug!("chart call without a container argument");
                (None, rest)
            }
        };
        let (options, callback) = match rest {
            [] => (HighchartsOptions::default(), None),
            [OptionValue::Object(map)] => (HighchartsOptions::from_map(map)?, None),
            [OptionValue::Object(map), callback] => (
                HighchartsOptions::from_map(map)?,
                Some(CallbackFunction::from_option_value(callback, "callback")?),
            ),
            _ => {
                return Err(OptionsError::UnsupportedJs(format!(
                    "unexpected arguments to Highcharts.{}",
                    call.constructor
                )));
            }
        };
        let chart = Self {
            container,
            variable_name: call.variable_name.clone(),
            options,
            callback,
            constructor,
        };
        chart.validate()?;
        Ok(chart)
    }

    /// Untrimmed map with `container`, `variableName`, `options` and `callback`.
    #[must_use]
    pub fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("callback", self.callback.to_option_value()),
            ("constructor", self.constructor.to_option_value()),
            // `null` is kept so a missing container survives a round-trip.
            (
                "container",
                self.container
                    .as_ref()
                    .map_or(OptionValue::Null, OptionField::to_option_value),
            ),
            ("options", OptionValue::Object(self.options.to_untrimmed_map())),
            ("variableName", self.variable_name.to_option_value()),
        ])
    }

    #[must_use]
    pub fn to_map(&self) -> OptionMap {
        trim_map(&self.to_untrimmed_map(), TrimMode::Native)
    }

    pub fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        let defaults = Self::default();
        let options: Option<HighchartsOptions> = read_field(map, "options")?;
        let constructor: Option<ChartConstructor> = read_field(map, "constructor")?;
        let container: Option<Nullable<String>> = read_field(map, "container")?;
        let chart = Self {
            container: match container {
                None => defaults.container,
                Some(Nullable::Null) => None,
                Some(Nullable::Value(container)) => Some(container),
            },
            variable_name: read_field(map, "variableName")?,
            options: options.unwrap_or_default(),
            callback: read_field(map, "callback")?,
            constructor: constructor.unwrap_or(defaults.constructor),
        };
        chart.validate()?;
        Ok(chart)
    }

    pub fn to_json(&self) -> OptionsResult<String> {
        map_to_json_string(&trim_map(&self.to_untrimmed_map(), TrimMode::Json), false)
    }

    pub fn to_json_pretty(&self) -> OptionsResult<String> {
        map_to_json_string(&trim_map(&self.to_untrimmed_map(), TrimMode::Json), true)
    }

    pub fn from_json_str(input: &str) -> OptionsResult<Self> {
        Self::from_map(&map_from_json_str(input)?)
    }
}

/// Defaults applied to every chart on the page through
/// `Highcharts.setOptions(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedOptions {
    pub options: HighchartsOptions,
    /// Localized strings; only settable here.
    pub lang: Option<Language>,
}

impl SharedOptions {
    #[must_use]
    pub fn new(options: HighchartsOptions) -> Self {
        Self {
            options,
            lang: None,
        }
    }

    #[must_use]
    pub fn with_lang(mut self, lang: Language) -> Self {
        self.lang = Some(lang);
        self
    }

    /// `Highcharts.setOptions({...});`
    #[must_use]
    pub fn to_js_literal(&self) -> String {
        self.to_js_literal_with(&LiteralConfig::default())
    }

    #[must_use]
    pub fn to_js_literal_with(&self, config: &LiteralConfig) -> String {
        let body = OptionNode::to_js_literal_with(self, config).unwrap_or_else(|| "{}".to_owned());
        format!("Highcharts.setOptions({body});")
    }

    pub fn from_js_literal(source: &str) -> OptionsResult<Self> {
        let call = parse_chart_call(source)?;
        if call.constructor != "setOptions" {
            return Err(OptionsError::UnsupportedJs(format!(
                "expected Highcharts.setOptions, found Highcharts.{}",
                call.constructor
            )));
        }
        let [argument] = call.arguments.as_slice() else {
            return Err(OptionsError::UnsupportedJs(
                "Highcharts.setOptions takes exactly one argument".to_owned(),
            ));
        };
        match argument {
            OptionValue::Object(map) => <Self as OptionNode>::from_map(map),
            other => Err(OptionsError::InvalidData(format!(
                "Highcharts.setOptions expects an object, got {}",
                other.kind_name()
            ))),
        }
    }
}

impl OptionNode for SharedOptions {
    fn to_untrimmed_map(&self) -> OptionMap {
        let mut map = self.options.to_untrimmed_map();
        map.insert("lang".to_owned(), self.lang.to_option_value());
        map
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Ok(Self {
            options: HighchartsOptions::from_map(map)?,
            lang: read_field(map, "lang")?,
        })
    }

    fn validate(&self) -> OptionsResult<()> {
        self.options.validate()?;
        self.lang.as_ref().map_or(Ok(()), Language::validate)
    }
}
