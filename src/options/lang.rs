use crate::core::{OptionField, OptionMap, OptionNode, read_field, untrimmed};
use crate::error::{OptionsError, OptionsResult};
use crate::node_field;

/// Localized strings. Only settable through shared options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Language {
    pub decimal_point: Option<String>,
    pub download_csv: Option<String>,
    pub download_png: Option<String>,
    pub loading: Option<String>,
    pub months: Option<Vec<String>>,
    pub no_data: Option<String>,
    pub numeric_symbols: Option<Vec<String>>,
    pub reset_zoom: Option<String>,
    pub short_months: Option<Vec<String>>,
    pub thousands_sep: Option<String>,
    pub weekdays: Option<Vec<String>>,
}

impl Language {
    #[must_use]
    pub fn with_separators(
        mut self,
        decimal_point: impl Into<String>,
        thousands_sep: impl Into<String>,
    ) -> Self {
        self.decimal_point = Some(decimal_point.into());
        self.thousands_sep = Some(thousands_sep.into());
        self
    }

    pub fn with_months<I, S>(mut self, months: I) -> OptionsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.months = Some(months.into_iter().map(Into::into).collect());
        self.validated()
    }

    pub fn with_weekdays<I, S>(mut self, weekdays: I) -> OptionsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weekdays = Some(weekdays.into_iter().map(Into::into).collect());
        self.validated()
    }
}

fn check_count(field: &str, names: Option<&Vec<String>>, expected: usize) -> OptionsResult<()> {
    match names {
        Some(names) if names.len() != expected => Err(OptionsError::invalid_value(
            field,
            format!("expected {expected} names, got {}", names.len()),
        )),
        _ => Ok(()),
    }
}

impl OptionNode for Language {
    fn to_untrimmed_map(&self) -> OptionMap {
        untrimmed([
            ("decimalPoint", self.decimal_point.to_option_value()),
            ("downloadCSV", self.download_csv.to_option_value()),
            ("downloadPNG", self.download_png.to_option_value()),
            ("loading", self.loading.to_option_value()),
            ("months", self.months.to_option_value()),
            ("noData", self.no_data.to_option_value()),
            ("numericSymbols", self.numeric_symbols.to_option_value()),
            ("resetZoom", self.reset_zoom.to_option_value()),
            ("shortMonths", self.short_months.to_option_value()),
            ("thousandsSep", self.thousands_sep.to_option_value()),
            ("weekdays", self.weekdays.to_option_value()),
        ])
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        Self {
            decimal_point: read_field(map, "decimalPoint")?,
            download_csv: read_field(map, "downloadCSV")?,
            download_png: read_field(map, "downloadPNG")?,
            loading: read_field(map, "loading")?,
            months: read_field(map, "months")?,
            no_data: read_field(map, "noData")?,
            numeric_symbols: read_field(map, "numericSymbols")?,
            reset_zoom: read_field(map, "resetZoom")?,
            short_months: read_field(map, "shortMonths")?,
            thousands_sep: read_field(map, "thousandsSep")?,
            weekdays: read_field(map, "weekdays")?,
        }
        .validated()
    }

    fn validate(&self) -> OptionsResult<()> {
        check_count("months", self.months.as_ref(), 12)?;
        check_count("shortMonths", self.short_months.as_ref(), 12)?;
        check_count("weekdays", self.weekdays.as_ref(), 7)
    }
}

node_field!(Language);
