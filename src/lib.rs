//! highcharts-options: a typed model of Highcharts chart options.
//!
//! Every option node converts to an ordered option map, to JSON and to a
//! JavaScript object literal, and can be rebuilt from any of the three.
//! JavaScript literals may carry callback functions and classes, which are
//! kept verbatim.

pub mod api;
pub mod core;
pub mod error;
pub mod js;
pub mod options;
pub mod telemetry;

pub use api::{Chart, ChartConstructor, LiteralConfig, SharedOptions};
pub use crate::core::{Color, OptionMap, OptionNode, OptionValue};
pub use error::{OptionsError, OptionsResult};
pub use js::{CallbackFunction, JsClass};
pub use options::HighchartsOptions;
