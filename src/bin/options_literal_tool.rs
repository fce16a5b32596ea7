use highcharts_options::{Chart, HighchartsOptions, LiteralConfig, OptionNode, telemetry};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "usage: options_literal_tool <to-js|to-json|page> --input <path> --output <path> [--config <path>] [--container <id>] [--script-url <url>] [--verbose]";
const DEFAULT_SCRIPT_URL: &str = "https://code.highcharts.com/highcharts.js";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    ToJs,
    ToJson,
    Page,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    container: Option<String>,
    script_url: String,
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = if args.verbose {
        telemetry::init_tracing_with("highcharts_options=debug")
    } else {
        telemetry::init_default_tracing()
    };
    let config = match &args.config {
        Some(path) => {
            LiteralConfig::from_json_str(&read_input(path)?).map_err(|err| err.to_string())?
        }
        None => LiteralConfig::default(),
    };
    let options = load_options(&args.input)?;
    let rendered = match args.command {
        CommandKind::ToJs => options
            .to_js_literal_with(&config)
            .unwrap_or_else(|| "{}".to_owned()),
        CommandKind::ToJson => options.to_json_pretty().map_err(|err| err.to_string())?,
        CommandKind::Page => {
            let chart = match args.container {
                Some(container) => Chart::new(container, options),
                None => Chart::from_options(options),
            };
            chart.validate().map_err(|err| err.to_string())?;
            chart.to_html_page(&args.script_url)
        }
    };
    fs::write(&args.output, rendered)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

/// `.js` files are parsed as object literals, anything else as JSON.
fn load_options(path: &Path) -> Result<HighchartsOptions, String> {
    let raw = read_input(path)?;
    let is_js = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("js"));
    let parsed = if is_js {
        HighchartsOptions::from_js_literal(&raw)
    } else {
        HighchartsOptions::from_json_str(&raw)
    };
    parsed.map_err(|err| format!("invalid options in `{}`: {err}", path.display()))
}

fn read_input(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("to-js") => CommandKind::ToJs,
        Some("to-json") => CommandKind::ToJson,
        Some("page") => CommandKind::Page,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut container = None::<String>;
    let mut script_url = DEFAULT_SCRIPT_URL.to_owned();
    let mut verbose = false;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(value()?)),
            "--output" => output = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--container" => container = Some(value()?),
            "--script-url" => script_url = value()?,
            "--verbose" | "-v" => verbose = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        command,
        input: input.ok_or_else(|| "missing --input".to_owned())?,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
        config,
        container,
        script_url,
        verbose,
    })
}
