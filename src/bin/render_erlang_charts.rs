use std::path::PathBuf;

use erlang_charts::api::{
    BASE_ENV_VAR, Figure, MAX_BASE, RenderStyle, ReportConfig, build_report, parse_base,
    write_figure_json, write_figure_png,
};
use erlang_charts::telemetry::init_default_tracing;
use tracing::info;

const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug)]
struct CliArgs {
    base: Option<u32>,
    output_dir: PathBuf,
    write_json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    if !init_default_tracing("info") {
        eprintln!("warning: tracing subscriber already installed; report logs may be hidden");
    }
    let args = parse_args()?;

    let base = match args.base {
        Some(base) => base,
        None => parse_base(std::env::var(BASE_ENV_VAR).ok().as_deref()),
    };
    println!("using base parameter n = {base}");

    let config = ReportConfig::new(base)
        .map_err(|err| err.to_string())?
        .with_output_dir(args.output_dir);
    let figures = build_report(&config).map_err(|err| format!("report build failed: {err}"))?;
    let style = RenderStyle::default();

    for figure in &figures {
        if args.write_json {
            let path = write_figure_json(figure, config.output_dir())
                .map_err(|err| format!("figure `{}` json failed: {err}", figure.stem))?;
            println!("wrote {}", path.display());
        }
        write_image(figure, &style, &config)?;
    }

    info!(figures = figures.len(), "report complete");
    Ok(())
}

fn write_image(figure: &Figure, style: &RenderStyle, config: &ReportConfig) -> Result<(), String> {
    let path = write_figure_png(figure, style, config.output_dir())
        .map_err(|err| format!("figure `{}` png failed: {err}", figure.stem))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut base = None;
    let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
    let mut write_json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --base".to_owned())?;
                let parsed = value
                    .parse::<u32>()
                    .ok()
                    .filter(|parsed| *parsed > 0)
                    .ok_or_else(|| format!("--base expects an integer >= 1, got `{value}`"))?;
                base = Some(parsed);
            }
            "--output-dir" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-dir".to_owned())?;
                output_dir = PathBuf::from(value);
            }
            "--json" => write_json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        base,
        output_dir,
        write_json,
    })
}

fn print_usage() {
    println!("{}", usage_message());
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend,telemetry --bin render_erlang_charts -- [options]\n\nThe base parameter n is read from `{BASE_ENV_VAR}` (default 5) unless --base is given.\n\nOptions:\n  --base <n>           Base parameter driving all sweep ranges (1..={MAX_BASE})\n  --output-dir <path>  Directory for generated files (default: {DEFAULT_OUTPUT_DIR})\n  --json               Also write each figure's series as JSON\n  -h, --help           Show this message"
    )
}
