use riskmap::api::{RiskMap, RiskMapConfig};
use riskmap::core::{DataSourceFilter, Surface};
use riskmap::render::NullRenderer;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    surface: Surface,
    data_source: DataSourceFilter,
    derive_level_from_score: bool,
}

fn main() {
    if !riskmap::telemetry::init_default_tracing() && std::env::var_os("RUST_LOG").is_some() {
        eprintln!("warning: RUST_LOG ignored; build with the `telemetry` feature for logs");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;

    let config = RiskMapConfig::new(args.surface)
        .with_data_source(args.data_source)
        .with_derive_level_from_score(args.derive_level_from_score);
    let mut map = RiskMap::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    map.set_records_json(&raw).map_err(|err| err.to_string())?;
    map.render().map_err(|err| err.to_string())?;

    let json = map
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str = "usage: risk_map_snapshot --input <records.json> [--output <path>] \
         [--width <px>] [--height <px>] [--source all|internal|external] [--derive-level]";

    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut surface = Surface::default();
    let mut data_source = DataSourceFilter::All;
    let mut derive_level_from_score = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => input = Some(PathBuf::from(next_value(&mut args, "--input")?)),
            "--output" => output = Some(PathBuf::from(next_value(&mut args, "--output")?)),
            "--width" => surface.width = parse_px(&next_value(&mut args, "--width")?)?,
            "--height" => surface.height = parse_px(&next_value(&mut args, "--height")?)?,
            "--source" => {
                data_source = match next_value(&mut args, "--source")?.as_str() {
                    "all" => DataSourceFilter::All,
                    "internal" => DataSourceFilter::Internal,
                    "external" => DataSourceFilter::External,
                    other => return Err(format!("unknown data source `{other}`")),
                };
            }
            "--derive-level" => derive_level_from_score = true,
            _ => return Err(USAGE.to_owned()),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        surface,
        data_source,
        derive_level_from_score,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_px(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid pixel size `{value}`: {err}"))
}
