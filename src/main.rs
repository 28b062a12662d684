use anyhow::{Context, bail};
use log::info;
use pixel_grid::config::{GridConfig, OverlapPolicy};
use pixel_grid::projection::FitMode;
use pixel_grid::render::{LayoutReport, render, stylesheet};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Output { Summary, Json, Css }

const USAGE: &str = "usage: pixel-grid [CONFIG.json] [--mode stretch|cover] [--allow-overlap] [--json|--css]";

#[derive(Debug, PartialEq)]
struct Args {
    config: Option<String>,
    mode: Option<FitMode>,
    allow_overlap: bool,
    output: Output,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
    let mut args = Args { config: None, mode: None, allow_overlap: false, output: Output::Summary };
    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => {
                let value = iter.next().context("--mode needs a value (stretch|cover)")?;
                args.mode = Some(value.parse()?);
            }
            "--allow-overlap" => args.allow_overlap = true,
            "--json" => args.output = Output::Json,
            "--css" => args.output = Output::Css,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => bail!("unknown flag: {}", flag),
            path => args.config = Some(path.to_string()),
        }
    }
    Ok(Command::Run(args))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match parse_args(std::env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    let mut config = match &args.config {
        Some(path) => GridConfig::load(path)?,
        None => {
            info!("no config given, using built-in demo sponsors");
            GridConfig::demo()
        }
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if args.allow_overlap {
        config.overlap = OverlapPolicy::LastWriterWins;
    }

    let layout = render(&config).context("render failed")?;
    match args.output {
        Output::Summary => LayoutReport::new(&layout).print_detail(),
        Output::Json => println!("{}", LayoutReport::new(&layout).to_json()?),
        Output::Css => print!("{}", stylesheet(&layout)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn help_is_returned_not_exited() {
        assert_eq!(parse_args(argv(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(argv(&["cfg.json", "-h", "--json"])).unwrap(), Command::Help);
    }

    #[test]
    fn full_flag_set() {
        let cmd = parse_args(argv(&["grid.json", "--mode", "stretch", "--allow-overlap", "--css"])).unwrap();
        assert_eq!(cmd, Command::Run(Args {
            config: Some("grid.json".into()),
            mode: Some(FitMode::Stretch),
            allow_overlap: true,
            output: Output::Css,
        }));
    }

    #[test]
    fn defaults_without_arguments() {
        match parse_args(argv(&[])).unwrap() {
            Command::Run(args) => {
                assert_eq!(args.config, None);
                assert_eq!(args.output, Output::Summary);
            }
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn bad_flags_fail() {
        assert!(parse_args(argv(&["--frobnicate"])).is_err());
        assert!(parse_args(argv(&["--mode"])).is_err());
        assert!(parse_args(argv(&["--mode", "tile"])).is_err());
    }
}
