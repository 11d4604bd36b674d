use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;

use gridslice_cli::config::{load_demo_config, parse_values, DemoConfig};
use gridslice_cli::demo::{run_demo, run_index};

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn print_args() -> [Arg; 2] {
    [
        Arg::new("max_rows")
            .long("max-rows")
            .help("Rows kept on each side before the middle rows are elided")
            .value_parser(clap::value_parser!(usize)),
        Arg::new("max_cols")
            .long("max-cols")
            .help("Columns kept on each side before the middle columns are elided")
            .value_parser(clap::value_parser!(usize)),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("GRIDSLICE_LOG", "error,gridslice=info"))
        .init();

    let matches = Command::new("gridslice")
        .version(clap::crate_version!())
        .about("Dense matrices with NumPy-style indexing")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Print a matrix and the result of every demonstration expression")
                .arg(config_arg())
                .args(print_args()),
        )
        .subcommand(
            Command::new("index")
                .about("Evaluate indexing expressions such as '1:4, [1, 4]'")
                .arg(
                    Arg::new("expr")
                        .help("Indexing expression(s) to evaluate")
                        .required(true)
                        .action(ArgAction::Append)
                        .allow_hyphen_values(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("rows")
                        .short('r')
                        .long("rows")
                        .help("Number of rows. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("cols")
                        .short('k')
                        .long("cols")
                        .help("Number of columns. Overrides the configuration file.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("values")
                        .long("values")
                        .help(
                            "Comma-separated elements in row-major order. \
                             Defaults to 0..rows*cols.",
                        )
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .allow_hyphen_values(true),
                )
                .arg(config_arg())
                .args(print_args()),
        )
        .subcommand(Command::new("config").about("Print the default JSON configuration"))
        .get_matches();

    match matches.subcommand() {
        Some(("demo", sub_m)) => handle_demo(sub_m),
        Some(("index", sub_m)) => handle_index(sub_m),
        Some(("config", _)) => {
            let json = serde_json::to_string_pretty(&DemoConfig::default())?;
            println!("{}", json);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<DemoConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[gridslice] Using config: {:?}", path);
            load_demo_config(path)?
        }
        None => DemoConfig::default(),
    };
    if let Some(max_rows) = matches.get_one::<usize>("max_rows") {
        config.print.max_rows = Some(*max_rows);
    }
    if let Some(max_cols) = matches.get_one::<usize>("max_cols") {
        config.print.max_cols = Some(*max_cols);
    }
    Ok(config)
}

fn exit_on_error(result: Result<()>, what: &str) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", what, e);
            std::process::exit(1)
        }
    }
}

fn handle_demo(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    exit_on_error(run_demo(&config, &mut out), "Demo")?;
    out.flush()?;
    Ok(())
}

fn handle_index(matches: &ArgMatches) -> Result<()> {
    let mut config = load_config(matches)?;
    if let Some(rows) = matches.get_one::<usize>("rows") {
        config.rows = *rows;
    }
    if let Some(cols) = matches.get_one::<usize>("cols") {
        config.cols = *cols;
    }
    if let Some(values) = matches.get_one::<String>("values") {
        config.values = Some(parse_values(values));
    }
    let exprs: Vec<String> = matches
        .get_many::<String>("expr")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exit_on_error(run_index(&config, &exprs, &mut out), "Indexing")?;
    out.flush()?;
    Ok(())
}
