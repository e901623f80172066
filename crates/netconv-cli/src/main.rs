use std::path::PathBuf;

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use netconv_cli::{convert_text, load_config, read_input, round_trip_text, OutputFormat, TargetVersion};
use netconv_core::Converter;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .default_value("-")
        .help("Document to read, or - for stdin");
    let config = Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("Conversion config file (YAML or JSON)");
    let format = Arg::new("format")
        .long("format")
        .default_value("yaml")
        .value_parser(OutputFormat::NAMES)
        .help("Output format");

    Command::new("netconv")
        .version(netconv_core::VERSION)
        .about("Convert ManagedControlPlane records between API versions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("convert")
                .about("Convert a document to another version")
                .arg(input.clone())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(TargetVersion::NAMES)
                        .help("Target version"),
                )
                .arg(format.clone())
                .arg(config.clone()),
        )
        .subcommand(
            Command::new("roundtrip")
                .about("Convert a hub document down and back up, and report whether it survived")
                .arg(input)
                .arg(format)
                .arg(config),
        )
}

fn converter(args: &ArgMatches) -> anyhow::Result<Converter> {
    let path = args.get_one::<PathBuf>("config");
    Ok(Converter::new(load_config(path.map(PathBuf::as_path))?))
}

fn output_format(args: &ArgMatches) -> anyhow::Result<OutputFormat> {
    args.get_one::<String>("format")
        .map_or(Ok(OutputFormat::default()), |f| f.parse())
}

fn run(matches: &ArgMatches) -> anyhow::Result<i32> {
    match matches.subcommand() {
        Some(("convert", args)) => {
            let input = args.get_one::<String>("input").context("missing --input")?;
            let target: TargetVersion = args
                .get_one::<String>("to")
                .context("missing --to")?
                .parse()?;

            let text = read_input(input)?;
            let out = convert_text(&text, target, output_format(args)?, &converter(args)?)?;
            print!("{out}");
            Ok(0)
        }
        Some(("roundtrip", args)) => {
            let input = args.get_one::<String>("input").context("missing --input")?;

            let text = read_input(input)?;
            let report = round_trip_text(&text, &converter(args)?)?;
            if report.preserved {
                eprintln!("round trip preserved the record");
                Ok(0)
            } else {
                eprintln!("round trip changed the record; result follows");
                print!("{}", report.result.render(output_format(args)?)?);
                Ok(1)
            }
        }
        _ => Ok(2),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let code = match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            1
        }
    };
    std::process::exit(code);
}
