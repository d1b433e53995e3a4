use catch2html::cli::{self as prog_cli, Command};
use catch2html::config::AppConfig;
use catch2html::{ReportError, logger};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

// The single argument is always a path, even when it looks like a flag.
#[derive(Parser, Debug)]
#[command(
    name = "catch2html",
    about = "Convert Catch2 benchmark console output into HTML tables",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(allow_hyphen_values = true, help = "File containing Catch2 benchmark console output")]
    file: PathBuf,
}

fn parse_args(args: Vec<OsString>) -> Result<Cli, ReportError> {
    if args.len() != 2 {
        return Err(ReportError::Usage);
    }
    // clap swallows a lone `--` as the end-of-options marker
    Ok(Cli::try_parse_from(&args).unwrap_or_else(|_| Cli { file: PathBuf::from(&args[1]) }))
}

fn main() {
    let cli = match parse_args(std::env::args_os().collect()) {
        Ok(c) => c,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };
    let cfg = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("warning: {e}; using defaults");
            AppConfig::default()
        }
    };
    if let Err(e) = logger::init_from_config(&cfg) {
        eprintln!("warning: {e}");
    }

    let cmd = Command::Convert { file: cli.file };
    let stdout = std::io::stdout();
    if let Err(e) = prog_cli::run(cmd, &mut stdout.lock()) {
        log::error!("{e}");
        if e.is_user_facing() {
            println!("{e}");
        } else {
            eprintln!("error: {e}");
        }
        std::process::exit(1);
    }
}
