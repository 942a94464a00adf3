use clap::{ArgAction, CommandFactory, Parser};
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use lifecal::{BirthDate, CalendarConfig, CalendarError, PdfCanvas, Renderer};
use log::debug;
use std::{
    path::{Path, PathBuf},
    process,
};

const DEFAULT_FILENAME: &str = "life_calendar.pdf";
const OUTPUT_EXTENSION: &str = "pdf";

/// Generate a personalized "Life Calendar", inspired by the calendar with the same name from the
/// waitbutwhy.com store
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Your birthday, in either dd/mm/yyyy or dd-mm-yyyy format
    date: String,

    /// Output filename. Its extension is always replaced with `.pdf`
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    filename: PathBuf,

    /// Log progress to stderr. Repeat for more detail. `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// The path actually written for a requested `filename`.
fn output_path(filename: &Path) -> PathBuf {
    filename.with_extension(OUTPUT_EXTENSION)
}

fn init_logging(verbose: u8) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    Logger::try_with_env_or_str(level)?.start()
}

fn do_work(cli: &Cli) -> Result<String, CalendarError> {
    let birth = BirthDate::parse(&cli.date)?;
    debug!("parsed birth date {birth}");

    let renderer = Renderer::new(CalendarConfig::default())?;
    let path = output_path(&cli.filename);
    let mut canvas = PdfCanvas::create(&path, renderer.config().page)?;
    renderer.render(&birth, &mut canvas)?;

    Ok(format!("Created {}", path.display()))
}

/// A message and the exit status.
type Output = (String, i32);

/// Turns the outcome of [do_work] into what the user sees. A bad date gets the usage text along
/// with the error.
fn report(res: Result<String, CalendarError>) -> Output {
    match res {
        Ok(output) => (output, 0),
        Err(CalendarError::Date(_)) => (
            format!(
                "Error: incorrect date format\n\n{}",
                Cli::command().render_help()
            ),
            1,
        ),
        Err(e) => (e.to_string(), 1),
    }
}

fn main() {
    let cli = Cli::parse();

    let _logger = match init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Could not start logging: {e}");
            None
        }
    };

    let (output, exit_code) = report(do_work(&cli));
    if exit_code == 0 {
        println!("{output}");
    } else {
        eprintln!("{output}");
        process::exit(exit_code);
    }
}
