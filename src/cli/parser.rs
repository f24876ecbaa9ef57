use clap::Parser;

/// Command-line interface definition for rPontoCsv
#[derive(Parser, Debug)]
#[command(
    name = "rpontocsv",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn a \"Ponto Fácil\" backup into an attendance CSV for the payroll sheet",
    long_about = None
)]
pub struct Cli {
    /// Backup file exported by the time-clock app
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: String,

    /// CSV file to create (default: `default_output` from config, agregado.csv)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// First month to include (MM/YYYY)
    #[arg(short = 's', long = "start", value_name = "MM/YYYY")]
    pub start: Option<String>,

    /// Last month to include (MM/YYYY), up to its last day
    #[arg(short = 'e', long = "end", value_name = "MM/YYYY")]
    pub end: Option<String>,

    /// Override configuration file path
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Do not print the generated rows
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
