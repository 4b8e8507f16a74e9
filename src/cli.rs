use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Digitizer export (';'-separated wavelength/transmission, no header)
    pub input: Option<PathBuf>,

    /// Filter number, e.g. "106"
    #[arg(long)]
    pub filter_number: Option<String>,

    /// Filter name, e.g. "Primary Red"
    #[arg(long)]
    pub filter_name: Option<String>,

    /// Manufacturer; adds a Manufacturer column and file name prefix
    #[arg(short, long)]
    pub manufacturer: Option<String>,

    /// Hex color, '#' is prepended when missing
    #[arg(long)]
    pub hex_color: Option<String>,

    /// JSON file with filter metadata (flags take precedence)
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Extend the lowest transmission flat down to 300 nm
    #[arg(long)]
    pub extrapolate_low: bool,

    /// Extend the highest transmission flat up to 1100 nm
    #[arg(long)]
    pub extrapolate_high: bool,

    /// Directory for the TSV (defaults to the input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Refuse to overwrite an existing output file
    #[arg(long)]
    pub no_clobber: bool,

    /// Prompt on the terminal for anything not given as a flag
    #[arg(short, long)]
    pub interactive: bool,

    /// Debug logging (RUST_LOG still wins when set)
    #[arg(short, long)]
    pub verbose: bool,
}
