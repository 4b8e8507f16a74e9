use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use filter_resampler::color::normalize_hex;
use filter_resampler::{Boundary, Collaborator, FilterMetadata, ResampleError};

use crate::cli::Cli;
use crate::config::MetadataConfig;

// ---------------------------------------------------------------------------
// TerminalCollaborator – flags first, then optional stdin prompts
// ---------------------------------------------------------------------------

/// Answers the core's questions from command-line flags, falling back to
/// line prompts on `reader` when running interactively.
pub struct TerminalCollaborator<R, W> {
    input: Option<PathBuf>,
    metadata: MetadataConfig,
    extrapolate_low: bool,
    extrapolate_high: bool,
    output_dir: Option<PathBuf>,
    no_clobber: bool,
    interactive: bool,
    reader: R,
    prompts: W,
}

impl TerminalCollaborator<io::StdinLock<'static>, io::Stderr> {
    pub fn from_cli(cli: Cli, metadata: MetadataConfig) -> Self {
        Self::new(cli, metadata, io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalCollaborator<R, W> {
    pub fn new(cli: Cli, metadata: MetadataConfig, reader: R, prompts: W) -> Self {
        Self {
            input: cli.input,
            metadata,
            extrapolate_low: cli.extrapolate_low,
            extrapolate_high: cli.extrapolate_high,
            output_dir: cli.output_dir,
            no_clobber: cli.no_clobber,
            interactive: cli.interactive,
            reader,
            prompts,
        }
    }

    /// Print `label` and read one trimmed line; `None` on EOF or read error.
    fn ask(&mut self, label: &str) -> Option<String> {
        write!(self.prompts, "{label}: ").ok()?;
        self.prompts.flush().ok()?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Flag value if set, else a prompt when interactive, else empty.
    fn field(&mut self, given: Option<String>, label: &str) -> Option<String> {
        match given {
            Some(v) => Some(v),
            None if self.interactive => self.ask(label),
            None => Some(String::new()),
        }
    }
}

impl<R: BufRead, W: Write> Collaborator for TerminalCollaborator<R, W> {
    fn select_input_file(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.input.take() {
            return Some(path);
        }
        if !self.interactive {
            return None;
        }
        self.ask("CSV file")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    fn prompt_metadata(&mut self) -> Option<FilterMetadata> {
        let given = self.metadata.clone();
        let filter_number = self.field(given.filter_number, "Filter Number")?;
        let filter_name = self.field(given.filter_name, "Filter Name")?;
        let manufacturer = match given.manufacturer {
            Some(m) => Some(m),
            None if self.interactive => {
                Some(self.ask("Manufacturer (empty for none)")?).filter(|m| !m.is_empty())
            }
            None => None,
        };
        let hex_color = self.field(given.hex_color, "Hex Color (e.g. #FF0000)")?;
        let hex_color = if hex_color.trim().is_empty() {
            hex_color
        } else {
            normalize_hex(&hex_color)
        };
        Some(FilterMetadata::new(filter_number, filter_name, manufacturer, hex_color))
    }

    fn prompt_extrapolation(&mut self, boundary: Boundary) -> bool {
        let (flag, question) = match boundary {
            Boundary::Low => (self.extrapolate_low, "Extrapolate flat down to 300 nm? [y/N]"),
            Boundary::High => (self.extrapolate_high, "Extrapolate flat up to 1100 nm? [y/N]"),
        };
        if flag || !self.interactive {
            return flag;
        }
        self.ask(question)
            .map(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn write_file_text(&mut self, path: &Path, content: &str) -> Result<(), ResampleError> {
        let mut options = OpenOptions::new();
        options.write(true);
        if self.no_clobber {
            // `AlreadyExists` when the file is already there.
            options.create_new(true);
        } else {
            options.create(true).truncate(true);
        }
        options
            .open(path)
            .and_then(|mut file| file.write_all(content.as_bytes()))
            .map_err(|source| ResampleError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    fn output_path(&mut self, input: &Path, file_name: &str) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.join(file_name),
            None => input
                .parent()
                .map(|dir| dir.join(file_name))
                .unwrap_or_else(|| PathBuf::from(file_name)),
        }
    }

    fn report_success(&mut self, path: &Path) {
        println!("{}", path.display());
    }

    fn report_error(&mut self, error: &ResampleError) {
        eprintln!("{}: {error}", error.kind());
    }
}
