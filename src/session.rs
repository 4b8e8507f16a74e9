use std::path::{Path, PathBuf};

use crate::data::export;
use crate::data::grid::Grid;
use crate::data::loader::parse_samples;
use crate::data::model::{ExtrapolationConfig, FilterMetadata, OutputRecord};
use crate::data::resample::resample;
use crate::error::ResampleError;

// ---------------------------------------------------------------------------
// Collaborator – everything the core needs from the surrounding program
// ---------------------------------------------------------------------------

/// Which end of the catalog range an extrapolation question is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Extend down to 300 nm.
    Low,
    /// Extend up to 1100 nm.
    High,
}

/// The surrounding program: acquires inputs, performs file I/O and reports
/// outcomes. Prompts return `None` when the user cancels.
pub trait Collaborator {
    fn select_input_file(&mut self) -> Option<PathBuf>;

    /// Implementations normalize the hex colour (leading `#`).
    fn prompt_metadata(&mut self) -> Option<FilterMetadata>;

    fn prompt_extrapolation(&mut self, boundary: Boundary) -> bool;

    fn read_file_text(&mut self, path: &Path) -> Result<String, ResampleError> {
        std::fs::read_to_string(path).map_err(|e| ResampleError::io(path, e))
    }

    /// Overwrites any existing file.
    fn write_file_text(&mut self, path: &Path, content: &str) -> Result<(), ResampleError> {
        std::fs::write(path, content).map_err(|e| ResampleError::io(path, e))
    }

    /// Where to put the result; next to the input by default.
    fn output_path(&mut self, input: &Path, file_name: &str) -> PathBuf {
        input
            .parent()
            .map(|dir| dir.join(file_name))
            .unwrap_or_else(|| PathBuf::from(file_name))
    }

    fn report_success(&mut self, path: &Path);

    fn report_error(&mut self, error: &ResampleError);
}

// ---------------------------------------------------------------------------
// Core conversion
// ---------------------------------------------------------------------------

/// Result of a successful conversion, not yet written anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub record: OutputRecord,
    pub file_name: String,
}

impl Conversion {
    pub fn to_tsv(&self) -> Result<String, ResampleError> {
        export::to_tsv(&self.record)
    }
}

/// Turn raw digitizer text plus metadata into a catalog row.
pub fn convert(
    text: &str,
    metadata: &FilterMetadata,
    extrapolation: ExtrapolationConfig,
) -> Result<Conversion, ResampleError> {
    convert_validated(text, metadata.validated()?, extrapolation)
}

/// [`convert`] for metadata that already went through
/// [`FilterMetadata::validated`].
fn convert_validated(
    text: &str,
    metadata: FilterMetadata,
    extrapolation: ExtrapolationConfig,
) -> Result<Conversion, ResampleError> {
    let samples = parse_samples(text)?;
    let grid = Grid::build(&samples, extrapolation)?;
    let values = resample(&samples, &grid, extrapolation);

    let file_name = export::output_file_name(&metadata, extrapolation);
    let record = OutputRecord {
        metadata,
        wavelengths: grid.wavelengths(),
        values,
    };
    Ok(Conversion { record, file_name })
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// How a [`run`] ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Cancelled,
}

/// One full invocation: prompt, convert, write, report.
///
/// Errors are reported through [`Collaborator::report_error`] and also
/// returned so the caller can choose an exit status.
pub fn run<C: Collaborator>(collab: &mut C) -> Result<Outcome, ResampleError> {
    let Some(input) = collab.select_input_file() else {
        log::info!("No input file selected");
        return Ok(Outcome::Cancelled);
    };
    let Some(metadata) = collab.prompt_metadata() else {
        log::info!("Metadata entry cancelled");
        return Ok(Outcome::Cancelled);
    };
    let extrapolation = ExtrapolationConfig::new(
        collab.prompt_extrapolation(Boundary::Low),
        collab.prompt_extrapolation(Boundary::High),
    );

    match write_conversion(collab, &input, &metadata, extrapolation) {
        Ok(path) => {
            log::info!("Wrote {}", path.display());
            collab.report_success(&path);
            Ok(Outcome::Written(path))
        }
        Err(e) => {
            log::debug!("{} ({}): {e:?}", e.kind(), input.display());
            collab.report_error(&e);
            Err(e)
        }
    }
}

fn write_conversion<C: Collaborator>(
    collab: &mut C,
    input: &Path,
    metadata: &FilterMetadata,
    extrapolation: ExtrapolationConfig,
) -> Result<PathBuf, ResampleError> {
    // Missing metadata is reported before the input is touched.
    let metadata = metadata.validated()?;
    let text = collab.read_file_text(input)?;
    let conversion = convert_validated(&text, metadata, extrapolation)?;
    let tsv = conversion.to_tsv()?;
    let out_path = collab.output_path(input, &conversion.file_name);
    collab.write_file_text(&out_path, &tsv)?;
    Ok(out_path)
}
