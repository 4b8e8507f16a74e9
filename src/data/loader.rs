use std::path::Path;

use crate::error::ResampleError;

use super::model::Sample;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a digitizer export from disk and parse it with [`parse_samples`].
pub fn load_samples(path: &Path) -> Result<Vec<Sample>, ResampleError> {
    let text = std::fs::read_to_string(path).map_err(|e| ResampleError::io(path, e))?;
    parse_samples(&text)
}

/// Parse a number that may use `,` as decimal separator.
///
/// Never fails: anything unparsable becomes `NaN`.
pub fn parse_decimal(token: &str) -> f64 {
    token
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Table ingestion
// ---------------------------------------------------------------------------

/// Layout: no header, fields separated by `;`, first field wavelength,
/// second field transmission, further fields ignored:
///
/// ```text
/// 400;0,10
/// 412.5;0.23
/// ```
///
/// Rows whose wavelength or transmission does not parse are dropped. The
/// result is stably sorted by wavelength.
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, ResampleError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut samples = Vec::new();
    let mut n_rows = 0usize;
    let mut max_fields = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| ResampleError::Parse(format!("row {row_no}: {e}")))?;
        n_rows += 1;
        max_fields = max_fields.max(record.len());

        let wavelength = record.get(0).map(parse_decimal).unwrap_or(f64::NAN);
        let transmission = record.get(1).map(parse_decimal).unwrap_or(f64::NAN);

        if wavelength.is_finite() && transmission.is_finite() {
            samples.push(Sample::new(wavelength, transmission));
        } else {
            log::debug!("Dropping row {row_no}: {:?}", record.iter().collect::<Vec<_>>());
        }
    }

    if n_rows == 0 {
        return Err(ResampleError::EmptyData(
            "no rows found in the input".to_string(),
        ));
    }
    if max_fields < 2 {
        return Err(ResampleError::Parse(
            "could not read two columns, check that fields are separated by ';'".to_string(),
        ));
    }
    if samples.is_empty() {
        return Err(ResampleError::Parse(format!(
            "none of the {n_rows} rows holds a numeric wavelength and transmission"
        )));
    }

    let dropped = n_rows - samples.len();
    if dropped > 0 {
        log::warn!("Dropped {dropped} of {n_rows} rows with non-numeric values");
    }

    // `sort_by` is stable: equal wavelengths keep their file order.
    samples.sort_by(|a, b| a.wavelength.total_cmp(&b.wavelength));
    log::debug!(
        "Parsed {} samples spanning {} nm to {} nm",
        samples.len(),
        samples[0].wavelength,
        samples[samples.len() - 1].wavelength
    );
    Ok(samples)
}
