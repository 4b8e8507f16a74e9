use std::io;

use crate::error::ResampleError;

use super::model::{ExtrapolationConfig, FilterMetadata, OutputRecord};

// ---------------------------------------------------------------------------
// File naming
// ---------------------------------------------------------------------------

/// Build the output file name from the metadata and extrapolation flags, e.g.
/// `Lee_106_Primary_Red_extrapolated_300_1100.tsv`.
pub fn output_file_name(metadata: &FilterMetadata, extrapolation: ExtrapolationConfig) -> String {
    let stem = match &metadata.manufacturer {
        Some(m) => format!("{m}_{}_{}", metadata.filter_number, metadata.filter_name),
        None => format!("{}_{}", metadata.filter_number, metadata.filter_name),
    };
    let mut name = sanitize(&stem);

    let mut bounds = Vec::new();
    if extrapolation.low {
        bounds.push("300");
    }
    if extrapolation.high {
        bounds.push("1100");
    }
    if !bounds.is_empty() {
        name.push_str("_extrapolated_");
        name.push_str(&bounds.join("_"));
    }
    name.push_str(".tsv");
    name
}

/// Keep alphanumerics, spaces and underscores; trim trailing whitespace;
/// turn spaces into underscores.
fn sanitize(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect();
    kept.trim_end().replace(' ', "_")
}

// ---------------------------------------------------------------------------
// TSV serialization
// ---------------------------------------------------------------------------

/// Header cells: metadata column names followed by the grid wavelengths.
pub fn header_row(record: &OutputRecord) -> Vec<String> {
    record
        .metadata
        .column_names()
        .into_iter()
        .map(str::to_string)
        .chain(record.wavelengths.iter().map(|wl| wl.to_string()))
        .collect()
}

/// Data cells: metadata values followed by the formatted transmissions.
pub fn data_row(record: &OutputRecord) -> Vec<String> {
    record
        .metadata
        .column_values()
        .into_iter()
        .map(str::to_string)
        .chain(record.values.iter().map(|v| format_value(*v)))
        .collect()
}

/// Shortest representation with at most 3 decimals; whole numbers keep a
/// `.0`; missing values are empty cells.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) => {
            let s = format!("{v:.3}");
            s.trim_end_matches('0').to_string()
        }
    }
}

/// Serialize the record as a tab-separated header row plus one data row.
pub fn to_tsv(record: &OutputRecord) -> Result<String, ResampleError> {
    let mut buf = Vec::new();
    write_tsv(record, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ResampleError::Export(format!("serializing TSV: {e}")))
}

/// Stream the TSV into any writer.
pub fn write_tsv<W: io::Write>(record: &OutputRecord, out: W) -> Result<(), ResampleError> {
    let export_err = |e: csv::Error| ResampleError::Export(format!("serializing TSV: {e}"));
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);
    writer.write_record(header_row(record)).map_err(export_err)?;
    writer.write_record(data_row(record)).map_err(export_err)?;
    writer
        .flush()
        .map_err(|e| ResampleError::Export(format!("serializing TSV: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn record(manufacturer: Option<&str>) -> OutputRecord {
        OutputRecord {
            metadata: FilterMetadata::new(
                "106",
                "Primary Red",
                manufacturer.map(str::to_string),
                "#ff0000",
            ),
            wavelengths: vec![395, 400, 405],
            values: vec![None, Some(0.1), Some(1.0)],
        }
    }

    #[test]
    fn file_name_minimal_layout() {
        let meta = FilterMetadata::new("25", "Primary Red", None, "#f00");
        assert_eq!(
            output_file_name(&meta, ExtrapolationConfig::default()),
            "25_Primary_Red.tsv"
        );
    }

    #[test]
    fn file_name_strips_punctuation_and_adds_suffixes() {
        let meta = FilterMetadata::new("R-25", "Red (Deep)! ", Some("Lee".into()), "#f00");
        assert_eq!(
            output_file_name(&meta, ExtrapolationConfig::new(true, true)),
            "Lee_R25_Red_Deep_extrapolated_300_1100.tsv"
        );
        assert_eq!(
            output_file_name(&meta, ExtrapolationConfig::new(false, true)),
            "Lee_R25_Red_Deep_extrapolated_1100.tsv"
        );
        assert_eq!(
            output_file_name(&meta, ExtrapolationConfig::new(true, false)),
            "Lee_R25_Red_Deep_extrapolated_300.tsv"
        );
    }

    #[test]
    fn values_format_like_the_catalog() {
        assert_eq!(format_value(None), "");
        assert_eq!(format_value(Some(0.1)), "0.1");
        assert_eq!(format_value(Some(0.123)), "0.123");
        assert_eq!(format_value(Some(0.5)), "0.5");
        assert_eq!(format_value(Some(1.0)), "1.0");
        assert_eq!(format_value(Some(0.0)), "0.0");
        assert_eq!(format_value(Some(12.04)), "12.04");
    }

    #[test]
    fn tsv_has_header_and_one_row() {
        let tsv = to_tsv(&record(None)).unwrap();
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Filter Number\tFilter Name\tHex Color\t395\t400\t405");
        assert_eq!(lines[1], "106\tPrimary Red\t#ff0000\t\t0.1\t1.0");
    }

    /// Writer that rejects every byte.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn writer_failure_is_reported_as_output_error() {
        let err = write_tsv(&record(None), Broken).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoError);
        assert!(matches!(err, ResampleError::Export(_)));
        assert!(err.to_string().starts_with("writing output: serializing TSV"));
    }

    #[test]
    fn tsv_includes_manufacturer_column() {
        let tsv = to_tsv(&record(Some("Lee"))).unwrap();
        let header = tsv.lines().next().unwrap();
        assert!(header.starts_with("Filter Number\tFilter Name\tManufacturer\tHex Color\t395"));
    }
}
