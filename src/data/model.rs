use serde::{Deserialize, Serialize};

use crate::color;
use crate::error::ResampleError;

// ---------------------------------------------------------------------------
// Sample – one digitized (wavelength, transmission) point
// ---------------------------------------------------------------------------

/// A single measurement pair read from the digitizer export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Wavelength in nm (x).
    pub wavelength: f64,
    /// Transmission at that wavelength (y).
    pub transmission: f64,
}

impl Sample {
    pub fn new(wavelength: f64, transmission: f64) -> Self {
        Self {
            wavelength,
            transmission,
        }
    }
}

// ---------------------------------------------------------------------------
// FilterMetadata – catalog columns preceding the transmission values
// ---------------------------------------------------------------------------

/// Descriptive columns of one catalog row.
///
/// `manufacturer: None` selects the minimal layout, which has no
/// `Manufacturer` column and no manufacturer prefix in the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterMetadata {
    pub filter_number: String,
    pub filter_name: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    pub hex_color: String,
}

impl FilterMetadata {
    pub fn new(
        filter_number: impl Into<String>,
        filter_name: impl Into<String>,
        manufacturer: Option<String>,
        hex_color: impl Into<String>,
    ) -> Self {
        Self {
            filter_number: filter_number.into(),
            filter_name: filter_name.into(),
            manufacturer,
            hex_color: hex_color.into(),
        }
    }

    /// Trim every field, normalize the hex colour and check that nothing
    /// required is empty.
    pub fn validated(&self) -> Result<FilterMetadata, ResampleError> {
        let filter_number = self.filter_number.trim().to_string();
        let filter_name = self.filter_name.trim().to_string();
        let manufacturer = self.manufacturer.as_deref().map(|m| m.trim().to_string());
        let hex_raw = self.hex_color.trim();

        let mut fields = Vec::new();
        if filter_number.is_empty() {
            fields.push("Filter Number");
        }
        if filter_name.is_empty() {
            fields.push("Filter Name");
        }
        if matches!(manufacturer.as_deref(), Some("")) {
            fields.push("Manufacturer");
        }
        if hex_raw.is_empty() {
            fields.push("Hex Color");
        }
        if !fields.is_empty() {
            return Err(ResampleError::MissingMetadata { fields });
        }

        let hex_color = color::normalize_hex(hex_raw);
        if color::parse_hex(&hex_color).is_none() {
            log::warn!("Hex color '{hex_color}' is not a valid #rgb/#rrggbb code, keeping it as text");
        }

        Ok(FilterMetadata {
            filter_number,
            filter_name,
            manufacturer,
            hex_color,
        })
    }

    /// Column names in output order.
    pub fn column_names(&self) -> Vec<&'static str> {
        let mut cols = vec!["Filter Number", "Filter Name"];
        if self.manufacturer.is_some() {
            cols.push("Manufacturer");
        }
        cols.push("Hex Color");
        cols
    }

    /// Column values in the same order as [`column_names`](Self::column_names).
    pub fn column_values(&self) -> Vec<&str> {
        let mut vals = vec![self.filter_number.as_str(), self.filter_name.as_str()];
        if let Some(m) = &self.manufacturer {
            vals.push(m.as_str());
        }
        vals.push(self.hex_color.as_str());
        vals
    }
}

// ---------------------------------------------------------------------------
// ExtrapolationConfig
// ---------------------------------------------------------------------------

/// Which boundaries get flat extrapolation out to 300 / 1100 nm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtrapolationConfig {
    pub low: bool,
    pub high: bool,
}

impl ExtrapolationConfig {
    pub fn new(low: bool, high: bool) -> Self {
        Self { low, high }
    }
}

// ---------------------------------------------------------------------------
// OutputRecord – the single catalog row produced per invocation
// ---------------------------------------------------------------------------

/// Metadata plus one transmission value per grid wavelength.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub metadata: FilterMetadata,
    /// Grid wavelengths in nm, ascending.
    pub wavelengths: Vec<i64>,
    /// `None` where the grid lies outside the data and that side was not
    /// extrapolated.
    pub values: Vec<Option<f64>>,
}

impl OutputRecord {
    /// Look up the value at an exact grid wavelength.
    pub fn value_at(&self, wavelength: i64) -> Option<f64> {
        self.wavelengths
            .iter()
            .position(|&wl| wl == wavelength)
            .and_then(|i| self.values[i])
    }

    /// Number of transmission columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no transmission columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn validated_trims_and_normalizes_hex() {
        let meta = FilterMetadata::new(" 25 ", "Red ", None, "ff0000");
        let v = meta.validated().unwrap();
        assert_eq!(v.filter_number, "25");
        assert_eq!(v.filter_name, "Red");
        assert_eq!(v.hex_color, "#ff0000");
    }

    #[test]
    fn validated_reports_every_empty_field() {
        let meta = FilterMetadata::new("", "  ", Some(String::new()), "");
        let err = meta.validated().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingMetadata);
        match err {
            ResampleError::MissingMetadata { fields } => assert_eq!(
                fields,
                vec!["Filter Number", "Filter Name", "Manufacturer", "Hex Color"]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn free_text_color_is_accepted() {
        let meta = FilterMetadata::new("1", "Odd", None, "reddish");
        assert_eq!(meta.validated().unwrap().hex_color, "#reddish");
    }

    #[test]
    fn columns_follow_layout() {
        let minimal = FilterMetadata::new("1", "A", None, "#000");
        assert_eq!(
            minimal.column_names(),
            vec!["Filter Number", "Filter Name", "Hex Color"]
        );
        let full = FilterMetadata::new("1", "A", Some("Lee".into()), "#000");
        assert_eq!(
            full.column_names(),
            vec!["Filter Number", "Filter Name", "Manufacturer", "Hex Color"]
        );
        assert_eq!(full.column_values(), vec!["1", "A", "Lee", "#000"]);
    }

    #[test]
    fn metadata_from_json_without_manufacturer() {
        let json = r##"{"filter_number":"7","filter_name":"Blue","hex_color":"#00f"}"##;
        let meta: FilterMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.manufacturer, None);
        assert_eq!(meta.hex_color, "#00f");
    }
}
