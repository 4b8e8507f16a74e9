/// Data layer: core types, parsing, resampling and export.
///
/// Architecture:
/// ```text
///  digitizer .csv (';'-separated, ',' or '.' decimals)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  tolerant parse → sorted Vec<Sample>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   grid    │  5 nm bounds inside 300–1100 nm
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ resample  │  interpolate / flat-extrapolate → round → clamp
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  OutputRecord → file name + TSV
///   └──────────┘
/// ```

pub mod export;
pub mod grid;
pub mod loader;
pub mod model;
pub mod resample;
