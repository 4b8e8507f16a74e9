//! Resample digitized filter transmission curves onto the 5 nm, 300–1100 nm
//! catalog grid and export them as a single TSV row.

pub mod color;
pub mod data;
pub mod error;
pub mod session;

pub use data::model::{ExtrapolationConfig, FilterMetadata, OutputRecord, Sample};
pub use error::{ErrorKind, ResampleError};
pub use session::{convert, run, Boundary, Collaborator, Conversion, Outcome};
