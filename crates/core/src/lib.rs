//! Pure domain types and logic for the print-job seeder.
//!
//! This crate has zero internal deps and no async code so it can be used
//! by the client, session, and API layers alike:
//!
//! - [`job`] — job descriptors and dispatch results.
//! - [`delay`] — the inter-job delay policy.
//! - [`queue`] — multi-industry job queue construction.
//! - [`presets`] — static per-industry filename catalogs.
//! - [`error`] — the shared error taxonomy.

pub mod delay;
pub mod error;
pub mod job;
pub mod presets;
pub mod queue;
pub mod types;

pub use delay::{compute_delay, DelayConfig, TimingMode};
pub use error::CoreError;
pub use job::{normalize_pdf_filename, JobDescriptor, JobResult, PdfSource};
pub use queue::{build_queue, IndustryJobConfig};
