//! HTTP client for the print ingestion API, plus the dispatcher that
//! turns a [`printseed_core::JobDescriptor`] into a recorded
//! [`printseed_core::JobResult`].
//!
//! The split mirrors the layering above it: [`api::PrintApi`] knows the
//! wire protocol (multipart form, auth header, timeout), while
//! [`dispatcher::JobDispatcher`] knows where PDF bytes come from and how
//! to classify an outcome. Neither ever returns an error for a failed
//! submission; failures are data on the [`printseed_core::JobResult`].

pub mod api;
pub mod diagnostics;
pub mod dispatcher;

pub use api::{PrintApi, SubmitOutcome};
pub use diagnostics::{DiagnosticsSink, TracingSink};
pub use dispatcher::JobDispatcher;
