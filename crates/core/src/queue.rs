//! Multi-industry job queue construction.
//!
//! Expands a mapping of industry name → per-industry configuration into a
//! flat sequence of [`JobDescriptor`]s. Username, printer, and filename
//! assignment is deterministic round-robin within each industry; the full
//! cross-industry queue is then shuffled exactly once so industries
//! interleave instead of executing in contiguous blocks. The queue order
//! is fixed after that single shuffle.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CoreError;
use crate::job::{normalize_pdf_filename, JobDescriptor, PdfSource};

/// Per-industry session configuration, as submitted by the caller.
///
/// `usernames`, `printers`, and `filenames` are comma-separated lists;
/// entries are trimmed and empties dropped before validation.
#[derive(Debug, Clone)]
pub struct IndustryJobConfig {
    pub num_jobs: usize,
    pub usernames: String,
    pub printers: String,
    pub filenames: String,
    pub pdf_source: PdfSource,
    pub min_pages: u32,
    pub max_pages: u32,
    /// Staged source file; required when `pdf_source` is `Upload`.
    pub upload_ref: Option<PathBuf>,
}

/// Build the shuffled cross-industry job queue.
///
/// Industries with `num_jobs == 0` are skipped. Fails with
/// [`CoreError::Validation`] on a malformed industry and with
/// [`CoreError::NoJobs`] when the aggregate queue is empty.
pub fn build_queue<R: Rng + ?Sized>(
    industries: &BTreeMap<String, IndustryJobConfig>,
    rng: &mut R,
) -> Result<Vec<JobDescriptor>, CoreError> {
    let mut queue = Vec::new();

    for (industry, config) in industries {
        if config.num_jobs == 0 {
            continue;
        }
        expand_industry(industry, config, &mut queue)?;
    }

    if queue.is_empty() {
        return Err(CoreError::NoJobs);
    }

    // One shuffle, never re-applied: the executed order is this order.
    queue.shuffle(rng);
    Ok(queue)
}

/// Validate one industry and append its `num_jobs` descriptors.
fn expand_industry(
    industry: &str,
    config: &IndustryJobConfig,
    queue: &mut Vec<JobDescriptor>,
) -> Result<(), CoreError> {
    let usernames = split_csv(&config.usernames);
    let printers = split_csv(&config.printers);
    let filenames = split_csv(&config.filenames);

    if usernames.is_empty() {
        return Err(missing_field(industry, "username"));
    }
    if printers.is_empty() {
        return Err(missing_field(industry, "printer"));
    }
    if filenames.is_empty() {
        return Err(missing_field(industry, "filename"));
    }

    if config.pdf_source == PdfSource::Upload && config.upload_ref.is_none() {
        return Err(CoreError::Validation(format!(
            "Industry '{industry}': a staged upload is required when the PDF source is 'upload'"
        )));
    }

    if config.min_pages == 0 || config.min_pages > config.max_pages {
        return Err(CoreError::Validation(format!(
            "Industry '{industry}': invalid page range {}-{}",
            config.min_pages, config.max_pages
        )));
    }

    for i in 0..config.num_jobs {
        queue.push(JobDescriptor {
            industry: industry.to_string(),
            username: usernames[i % usernames.len()].clone(),
            printer: printers[i % printers.len()].clone(),
            filename: normalize_pdf_filename(&filenames[i % filenames.len()]),
            source: config.pdf_source,
            min_pages: config.min_pages,
            max_pages: config.max_pages,
            upload_ref: config.upload_ref.clone(),
        });
    }

    Ok(())
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn missing_field(industry: &str, field: &str) -> CoreError {
    CoreError::Validation(format!(
        "Industry '{industry}': at least one {field} is required"
    ))
}
