//! Synthetic document generation for print-job seeding.
//!
//! Given a filename, an industry tag, and a page-count range, produces a
//! paginated PDF whose content is drawn from per-industry template tables
//! (see [`content`]). The dispatcher consumes this through the
//! [`DocumentGenerator`] trait so tests can substitute a stub.

pub mod content;
pub mod pdf;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::content::{template_for, ContentTemplate, LOREM_IPSUM};
use crate::pdf::{build_pdf, Page};

/// Wrap width for paragraph text, characters.
const WRAP_WIDTH: usize = 90;

/// The kinds of content block a page can carry.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Block {
    Fields,
    Paragraphs,
    Table,
    Lorem,
}

const ALL_BLOCKS: &[Block] = &[Block::Fields, Block::Paragraphs, Block::Table, Block::Lorem];

/// Seam between the dispatcher and document generation.
pub trait DocumentGenerator: Send + Sync {
    /// Produce PDF bytes for one job.
    fn generate(&self, filename: &str, industry: &str, min_pages: u32, max_pages: u32) -> Vec<u8>;
}

/// Production generator backed by the thread RNG.
#[derive(Debug, Default)]
pub struct PdfGenerator;

impl DocumentGenerator for PdfGenerator {
    fn generate(&self, filename: &str, industry: &str, min_pages: u32, max_pages: u32) -> Vec<u8> {
        generate_pdf(filename, industry, min_pages, max_pages, &mut rand::rng())
    }
}

/// Generate a paginated industry-flavored PDF.
///
/// Page count is uniform in `[min_pages, max_pages]`; each page carries a
/// random header, a document reference line, and 2-4 distinct content
/// blocks sampled from the industry's template. All randomness comes from
/// `rng`, so a seeded caller gets identical bytes.
pub fn generate_pdf<R: Rng + ?Sized>(
    filename: &str,
    industry: &str,
    min_pages: u32,
    max_pages: u32,
    rng: &mut R,
) -> Vec<u8> {
    let template = template_for(industry);
    let (lo, hi) = (min_pages.max(1), max_pages.max(min_pages.max(1)));
    let num_pages = rng.random_range(lo..=hi);
    let base_name = strip_pdf_suffix(filename);

    let pages: Vec<Page> = (1..=num_pages)
        .map(|page_num| {
            let title = template
                .headers
                .choose(rng)
                .copied()
                .unwrap_or("DOCUMENT")
                .to_string();
            Page {
                title,
                reference: format!("Document: {base_name} | Page {page_num} of {num_pages}"),
                lines: page_lines(template, rng),
            }
        })
        .collect();

    build_pdf(&pages)
}

/// Compose one page's body: 2-4 distinct content blocks.
fn page_lines<R: Rng + ?Sized>(template: &ContentTemplate, rng: &mut R) -> Vec<String> {
    let block_count = rng.random_range(2..=4usize);
    let mut lines = Vec::new();
    let chosen: Vec<Block> = ALL_BLOCKS
        .choose_multiple(rng, block_count)
        .copied()
        .collect();

    for block in chosen {
        match block {
            Block::Fields => {
                lines.push("INFORMATION".to_string());
                let count = rng.random_range(3..=6usize).min(template.fields.len());
                for (name, value) in template.fields.choose_multiple(rng, count) {
                    lines.push(format!("{name}: {value}"));
                }
            }
            Block::Paragraphs => {
                lines.push("DETAILS".to_string());
                let count = rng.random_range(2..=4usize).min(template.paragraphs.len());
                for para in template.paragraphs.choose_multiple(rng, count) {
                    lines.extend(wrap(para, WRAP_WIDTH));
                }
            }
            Block::Table => {
                lines.push("SUMMARY".to_string());
                lines.push(template.table_headers.join(" | "));
                for row in template.table_rows {
                    lines.push(row.join(" | "));
                }
            }
            Block::Lorem => {
                lines.push("ADDITIONAL NOTES".to_string());
                let count = rng.random_range(2..=4usize).min(LOREM_IPSUM.len());
                for para in LOREM_IPSUM.choose_multiple(rng, count) {
                    lines.extend(wrap(para, WRAP_WIDTH));
                }
            }
        }
        lines.push(String::new());
    }

    lines
}

/// Greedy word wrap.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

fn strip_pdf_suffix(filename: &str) -> &str {
    if filename.len() >= 4 && filename[filename.len() - 4..].eq_ignore_ascii_case(".pdf") {
        &filename[..filename.len() - 4]
    } else {
        filename
    }
}
