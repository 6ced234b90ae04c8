//! Minimal text-only PDF assembly.
//!
//! Emits a structurally valid PDF 1.4 file: catalog, page tree, a single
//! Helvetica Type1 font, and one text content stream per page, with a
//! correct cross-reference table. Good enough for a print API that treats
//! the payload as an opaque document; not a general PDF library.

/// US Letter media box, points.
const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;

const MARGIN: f64 = 72.0;
const TITLE_SIZE: f64 = 16.0;
const REF_SIZE: f64 = 9.0;
const BODY_SIZE: f64 = 11.0;
const BODY_LEADING: f64 = 14.0;

/// Maximum body lines that fit on one page at the chosen leading.
pub const MAX_LINES_PER_PAGE: usize = 42;

/// One rendered page: a centered-ish title, a reference line, body lines.
pub struct Page {
    pub title: String,
    pub reference: String,
    pub lines: Vec<String>,
}

/// Assemble the pages into a complete PDF byte stream.
pub fn build_pdf(pages: &[Page]) -> Vec<u8> {
    let mut buf: Vec<u8> = Vec::new();
    let mut offsets: Vec<usize> = Vec::new();

    buf.extend_from_slice(b"%PDF-1.4\n");

    // Object 1: catalog. Object 2: page tree. Object 3: font.
    // Objects 4.. alternate page / content stream per input page.
    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    push_object(
        &mut buf,
        &mut offsets,
        1,
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
    );
    push_object(
        &mut buf,
        &mut offsets,
        2,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        ),
    );
    push_object(
        &mut buf,
        &mut offsets,
        3,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    );

    for (i, page) in pages.iter().enumerate() {
        let page_id = 4 + 2 * i;
        let content_id = page_id + 1;

        push_object(
            &mut buf,
            &mut offsets,
            page_id,
            format!(
                "<< /Type /Page /Parent 2 0 R \
                 /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << /F1 3 0 R >> >> \
                 /Contents {content_id} 0 R >>"
            ),
        );

        let stream = page_stream(page);
        offsets.push(buf.len());
        buf.extend_from_slice(
            format!("{content_id} 0 obj\n<< /Length {} >>\nstream\n", stream.len()).as_bytes(),
        );
        buf.extend_from_slice(stream.as_bytes());
        buf.extend_from_slice(b"\nendstream\nendobj\n");
    }

    let object_count = offsets.len();
    let xref_offset = buf.len();
    buf.extend_from_slice(format!("xref\n0 {}\n", object_count + 1).as_bytes());
    buf.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    buf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            object_count + 1
        )
        .as_bytes(),
    );

    buf
}

/// Text content stream for one page.
fn page_stream(page: &Page) -> String {
    let mut ops = String::from("BT\n");
    let top = PAGE_HEIGHT - MARGIN;

    ops.push_str(&format!("/F1 {TITLE_SIZE} Tf\n{MARGIN} {top} Td\n"));
    ops.push_str(&format!("({}) Tj\n", escape_text(&page.title)));

    ops.push_str(&format!("/F1 {REF_SIZE} Tf\n0 -20 Td\n"));
    ops.push_str(&format!("({}) Tj\n", escape_text(&page.reference)));

    ops.push_str(&format!("/F1 {BODY_SIZE} Tf\n0 -26 Td\n"));
    for line in page.lines.iter().take(MAX_LINES_PER_PAGE) {
        ops.push_str(&format!("({}) Tj\n0 -{BODY_LEADING} Td\n", escape_text(line)));
    }

    ops.push_str("ET");
    ops
}

/// Escape the characters PDF string literals reserve.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            // Helvetica/WinAnsi handles Latin-1; drop anything wider.
            c if (c as u32) < 256 => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn push_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, id: usize, body: String) {
    offsets.push(buf.len());
    buf.extend_from_slice(format!("{id} 0 obj\n{body}\nendobj\n").as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pages(n: usize) -> Vec<Page> {
        (1..=n)
            .map(|i| Page {
                title: format!("TITLE {i}"),
                reference: format!("Document: sample | Page {i} of {n}"),
                lines: vec!["alpha".into(), "beta (x) \\ gamma".into()],
            })
            .collect()
    }

    #[test]
    fn output_has_pdf_header_and_trailer() {
        let bytes = build_pdf(&sample_pages(1));
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn one_page_object_per_input_page() {
        let bytes = build_pdf(&sample_pages(3));
        let text = String::from_utf8_lossy(&bytes);
        let count = text.matches("/Type /Page /Parent").count();
        assert_eq!(count, 3);
        assert!(text.contains("/Count 3"));
    }

    #[test]
    fn xref_entry_count_matches_objects() {
        // 3 fixed objects + 2 per page, plus the free head entry.
        let bytes = build_pdf(&sample_pages(2));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("xref\n0 8\n"));
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let bytes = build_pdf(&sample_pages(1));
        let text = String::from_utf8_lossy(&bytes);
        for id in 1..=5usize {
            let marker = format!("\n{id} 0 obj");
            let pos = text.find(&marker).expect("object present") + 1;
            assert!(
                text.contains(&format!("{pos:010} 00000 n")),
                "xref missing offset {pos} for object {id}"
            );
        }
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let bytes = build_pdf(&sample_pages(1));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("beta \\(x\\) \\\\ gamma"));
    }
}
