//! PDF text extraction for uploaded résumés.
//!
//! Parsing is CPU-bound and runs inside `tokio::task::spawn_blocking`.
//! `pdf-extract` can panic on malformed input; the join handle turns that
//! into an `Unreadable` error instead of taking the worker down.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The bytes could not be parsed as a PDF (or the parser panicked).
    #[error("unreadable PDF: {0}")]
    Unreadable(String),

    /// The PDF parsed but no page yielded any text (e.g. a scanned image).
    #[error("PDF contains no extractable text")]
    NoText,
}

impl ExtractionError {
    /// Message shown to the user for every extraction failure.
    pub const USER_MESSAGE: &'static str =
        "Failed to extract text from PDF. Please upload a valid resume.";

    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::Unreadable(_) => "PDF_UNREADABLE",
            ExtractionError::NoText => "PDF_NO_TEXT",
        }
    }
}

/// Extracts the concatenated text of every page in `data`.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, ExtractionError> {
    let size = data.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| ExtractionError::Unreadable(format!("PDF parser aborted: {e}")))?
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

    debug!(bytes = size, chars = text.chars().count(), "extracted PDF text");
    non_empty(text)
}

/// Pages without text contribute nothing; a document that is nothing but
/// whitespace is treated as having no text at all.
fn non_empty(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        Err(ExtractionError::NoText)
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let result = extract_pdf_text(Bytes::from_static(b"this is not a pdf")).await;
        assert!(matches!(result, Err(ExtractionError::Unreadable(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_unreadable() {
        let result = extract_pdf_text(Bytes::new()).await;
        assert!(matches!(result, Err(ExtractionError::Unreadable(_))));
    }

    #[test]
    fn test_whitespace_only_text_is_no_text() {
        assert!(matches!(
            non_empty(" \n\t\n".to_string()),
            Err(ExtractionError::NoText)
        ));
    }

    #[test]
    fn test_non_empty_text_passes_through() {
        assert_eq!(non_empty("Jane Doe\nRust".to_string()).unwrap(), "Jane Doe\nRust");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        assert_ne!(
            ExtractionError::NoText.code(),
            ExtractionError::Unreadable(String::new()).code()
        );
    }

    #[tokio::test]
    async fn test_single_page_pdf_yields_its_text() {
        let pdf = fixtures::text_pdf("Jane Doe Rust Developer");
        let text = extract_pdf_text(Bytes::from(pdf)).await.unwrap();
        assert!(text.contains("Rust"));
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Builds a one-page PDF showing `text` in Helvetica, with a correct
    /// cross-reference table. `text` must not contain parentheses or backslashes.
    pub fn text_pdf(text: &str) -> Vec<u8> {
        let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }
}
