use std::panic;

use tracing::debug;

use crate::error::ExtractError;

/// Extract the text of every page of a PDF, in page order.
///
/// Each page's text is followed by a newline. Malformed documents are
/// reported as [`ExtractError::Pdf`]; `pdf-extract` panics on some broken
/// inputs, and those panics are contained here as well.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|payload| ExtractError::Pdf(panic_reason(payload.as_ref())))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    debug!(page_count = pages.len(), "extracted PDF text");

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }
    Ok(text)
}

fn panic_reason(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF parser aborted".to_string()
    }
}
