// file: src/extractor/pdf.rs
// description: PDF page text extraction backed by pdfium
// reference: https://docs.rs/pdfium-render

use super::page::{PageRegion, PagedDocument};
use crate::error::{Result, SearchError};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

fn pdf_error(error: impl ToString) -> SearchError {
    SearchError::extraction("PDF", error)
}

/// Binds pdfium from `library_dir` when given, otherwise from the system library path.
pub fn bind_pdfium(library_dir: Option<&Path>) -> Result<Pdfium> {
    let bindings = match library_dir {
        Some(dir) => {
            debug!("Binding pdfium from {}", dir.display());
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                .or_else(|e| {
                    warn!(
                        "pdfium not found in {} ({}), trying system library",
                        dir.display(),
                        e
                    );
                    Pdfium::bind_to_system_library()
                })
        }
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(pdf_error)?;

    Ok(Pdfium::new(bindings))
}

pub struct PdfiumDocument<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumDocument<'a> {
    pub fn load(pdfium: &'a Pdfium, bytes: &'a [u8]) -> Result<Self> {
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(pdf_error)?;
        Ok(Self { document })
    }
}

impl PagedDocument for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn region_text(&self, index: usize, region: PageRegion) -> Result<String> {
        let page_index = PdfPageIndex::try_from(index)
            .map_err(|_| pdf_error(format!("page index {} out of range", index)))?;
        let page = self.document.pages().get(page_index).map_err(pdf_error)?;
        let text = page.text().map_err(pdf_error)?;

        let width = page.width().value;
        let height = page.height().value;

        Ok(match half_bounds(region, width, height) {
            Some((bottom, left, top, right)) => {
                text.inside_rect(PdfRect::new_from_values(bottom, left, top, right))
            }
            None => text.all(),
        })
    }
}

/// (bottom, left, top, right) of a column half in page points; `None` for the whole page.
fn half_bounds(region: PageRegion, width: f32, height: f32) -> Option<(f32, f32, f32, f32)> {
    let middle = width / 2.0;
    match region {
        PageRegion::Full => None,
        PageRegion::LeftHalf => Some((0.0, 0.0, height, middle)),
        PageRegion::RightHalf => Some((0.0, middle, height, width)),
    }
}
