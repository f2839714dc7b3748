// file: src/extractor/mod.rs
// description: page extraction module exports
// reference: internal module structure

pub mod loader;
pub mod page;
pub mod pdf;
pub mod plain;

pub use loader::DocumentLoader;
pub use page::{ExtractionOptions, PageExtractor, PageRegion, PagedDocument};
pub use pdf::{PdfiumDocument, bind_pdfium};
pub use plain::PlainTextDocument;
