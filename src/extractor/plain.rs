// file: src/extractor/plain.rs
// description: plain text documents paged by form feed
// reference: internal module structure

use super::page::{PageRegion, PagedDocument};
use crate::error::{Result, SearchError};

const FORM_FEED: char = '\u{000C}';

/// Text document split into pages at form feeds.
///
/// Column regions treat each page as a character grid as wide as its
/// longest line, split at the middle column.
#[derive(Debug, Clone)]
pub struct PlainTextDocument {
    pages: Vec<String>,
}

impl PlainTextDocument {
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes).replace("\r\n", "\n");

        if text.trim().is_empty() {
            return Self { pages: Vec::new() };
        }

        let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_string).collect();

        // a form feed closing the last page does not open a new one
        if pages.len() > 1 && pages.last().is_some_and(|p| p.trim().is_empty()) {
            pages.pop();
        }

        Self { pages }
    }

    fn page(&self, index: usize) -> Result<&str> {
        self.pages.get(index).map(String::as_str).ok_or_else(|| {
            SearchError::extraction("text", format!("page {} out of range", index + 1))
        })
    }
}

impl PagedDocument for PlainTextDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn region_text(&self, index: usize, region: PageRegion) -> Result<String> {
        let page = self.page(index)?;

        let text = match region {
            PageRegion::Full => page.trim().to_string(),
            PageRegion::LeftHalf => column_text(page, true),
            PageRegion::RightHalf => column_text(page, false),
        };

        Ok(text)
    }
}

fn column_text(page: &str, left: bool) -> String {
    let width = page.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let middle = width / 2;

    page.lines()
        .map(|line| {
            let chars: Vec<char> = line.chars().collect();
            let split = middle.min(chars.len());
            let cells = if left { &chars[..split] } else { &chars[split..] };
            cells.iter().collect::<String>().trim().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_page_without_form_feed() {
        let doc = PlainTextDocument::parse(b"The cat sat.\nHealth matters.\n");
        assert_eq!(doc.page_count(), 1);
        assert_eq!(
            doc.region_text(0, PageRegion::Full).unwrap(),
            "The cat sat.\nHealth matters."
        );
    }

    #[test]
    fn test_form_feed_separates_pages() {
        let doc = PlainTextDocument::parse(b"first\x0csecond\r\nline\x0c");
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.region_text(1, PageRegion::Full).unwrap(), "second\nline");
    }

    #[test]
    fn test_blank_input_has_no_pages() {
        assert_eq!(PlainTextDocument::parse(b"").page_count(), 0);
        assert_eq!(PlainTextDocument::parse(b" \n\t ").page_count(), 0);
    }

    #[test]
    fn test_interior_blank_page_is_kept() {
        let doc = PlainTextDocument::parse(b"one\x0c   \x0cthree");
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.region_text(1, PageRegion::Full).unwrap(), "");
    }

    #[test]
    fn test_column_regions() {
        let doc = PlainTextDocument::parse(
            b"Left one    Right one\nLeft two    Right two\n",
        );
        assert_eq!(
            doc.region_text(0, PageRegion::LeftHalf).unwrap(),
            "Left one\nLeft two"
        );
        assert_eq!(
            doc.region_text(0, PageRegion::RightHalf).unwrap(),
            "Right one\nRight two"
        );
    }

    #[test]
    fn test_short_lines_fall_in_left_column() {
        let doc = PlainTextDocument::parse(b"a long heading line here\nshort\n");
        assert_eq!(doc.region_text(0, PageRegion::RightHalf).unwrap(), "ng line here");
        assert_eq!(
            doc.region_text(0, PageRegion::LeftHalf).unwrap(),
            "a long headi\nshort"
        );
    }

    #[test]
    fn test_out_of_range_page() {
        let doc = PlainTextDocument::parse(b"only page");
        assert!(doc.region_text(3, PageRegion::Full).is_err());
    }
}
