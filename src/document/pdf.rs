use crate::document::PdfDocument;

impl PdfDocument {
    /// Parse PDF bytes for page-level text access.
    pub fn open(bytes: &[u8]) -> Result<Self, String> {
        let inner = lopdf::Document::load_mem(bytes)
            .map_err(|error| format!("failed reading pdf: {error}"))?;
        Ok(Self { inner })
    }

    /// Return the PDF page count.
    pub fn page_count(&self) -> u64 {
        self.inner.get_pages().len() as u64
    }

    /// Text runs across all pages, in ascending page order, trimmed, with
    /// empty runs dropped.
    pub fn tokens(&self) -> Result<Vec<String>, String> {
        self.tokens_with_progress(&mut |_, _| {})
    }

    pub fn tokens_with_progress(
        &self,
        on_page: &mut dyn FnMut(u64, u64),
    ) -> Result<Vec<String>, String> {
        // BTreeMap keyed by page number, so iteration is already ascending.
        let pages = self.inner.get_pages();
        let total = pages.len() as u64;
        let mut tokens = Vec::new();

        for (done, page_number) in pages.keys().enumerate() {
            let text = self
                .inner
                .extract_text(&[*page_number])
                .map_err(|error| format!("failed extracting text from page {page_number}: {error}"))?;
            tokens.extend(page_runs(&text));
            on_page(done as u64 + 1, total);
        }

        Ok(tokens)
    }
}

/// Split one page's extracted text into trimmed, non-empty runs.
fn page_runs(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .map(str::to_owned)
}
