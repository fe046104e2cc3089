use crate::document::DelimitedDocument;

const MIN_FRAGMENT_CHARS: usize = 3;
const UTF8_BOM: &str = "\u{feff}";

impl DelimitedDocument {
    /// Decode plain-text bytes. A leading byte-order mark is dropped.
    pub fn open(bytes: Vec<u8>) -> Result<Self, String> {
        let content = String::from_utf8(bytes)
            .map_err(|error| format!("failed to decode text as UTF-8: {error}"))?;
        let content = match content.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_owned(),
            None => content,
        };
        Ok(Self { content })
    }

    /// Fragments between newlines, commas and semicolons that are longer
    /// than three characters. Fragments are kept verbatim (no trimming).
    pub fn tokens(&self) -> Vec<String> {
        self.content
            .split(['\n', ',', ';'])
            .filter(|fragment| fragment.chars().count() > MIN_FRAGMENT_CHARS)
            .map(str::to_owned)
            .collect()
    }
}
