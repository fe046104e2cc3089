use crate::document::{SpreadsheetDocument, SpreadsheetKind};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

/// Cells with this many characters or fewer are never item names.
const MIN_CELL_CHARS: usize = 3;

impl SpreadsheetDocument {
    /// Parse workbook bytes and load the first sheet.
    pub fn open(bytes: Vec<u8>, kind: SpreadsheetKind) -> Result<Self, String> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|error| format!("failed to open workbook: {error}"))?;
        let first_sheet = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| "workbook has no sheets".to_owned())?
            .map_err(|error| format!("failed to read first sheet: {error}"))?;

        Ok(Self { kind, first_sheet })
    }

    /// Textual cells of the first sheet in row-major order, keeping only
    /// those longer than three characters that do not mention "total".
    pub fn tokens(&self) -> Vec<String> {
        self.first_sheet
            .rows()
            .flat_map(|row| row.iter())
            .filter_map(|cell| match cell {
                Data::String(text) if is_item_cell(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

fn is_item_cell(text: &str) -> bool {
    text.chars().count() > MIN_CELL_CHARS && !text.to_lowercase().contains("total")
}
