/// How far past a row marker the scan looks for the row's code token.
pub const LOOKAHEAD: usize = 4;

/// Minimum digit run that makes a token a product code.
const CODE_MIN_DIGITS: usize = 9;

/// Names this short (in characters) are layout noise, not items.
const MIN_NAME_CHARS: usize = 2;

/// A row marker is a purely numeric token of one to three digits.
pub fn is_row_marker(token: &str) -> bool {
    (1..=3).contains(&token.len()) && token.bytes().all(|byte| byte.is_ascii_digit())
}

/// A code token starts with a run of at least nine digits.
pub fn is_code_token(token: &str) -> bool {
    token.bytes().take_while(u8::is_ascii_digit).count() >= CODE_MIN_DIGITS
}

/// Infer line-item names from a flattened table.
///
/// Rows render as `<index> <name parts…> <long code>` with no column
/// boundaries. On each row marker the cursor looks up to [`LOOKAHEAD`] tokens
/// ahead for a code token; the tokens in between form the name and the cursor
/// jumps to the code. A marker with no code in its window is skipped.
pub fn extract_candidates<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        if !is_row_marker(tokens[cursor].as_ref()) {
            cursor += 1;
            continue;
        }

        let window_end = (cursor + LOOKAHEAD).min(tokens.len() - 1);
        let code_position =
            (cursor + 1..=window_end).find(|&position| is_code_token(tokens[position].as_ref()));

        let Some(code_position) = code_position else {
            cursor += 1;
            continue;
        };

        let name = tokens[cursor + 1..code_position]
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        if name.chars().count() > MIN_NAME_CHARS {
            candidates.push(name);
        }
        cursor = code_position;
    }

    candidates
}
