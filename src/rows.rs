/// One tokenized input line. `Blank` is a genuinely empty line, which is not
/// the same thing as a line holding a single empty field — header detection
/// must skip the former and consider the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Blank,
    Fields(Vec<String>),
}

impl Row {
    pub fn fields(&self) -> Option<&[String]> {
        match self {
            Row::Blank => None,
            Row::Fields(f) => Some(f),
        }
    }
}

/// Split one line into quote-aware CSV fields.
///
/// A `"` toggles quoting; a doubled `""` inside quotes emits a literal quote.
/// Commas outside quotes terminate fields. No multi-line quoted fields.
pub fn tokenize(line: &str) -> Row {
    if line.is_empty() {
        return Row::Blank;
    }
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    Row::Fields(fields)
}
