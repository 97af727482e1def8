const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }
}

// The first line with non-whitespace content decides for the whole file.
pub fn sniff_delimiter(text: &str) -> Delimiter {
    for line in normalized_lines(text) {
        if line.trim().is_empty() {
            continue;
        }
        if line.contains('\t') {
            return Delimiter::Tab;
        }
        return Delimiter::Comma;
    }
    Delimiter::Comma
}

pub fn parse_delimited(text: &str) -> Vec<Vec<String>> {
    let delimiter = sniff_delimiter(text).as_char();

    let mut rows = Vec::new();
    for line in normalized_lines(text) {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_line(line, delimiter));
    }
    rows
}

fn normalized_lines(text: &str) -> impl Iterator<Item = &str> {
    // \r\n and bare \r both count as line terminators; fields never span
    // lines, so splitting on either is equivalent to normalizing first.
    text.split(['\n', '\r'])
}

fn parse_line(line: &str, delimiter: char) -> Vec<String> {
    let mut row = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == QUOTE {
            if in_quotes && chars.peek() == Some(&QUOTE) {
                // Escaped quote inside a quoted field: "" -> "
                current.push(QUOTE);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }

        if ch == delimiter && !in_quotes {
            row.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    // An unterminated quote simply closes at end of line.
    row.push(current);
    row
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/delimited.rs"]
mod tests;
