/// Splits a pasted name roster into clean names.
///
/// Registrars paste numbered lists straight out of spreadsheets and chat
/// messages, so leading numbering ("1. ", "2) ", "3 ") is stripped, lines
/// are trimmed, and lines that are empty or contain only digits and
/// punctuation are dropped.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_numbering)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            !line
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':'))
        })
        .map(str::to_string)
        .collect()
}

/// Number of names in a roster. This is how a diplomas count is derived
/// from a diploma recipient list.
pub fn count_names(text: &str) -> u32 {
    parse_name_list(text).len() as u32
}

fn strip_numbering(line: &str) -> &str {
    let line = line.trim_start();
    let digit_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digit_end == 0 {
        return line;
    }
    let rest = &line[digit_end..];
    if let Some(rest) = rest.strip_prefix(['.', ')']) {
        rest.trim_start()
    } else if rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        line
    }
}
