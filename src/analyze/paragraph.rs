//! Paragraph reconstruction from a page's flat extracted text.

/// Buffer length (chars) under which a line is assumed to continue.
const SHORT_BUFFER: usize = 100;

/// Buffer length (chars) a paragraph must exceed before an uppercase line
/// starts a new one.
const BREAK_BUFFER: usize = 40;

/// Sentence-terminating characters.
const TERMINATORS: [char; 4] = ['.', '?', '!', ':'];

/// Reconstruct paragraphs from raw page text.
///
/// Blank-line-delimited text splits directly. Otherwise consecutive lines are
/// merged greedily, keyed on hyphenation, sentence terminators and leading
/// capitalization. The tie-break order of the merge rules is load bearing:
/// section mapping depends on paragraph count and order.
pub fn reconstruct_paragraphs(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized = text.replace('\r', "\n");

    let blocks: Vec<String> = normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if blocks.len() > 1 {
        return blocks;
    }

    let lines = normalized
        .split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut grouped = Vec::new();
    let mut buffer = String::new();
    for line in lines {
        if buffer.is_empty() {
            buffer.push_str(line);
        } else if buffer.ends_with('-')
            || (buffer.chars().count() < SHORT_BUFFER && !ends_with_terminator(&buffer))
        {
            buffer.push(' ');
            buffer.push_str(line);
        } else if starts_uppercase(line) && buffer.chars().count() > BREAK_BUFFER {
            grouped.push(std::mem::replace(&mut buffer, line.to_owned()));
        } else {
            buffer.push(' ');
            buffer.push_str(line);
        }
    }
    if !buffer.is_empty() {
        grouped.push(buffer);
    }

    grouped
}

fn ends_with_terminator(s: &str) -> bool {
    s.chars().last().is_some_and(|c| TERMINATORS.contains(&c))
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}
