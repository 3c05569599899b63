/// Characters that end a sentence.
const SENTENCE_ENDERS: [char; 3] = ['.', '!', '?'];

/// Splits a paragraph into sentences.
///
/// Every `.`, `!` or `?` ends a sentence, and each fragment gets a `.`
/// appended. A paragraph ending in punctuation therefore yields a trailing
/// `"."` entry, and `...` yields empty sentences.
///
/// ```rust
/// use wikireader_core::split_paragraph;
///
/// assert_eq!(split_paragraph("Hello world. Goodbye."), vec!["Hello world.", " Goodbye.", "."]);
/// ```
pub fn split_paragraph(paragraph: &str) -> Vec<String> {
    paragraph.split(SENTENCE_ENDERS).map(|sentence| format!("{}.", sentence)).collect()
}
