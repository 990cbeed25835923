/// Splits `text` on every `delim`, keeping empty segments.
///
/// An empty input yields `[""]` and a string without the delimiter yields
/// itself, so the result always has one more element than there are
/// delimiters in `text`.
pub fn split(text: &str, delim: char) -> Vec<&str> {
    let mut r = Vec::new();
    let mut start = 0;
    while let Some(stop) = text[start..].find(delim) {
        r.push(&text[start..start + stop]);
        start += stop + delim.len_utf8();
    }
    r.push(&text[start..]);
    r
}
