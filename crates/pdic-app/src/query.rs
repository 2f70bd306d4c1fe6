/// Join whitespace-split tokens so that a quoted phrase becomes one word.
///
/// `"ad hoc"` and `'ad hoc'` arrive as two tokens from the shell or from
/// `split_whitespace` and leave as the single word `ad hoc`. An unclosed
/// quote runs to the end of the input.
pub fn join_quoted<T: AsRef<str>>(tokens: &[T]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let mut open: Option<char> = None;

    for token in tokens {
        let token = token.as_ref();

        match (open, words.last_mut()) {
            (Some(quote), Some(last)) => {
                last.push(' ');
                match token.strip_suffix(quote) {
                    Some(rest) => {
                        last.push_str(rest);
                        open = None;
                    }
                    None => last.push_str(token),
                }
            }
            _ => {
                let Some(quote) = token.chars().next().filter(|c| *c == '"' || *c == '\'')
                else {
                    words.push(token.to_string());
                    continue;
                };

                let body = &token[quote.len_utf8()..];
                match body.strip_suffix(quote) {
                    // "word" in a single token
                    Some(inner) if !body.is_empty() => words.push(inner.to_string()),
                    _ => {
                        words.push(body.to_string());
                        open = Some(quote);
                    }
                }
            }
        }
    }

    words
}
