//! Unicode-aware word tokenizer
//!
//! Splits on whitespace, keeps runs of alphanumerics (plus `_`) together,
//! keeps in-word apostrophes (`don't`, `O'Brien`) and clock times (`15:30`)
//! as one token, and emits every other character as its own token.

/// Byte range of one token
pub type Span = (usize, usize);

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize `text` into byte ranges
pub fn tokenize(text: &str) -> Vec<Span> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (start, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if !is_word_char(c) {
            tokens.push((start, start + c.len_utf8()));
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() {
            let current = chars[j].1;
            if is_word_char(current) {
                j += 1;
                continue;
            }
            let prev = chars[j - 1].1;
            let next = chars.get(j + 1).map(|&(_, n)| n);
            let joins = match (current, next) {
                ('\'' | '\u{2019}', Some(n)) => prev.is_alphabetic() && n.is_alphabetic(),
                (':', Some(n)) => prev.is_ascii_digit() && n.is_ascii_digit(),
                _ => false,
            };
            if !joins {
                break;
            }
            j += 2;
        }

        let end = chars.get(j).map_or(text.len(), |&(offset, _)| offset);
        tokens.push((start, end));
        i = j;
    }

    tokens
}
