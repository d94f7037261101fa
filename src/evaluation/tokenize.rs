//! Tokenisers for the evaluation strategies.

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Words plus standalone punctuation, in the spirit of Treebank tokenisers:
/// `"Hello, world!"` gives `hello`, `,`, `world`, `!`. Clitics split off
/// (`don't` gives `don`, `'t`), decimals and dotted abbreviations stay whole
/// (`3.14`, `e.g`), and a run of the same punctuation character (`...`) is
/// one token.
pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let chars = lowered.chars().collect::<Vec<_>>();
    let mut tokens = Vec::new();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        if c.is_whitespace() {
            index += 1;
            continue;
        }

        if is_word_char(c) {
            let start = index;
            while index < chars.len() {
                let current = chars[index];
                let joins_number = matches!(current, '.' | ',')
                    && index > start
                    && chars[index - 1].is_ascii_digit()
                    && chars.get(index + 1).is_some_and(|next| next.is_ascii_digit());
                let joins_abbreviation = current == '.'
                    && index > start
                    && chars[index - 1].is_alphabetic()
                    && chars.get(index + 1).is_some_and(|next| next.is_alphabetic());
                if is_word_char(current) || joins_number || joins_abbreviation {
                    index += 1;
                } else {
                    break;
                }
            }
            tokens.push(chars[start..index].iter().collect());
            continue;
        }

        let is_clitic = c == '\''
            && index > 0
            && is_word_char(chars[index - 1])
            && chars.get(index + 1).is_some_and(|next| next.is_alphabetic());
        if is_clitic {
            let start = index;
            index += 1;
            while index < chars.len() && is_word_char(chars[index]) {
                index += 1;
            }
            tokens.push(chars[start..index].iter().collect());
            continue;
        }

        let start = index;
        while index < chars.len() && chars[index] == c {
            index += 1;
        }
        tokens.push(chars[start..index].iter().collect());
    }

    tokens
}

/// Lower-cased runs of two or more word characters; single characters and
/// punctuation are dropped.
pub(crate) fn vector_terms(text: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut length = 0usize;

    for c in text.chars().chain(std::iter::once(' ')) {
        if is_word_char(c) {
            current.extend(c.to_lowercase());
            length += 1;
            continue;
        }
        if length >= 2 {
            terms.push(std::mem::take(&mut current));
        } else {
            current.clear();
        }
        length = 0;
    }

    terms
}
