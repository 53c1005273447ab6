//! Toy Python syntax highlighter for the deck's code slides.
//!
//! A hand-written scanner, not a grammar: it recognizes the handful of
//! token classes the slides need and leaves everything else plain.
//! Strings close on the same line with no escape handling; a lone
//! quote stays plain text.

/// Highlight class assigned to one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Language keyword.
    Keyword,
    /// Built-in function name.
    Builtin,
    /// Quoted string literal.
    Str,
    /// `#` comment running to end of line.
    Comment,
    /// Integer literal.
    Number,
    /// Operator, symbolic or word (`and`, `or`, `not`).
    Operator,
    /// Anything else, including whitespace and punctuation.
    Plain,
}

/// One scanned source fragment. Token texts concatenate back to the
/// exact input.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The source text of the token.
    pub text: String,
    /// Its highlight class.
    pub class: TokenClass,
}

const KEYWORDS: [&str; 10] = [
    "import", "from", "def", "for", "in", "if", "else", "return", "class", "with",
];

const BUILTINS: [&str; 12] = [
    "print", "len", "range", "list", "dict", "set", "tuple", "map", "filter", "sum", "min", "max",
];

const WORD_OPERATORS: [&str; 3] = ["and", "or", "not"];

const OPERATOR_CHARS: [char; 9] = ['=', '+', '-', '*', '/', '%', '<', '>', '!'];

/// Display color for a token class, as an RGB triple.
pub fn class_color(class: TokenClass) -> (u8, u8, u8) {
    match class {
        TokenClass::Keyword | TokenClass::Operator => (255, 121, 198),
        TokenClass::Builtin => (139, 233, 253),
        TokenClass::Str => (165, 214, 167),
        TokenClass::Comment => (158, 158, 158),
        TokenClass::Number => (255, 171, 145),
        TokenClass::Plain => (255, 255, 255),
    }
}

fn classify_word(word: &str) -> TokenClass {
    if KEYWORDS.contains(&word) {
        TokenClass::Keyword
    } else if BUILTINS.contains(&word) {
        TokenClass::Builtin
    } else if WORD_OPERATORS.contains(&word) {
        TokenClass::Operator
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        TokenClass::Number
    } else {
        TokenClass::Plain
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans `source` into a token stream.
pub fn highlight(source: &str) -> Vec<Token> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    let flush_plain = |plain: &mut String, tokens: &mut Vec<Token>| {
        if !plain.is_empty() {
            tokens.push(Token {
                text: std::mem::take(plain),
                class: TokenClass::Plain,
            });
        }
    };

    while i < chars.len() {
        let c = chars[i];

        if c == '#' {
            flush_plain(&mut plain, &mut tokens);
            let mut text = String::new();
            while i < chars.len() && chars[i] != '\n' {
                text.push(chars[i]);
                i += 1;
            }
            tokens.push(Token {
                text,
                class: TokenClass::Comment,
            });
        } else if c == '"' || c == '\'' {
            // A string must close with the same quote on the same line,
            // else the quote is left plain.
            let mut end = None;
            let mut j = i + 1;
            while j < chars.len() && chars[j] != '\n' {
                if chars[j] == c {
                    end = Some(j);
                    break;
                }
                j += 1;
            }
            if let Some(end) = end {
                flush_plain(&mut plain, &mut tokens);
                tokens.push(Token {
                    text: chars[i..=end].iter().collect(),
                    class: TokenClass::Str,
                });
                i = end + 1;
            } else {
                plain.push(c);
                i += 1;
            }
        } else if is_word_char(c) {
            flush_plain(&mut plain, &mut tokens);
            let mut word = String::new();
            while i < chars.len() && is_word_char(chars[i]) {
                word.push(chars[i]);
                i += 1;
            }
            let class = classify_word(&word);
            tokens.push(Token { text: word, class });
        } else if OPERATOR_CHARS.contains(&c) {
            flush_plain(&mut plain, &mut tokens);
            let mut text = String::from(c);
            i += 1;
            // Two-character comparisons: ==, !=, <=, >=.
            if matches!(c, '=' | '!' | '<' | '>') && i < chars.len() && chars[i] == '=' {
                text.push('=');
                i += 1;
            }
            tokens.push(Token {
                text,
                class: TokenClass::Operator,
            });
        } else {
            plain.push(c);
            i += 1;
        }
    }
    flush_plain(&mut plain, &mut tokens);

    tokens
}

/// Renders `source` with 24-bit ANSI colors for terminal display.
pub fn to_ansi(source: &str) -> String {
    let mut out = String::new();
    for token in highlight(source) {
        if token.class == TokenClass::Plain {
            out.push_str(&token.text);
        } else {
            let (r, g, b) = class_color(token.class);
            out.push_str(&format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, token.text));
        }
    }
    out
}
