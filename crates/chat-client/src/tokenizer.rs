//! Shell-like line tokenizer with quoting and backslash escapes.

use thiserror::Error;

/// Tokenizer error. The whole call fails; no partial token list is
/// ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("invalid escape sequence")]
    InvalidEscape,
    #[error("out of memory")]
    OutOfMemory,
}

/// Split one line into tokens.
///
/// Rules:
/// - Whitespace separates tokens.
/// - A span starting with `"` runs to the next unescaped `"` and may
///   contain spaces; `""` yields an empty token. A `"` anywhere else is
///   a literal character.
/// - A backslash escapes the next character, inside or outside quotes:
///   `\n`, `\t`, `\\`, `\"` map to their usual meaning, anything else
///   passes through literally.
///
/// # Errors
/// `UnterminatedQuote` when a quoted span reaches end of input,
/// `InvalidEscape` for a trailing backslash, `OutOfMemory` when token
/// storage cannot grow.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens: Vec<String> = Vec::new();
    let mut chars = line.chars().peekable();

    skip_spaces(&mut chars);
    while chars.peek().is_some() {
        let mut token = String::new();
        let mut in_quotes = false;

        if chars.peek() == Some(&'"') {
            in_quotes = true;
            chars.next();
        }

        loop {
            let Some(&ch) = chars.peek() else {
                if in_quotes {
                    return Err(TokenizeError::UnterminatedQuote);
                }
                break;
            };

            if !in_quotes && ch.is_whitespace() {
                break;
            }

            if ch == '\\' {
                chars.next();
                let escaped = chars.next().ok_or(TokenizeError::InvalidEscape)?;
                push_char(&mut token, decode_escape(escaped))?;
                continue;
            }

            if in_quotes && ch == '"' {
                chars.next();
                in_quotes = false;
                break;
            }

            push_char(&mut token, ch)?;
            chars.next();
        }

        tokens
            .try_reserve(1)
            .map_err(|_| TokenizeError::OutOfMemory)?;
        tokens.push(token);
        skip_spaces(&mut chars);
    }

    Ok(tokens)
}

const fn decode_escape(escaped: char) -> char {
    match escaped {
        'n' => '\n',
        't' => '\t',
        other => other,
    }
}

fn push_char(token: &mut String, ch: char) -> Result<(), TokenizeError> {
    token
        .try_reserve(ch.len_utf8())
        .map_err(|_| TokenizeError::OutOfMemory)?;
    token.push(ch);
    Ok(())
}

fn skip_spaces(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}
