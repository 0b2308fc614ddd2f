use crate::data_type::FloatData;
use crate::definitions::N_SYMBOLS_ON_STACK;
use crate::operators::{operator_from_char, OperatorKind};
use crate::symbol::Symbol;
use crate::{ExError, ExResult};
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use smallvec::SmallVec;

/// Container of the symbols lexed from one input string.
pub type SymbolVec<T> = SmallVec<[Symbol<T>; N_SYMBOLS_ON_STACK]>;

/// Decides what happens if a token at an operand position is not a number.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ParseMode {
    /// The whole input is rejected with [`ExError::NotANumber`](ExError::NotANumber).
    #[default]
    Strict,
    /// Lexing stops and the symbols collected so far are kept.
    Lenient,
}

/// Returns the next sequence of non-space characters at or after `start` together with the
/// index of the character immediately after it, which is a space or the end of `text`.
/// Returns `None` if there is no such sequence.
pub fn next_token(text: &str, start: usize) -> Option<(&str, usize)> {
    lazy_static! {
        static ref RE_TOKEN: Regex = Regex::new(r"[^ ]+").unwrap();
    }
    if start >= text.len() || !text.is_char_boundary(start) {
        return None;
    }
    RE_TOKEN.find_at(text, start).map(|m| (m.as_str(), m.end()))
}

/// Returns the next token interpreted as number, see [`next_token`](next_token).
///
/// # Errors
///
/// If the next token cannot be parsed as number we return
/// [`ExError::NotANumber`](ExError::NotANumber).
///
pub fn next_number<T: FloatData>(text: &str, start: usize) -> ExResult<Option<(T, usize)>> {
    match next_token(text, start) {
        None => Ok(None),
        Some((token, end)) => token
            .parse::<T>()
            .map(|x| Some((x, end)))
            .map_err(|_| ExError::NotANumber(token.to_string())),
    }
}

/// Returns the next token interpreted as operator, see [`next_token`](next_token). Tokens that
/// do not consist of exactly one character are treated like the end of the input.
///
/// # Errors
///
/// If the next token is a single character that is not an operator we return
/// [`ExError::UnknownOperator`](ExError::UnknownOperator).
///
pub fn next_operator(text: &str, start: usize) -> ExResult<Option<(OperatorKind, usize)>> {
    let (token, end) = match next_token(text, start) {
        Some(t) => t,
        None => return Ok(None),
    };
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Some((operator_from_char(c)?, end))),
        _ => Ok(None),
    }
}

/// Lexes `text` into alternating numbers and operators, starting with a number. Lexing ends
/// without error as soon as no further number or operator is found.
///
/// # Arguments
///
/// * `text` - whitespace-delimited expression such as `"1 + 2 * 3"`
/// * `mode` - what to do with a token that should be a number but is not
///
/// # Errors
///
/// [`ExError::UnknownOperator`](ExError::UnknownOperator) for single-character operator tokens
/// that are not operators and, in strict mode, [`ExError::NotANumber`](ExError::NotANumber).
///
pub fn tokenize<T: FloatData>(text: &str, mode: ParseMode) -> ExResult<SymbolVec<T>> {
    let mut symbols = SymbolVec::new();
    let mut idx = 0usize;
    loop {
        let (num, end) = match next_number::<T>(text, idx) {
            Ok(Some(found)) => found,
            Ok(None) => {
                if !symbols.is_empty() {
                    debug!("expected number after \"{}\"", text.trim_end());
                }
                break;
            }
            Err(e) => match mode {
                ParseMode::Strict => return Err(e),
                ParseMode::Lenient => {
                    warn!(
                        "{}, discarding \"{}\"",
                        e,
                        text.get(idx..).unwrap_or("").trim()
                    );
                    break;
                }
            },
        };
        symbols.push(Symbol::Num(num));
        // skip the separating space
        idx = end + 1;
        match next_operator(text, idx)? {
            Some((op, end)) => {
                symbols.push(Symbol::Op(op));
                idx = end + 1;
            }
            None => break,
        }
    }
    debug!("lexed {} symbols from \"{}\"", symbols.len(), text);
    Ok(symbols)
}
