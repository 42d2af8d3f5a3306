//! # Lexer for behavior files
//!
//! A behavior file is nothing but whitespace-separated integers written the
//! way C's `%i` conversion reads them: optional sign, then `0x` hex, a
//! leading-zero octal, or decimal.

use logos::Logos;

/// Tokens of a behavior file
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Token {
    /// Integer in `%i` notation
    #[regex(r"[+-]?(0[xX][0-9a-fA-F]+|0[0-7]*|[1-9][0-9]*)", |lex| parse_c_integer(lex.slice()))]
    Number(i64),
}

/// Parse an integer in C `%i` notation
pub fn parse_c_integer(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i64::from_str_radix(hex, 16).ok()?
    } else if digits.len() > 1 && digits.starts_with('0') {
        i64::from_str_radix(&digits[1..], 8).ok()?
    } else {
        digits.parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}
