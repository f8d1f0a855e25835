//! The operation table.
//!
//! Each program character decodes to at most one [`Operation`]. The table
//! is a closed `match`, so adding an operation without handling it in the
//! engine is a compile error rather than a runtime lookup miss.

use befunge_types::{Direction, Value};

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `0`–`9`
    PushDigit(u8),
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `!`
    Not,
    /// `` ` ``
    GreaterThan,
    /// `>` `<` `^` `v`
    Go(Direction),
    /// `?`
    GoRandom,
    /// `_`
    HorizontalIf,
    /// `|`
    VerticalIf,
    /// `"`
    ToggleStringMode,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,
    /// `.`
    OutputInt,
    /// `,`
    OutputChar,
    /// `#`
    Bridge,
    /// `p`
    Put,
    /// `g`
    Get,
    /// space
    Noop,
}

impl Operation {
    /// Look up the operation for `ch`. `None` means the character is unknown.
    pub fn decode(ch: char) -> Option<Self> {
        let op = match ch {
            '0'..='9' => Self::PushDigit(ch as u8 - b'0'),
            '+' => Self::Add,
            '-' => Self::Subtract,
            '*' => Self::Multiply,
            '/' => Self::Divide,
            '%' => Self::Modulo,
            '!' => Self::Not,
            '`' => Self::GreaterThan,
            '>' => Self::Go(Direction::Right),
            '<' => Self::Go(Direction::Left),
            '^' => Self::Go(Direction::Up),
            'v' => Self::Go(Direction::Down),
            '?' => Self::GoRandom,
            '_' => Self::HorizontalIf,
            '|' => Self::VerticalIf,
            '"' => Self::ToggleStringMode,
            ':' => Self::Duplicate,
            '\\' => Self::Swap,
            '$' => Self::Discard,
            '.' => Self::OutputInt,
            ',' => Self::OutputChar,
            '#' => Self::Bridge,
            'p' => Self::Put,
            'g' => Self::Get,
            ' ' => Self::Noop,
            _ => return None,
        };
        Some(op)
    }
}

/// `b / a`, truncated toward zero; `0` when `a` is zero.
pub fn divide(b: Value, a: Value) -> Value {
    if a == 0 {
        0
    } else {
        b.wrapping_div(a)
    }
}

/// `b mod a` with the sign of the dividend; `0` when `a` is zero.
pub fn modulo(b: Value, a: Value) -> Value {
    if a == 0 {
        0
    } else {
        b.wrapping_rem(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_digits() {
        for (i, ch) in ('0'..='9').enumerate() {
            assert_eq!(Operation::decode(ch), Some(Operation::PushDigit(i as u8)));
        }
    }

    #[test]
    fn test_decode_directions() {
        assert_eq!(Operation::decode('>'), Some(Operation::Go(Direction::Right)));
        assert_eq!(Operation::decode('<'), Some(Operation::Go(Direction::Left)));
        assert_eq!(Operation::decode('^'), Some(Operation::Go(Direction::Up)));
        assert_eq!(Operation::decode('v'), Some(Operation::Go(Direction::Down)));
    }

    #[test]
    fn test_decode_unknown() {
        for ch in ['@', '&', '~', 'V', 'x', '\r', '\t', 'é'] {
            assert_eq!(Operation::decode(ch), None, "{ch:?} should be unknown");
        }
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(7, 2), 3);
        assert_eq!(divide(-7, 2), -3);
        assert_eq!(divide(7, -2), -3);
        assert_eq!(divide(4, 0), 0);
        assert_eq!(divide(Value::MIN, -1), Value::MIN);
    }

    #[test]
    fn test_modulo_follows_dividend_sign() {
        assert_eq!(modulo(7, 4), 3);
        assert_eq!(modulo(-7, 4), -3);
        assert_eq!(modulo(7, -4), 3);
        assert_eq!(modulo(9, 0), 0);
    }
}
