use crate::value::Value;

/// The three keyword literals of the JSON grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// Picks the literal that starts with `first`, if any.
    pub(crate) fn from_first_byte(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Literal::Null),
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            _ => None,
        }
    }

    /// Full keyword spelling, including the first byte.
    pub(crate) fn keyword(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    pub(crate) fn value(self) -> Value {
        match self {
            Literal::Null => Value::Null,
            Literal::True => Value::Boolean(true),
            Literal::False => Value::Boolean(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_byte_selects_keyword() {
        assert_eq!(Literal::from_first_byte(b'n'), Some(Literal::Null));
        assert_eq!(Literal::from_first_byte(b't'), Some(Literal::True));
        assert_eq!(Literal::from_first_byte(b'f'), Some(Literal::False));
        assert_eq!(Literal::from_first_byte(b'N'), None);
    }

    #[test]
    fn keyword_and_value_agree() {
        for lit in [Literal::Null, Literal::True, Literal::False] {
            let text = core::str::from_utf8(lit.keyword()).unwrap();
            assert_eq!(lit.value().to_string(), text);
        }
    }
}
