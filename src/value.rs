use std::fmt::{self, Display};

/// A decoded literal: the value carried by NUMBER and STRING tokens, and by
/// `Literal` nodes in the tree (which may also hold `nil` or a boolean).
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Bool(bool),
    Nil,
    Number(f64),
    String(String),
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Literal::*;
        match self {
            Bool(b) => write!(f, "{}", b),
            Nil => write!(f, "nil"),
            Number(n) => write!(f, "{}", format_number(*n)),
            String(s) => write!(f, "{}", s),
        }
    }
}

/// Integral values keep a single decimal place (`42.0`), everything else
/// uses the shortest representation that round-trips.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_keep_one_decimal_place() {
        assert_eq!("42.0", Literal::Number(42.0).to_string());
        assert_eq!("0.0", Literal::Number(0.0).to_string());
        assert_eq!("200.0", Literal::Number(200.00).to_string());
    }

    #[test]
    fn fractional_numbers_are_not_padded() {
        assert_eq!("1234.1234", Literal::Number(1234.1234).to_string());
        assert_eq!("0.5", Literal::Number(0.5).to_string());
    }

    #[test]
    fn non_numeric_literals() {
        assert_eq!("nil", Literal::Nil.to_string());
        assert_eq!("true", Literal::from(true).to_string());
        assert_eq!("false", Literal::from(false).to_string());
        assert_eq!("two words", Literal::from("two words").to_string());
    }
}
