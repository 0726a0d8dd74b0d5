//! Variable type tags and the helpers that produce them.
//!
//! Every code-log value is stored as text; the type tag only records what the
//! raw `set` argument looked like when it was assigned.

use std::fmt;

/// The inferred type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Str,
}

impl VarType {
    /// Name of the type, as used inside `&{name.type}` substitutions.
    pub fn name(self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Str => "str",
        }
    }

    /// The bracketed form substituted for `&{name.type}` (`<int>` / `<str>`).
    pub fn tag(self) -> String {
        format!("<{}>", self.name())
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Infer the type of a raw `set` argument.
///
/// A value is an `int` when it is an optional `+`/`-` sign followed by one or
/// more ASCII digits and nothing else.  There is no magnitude limit, so
/// `99999999999999999999999` is still an `int`.
pub fn infer(raw: &str) -> VarType {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        VarType::Int
    } else {
        VarType::Str
    }
}

/// Strip one layer of matching surrounding quotes (`"…"` or `'…'`).
///
/// Unbalanced or mismatched quotes are left alone.
pub fn strip_quotes(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_plain_integers() {
        assert_eq!(infer("5"), VarType::Int);
        assert_eq!(infer("0"), VarType::Int);
        assert_eq!(infer("007"), VarType::Int);
    }

    #[test]
    fn infer_signed_integers() {
        assert_eq!(infer("-12"), VarType::Int);
        assert_eq!(infer("+3"), VarType::Int);
    }

    #[test]
    fn infer_huge_integer_is_still_int() {
        assert_eq!(infer("123456789012345678901234567890"), VarType::Int);
    }

    #[test]
    fn infer_strings() {
        assert_eq!(infer("hello"), VarType::Str);
        assert_eq!(infer(""), VarType::Str);
        assert_eq!(infer("-"), VarType::Str);
        assert_eq!(infer("1.5"), VarType::Str);
        assert_eq!(infer("12abc"), VarType::Str);
        assert_eq!(infer(" 5"), VarType::Str);
        assert_eq!(infer("--5"), VarType::Str);
    }

    #[test]
    fn quoted_number_is_str() {
        assert_eq!(infer("\"5\""), VarType::Str);
    }

    #[test]
    fn tag_format() {
        assert_eq!(VarType::Int.tag(), "<int>");
        assert_eq!(VarType::Str.tag(), "<str>");
        assert_eq!(VarType::Str.to_string(), "str");
    }

    #[test]
    fn strip_one_layer() {
        assert_eq!(strip_quotes("\"hi\""), "hi");
        assert_eq!(strip_quotes("'hi'"), "hi");
        assert_eq!(strip_quotes("\"'hi'\""), "'hi'");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn strip_leaves_unbalanced() {
        assert_eq!(strip_quotes("\"hi"), "\"hi");
        assert_eq!(strip_quotes("\"hi'"), "\"hi'");
        assert_eq!(strip_quotes("\""), "\"");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
