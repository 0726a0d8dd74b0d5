//! Message interpolation.
//!
//! Two substitution sequences are recognised in `log` messages:
//!
//! | Sequence        | Replaced with                               |
//! |-----------------|---------------------------------------------|
//! | `&[name.val]`   | the variable's value (quotes already gone)  |
//! | `&{name.type}`  | `<int>` or `<str>`                          |
//!
//! Substitution is plain text replacement, one variable at a time in store
//! order.  Whatever `&[x.val]` tokens remain afterwards name variables that
//! do not exist, and the first of them fails the whole message.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::ErrorEvent;
use crate::var::VarStore;

static VAL_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&\[(\w+)\.val\]").expect("value token pattern"));

/// Expand all substitution sequences in `template` against `vars`.
///
/// On success the fully substituted message is returned.  If a `&[x.val]`
/// token refers to an unknown variable the result is
/// [`ErrorEvent::UndefinedVariable`] and the partially substituted text is
/// dropped.
pub fn expand(template: &str, vars: &VarStore) -> Result<String, ErrorEvent> {
    let mut out = template.to_owned();
    for var in vars.iter() {
        let val_token = format!("&[{}.val]", var.name);
        let type_token = format!("&{{{}.type}}", var.name);
        if out.contains(&val_token) || out.contains(&type_token) {
            trace!(name = %var.name, "substituting");
            out = out
                .replace(&val_token, &var.value)
                .replace(&type_token, &var.ty.tag());
        }
    }

    if let Some(name) = first_undefined(&out, vars) {
        return Err(ErrorEvent::UndefinedVariable(name.to_owned()));
    }
    Ok(out)
}

/// Find the first `&[x.val]` token in `text` whose `x` is not in `vars`.
fn first_undefined<'t>(text: &'t str, vars: &VarStore) -> Option<&'t str> {
    VAL_TOKEN_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|name| !vars.contains(name))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store(pairs: &[(&str, &str)]) -> VarStore {
        let mut vars = VarStore::new();
        for (name, raw) in pairs {
            vars.set(*name, raw);
        }
        vars
    }

    #[test]
    fn value_and_type() {
        let vars = store(&[("x", "\"hi\"")]);
        assert_eq!(
            expand("&[x.val] is &{x.type}", &vars),
            Ok("hi is <str>".to_owned())
        );
    }

    #[test]
    fn int_type_tag() {
        let vars = store(&[("n", "42")]);
        assert_eq!(expand("&{n.type}", &vars), Ok("<int>".to_owned()));
    }

    #[test]
    fn repeated_tokens() {
        let vars = store(&[("a", "1")]);
        assert_eq!(expand("&[a.val]+&[a.val]", &vars), Ok("1+1".to_owned()));
    }

    #[test]
    fn no_tokens_passes_through() {
        let vars = store(&[]);
        assert_eq!(expand("plain text", &vars), Ok("plain text".to_owned()));
    }

    #[test]
    fn undefined_variable() {
        let vars = store(&[("x", "1")]);
        assert_eq!(
            expand("&[x.val] and &[y.val]", &vars),
            Err(ErrorEvent::UndefinedVariable("y".into()))
        );
    }

    #[test]
    fn first_undefined_in_scan_order_wins() {
        let vars = store(&[]);
        assert_eq!(
            expand("&[b.val] &[a.val]", &vars),
            Err(ErrorEvent::UndefinedVariable("b".into()))
        );
    }

    #[test]
    fn undefined_type_token_is_left_alone() {
        // Only value tokens are checked for undefined names.
        let vars = store(&[]);
        assert_eq!(expand("&{z.type}", &vars), Ok("&{z.type}".to_owned()));
    }

    #[test]
    fn malformed_tokens_are_literal() {
        let vars = store(&[("x", "1")]);
        assert_eq!(expand("&[x.value] &x", &vars), Ok("&[x.value] &x".to_owned()));
    }

    #[test]
    fn substituted_value_can_expand_later_variables() {
        // Substitution is textual and runs in definition order.
        let vars = store(&[("a", "&[b.val]"), ("b", "deep")]);
        assert_eq!(expand("&[a.val]", &vars), Ok("deep".to_owned()));
    }
}
