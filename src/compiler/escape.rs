use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// backslash, double quote and every C0 control character
static STRING_SPECIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\\"\x00-\x1F]"#).expect("valid regex"));
static FIELD_SPECIALS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\}]").expect("valid regex"));
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Write `value` as a double-quoted string literal. Backslash and double
/// quote are backslash-escaped, newline, carriage return and tab use their
/// short forms and the remaining control characters are written as `\uXXXX`.
/// Braces are left as they are since they carry no meaning inside a string.
pub fn quote_string(value: &str) -> String {
    let escaped = STRING_SPECIALS.replace_all(value, |caps: &Captures| match &caps[0] {
        "\n" => r"\n".to_string(),
        "\r" => r"\r".to_string(),
        "\t" => r"\t".to_string(),
        "\\" | "\"" => format!("\\{}", &caps[0]),
        other => other.chars().map(|c| format!("\\u{:04X}", c as u32)).collect(),
    });
    format!("\"{}\"", escaped)
}

/// Write a display name as a `{...}` field reference.
pub fn quote_field(name: &str) -> String {
    format!("{{{}}}", escape_field_name(name))
}

pub fn escape_field_name(name: &str) -> Cow<'_, str> {
    FIELD_SPECIALS.replace_all(name, r"\$0")
}

/// Plain function name: letters, digits and underscores.
pub fn is_identifier(tag: &str) -> bool {
    IDENTIFIER.is_match(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes_strings() {
        assert_eq!(quote_string("Robert"), r#""Robert""#);
        assert_eq!(quote_string(r#"Robert",{email}>m"#), r#""Robert\",{email}>m""#);
        assert_eq!(quote_string(r"C:\temp"), r#""C:\\temp""#);
        assert_eq!(quote_string("a\nb\tc"), r#""a\nb\tc""#);
        assert_eq!(quote_string(""), r#""""#);
    }

    #[test]
    fn escapes_remaining_control_characters() {
        assert_eq!(quote_string("a\u{0}b"), r#""a\u0000b""#);
        assert_eq!(quote_string("\u{8}\u{1b}[31m"), r#""\u0008\u001B[31m""#);
        assert_eq!(quote_string("\u{1f}\u{7f}"), "\"\\u001F\u{7f}\"");
    }

    #[test]
    fn escapes_closing_braces_in_field_names() {
        assert_eq!(quote_field("First name"), "{First name}");
        assert_eq!(quote_field("odd}name"), r"{odd\}name}");
        assert_eq!(quote_field(r"back\slash"), r"{back\\slash}");
        assert_eq!(quote_field("{open"), "{{open}");
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("MY_FUNC2"));
        assert!(is_identifier("_x"));
        assert!(!is_identifier("2X"));
        assert!(!is_identifier("A B"));
        assert!(!is_identifier("X)"));
        assert!(!is_identifier(""));
    }
}
