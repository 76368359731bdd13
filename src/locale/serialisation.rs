use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

const INDENT: &[u8] = b"  ";

/// Pretty prints `value` the way the locale files are laid out by hand: 2 space indentation,
/// `": "` between keys and values, and no trailing newline. serde_json only escapes control
/// characters, quotes and backslashes, so non-ASCII text is written out as raw UTF-8.
pub(super) fn to_pretty_bytes<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut out_bytes: Vec<u8> = Vec::with_capacity(128);

    let mut ser = Serializer::with_formatter(&mut out_bytes, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;

    Ok(out_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn two_space_indentation() {
        let bytes = to_pretty_bytes(&json!({ "greeting": { "message": "Hi" } })).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\n  \"greeting\": {\n    \"message\": \"Hi\"\n  }\n}"
        );
    }

    #[test]
    fn unicode_is_not_escaped() {
        let bytes = to_pretty_bytes(&json!({ "k": "Willkommen bei Widllet 👋 ようこそ" })).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("Willkommen bei Widllet 👋 ようこそ"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn control_characters_are_still_escaped() {
        let bytes = to_pretty_bytes(&json!({ "k": "line\nbreak \"quoted\"" })).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\n  \"k\": \"line\\nbreak \\\"quoted\\\"\"\n}"
        );
    }
}
