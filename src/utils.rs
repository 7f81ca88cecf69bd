use serde_json::Value;

/// Keys that schema.org reserves and which are emitted with an `@` prefix.
pub const RESERVED_SCHEMA_TOKENS: [&str; 3] = ["id", "type", "context"];

/// Interpolates `@` into reserved schema.org names, leaving every other key untouched.
pub fn attify(token: &str) -> String {
    if RESERVED_SCHEMA_TOKENS.contains(&token) {
        format!("@{token}")
    } else {
        token.to_string()
    }
}

/// Converts a statement key into its capitalized accessor form: `best_friend` becomes `BestFriend`.
pub fn titleize(token: &str) -> String {
    token
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Converts a name into lowercase-with-underscores form: `BestFriend` becomes `best_friend`.
///
/// Acronyms stay together (`HTMLPage` becomes `html_page`), and dashes or spaces
/// are treated as separators.
pub fn underscore(token: &str) -> String {
    let chars: Vec<char> = token.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c.is_whitespace() {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}

/// Blank values never count as a usable child root: `null`, `false`,
/// whitespace-only strings, and empty arrays or objects.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attify_reserved_tokens() {
        assert_eq!(attify("id"), "@id");
        assert_eq!(attify("type"), "@type");
        assert_eq!(attify("context"), "@context");
    }

    #[test]
    fn test_attify_is_case_sensitive() {
        assert_eq!(attify("Id"), "Id");
        assert_eq!(attify("TYPE"), "TYPE");
        assert_eq!(attify("name"), "name");
        assert_eq!(attify("identifier"), "identifier");
    }

    #[test]
    fn test_titleize() {
        assert_eq!(titleize("best_friend"), "BestFriend");
        assert_eq!(titleize("author"), "Author");
        assert_eq!(titleize("Animal"), "Animal");
        assert_eq!(titleize("main-entity of_page"), "MainEntityOfPage");
        assert_eq!(titleize(""), "");
    }

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("BestFriend"), "best_friend");
        assert_eq!(underscore("Animal"), "animal");
        assert_eq!(underscore("best_friend"), "best_friend");
        assert_eq!(underscore("HTMLPage"), "html_page");
        assert_eq!(underscore("Page2Go"), "page2_go");
        assert_eq!(underscore("main-entity"), "main_entity");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!(false)));
        assert!(is_blank(&json!("  ")));
        assert!(is_blank(&json!([])));
        assert!(is_blank(&json!({})));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!(true)));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!({"a": 1})));
    }
}
