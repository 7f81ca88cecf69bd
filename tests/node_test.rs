use serde_json::{json, Value};
use skemata::{build, chain, field, prop, Node, RootObject};

fn article() -> Value {
    json!({
        "id": "https://example.com/posts/1",
        "headline": "Cats and sleep",
        "Author": {"name": "Dr. Snuggles", "employer": {"name": "Nap Co"}},
        "writer": {"name": "Garfield"},
        "publisher": {"name": "Daily Purr", "logo": {"url": "https://example.com/logo.png"}},
        "organization": {"name": "Fallback Org"},
        "empty_thing": {},
    })
}

#[test]
fn test_child_node_has_no_context() {
    let fields = Node::draw(
        "Person",
        RootObject::from(json!({"name": "Ann"})),
        &[field("name")],
        false,
    )
    .unwrap();

    assert_eq!(Value::Object(fields), json!({"@type": "Person", "name": "Ann"}));
}

#[test]
fn test_explicit_property_takes_priority() {
    let statements = [field("author")
        .with("Person")
        .with(prop("writer"))
        .block([field("name")])];

    let document = build("Article", article(), &statements).unwrap();

    assert_eq!(document.fields()["author"], json!({"@type": "Person", "name": "Garfield"}));
}

#[test]
fn test_explicit_chain_property() {
    let statements = [field("worksFor")
        .with("Organization")
        .with(chain!("Author", "employer"))
        .block([field("name")])];

    let document = build("Article", article(), &statements).unwrap();

    assert_eq!(document.fields()["worksFor"]["name"], json!("Nap Co"));
}

#[test]
fn test_titleized_key_is_tried_without_arguments() {
    // `author` has no arguments, so `Author` is looked up; the found child
    // still needs a type, which it lacks.
    let statements = [field("author").block([field("name")])];

    let result = build("Article", article(), &statements);

    assert!(matches!(
        result,
        Err(skemata::SkemataError::MissingChildType { .. })
    ));
}

#[test]
fn test_type_is_used_when_key_misses() {
    let statements = [field("sponsor")
        .with("Organization")
        .block([field("name")])];

    let document = build("Article", article(), &statements).unwrap();

    assert_eq!(
        document.fields()["sponsor"],
        json!({"@type": "Organization", "name": "Fallback Org"})
    );
}

#[test]
fn test_key_wins_over_type() {
    let statements = [field("publisher")
        .with("Organization")
        .block([field("name")])];

    let document = build("Article", article(), &statements).unwrap();

    assert_eq!(document.fields()["publisher"]["name"], json!("Daily Purr"));
}

#[test]
fn test_blank_child_root_is_omitted() {
    let statements = [field("empty_thing")
        .with("Thing")
        .block([field("name")])];

    let document = build("Article", article(), &statements).unwrap();

    assert!(!document.fields().contains_key("empty_thing"));
}

#[test]
fn test_deeply_nested_document() {
    let statements = [
        field("id"),
        field("headline"),
        field("publisher").with("Organization").block([
            field("name"),
            field("logo").with("ImageObject").block([field("url")]),
        ]),
    ];

    let json = build("Article", article(), &statements)
        .unwrap()
        .to_json()
        .unwrap();

    assert_eq!(
        json,
        concat!(
            r#"{"@type":"Article","@context":"https://schema.org","@id":"https://example.com/posts/1","#,
            r#""headline":"Cats and sleep","publisher":{"@type":"Organization","name":"Daily Purr","#,
            r#""logo":{"@type":"ImageObject","url":"https://example.com/logo.png"}}}"#
        )
    );
}

#[test]
fn test_scalar_field_holding_an_object() {
    let document = build("Article", article(), &[field("writer")]).unwrap();
    assert_eq!(document.fields()["writer"], json!({"name": "Garfield"}));
}

#[test]
fn test_literal_values_are_verbatim() {
    let statements = [
        field("inLanguage").with("en"),
        field("wordCount").with(1200),
        field("isAccessibleForFree").with(true),
        field("keywords").with(json!(["cats", "sleep"])),
    ];

    let document = build("Article", article(), &statements).unwrap();

    assert_eq!(
        Value::Object(document.into_fields()),
        json!({
            "@type": "Article",
            "@context": "https://schema.org",
            "inLanguage": "en",
            "wordCount": 1200,
            "isAccessibleForFree": true,
            "keywords": ["cats", "sleep"],
        })
    );
}
