use crate::ast::Statement;
use crate::error::SkemataError;
use crate::node::Node;
use crate::resolver::RootObject;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A fully drawn root node.
///
/// Holds the ordered mapping and offers the usual renderings. Key order is
/// `@type`, `@context`, then the fields in statement order.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl Document {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// The document as a generic JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Serializes the document into compact JSON, suitable for a
    /// `<script type="application/ld+json">` tag.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self)
    }

    /// Serializes the document into pretty-printed JSON.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }

    /// Serializes the document into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self)
    }
}

/// Draws a root schema.org node of `type_name` from `root_object`.
///
/// Statements run in order against the root node; nested statements build
/// child nodes, which never carry `@context`.
///
/// # Errors
///
/// Returns `SkemataError::MissingType` for a blank type,
/// `SkemataError::MissingRootObject` for a null root object, and child type
/// errors raised while drawing nested statements.
pub fn build(
    type_name: &str,
    root_object: impl Into<RootObject>,
    statements: &[Statement],
) -> Result<Document, SkemataError> {
    if type_name.trim().is_empty() {
        return Err(SkemataError::MissingType);
    }
    let root_object = root_object.into();
    if root_object.is_null() {
        return Err(SkemataError::MissingRootObject);
    }

    let fields = Node::draw(type_name, root_object, statements, true)?;
    Ok(Document { fields })
}

/// Draws a root node and renders it as compact JSON text.
///
/// ```
/// use skemata::{draw, field};
/// use serde_json::json;
///
/// let json = draw("Baz", json!({"foo": "bar"}), &[field("foo")]).unwrap();
/// assert_eq!(json, r#"{"@type":"Baz","@context":"https://schema.org","foo":"bar"}"#);
/// ```
///
/// # Errors
///
/// Same as [`build`], plus `SkemataError::Serialization` if rendering fails.
pub fn draw(
    type_name: &str,
    root_object: impl Into<RootObject>,
    statements: &[Statement],
) -> Result<String, SkemataError> {
    Ok(build(type_name, root_object, statements)?.to_json()?)
}
