use crate::ast::PropertySpec;
use crate::error::SkemataError;
use crate::utils::is_blank;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Why an accessor produced nothing. Both variants are absorbed by the resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("no accessor named `{0}`")]
    Undefined(String),
    #[error("accessor `{name}` failed: {reason}")]
    Failed { name: String, reason: String },
}

impl AccessError {
    pub fn undefined(name: &str) -> Self {
        AccessError::Undefined(name.to_string())
    }

    pub fn failed(name: &str, reason: impl fmt::Display) -> Self {
        AccessError::Failed {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Lookup-by-accessor capability for application types.
pub trait Accessors {
    /// Invokes the accessor called `name`.
    fn access(&self, name: &str) -> Result<RootObject, AccessError>;

    /// JSON form used when the object itself ends up in a scalar field.
    fn to_value(&self) -> Value;
}

/// The source a node's fields are extracted from.
#[derive(Clone)]
pub enum RootObject {
    /// Looked up by key when it holds a JSON object; any other JSON value has no keys.
    Value(Value),
    /// Looked up by invoking named accessors.
    Object(Rc<dyn Accessors>),
}

impl RootObject {
    pub fn accessors(object: impl Accessors + 'static) -> Self {
        RootObject::Object(Rc::new(object))
    }

    /// Captures any serializable value as a key-addressable root object.
    ///
    /// # Errors
    /// Returns `SkemataError::Serialization` if `value` cannot be represented as JSON.
    pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, SkemataError> {
        Ok(RootObject::Value(serde_json::to_value(value)?))
    }

    /// Looks up a single name. Misses of any kind come back as `None`.
    pub fn fetch(&self, name: &str) -> Option<RootObject> {
        match self {
            RootObject::Value(Value::Object(map)) => {
                let found = map.get(name).cloned().map(RootObject::Value);
                if found.is_none() {
                    log::trace!("no key `{name}` on mapping");
                }
                found
            }
            RootObject::Value(other) => {
                log::trace!("cannot look up `{name}` on scalar value {other}");
                None
            }
            RootObject::Object(object) => match object.access(name) {
                Ok(found) => Some(found),
                Err(err) => {
                    log::trace!("{err}");
                    None
                }
            },
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RootObject::Value(Value::Null))
    }

    /// Whether this can serve as a child node's root. Accessor objects always can.
    pub fn is_present(&self) -> bool {
        match self {
            RootObject::Value(value) => !is_blank(value),
            RootObject::Object(_) => true,
        }
    }

    /// The JSON value stored when this object lands in a scalar field.
    pub fn to_value(&self) -> Value {
        match self {
            RootObject::Value(value) => value.clone(),
            RootObject::Object(object) => object.to_value(),
        }
    }
}

impl fmt::Debug for RootObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootObject::Value(value) => f.debug_tuple("Value").field(value).finish(),
            RootObject::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl From<Value> for RootObject {
    fn from(value: Value) -> Self {
        RootObject::Value(value)
    }
}

impl From<Map<String, Value>> for RootObject {
    fn from(map: Map<String, Value>) -> Self {
        RootObject::Value(Value::Object(map))
    }
}

impl From<Rc<dyn Accessors>> for RootObject {
    fn from(object: Rc<dyn Accessors>) -> Self {
        RootObject::Object(object)
    }
}

macro_rules! value_root_object {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RootObject {
                fn from(value: $ty) -> Self {
                    RootObject::Value(Value::from(value))
                }
            }
        )*
    };
}

value_root_object!(&str, String, bool, i32, i64, u32, u64, f64);

impl<T: Into<RootObject>> From<Option<T>> for RootObject {
    fn from(value: Option<T>) -> Self {
        value.map_or(RootObject::Value(Value::Null), Into::into)
    }
}

/// Resolves `spec` against `root`, folding chains left to right.
///
/// Returns `None` when any step misses. Never fails.
pub fn resolve(root: &RootObject, spec: &PropertySpec) -> Option<RootObject> {
    match spec {
        PropertySpec::Name(name) => root.fetch(name),
        PropertySpec::Chain(names) => {
            let (first, rest) = names.split_first()?;
            rest.iter()
                .try_fold(root.fetch(first)?, |current, name| current.fetch(name))
        }
    }
}
