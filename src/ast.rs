use crate::error::SkemataError;
use serde_json::Value;

/// Describes how to reach a value from a root object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySpec {
    /// A single accessor or mapping key.
    Name(String),
    /// Names applied root-to-leaf, each against the result of the previous one.
    /// Built through [`PropertySpec::chain`] or [`chain!`](crate::chain), which
    /// both reject an empty chain.
    Chain(Vec<String>),
}

impl PropertySpec {
    pub fn name(name: impl Into<String>) -> Self {
        PropertySpec::Name(name.into())
    }

    /// Builds a chain from a sequence of names.
    ///
    /// # Errors
    /// Returns `SkemataError::EmptyChain` when `names` yields nothing.
    pub fn chain<I, S>(names: I) -> Result<Self, SkemataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SkemataError::EmptyChain);
        }
        Ok(PropertySpec::Chain(names))
    }

    /// The names this spec walks through, in order.
    pub fn names(&self) -> &[String] {
        match self {
            PropertySpec::Name(name) => std::slice::from_ref(name),
            PropertySpec::Chain(names) => names,
        }
    }
}

impl From<&str> for PropertySpec {
    fn from(name: &str) -> Self {
        PropertySpec::Name(name.to_string())
    }
}

impl From<String> for PropertySpec {
    fn from(name: String) -> Self {
        PropertySpec::Name(name)
    }
}

/// Shorthand for an atomic [`PropertySpec`].
pub fn prop(name: impl Into<String>) -> PropertySpec {
    PropertySpec::Name(name.into())
}

/// Builds a [`PropertySpec::Chain`] from one or more names.
///
/// ```
/// use skemata::{chain, PropertySpec};
///
/// let spec = chain!("toy", "color");
/// assert_eq!(spec, PropertySpec::Chain(vec!["toy".into(), "color".into()]));
/// ```
#[macro_export]
macro_rules! chain {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::ast::PropertySpec::Chain(vec![
            ::std::string::String::from($first)
            $(, ::std::string::String::from($rest))*
        ])
    };
}

/// A positional statement argument: either something to resolve, or a value
/// to emit as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Spec(PropertySpec),
    Literal(Value),
}

impl Argument {
    pub fn as_spec(&self) -> Option<&PropertySpec> {
        match self {
            Argument::Spec(spec) => Some(spec),
            Argument::Literal(_) => None,
        }
    }
}

impl From<PropertySpec> for Argument {
    fn from(spec: PropertySpec) -> Self {
        Argument::Spec(spec)
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Literal(value)
    }
}

macro_rules! literal_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Argument {
                fn from(value: $ty) -> Self {
                    Argument::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_argument!(&str, String, bool, i32, i64, u32, u64, f64);

/// One builder statement. Without a block it decorates the node with a scalar
/// field; with a block it spawns a child node.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub key: String,
    pub args: Vec<Argument>,
    pub block: Option<Vec<Statement>>,
}

impl Statement {
    pub fn new(key: impl Into<String>) -> Self {
        Statement {
            key: key.into(),
            args: Vec::new(),
            block: None,
        }
    }

    /// Appends a positional argument.
    ///
    /// For scalar statements the first argument is the value or spec to store.
    /// For nested statements the arguments are `[type, property]`.
    #[must_use]
    pub fn with(mut self, arg: impl Into<Argument>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Turns this into a nested statement whose child node runs `statements`.
    #[must_use]
    pub fn block<I>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = Statement>,
    {
        self.block = Some(statements.into_iter().collect());
        self
    }

    pub fn is_nested(&self) -> bool {
        self.block.is_some()
    }
}

/// Starts a statement for `key`.
pub fn field(key: impl Into<String>) -> Statement {
    Statement::new(key)
}
