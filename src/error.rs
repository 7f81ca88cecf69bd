use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SkemataError {
    #[error("Missing schema.org type")]
    #[diagnostic(
        code(skemata::missing_type),
        help("Pass a non-empty schema.org type such as \"Person\" to `draw`.")
    )]
    MissingType,

    #[error("Missing root object")]
    #[diagnostic(
        code(skemata::missing_root_object),
        help("`draw` needs an object to extract fields from, but was given null.")
    )]
    MissingRootObject,

    #[error("Child node `{key}` has no schema.org type")]
    #[diagnostic(
        code(skemata::missing_child_type),
        help("Give the nested statement a type, e.g. `field(\"{key}\").with(\"Thing\").block(..)`.")
    )]
    MissingChildType { key: String },

    #[error("Child node `{key}` has an invalid type: {found}")]
    #[diagnostic(
        code(skemata::invalid_child_type),
        help("A child node type must be a string or a property name.")
    )]
    InvalidChildType { key: String, found: String },

    #[error("Property chain is empty")]
    #[diagnostic(
        code(skemata::empty_chain),
        help("A property chain needs at least one name.")
    )]
    EmptyChain,

    #[error(transparent)]
    #[diagnostic(code(skemata::serialization))]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(code(skemata::yaml))]
    Yaml(#[from] serde_yaml::Error),
}
