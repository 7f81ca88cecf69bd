//! Declarative builder for schema.org JSON-LD documents.
//!
//! A document is drawn from a root object and a list of [`Statement`]s. Each
//! statement either pulls a scalar field off the root object (by name, by
//! [`chain!`] of names, or as a literal) or spawns a nested node whose root
//! object is resolved from the current one.
//!
//! ```
//! use skemata::{chain, draw, field};
//! use serde_json::json;
//!
//! let cat = json!({
//!     "name": "Dr. Snuggles",
//!     "toy": { "color": "red" },
//!     "best_friend": { "name": "Garfield" },
//! });
//!
//! let json = draw("Animal", cat, &[
//!     field("name"),
//!     field("toy_color").with(chain!("toy", "color")),
//!     field("best_friend").with("Animal").block([field("name")]),
//! ]).unwrap();
//!
//! assert_eq!(
//!     json,
//!     r#"{"@type":"Animal","@context":"https://schema.org","name":"Dr. Snuggles","toy_color":"red","best_friend":{"@type":"Animal","name":"Garfield"}}"#
//! );
//! ```
pub mod api;
pub mod ast;
pub mod error;
pub mod node;
pub mod resolver;
pub mod utils;

pub use api::{build, draw, Document};
pub use ast::{field, prop, Argument, PropertySpec, Statement};
pub use error::SkemataError;
pub use node::{Node, SCHEMA_ORG_CONTEXT};
pub use resolver::{resolve, AccessError, Accessors, RootObject};
