use crate::ast::{Argument, PropertySpec, Statement};
use crate::error::SkemataError;
use crate::resolver::{resolve, RootObject};
use crate::utils::{attify, titleize, underscore};
use serde_json::{Map, Value};

/// The `@context` value written on every root node.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// One level of the output document, bound to one root object and one type.
#[derive(Debug)]
pub struct Node {
    declared_type: String,
    root_object: RootObject,
    is_root: bool,
    fields: Map<String, Value>,
}

impl Node {
    pub fn new(declared_type: impl Into<String>, root_object: RootObject, is_root: bool) -> Self {
        let declared_type = declared_type.into();
        let mut fields = Map::new();
        fields.insert("@type".to_string(), Value::String(declared_type.clone()));
        if is_root {
            fields.insert(
                "@context".to_string(),
                Value::String(SCHEMA_ORG_CONTEXT.to_string()),
            );
        }

        Node {
            declared_type,
            root_object,
            is_root,
            fields,
        }
    }

    /// Builds a node, replays `statements` against it and hands back its fields.
    pub fn draw(
        declared_type: impl Into<String>,
        root_object: RootObject,
        statements: &[Statement],
        is_root: bool,
    ) -> Result<Map<String, Value>, SkemataError> {
        let mut node = Node::new(declared_type, root_object, is_root);
        log::debug!(
            "drawing {} node `{}`",
            if node.is_root { "root" } else { "child" },
            node.declared_type
        );
        for statement in statements {
            node.apply(statement)?;
        }
        Ok(node.into_fields())
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn apply(&mut self, statement: &Statement) -> Result<(), SkemataError> {
        self.decorate(&statement.key, &statement.args, statement.block.as_deref())
    }

    /// Decorates the node with one statement.
    ///
    /// With a block this spawns a child node; otherwise the key becomes a
    /// scalar field, written even when its value resolves to nothing. A
    /// `null` argument falls back to looking up the key itself.
    pub fn decorate(
        &mut self,
        key: &str,
        args: &[Argument],
        block: Option<&[Statement]>,
    ) -> Result<(), SkemataError> {
        if let Some(block) = block {
            return self.route_block(key, args, block);
        }

        let value = match args.first().filter(|arg| is_supplied(arg)) {
            Some(Argument::Spec(spec)) => self.extract(spec),
            Some(Argument::Literal(literal)) => literal.clone(),
            None => self.extract(&PropertySpec::name(key)),
        };
        self.fields.insert(attify(key), value);
        Ok(())
    }

    fn extract(&self, spec: &PropertySpec) -> Value {
        resolve(&self.root_object, spec).map_or(Value::Null, |found| found.to_value())
    }

    /// First present value among `names`, each tried in underscored form.
    fn find_property<'a, I>(&self, names: I) -> Option<RootObject>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter_map(|name| resolve(&self.root_object, &PropertySpec::name(underscore(name))))
            .find(RootObject::is_present)
    }

    /// Picks the child's root object and, if there is one, draws the child
    /// under `key`.
    ///
    /// Priority: an explicit property spec, then the titleized key (only when
    /// no arguments were given), then the key and the type in underscored form.
    fn route_block(
        &mut self,
        key: &str,
        args: &[Argument],
        block: &[Statement],
    ) -> Result<(), SkemataError> {
        let type_arg = args.first().filter(|arg| is_supplied(arg));
        let prop_arg = args.get(1).filter(|arg| is_supplied(arg));

        let mut child_root = None;

        if let Some(spec) = prop_arg.and_then(Argument::as_spec) {
            child_root = resolve(&self.root_object, spec);
        }

        if type_arg.is_none() && prop_arg.is_none() {
            child_root = resolve(&self.root_object, &PropertySpec::name(titleize(key)));
        }

        if !child_root.as_ref().is_some_and(RootObject::is_present) {
            let type_name = type_arg.and_then(argument_name);
            child_root = self.find_property(std::iter::once(key).chain(type_name.as_deref()));
        }

        let Some(child_root) = child_root else {
            log::debug!("no root object for child `{key}`, omitting it");
            return Ok(());
        };

        let declared_type = child_type(key, type_arg)?;
        let child = Node::draw(declared_type, child_root, block, false)?;
        self.fields.insert(key.to_string(), Value::Object(child));
        Ok(())
    }
}

/// A literal `null` counts as an omitted positional argument.
fn is_supplied(arg: &Argument) -> bool {
    !matches!(arg, Argument::Literal(Value::Null))
}

/// The name an argument refers to when used as a lookup fallback.
fn argument_name(arg: &Argument) -> Option<String> {
    match arg {
        Argument::Spec(PropertySpec::Name(name)) => Some(name.clone()),
        Argument::Literal(Value::String(name)) => Some(name.clone()),
        _ => None,
    }
}

fn child_type(key: &str, type_arg: Option<&Argument>) -> Result<String, SkemataError> {
    match type_arg {
        None => Err(SkemataError::MissingChildType {
            key: key.to_string(),
        }),
        Some(Argument::Literal(Value::String(name)) | Argument::Spec(PropertySpec::Name(name)))
            if name.trim().is_empty() =>
        {
            Err(SkemataError::MissingChildType {
                key: key.to_string(),
            })
        }
        Some(Argument::Literal(Value::String(name))) => Ok(name.clone()),
        Some(Argument::Spec(PropertySpec::Name(name))) => Ok(name.clone()),
        Some(Argument::Spec(spec)) => Err(SkemataError::InvalidChildType {
            key: key.to_string(),
            found: spec.names().join("."),
        }),
        Some(Argument::Literal(other)) => Err(SkemataError::InvalidChildType {
            key: key.to_string(),
            found: other.to_string(),
        }),
    }
}
