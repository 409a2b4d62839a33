//! Serializable views of types and their rendering as text or JSON.

use clap::ValueEnum;
use serde::Serialize;
use stratus_types::{ObjectType, TypeContext, TypeProperty, TypePropertyFlags};

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Indented, human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

const FLAG_NAMES: [(TypePropertyFlags, &str); 5] = [
    (TypePropertyFlags::REQUIRED, "Required"),
    (TypePropertyFlags::READ_ONLY, "ReadOnly"),
    (TypePropertyFlags::WRITE_ONLY, "WriteOnly"),
    (TypePropertyFlags::CONSTANT, "Constant"),
    (TypePropertyFlags::SKIP_INLINING, "SkipInlining"),
];

/// Names of the flags set in `flags`, in declaration order
pub fn flag_names(flags: TypePropertyFlags) -> Vec<&'static str> {
    FLAG_NAMES
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|&(_, name)| name)
        .collect()
}

/// One object property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyView {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub flags: Vec<&'static str>,
}

impl PropertyView {
    pub fn new(ctx: &TypeContext, property: &TypeProperty) -> Self {
        Self {
            name: property.name().to_string(),
            type_name: ctx.display(ctx.resolve(property.type_reference())),
            flags: flag_names(property.flags()),
        }
    }
}

/// An object type with its declared properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectView {
    pub name: String,
    pub properties: Vec<PropertyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<String>,
}

impl ObjectView {
    pub fn new(ctx: &TypeContext, object: &ObjectType) -> Self {
        Self {
            name: object.name().to_string(),
            properties: object.properties().map(|p| PropertyView::new(ctx, p)).collect(),
            additional_properties: object
                .additional_properties()
                .map(|r| ctx.display(ctx.resolve(r))),
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = self.name.clone();
                for property in &self.properties {
                    out.push_str(&format!("\n  {}: {}", property.name, property.type_name));
                    if !property.flags.is_empty() {
                        out.push_str(&format!(" [{}]", property.flags.join(", ")));
                    }
                }
                if let Some(additional) = &self.additional_properties {
                    out.push_str(&format!("\n  *: {}", additional));
                }
                Ok(out)
            }
        }
    }
}

/// A builtin type and its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltinView {
    pub name: &'static str,
    pub id: u32,
    pub kind: String,
}

/// The builtin registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypesView {
    pub declaration_types: Vec<&'static str>,
    pub builtins: Vec<BuiltinView>,
}

impl TypesView {
    pub fn new(ctx: &TypeContext) -> Self {
        Self {
            declaration_types: ctx.declaration_types().map(|(name, _)| name).collect(),
            builtins: ctx
                .builtin_types()
                .into_iter()
                .map(|(name, id)| BuiltinView {
                    name,
                    id: id.as_u32(),
                    kind: ctx.kind(id).to_string(),
                })
                .collect(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut out = format!("Declaration types: {}\nBuiltins:", self.declaration_types.join(", "));
                for builtin in &self.builtins {
                    out.push_str(&format!("\n  {:<10} {}", builtin.name, builtin.kind));
                }
                Ok(out)
            }
        }
    }
}
