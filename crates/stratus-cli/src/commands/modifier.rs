//! `stratus modifier <type>`: show the parameter modifier object of a type.

use crate::output::{ObjectView, OutputFormat};
use anyhow::{anyhow, Context};
use stratus_types::TypeContext;
use tracing::debug;

pub fn execute(type_name: &str, format: OutputFormat) -> anyhow::Result<String> {
    let mut ctx = TypeContext::new();
    let target = ctx.lookup_builtin(type_name).ok_or_else(|| {
        anyhow!(
            "Unknown type '{}'. Expected one of: {}",
            type_name,
            ctx.declaration_types_string()
        )
    })?;
    debug!(type_name, "synthesizing parameter modifier");

    let modifier = ctx
        .parameter_modifier_type(target)
        .with_context(|| format!("Cannot build modifiers for '{}'", type_name))?;
    let object = ctx
        .get(modifier)
        .and_then(|symbol| symbol.as_named_object())
        .ok_or_else(|| anyhow!("Modifier type for '{}' is not an object", type_name))?;
    ObjectView::new(&ctx, object).render(format)
}
