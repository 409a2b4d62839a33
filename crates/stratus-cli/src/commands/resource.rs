//! `stratus resource <type@version>`: show the body object of a resource type.

use crate::output::{ObjectView, OutputFormat};
use anyhow::anyhow;
use stratus_types::{ResourceTypeReference, TypeContext};

pub fn execute(reference: &str, format: OutputFormat) -> anyhow::Result<String> {
    let reference = ResourceTypeReference::parse(reference)?;

    let mut ctx = TypeContext::new();
    let resource = ctx.resource_type(&reference);
    let object = ctx
        .get(resource)
        .and_then(|symbol| symbol.as_named_object())
        .ok_or_else(|| anyhow!("Resource type '{}' is not an object", reference))?;
    ObjectView::new(&ctx, object).render(format)
}
