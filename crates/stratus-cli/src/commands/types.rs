//! `stratus types`: list the builtin and declaration types.

use crate::output::{OutputFormat, TypesView};
use stratus_types::TypeContext;

pub fn execute(format: OutputFormat) -> anyhow::Result<String> {
    let ctx = TypeContext::new();
    TypesView::new(&ctx).render(format)
}
