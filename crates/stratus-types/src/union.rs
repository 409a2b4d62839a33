//! Union canonicalisation
//!
//! Every union is built here, in one canonical form:
//! - nested unions are flattened (so `never` members disappear)
//! - duplicate members are removed
//! - members are sorted by display name, byte-wise
//! - zero members give `never`, one member gives that member
//!
//! The canonical form is interned, so `A | B` built anywhere, in any order
//! or nesting, is the same `TypeId`.

use crate::context::{TypeContext, TypeKey};
use crate::reference::TypeReference;
use crate::ty::{TypeId, TypeSymbol, UnionType};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Separator between union members in display names
pub const UNION_SEPARATOR: &str = " | ";

impl TypeContext {
    /// Create the canonical union of `members`
    pub fn union_type<I, R>(&mut self, members: I) -> TypeId
    where
        I: IntoIterator<Item = R>,
        R: Into<TypeReference>,
    {
        let mut flattened = Vec::new();
        for member in members {
            let reference: TypeReference = member.into();
            let id = self.resolve(&reference);
            self.flatten_into(id, &mut flattened);
        }

        let mut seen = FxHashSet::default();
        flattened.retain(|id| seen.insert(*id));

        // Ties on name only happen between distinct objects; the id keeps
        // the order independent of the input.
        flattened.sort_by(|a, b| self.name(*a).cmp(self.name(*b)).then(a.cmp(b)));

        match flattened.len() {
            0 => TypeId::NEVER,
            1 => flattened[0],
            _ => {
                let name = flattened
                    .iter()
                    .map(|&member| self.name(member))
                    .collect::<Vec<_>>()
                    .join(UNION_SEPARATOR);
                debug!(members = flattened.len(), union = %name, "canonical union");
                let key = TypeKey::Union(flattened.clone());
                self.intern(key, || TypeSymbol::Union(UnionType::new(name, flattened)))
            }
        }
    }

    /// Members of a union; a non-union type is its own single member and
    /// `never` has none
    pub fn union_members(&self, id: TypeId) -> Vec<TypeId> {
        match self.get_unchecked(id) {
            TypeSymbol::Union(union) => union.members().to_vec(),
            _ => vec![id],
        }
    }

    fn flatten_into(&self, id: TypeId, out: &mut Vec<TypeId>) {
        match self.get_unchecked(id) {
            TypeSymbol::Union(union) => {
                for &member in union.members() {
                    self.flatten_into(member, out);
                }
            }
            _ => out.push(id),
        }
    }
}
