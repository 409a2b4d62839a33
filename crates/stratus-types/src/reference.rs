//! Deferred handles to types
//!
//! A [`TypeReference`] is an edge of the type graph. It either names a type
//! that already exists, or holds a producer that finds the type when asked.
//! The producer form lets a graph refer to types that are registered later
//! (for example mutually recursive objects looked up by name).
//!
//! Producers must be pure: resolving the same reference twice against the
//! same context returns the same id. A producer must not resolve the
//! reference it belongs to.

use crate::context::TypeContext;
use crate::ty::TypeId;
use std::fmt;
use std::sync::Arc;

type Producer = dyn Fn(&TypeContext) -> TypeId + Send + Sync;

/// Handle to exactly one type in a [`TypeContext`]
#[derive(Clone)]
pub enum TypeReference {
    /// Bound to an existing type
    Resolved(TypeId),
    /// Bound to a producer run on every resolution
    Deferred(Arc<Producer>),
}

impl TypeReference {
    /// Reference whose target is computed on demand
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn(&TypeContext) -> TypeId + Send + Sync + 'static,
    {
        TypeReference::Deferred(Arc::new(producer))
    }

    /// Resolve against a context
    pub fn resolve(&self, ctx: &TypeContext) -> TypeId {
        match self {
            TypeReference::Resolved(id) => *id,
            TypeReference::Deferred(producer) => producer(ctx),
        }
    }

    /// The target id when known without a context
    pub fn as_resolved(&self) -> Option<TypeId> {
        match self {
            TypeReference::Resolved(id) => Some(*id),
            TypeReference::Deferred(_) => None,
        }
    }

    /// Whether this reference is deferred
    pub fn is_deferred(&self) -> bool {
        matches!(self, TypeReference::Deferred(_))
    }
}

impl From<TypeId> for TypeReference {
    fn from(id: TypeId) -> Self {
        TypeReference::Resolved(id)
    }
}

impl From<&TypeReference> for TypeReference {
    fn from(reference: &TypeReference) -> Self {
        reference.clone()
    }
}

impl fmt::Debug for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Resolved(id) => f.debug_tuple("Resolved").field(id).finish(),
            TypeReference::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
