//! Type system errors

use crate::ty::TypeKind;
use thiserror::Error;

/// Errors raised while constructing types and schemas.
///
/// These indicate a mistake in compiler code that builds the type graph, not
/// in the program being compiled, so callers abort the construction path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A discriminated-object member is not a named object type
    #[error("Invalid member '{member}' of kind {kind} in discriminated object '{object}'")]
    MemberNotObjectType {
        /// Discriminated object being built
        object: String,
        /// Display name of the offending member
        member: String,
        /// Kind of the offending member
        kind: TypeKind,
    },

    /// A discriminated-object member lacks the discriminator property
    #[error("Missing discriminator field '{key}' on member '{member}' of discriminated object '{object}'")]
    MissingDiscriminator {
        /// Discriminated object being built
        object: String,
        /// Display name of the offending member
        member: String,
        /// Discriminator property name
        key: String,
    },

    /// The discriminator property is not typed as a string literal
    #[error("Invalid discriminator field type {found} for '{key}' on member '{member}' of discriminated object '{object}'")]
    InvalidDiscriminatorType {
        /// Discriminated object being built
        object: String,
        /// Display name of the offending member
        member: String,
        /// Discriminator property name
        key: String,
        /// Display name of the property's actual type
        found: String,
    },

    /// Two members share the same discriminator literal
    #[error("Duplicate discriminator field {value} on member '{member}' of discriminated object '{object}'")]
    DuplicateDiscriminatorValue {
        /// Discriminated object being built
        object: String,
        /// Display name of the member that repeated the value
        member: String,
        /// Discriminator property name
        key: String,
        /// Repeated literal, in its quoted form
        value: String,
    },

    /// Parameter modifiers requested for a type that has none
    #[error("Modifiers are not supported for type '{name}'.")]
    UnsupportedModifierType {
        /// Display name of the target type
        name: String,
    },

    /// Text that does not have the `namespace/type@apiVersion` shape
    #[error("Invalid resource type reference '{text}'")]
    InvalidResourceTypeReference {
        /// The rejected input
        text: String,
    },

    /// A pending-object token that this context did not issue, or whose
    /// object was already defined
    #[error("Type {id} is not a declared named object awaiting definition")]
    UndeclaredObject {
        /// Raw id carried by the token
        id: u32,
    },

    /// Undefined named type
    #[error("Undefined type: {name}")]
    UndefinedType {
        /// Type name that was not found
        name: String,
    },
}
