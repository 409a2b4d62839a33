//! Stratus Type System
//!
//! Type symbols, references and properties for the Stratus language, the
//! union algebra, discriminated objects, and the schemas synthesized for
//! parameter modifiers and resource declarations.

#![warn(missing_docs)]

pub mod constants;
pub mod context;
pub mod discriminant;
pub mod error;
pub mod property;
pub mod reference;
pub mod resource;
pub mod schema;
pub mod ty;
pub mod union;

pub use context::{PendingObject, TypeContext};
pub use discriminant::DiscriminatorValidator;
pub use error::TypeError;
pub use property::{TypeProperty, TypePropertyFlags};
pub use reference::TypeReference;
pub use resource::ResourceTypeReference;
pub use schema::{MODIFIER_TARGETS, PARAMETER_MODIFIER_PREFIX};
pub use ty::{
    quote_string_literal, ArrayType, DiscriminatedObjectType, ObjectType, PrimitiveType, StringLiteralType,
    TypeId, TypeKind, TypeSymbol, UnionType,
};
pub use union::UNION_SEPARATOR;
