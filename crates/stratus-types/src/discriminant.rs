//! Discriminated object construction
//!
//! A discriminated object is a tagged union of named object types. Every
//! member declares the discriminator property with a distinct string
//! literal type, and that literal selects the member during type checking.
//!
//! Members are validated in input order, so the first offending member is
//! the one reported.

use crate::context::TypeContext;
use crate::error::TypeError;
use crate::reference::TypeReference;
use crate::ty::{DiscriminatedObjectType, TypeId, TypeSymbol};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Validates discriminated object members against one discriminator key
pub struct DiscriminatorValidator<'a> {
    type_ctx: &'a TypeContext,
    object_name: &'a str,
    discriminator_key: &'a str,
}

impl<'a> DiscriminatorValidator<'a> {
    /// Validator for the discriminated object `object_name`
    pub fn new(type_ctx: &'a TypeContext, object_name: &'a str, discriminator_key: &'a str) -> Self {
        Self {
            type_ctx,
            object_name,
            discriminator_key,
        }
    }

    /// Build the map from quoted discriminator literal to member
    pub fn members_by_key(
        &self,
        members: &[TypeReference],
    ) -> Result<IndexMap<String, TypeReference>, TypeError> {
        let mut by_key = IndexMap::with_capacity(members.len());

        for member in members {
            let literal = self.discriminator_literal(self.type_ctx.resolve(member))?;
            if by_key.contains_key(&literal) {
                return Err(TypeError::DuplicateDiscriminatorValue {
                    object: self.object_name.to_string(),
                    member: self.type_ctx.display(self.type_ctx.resolve(member)),
                    key: self.discriminator_key.to_string(),
                    value: literal,
                });
            }
            by_key.insert(literal, member.clone());
        }

        Ok(by_key)
    }

    /// Quoted literal of one member's discriminator property
    fn discriminator_literal(&self, member: TypeId) -> Result<String, TypeError> {
        let symbol = self.type_ctx.get_unchecked(member);
        let object = match symbol {
            TypeSymbol::NamedObject(object) => object,
            other => {
                return Err(TypeError::MemberNotObjectType {
                    object: self.object_name.to_string(),
                    member: other.name().to_string(),
                    kind: other.kind(),
                })
            }
        };

        let property = object.property(self.discriminator_key).ok_or_else(|| {
            TypeError::MissingDiscriminator {
                object: self.object_name.to_string(),
                member: object.name().to_string(),
                key: self.discriminator_key.to_string(),
            }
        })?;

        match self.type_ctx.symbol_of(property.type_reference()) {
            TypeSymbol::StringLiteral(literal) => Ok(literal.name().to_string()),
            other => Err(TypeError::InvalidDiscriminatorType {
                object: self.object_name.to_string(),
                member: object.name().to_string(),
                key: self.discriminator_key.to_string(),
                found: other.name().to_string(),
            }),
        }
    }
}

impl TypeContext {
    /// Create a discriminated object from named object members
    ///
    /// Fails without creating anything if a member is not a named object,
    /// lacks the discriminator property, types it as anything but a string
    /// literal, or repeats another member's literal.
    pub fn discriminated_object_type<I, R>(
        &mut self,
        name: impl Into<String>,
        discriminator_key: impl Into<String>,
        members: I,
    ) -> Result<TypeId, TypeError>
    where
        I: IntoIterator<Item = R>,
        R: Into<TypeReference>,
    {
        let name = name.into();
        let discriminator_key = discriminator_key.into();
        let members: Vec<TypeReference> = members.into_iter().map(Into::into).collect();

        let validator = DiscriminatorValidator::new(self, &name, &discriminator_key);
        let members_by_key = match validator.members_by_key(&members) {
            Ok(by_key) => by_key,
            Err(err) => {
                warn!(object = %name, error = %err, "rejected discriminated object");
                return Err(err);
            }
        };

        debug!(
            object = %name,
            key = %discriminator_key,
            members = members_by_key.len(),
            "discriminated object"
        );
        Ok(self.push(TypeSymbol::DiscriminatedObject(DiscriminatedObjectType::new(
            name,
            discriminator_key,
            members_by_key,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TypeProperty;
    use crate::ty::TypeKind;

    fn tagged(ctx: &mut TypeContext, name: &str, tag: &str) -> TypeId {
        let literal = ctx.string_literal(tag);
        ctx.named_object_type(name, vec![TypeProperty::new("kind", literal)], None)
    }

    #[test]
    fn test_members_keep_input_order() {
        let mut ctx = TypeContext::new();

        let b = tagged(&mut ctx, "B", "b");
        let a = tagged(&mut ctx, "A", "a");
        let disc = ctx.discriminated_object_type("AB", "kind", [b, a]).unwrap();

        let object = ctx.get_unchecked(disc).as_discriminated_object().unwrap();
        let keys: Vec<_> = object.members_by_key().keys().cloned().collect();
        assert_eq!(keys, vec!["'b'", "'a'"]);
        assert_eq!(object.discriminator_key(), "kind");
        assert_eq!(ctx.kind(disc), TypeKind::DiscriminatedObject);
        assert_eq!(ctx.display(disc), "AB");
    }

    #[test]
    fn test_member_for_value() {
        let mut ctx = TypeContext::new();

        let a = tagged(&mut ctx, "A", "a");
        let disc = ctx.discriminated_object_type("Only", "kind", [a]).unwrap();

        let object = ctx.get_unchecked(disc).as_discriminated_object().unwrap();
        assert_eq!(object.member_for_value("a").map(|r| ctx.resolve(r)), Some(a));
        assert!(object.member_for_value("z").is_none());
        assert!(object.member_for_key("a").is_none());
    }

    #[test]
    fn test_empty_member_list() {
        let mut ctx = TypeContext::new();

        let disc = ctx
            .discriminated_object_type("Empty", "kind", Vec::<TypeId>::new())
            .unwrap();
        let object = ctx.get_unchecked(disc).as_discriminated_object().unwrap();
        assert!(object.members_by_key().is_empty());
    }

    #[test]
    fn test_anonymous_object_member_is_rejected() {
        let mut ctx = TypeContext::new();

        let literal = ctx.string_literal("a");
        let anon = ctx.object_type(vec![TypeProperty::new("kind", literal)], None);

        let err = ctx.discriminated_object_type("Bad", "kind", [anon]).unwrap_err();
        assert_eq!(
            err,
            TypeError::MemberNotObjectType {
                object: "Bad".to_string(),
                member: "object".to_string(),
                kind: TypeKind::Object,
            }
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut ctx = TypeContext::new();

        let a = tagged(&mut ctx, "A", "a");
        let dup = tagged(&mut ctx, "Dup", "a");
        let before = ctx.len();

        let err = ctx
            .discriminated_object_type("Bad", "kind", [TypeId::STRING, a, dup])
            .unwrap_err();
        assert!(matches!(err, TypeError::MemberNotObjectType { .. }));
        assert_eq!(ctx.len(), before);
    }
}
