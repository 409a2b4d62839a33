//! Schema synthesis for declaration-time object types
//!
//! Parameter modifier objects are assembled from a fixed decision table keyed
//! on the identity of the target type. Resource bodies share one property set
//! whatever the resource type is.

use crate::context::TypeContext;
use crate::error::TypeError;
use crate::property::{TypeProperty, TypePropertyFlags};
use crate::resource::ResourceTypeReference;
use crate::ty::TypeId;
use tracing::debug;

/// Prefix of every parameter modifier object name
pub const PARAMETER_MODIFIER_PREFIX: &str = "ParameterModifier_";

/// Target types that accept parameter modifiers, matched by identity.
///
/// Typed arrays are not targets: the length rules key on the untyped `array`.
pub const MODIFIER_TARGETS: [TypeId; 6] = [
    TypeId::STRING,
    TypeId::OBJECT,
    TypeId::INT,
    TypeId::BOOL,
    TypeId::ARRAY,
    TypeId::NULL,
];

/// Type of a modifier property, relative to the modifier's target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModifierValue {
    Bool,
    Int,
    Target,
    TargetArray,
    Metadata,
}

#[derive(Debug, Clone, Copy)]
enum Targets {
    All,
    Only(&'static [TypeId]),
}

impl Targets {
    fn includes(self, target: TypeId) -> bool {
        match self {
            Targets::All => true,
            Targets::Only(ids) => ids.contains(&target),
        }
    }
}

struct ModifierRule {
    name: &'static str,
    value: ModifierValue,
    flags: TypePropertyFlags,
    targets: Targets,
}

const STRING_OR_OBJECT: &[TypeId] = &[TypeId::STRING, TypeId::OBJECT];
const STRING_OR_ARRAY: &[TypeId] = &[TypeId::STRING, TypeId::ARRAY];
const INT_ONLY: &[TypeId] = &[TypeId::INT];

const MODIFIER_RULES: &[ModifierRule] = &[
    ModifierRule {
        name: "secure",
        value: ModifierValue::Bool,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::Only(STRING_OR_OBJECT),
    },
    ModifierRule {
        name: "default",
        value: ModifierValue::Target,
        flags: TypePropertyFlags::empty(),
        targets: Targets::All,
    },
    ModifierRule {
        name: "allowed",
        value: ModifierValue::TargetArray,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::All,
    },
    ModifierRule {
        name: "minValue",
        value: ModifierValue::Int,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::Only(INT_ONLY),
    },
    ModifierRule {
        name: "maxValue",
        value: ModifierValue::Int,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::Only(INT_ONLY),
    },
    ModifierRule {
        name: "minLength",
        value: ModifierValue::Int,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::Only(STRING_OR_ARRAY),
    },
    ModifierRule {
        name: "maxLength",
        value: ModifierValue::Int,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::Only(STRING_OR_ARRAY),
    },
    ModifierRule {
        name: "metadata",
        value: ModifierValue::Metadata,
        flags: TypePropertyFlags::CONSTANT,
        targets: Targets::All,
    },
];

impl TypeContext {
    /// Properties of the parameter modifier object for `target`, in table order
    pub fn parameter_modifier_properties(&mut self, target: TypeId) -> Result<Vec<TypeProperty>, TypeError> {
        if !MODIFIER_TARGETS.contains(&target) {
            return Err(TypeError::UnsupportedModifierType {
                name: self.display(target),
            });
        }

        let mut properties = Vec::new();
        for rule in MODIFIER_RULES.iter().filter(|rule| rule.targets.includes(target)) {
            let ty = match rule.value {
                ModifierValue::Bool => TypeId::BOOL,
                ModifierValue::Int => TypeId::INT,
                ModifierValue::Target => target,
                ModifierValue::TargetArray => self.typed_array(target),
                ModifierValue::Metadata => TypeId::PARAMETER_MODIFIER_METADATA,
            };
            properties.push(TypeProperty::with_flags(rule.name, ty, rule.flags));
        }
        Ok(properties)
    }

    /// Named object `ParameterModifier_<target>` holding the modifiers of `target`
    pub fn parameter_modifier_type(&mut self, target: TypeId) -> Result<TypeId, TypeError> {
        let properties = self.parameter_modifier_properties(target)?;
        let name = format!("{}{}", PARAMETER_MODIFIER_PREFIX, self.name(target));
        debug!(modifier = %name, properties = properties.len(), "parameter modifier type");
        Ok(self.named_object_type(name, properties, None))
    }

    /// Properties every resource body carries
    pub fn resource_properties(&mut self, reference: &ResourceTypeReference) -> Vec<TypeProperty> {
        use TypePropertyFlags as F;

        let type_literal = self.string_literal(reference.full_type());
        let version_literal = self.string_literal(reference.api_version());
        let string_array = self.typed_array(TypeId::STRING);
        let resource_array = self.typed_array(TypeId::RESOURCE_REF);

        vec![
            TypeProperty::with_flags("id", TypeId::STRING, F::READ_ONLY | F::SKIP_INLINING),
            TypeProperty::with_flags("name", TypeId::STRING, F::REQUIRED | F::SKIP_INLINING),
            TypeProperty::with_flags("type", type_literal, F::READ_ONLY | F::SKIP_INLINING),
            TypeProperty::with_flags("apiVersion", version_literal, F::READ_ONLY | F::SKIP_INLINING),
            TypeProperty::new("sku", TypeId::OBJECT),
            TypeProperty::new("kind", TypeId::STRING),
            TypeProperty::new("managedBy", TypeId::STRING),
            TypeProperty::new("managedByExtended", string_array),
            TypeProperty::new("location", TypeId::STRING),
            TypeProperty::new("extendedLocation", TypeId::OBJECT),
            TypeProperty::new("zones", string_array),
            TypeProperty::new("plan", TypeId::OBJECT),
            TypeProperty::new("eTag", TypeId::STRING),
            TypeProperty::new("tags", TypeId::TAGS),
            TypeProperty::new("scale", TypeId::OBJECT),
            TypeProperty::new("identity", TypeId::OBJECT),
            TypeProperty::new("properties", TypeId::OBJECT),
            TypeProperty::with_flags("dependsOn", resource_array, F::WRITE_ONLY),
        ]
    }

    /// Named object for a resource body, called after the reference
    pub fn resource_type(&mut self, reference: &ResourceTypeReference) -> TypeId {
        let properties = self.resource_properties(reference);
        debug!(resource = %reference, properties = properties.len(), "resource type");
        self.named_object_type(reference.to_string(), properties, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifier_names(ctx: &mut TypeContext, target: TypeId) -> Vec<String> {
        ctx.parameter_modifier_properties(target)
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    #[test]
    fn test_modifier_table_rows() {
        let mut ctx = TypeContext::new();

        assert_eq!(
            modifier_names(&mut ctx, TypeId::STRING),
            vec!["secure", "default", "allowed", "minLength", "maxLength", "metadata"]
        );
        assert_eq!(
            modifier_names(&mut ctx, TypeId::OBJECT),
            vec!["secure", "default", "allowed", "metadata"]
        );
        assert_eq!(
            modifier_names(&mut ctx, TypeId::INT),
            vec!["default", "allowed", "minValue", "maxValue", "metadata"]
        );
        assert_eq!(
            modifier_names(&mut ctx, TypeId::ARRAY),
            vec!["default", "allowed", "minLength", "maxLength", "metadata"]
        );
        assert_eq!(
            modifier_names(&mut ctx, TypeId::BOOL),
            vec!["default", "allowed", "metadata"]
        );
        assert_eq!(
            modifier_names(&mut ctx, TypeId::NULL),
            vec!["default", "allowed", "metadata"]
        );
    }

    #[test]
    fn test_modifier_property_types() {
        let mut ctx = TypeContext::new();

        let properties = ctx.parameter_modifier_properties(TypeId::INT).unwrap();
        let default = &properties[0];
        assert_eq!(default.type_reference().as_resolved(), Some(TypeId::INT));
        assert_eq!(default.flags(), TypePropertyFlags::empty());

        let allowed = &properties[1];
        let allowed_ty = ctx.resolve(allowed.type_reference());
        assert_eq!(ctx.display(allowed_ty), "int[]");
        assert_eq!(allowed.flags(), TypePropertyFlags::CONSTANT);
    }

    #[test]
    fn test_unsupported_modifier_target() {
        let mut ctx = TypeContext::new();

        assert_eq!(
            ctx.parameter_modifier_type(TypeId::ANY),
            Err(TypeError::UnsupportedModifierType {
                name: "any".to_string()
            })
        );
        let literal = ctx.string_literal("x");
        assert!(ctx.parameter_modifier_type(literal).is_err());
    }

    #[test]
    fn test_resource_type_name() {
        let mut ctx = TypeContext::new();

        let reference = ResourceTypeReference::parse("Microsoft.Web/sites@2020-01-01").unwrap();
        let resource = ctx.resource_type(&reference);
        assert_eq!(ctx.display(resource), "Microsoft.Web/sites@2020-01-01");

        let object = ctx.get_unchecked(resource).as_named_object().unwrap();
        assert_eq!(object.property_count(), 18);
        assert!(object.additional_properties().is_none());
    }
}
