//! Core type definitions for the Stratus type system

use crate::constants::{STRING_DELIMITER, STRING_HOLE_OPEN};
use crate::property::{TypeProperty, TypePropertyFlags};
use crate::reference::TypeReference;
use indexmap::IndexMap;
use std::fmt;

/// Unique identifier for a type in the type context
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    /// The `any` type
    pub const ANY: TypeId = TypeId(0);
    /// The `string` type
    pub const STRING: TypeId = TypeId(1);
    /// The builtin `object` type (any properties of any type)
    pub const OBJECT: TypeId = TypeId(2);
    /// The `int` type
    pub const INT: TypeId = TypeId(3);
    /// The `bool` type
    pub const BOOL: TypeId = TypeId(4);
    /// The untyped `array` type
    pub const ARRAY: TypeId = TypeId(5);
    /// The `null` type
    pub const NULL: TypeId = TypeId(6);
    /// The `resource` reference type
    pub const RESOURCE_REF: TypeId = TypeId(7);
    /// The uninhabited `never` type (the empty union)
    pub const NEVER: TypeId = TypeId(8);
    /// Metadata object accepted by every parameter modifier
    pub const PARAMETER_MODIFIER_METADATA: TypeId = TypeId(9);
    /// The `Tags` object carried by every resource
    pub const TAGS: TypeId = TypeId(10);

    /// Create a new TypeId from a raw value
    ///
    /// Note: This should generally only be used internally or for interop.
    /// Prefer the well-known constants or TypeContext constructors.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value of this TypeId
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Kind tag shared by every type symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// The `any` type
    Any,
    /// `string`, `int`, `bool`, `null`
    Primitive,
    /// Anonymous or named object types
    Object,
    /// Untyped or typed arrays
    Array,
    /// Union of two or more members
    Union,
    /// Tagged union of named objects
    DiscriminatedObject,
    /// Union of zero members
    Never,
    /// Single string value
    StringLiteral,
    /// Reference to a declared resource
    ResourceReference,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeKind::Any => "Any",
            TypeKind::Primitive => "Primitive",
            TypeKind::Object => "Object",
            TypeKind::Array => "Array",
            TypeKind::Union => "Union",
            TypeKind::DiscriminatedObject => "DiscriminatedObject",
            TypeKind::Never => "Never",
            TypeKind::StringLiteral => "StringLiteral",
            TypeKind::ResourceReference => "ResourceReference",
        };
        f.write_str(name)
    }
}

/// Primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// The `string` type
    String,
    /// The `int` type
    Int,
    /// The `bool` type
    Bool,
    /// The `null` type
    Null,
}

impl PrimitiveType {
    /// Source-level name of the primitive
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveType::String => "string",
            PrimitiveType::Int => "int",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Null => "null",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Quote a raw string the way string literal types render it.
///
/// `keyA` becomes `'keyA'`; quotes, backslashes, control characters and
/// interpolation holes are escaped.
pub fn quote_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push_str(STRING_DELIMITER);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '$' if chars.peek() == Some(&'{') => {
                out.push('\\');
                out.push_str(STRING_HOLE_OPEN);
                chars.next();
            }
            c => out.push(c),
        }
    }
    out.push_str(STRING_DELIMITER);
    out
}

/// String literal type: `'value'`
#[derive(Debug, Clone)]
pub struct StringLiteralType {
    value: String,
    name: String,
}

impl StringLiteralType {
    pub(crate) fn new(value: String) -> Self {
        let name = quote_string_literal(&value);
        Self { value, name }
    }

    /// The unquoted literal value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The quoted display name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Object type, anonymous or named
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    properties: IndexMap<String, TypeProperty>,
    additional_properties: Option<TypeReference>,
    additional_properties_flags: TypePropertyFlags,
}

impl ObjectType {
    /// Build an object type. A repeated property name replaces the earlier
    /// property but keeps its position.
    pub fn new(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties: Option<TypeReference>,
        additional_properties_flags: TypePropertyFlags,
    ) -> Self {
        let mut by_name = IndexMap::new();
        for property in properties {
            by_name.insert(property.name().to_string(), property);
        }
        Self {
            name: name.into(),
            properties: by_name,
            additional_properties,
            additional_properties_flags,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a declared property
    pub fn property(&self, name: &str) -> Option<&TypeProperty> {
        self.properties.get(name)
    }

    /// Declared properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = &TypeProperty> {
        self.properties.values()
    }

    /// Number of declared properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Type of undeclared properties, if any are permitted
    pub fn additional_properties(&self) -> Option<&TypeReference> {
        self.additional_properties.as_ref()
    }

    /// Flags applied to undeclared properties
    pub fn additional_properties_flags(&self) -> TypePropertyFlags {
        self.additional_properties_flags
    }
}

/// Array type: `array` or `T[]`
#[derive(Debug, Clone)]
pub struct ArrayType {
    name: String,
    item: Option<TypeId>,
}

impl ArrayType {
    pub(crate) fn untyped() -> Self {
        Self {
            name: "array".to_string(),
            item: None,
        }
    }

    pub(crate) fn typed(item: TypeId, item_name: &str) -> Self {
        Self {
            name: format!("{}[]", item_name),
            item: Some(item),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item type; `any` for untyped arrays
    pub fn item_type(&self) -> TypeId {
        self.item.unwrap_or(TypeId::ANY)
    }

    /// Whether the item type was given explicitly
    pub fn is_typed(&self) -> bool {
        self.item.is_some()
    }
}

/// Union type: `A | B | ...`, or `never` when empty
///
/// Only built through [`TypeContext::union_type`](crate::TypeContext::union_type).
#[derive(Debug, Clone)]
pub struct UnionType {
    name: String,
    members: Vec<TypeId>,
}

impl UnionType {
    pub(crate) fn new(name: String, members: Vec<TypeId>) -> Self {
        Self { name, members }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in canonical order
    pub fn members(&self) -> &[TypeId] {
        &self.members
    }
}

/// Tagged union of named objects sharing a string-literal discriminator
#[derive(Debug, Clone)]
pub struct DiscriminatedObjectType {
    name: String,
    discriminator_key: String,
    members_by_key: IndexMap<String, TypeReference>,
}

impl DiscriminatedObjectType {
    pub(crate) fn new(
        name: String,
        discriminator_key: String,
        members_by_key: IndexMap<String, TypeReference>,
    ) -> Self {
        Self {
            name,
            discriminator_key,
            members_by_key,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the discriminator property
    pub fn discriminator_key(&self) -> &str {
        &self.discriminator_key
    }

    /// Members keyed by quoted literal (`'keyA'`), in declaration order
    pub fn members_by_key(&self) -> &IndexMap<String, TypeReference> {
        &self.members_by_key
    }

    /// Member selected by a quoted literal key
    pub fn member_for_key(&self, key: &str) -> Option<&TypeReference> {
        self.members_by_key.get(key)
    }

    /// Member selected by a raw discriminator value
    pub fn member_for_value(&self, value: &str) -> Option<&TypeReference> {
        self.members_by_key.get(&quote_string_literal(value))
    }
}

/// A node in the type graph
#[derive(Debug, Clone)]
pub enum TypeSymbol {
    /// Top type
    Any,

    /// Primitive type (string, int, bool, null)
    Primitive(PrimitiveType),

    /// String literal type
    StringLiteral(StringLiteralType),

    /// Anonymous object type, including the builtin `object`
    Object(ObjectType),

    /// Named object type
    NamedObject(ObjectType),

    /// Untyped or typed array
    Array(ArrayType),

    /// Union type; `never` when it has no members
    Union(UnionType),

    /// Discriminated union of named objects
    DiscriminatedObject(DiscriminatedObjectType),

    /// Reference to a declared resource
    ResourceReference,
}

impl TypeSymbol {
    /// Display name, also the sort key for union members
    pub fn name(&self) -> &str {
        match self {
            TypeSymbol::Any => "any",
            TypeSymbol::Primitive(p) => p.type_name(),
            TypeSymbol::StringLiteral(s) => s.name(),
            TypeSymbol::Object(o) | TypeSymbol::NamedObject(o) => o.name(),
            TypeSymbol::Array(a) => a.name(),
            TypeSymbol::Union(u) => u.name(),
            TypeSymbol::DiscriminatedObject(d) => d.name(),
            TypeSymbol::ResourceReference => "resource",
        }
    }

    /// Kind tag
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeSymbol::Any => TypeKind::Any,
            TypeSymbol::Primitive(_) => TypeKind::Primitive,
            TypeSymbol::StringLiteral(_) => TypeKind::StringLiteral,
            TypeSymbol::Object(_) | TypeSymbol::NamedObject(_) => TypeKind::Object,
            TypeSymbol::Array(_) => TypeKind::Array,
            TypeSymbol::Union(u) if u.members().is_empty() => TypeKind::Never,
            TypeSymbol::Union(_) => TypeKind::Union,
            TypeSymbol::DiscriminatedObject(_) => TypeKind::DiscriminatedObject,
            TypeSymbol::ResourceReference => TypeKind::ResourceReference,
        }
    }

    /// Check if this type is the never type
    pub fn is_never(&self) -> bool {
        self.kind() == TypeKind::Never
    }

    /// Get the object type if this is an object, named or not
    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            TypeSymbol::Object(o) | TypeSymbol::NamedObject(o) => Some(o),
            _ => None,
        }
    }

    /// Get the object type only if it is named
    pub fn as_named_object(&self) -> Option<&ObjectType> {
        match self {
            TypeSymbol::NamedObject(o) => Some(o),
            _ => None,
        }
    }

    /// Get the union type if this is a union (including never)
    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            TypeSymbol::Union(u) => Some(u),
            _ => None,
        }
    }

    /// Get the array type if this is an array
    pub fn as_array(&self) -> Option<&ArrayType> {
        match self {
            TypeSymbol::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get the string literal if this is one
    pub fn as_string_literal(&self) -> Option<&StringLiteralType> {
        match self {
            TypeSymbol::StringLiteral(s) => Some(s),
            _ => None,
        }
    }

    /// Get the discriminated object if this is one
    pub fn as_discriminated_object(&self) -> Option<&DiscriminatedObjectType> {
        match self {
            TypeSymbol::DiscriminatedObject(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
