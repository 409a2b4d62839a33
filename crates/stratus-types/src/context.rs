//! Type context for managing types and type interning

use crate::constants::{DECLARATION_TYPE_NAMES, LIST_SEPARATOR};
use crate::error::TypeError;
use crate::property::{TypeProperty, TypePropertyFlags};
use crate::reference::TypeReference;
use crate::ty::{ArrayType, ObjectType, PrimitiveType, StringLiteralType, TypeId, TypeKind, TypeSymbol, UnionType};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tracing::trace;

/// Structural identity of an interned type.
///
/// Objects are keyed by name, properties in declaration order and the
/// additional-properties slot. Objects with a deferred edge, objects built
/// through [`TypeContext::declare_named_object`] and discriminated objects
/// are not interned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum TypeKey {
    Any,
    Primitive(PrimitiveType),
    StringLiteral(String),
    UntypedArray,
    TypedArray(TypeId),
    Union(Vec<TypeId>),
    ResourceReference,
    Object {
        named: bool,
        name: String,
        properties: Vec<(String, TypeId, TypePropertyFlags)>,
        additional: Option<TypeId>,
        additional_flags: TypePropertyFlags,
    },
}

impl TypeKey {
    /// Key of an object symbol whose edges are all resolved
    fn object(symbol: &TypeSymbol) -> Option<TypeKey> {
        let (named, object) = match symbol {
            TypeSymbol::Object(object) => (false, object),
            TypeSymbol::NamedObject(object) => (true, object),
            _ => return None,
        };

        let properties = object
            .properties()
            .map(|p| {
                p.type_reference()
                    .as_resolved()
                    .map(|id| (p.name().to_string(), id, p.flags()))
            })
            .collect::<Option<Vec<_>>>()?;
        let additional = match object.additional_properties() {
            Some(reference) => Some(reference.as_resolved()?),
            None => None,
        };

        Some(TypeKey::Object {
            named,
            name: object.name().to_string(),
            properties,
            additional,
            additional_flags: object.additional_properties_flags(),
        })
    }
}

/// A named object whose id exists but whose properties are not set yet.
///
/// Returned by [`TypeContext::declare_named_object`]; the id can be used in
/// type references (including the object's own properties) before
/// [`TypeContext::define_named_object`] consumes the token.
#[derive(Debug)]
#[must_use = "a declared object stays empty until it is defined"]
pub struct PendingObject {
    id: TypeId,
}

impl PendingObject {
    /// Id the object will keep once defined
    pub fn id(&self) -> TypeId {
        self.id
    }
}

/// Type context that owns every type of an analysis session
///
/// Types are built once and never mutated afterwards (apart from completing
/// a declared named object), so a finished context can be shared between
/// reader threads without locking.
#[derive(Debug, Clone)]
pub struct TypeContext {
    /// Storage for all types, indexed by TypeId
    types: Vec<Arc<TypeSymbol>>,

    /// Reverse mapping from structural key to TypeId for interning
    key_to_id: FxHashMap<TypeKey, TypeId>,

    /// Canonical builtin types by source name
    builtins: FxHashMap<&'static str, TypeId>,

    /// Named type definitions registered by the compiler
    named_types: FxHashMap<String, TypeId>,

    /// Declared named objects still waiting for their definition
    pending: FxHashSet<TypeId>,
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeContext {
    /// Create a context holding the canonical builtin types
    pub fn new() -> Self {
        let mut ctx = TypeContext {
            types: Vec::new(),
            key_to_id: FxHashMap::default(),
            builtins: FxHashMap::default(),
            named_types: FxHashMap::default(),
            pending: FxHashSet::default(),
        };

        // Registration order must match the TypeId constants.
        let any = ctx.intern(TypeKey::Any, || TypeSymbol::Any);
        let string = ctx.primitive(PrimitiveType::String);
        let object = ctx.object_type(Vec::new(), Some(TypeId::ANY.into()));
        let int = ctx.primitive(PrimitiveType::Int);
        let bool = ctx.primitive(PrimitiveType::Bool);
        let array = ctx.intern(TypeKey::UntypedArray, || TypeSymbol::Array(ArrayType::untyped()));
        let null = ctx.primitive(PrimitiveType::Null);
        let resource = ctx.intern(TypeKey::ResourceReference, || TypeSymbol::ResourceReference);
        ctx.intern(TypeKey::Union(Vec::new()), || {
            TypeSymbol::Union(UnionType::new("never".to_string(), Vec::new()))
        });

        // Declares the description property but also allows any other property of any type
        ctx.named_object_type_with_flags(
            "ParameterModifierMetadata",
            vec![TypeProperty::with_flags(
                "description",
                TypeId::STRING,
                TypePropertyFlags::CONSTANT,
            )],
            Some(TypeId::ANY.into()),
            TypePropertyFlags::CONSTANT,
        );
        ctx.named_object_type("Tags", Vec::new(), Some(TypeId::STRING.into()));

        for (name, id) in [
            ("any", any),
            ("string", string),
            ("object", object),
            ("int", int),
            ("bool", bool),
            ("array", array),
            ("null", null),
            ("resource", resource),
        ] {
            ctx.builtins.insert(name, id);
        }

        debug_assert_eq!(ctx.types.len(), TypeId::TAGS.0 as usize + 1);
        ctx
    }

    fn primitive(&mut self, primitive: PrimitiveType) -> TypeId {
        self.intern(TypeKey::Primitive(primitive), || TypeSymbol::Primitive(primitive))
    }

    /// Intern a structurally keyed type, building it only on first use
    pub(crate) fn intern(&mut self, key: TypeKey, make: impl FnOnce() -> TypeSymbol) -> TypeId {
        if let Some(&id) = self.key_to_id.get(&key) {
            return id;
        }

        let id = self.push(make());
        self.key_to_id.insert(key, id);
        id
    }

    /// Intern an object when all of its edges are resolved, else store it
    fn intern_object(&mut self, symbol: TypeSymbol) -> TypeId {
        match TypeKey::object(&symbol) {
            Some(key) => self.intern(key, || symbol),
            None => self.push(symbol),
        }
    }

    /// Store a type without interning it
    pub(crate) fn push(&mut self, symbol: TypeSymbol) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        trace!(id = id.0, name = symbol.name(), kind = %symbol.kind(), "new type");
        self.types.push(Arc::new(symbol));
        id
    }

    /// Get a type by its TypeId
    pub fn get(&self, id: TypeId) -> Option<&TypeSymbol> {
        self.types.get(id.0 as usize).map(|arc| arc.as_ref())
    }

    /// Get a type by its TypeId
    ///
    /// # Panics
    ///
    /// Panics if the TypeId was not produced by this context
    pub fn get_unchecked(&self, id: TypeId) -> &TypeSymbol {
        self.types[id.0 as usize].as_ref()
    }

    /// Resolve a reference to its TypeId
    pub fn resolve(&self, reference: &TypeReference) -> TypeId {
        reference.resolve(self)
    }

    /// Resolve a reference to its type
    ///
    /// # Panics
    ///
    /// Panics if the reference resolves to a TypeId not produced by this
    /// context
    pub fn symbol_of(&self, reference: &TypeReference) -> &TypeSymbol {
        self.get_unchecked(self.resolve(reference))
    }

    /// Whether two references denote the same type
    pub fn same_type(&self, a: &TypeReference, b: &TypeReference) -> bool {
        self.resolve(a) == self.resolve(b)
    }

    /// Display name of a type
    ///
    /// # Panics
    ///
    /// Panics if the TypeId was not produced by this context
    pub fn name(&self, id: TypeId) -> &str {
        self.get_unchecked(id).name()
    }

    /// Kind of a type
    ///
    /// # Panics
    ///
    /// Panics if the TypeId was not produced by this context
    pub fn kind(&self, id: TypeId) -> TypeKind {
        self.get_unchecked(id).kind()
    }

    /// Get a display string for a type
    pub fn display(&self, id: TypeId) -> String {
        self.get(id)
            .map(|ty| ty.name().to_string())
            .unwrap_or_else(|| format!("InvalidType({})", id.0))
    }

    /// Look up a canonical builtin (`any`, `string`, `object`, `int`, `bool`,
    /// `array`, `null`, `resource`) by name
    pub fn lookup_builtin(&self, name: &str) -> Option<TypeId> {
        self.builtins.get(name).copied()
    }

    /// Canonical builtins ordered by id
    pub fn builtin_types(&self) -> Vec<(&'static str, TypeId)> {
        let mut builtins: Vec<_> = self.builtins.iter().map(|(&name, &id)| (name, id)).collect();
        builtins.sort_by_key(|&(_, id)| id);
        builtins
    }

    /// Look up a type allowed on parameter and output declarations
    pub fn declaration_type(&self, name: &str) -> Option<TypeId> {
        if DECLARATION_TYPE_NAMES.contains(&name) {
            self.lookup_builtin(name)
        } else {
            None
        }
    }

    /// Declaration types sorted by name
    pub fn declaration_types(&self) -> impl Iterator<Item = (&'static str, TypeId)> + '_ {
        DECLARATION_TYPE_NAMES
            .iter()
            .filter_map(move |&name| self.lookup_builtin(name).map(|id| (name, id)))
    }

    /// Declaration type names joined for diagnostics: `array, bool, int, object, string`
    pub fn declaration_types_string(&self) -> String {
        DECLARATION_TYPE_NAMES.join(LIST_SEPARATOR)
    }

    /// Register a named type so deferred references can find it
    pub fn register_named_type(&mut self, name: impl Into<String>, ty: TypeId) {
        self.named_types.insert(name.into(), ty);
    }

    /// Look up a named type by name
    pub fn lookup_named_type(&self, name: &str) -> Option<TypeId> {
        self.named_types.get(name).copied()
    }

    /// Resolve a named type, returning an error if not found
    pub fn resolve_named_type(&self, name: &str) -> Result<TypeId, TypeError> {
        self.lookup_named_type(name).ok_or_else(|| TypeError::UndefinedType {
            name: name.to_string(),
        })
    }

    /// Create a string literal type
    pub fn string_literal(&mut self, value: impl Into<String>) -> TypeId {
        let value = value.into();
        self.intern(TypeKey::StringLiteral(value.clone()), || {
            TypeSymbol::StringLiteral(StringLiteralType::new(value))
        })
    }

    /// Create an array type with an explicit item type, named `<item>[]`
    pub fn typed_array(&mut self, item: impl Into<TypeReference>) -> TypeId {
        let item: TypeReference = item.into();
        let item = self.resolve(&item);
        let item_name = self.display(item);
        self.intern(TypeKey::TypedArray(item), || {
            TypeSymbol::Array(ArrayType::typed(item, &item_name))
        })
    }

    /// Create an anonymous object type
    ///
    /// Objects with the same properties (in the same order) and the same
    /// additional properties share one id, unless an edge is deferred.
    pub fn object_type(
        &mut self,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties: Option<TypeReference>,
    ) -> TypeId {
        self.intern_object(TypeSymbol::Object(ObjectType::new(
            "object",
            properties,
            additional_properties,
            TypePropertyFlags::empty(),
        )))
    }

    /// Create a named object type
    pub fn named_object_type(
        &mut self,
        name: impl Into<String>,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties: Option<TypeReference>,
    ) -> TypeId {
        self.named_object_type_with_flags(
            name,
            properties,
            additional_properties,
            TypePropertyFlags::empty(),
        )
    }

    /// Create a named object type whose undeclared properties carry flags
    pub fn named_object_type_with_flags(
        &mut self,
        name: impl Into<String>,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties: Option<TypeReference>,
        additional_properties_flags: TypePropertyFlags,
    ) -> TypeId {
        self.intern_object(TypeSymbol::NamedObject(ObjectType::new(
            name,
            properties,
            additional_properties,
            additional_properties_flags,
        )))
    }

    /// Reserve an id for a named object so that it can be referenced,
    /// including by itself, before its properties exist
    ///
    /// The object always gets a fresh id; it is never interned.
    pub fn declare_named_object(&mut self, name: impl Into<String>) -> PendingObject {
        let id = self.push(TypeSymbol::NamedObject(ObjectType::new(
            name,
            Vec::new(),
            None,
            TypePropertyFlags::empty(),
        )));
        self.pending.insert(id);
        PendingObject { id }
    }

    /// Complete a declared named object in place
    ///
    /// Fails with `UndeclaredObject` if the token was not issued by this
    /// context (or a clone taken while the object was still pending).
    pub fn define_named_object(
        &mut self,
        pending: PendingObject,
        properties: impl IntoIterator<Item = TypeProperty>,
        additional_properties: Option<TypeReference>,
        additional_properties_flags: TypePropertyFlags,
    ) -> Result<TypeId, TypeError> {
        let id = pending.id;
        if !self.pending.remove(&id) {
            return Err(TypeError::UndeclaredObject { id: id.0 });
        }

        let name = self.name(id).to_string();
        self.types[id.0 as usize] = Arc::new(TypeSymbol::NamedObject(ObjectType::new(
            name,
            properties,
            additional_properties,
            additional_properties_flags,
        )));
        Ok(id)
    }

    /// Get the number of types in the context
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
