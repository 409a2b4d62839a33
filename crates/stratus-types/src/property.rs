//! Object type properties and their flags

use crate::reference::TypeReference;
use bitflags::bitflags;

bitflags! {
    /// Flags describing how a property may be read and written.
    ///
    /// The type system only carries these; the binder and the printer
    /// decide what each combination means.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypePropertyFlags: u8 {
        /// Must be present in a declaration
        const REQUIRED = 1 << 0;
        /// Set by the platform, never by the author
        const READ_ONLY = 1 << 1;
        /// Accepted on input, never returned
        const WRITE_ONLY = 1 << 2;
        /// Value must be a compile-time constant
        const CONSTANT = 1 << 3;
        /// Not inlined when the owning object is printed
        const SKIP_INLINING = 1 << 4;
    }
}

impl TypePropertyFlags {
    /// Whether an author may ever assign this property
    pub fn is_user_writable(self) -> bool {
        !self.contains(Self::READ_ONLY)
    }

    /// Whether the property can be read back after deployment
    pub fn is_readable(self) -> bool {
        !self.contains(Self::WRITE_ONLY)
    }
}

/// A named, flagged field on an object type
#[derive(Debug, Clone)]
pub struct TypeProperty {
    name: String,
    type_reference: TypeReference,
    flags: TypePropertyFlags,
}

impl TypeProperty {
    /// Property with no flags
    pub fn new(name: impl Into<String>, type_reference: impl Into<TypeReference>) -> Self {
        Self::with_flags(name, type_reference, TypePropertyFlags::empty())
    }

    /// Property with the given flags
    pub fn with_flags(
        name: impl Into<String>,
        type_reference: impl Into<TypeReference>,
        flags: TypePropertyFlags,
    ) -> Self {
        Self {
            name: name.into(),
            type_reference: type_reference.into(),
            flags,
        }
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference to the property's type
    pub fn type_reference(&self) -> &TypeReference {
        &self.type_reference
    }

    /// Property flags
    pub fn flags(&self) -> TypePropertyFlags {
        self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeId;

    #[test]
    fn test_flags_are_independent() {
        let flags = TypePropertyFlags::READ_ONLY | TypePropertyFlags::SKIP_INLINING;
        assert!(flags.contains(TypePropertyFlags::READ_ONLY));
        assert!(flags.contains(TypePropertyFlags::SKIP_INLINING));
        assert!(!flags.contains(TypePropertyFlags::REQUIRED));
        assert!(!flags.is_user_writable());
        assert!(flags.is_readable());
    }

    #[test]
    fn test_write_only_is_not_readable() {
        let flags = TypePropertyFlags::WRITE_ONLY;
        assert!(flags.is_user_writable());
        assert!(!flags.is_readable());
        assert!(TypePropertyFlags::empty().is_user_writable());
    }

    #[test]
    fn test_property_defaults_to_no_flags() {
        let prop = TypeProperty::new("kind", TypeId::STRING);
        assert_eq!(prop.name(), "kind");
        assert_eq!(prop.flags(), TypePropertyFlags::empty());
        assert_eq!(prop.type_reference().as_resolved(), Some(TypeId::STRING));
    }
}
