//! Language-wide constants shared by the parser, binder and type system

/// Maximum number of parameters in one file
pub const MAX_PARAMETER_COUNT: usize = 256;

/// Maximum length of an identifier
pub const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Separator used when listing names in diagnostics
pub const LIST_SEPARATOR: &str = ", ";

/// Parameter declaration keyword
pub const PARAMETER_KEYWORD: &str = "param";
/// Output declaration keyword
pub const OUTPUT_KEYWORD: &str = "output";
/// Variable declaration keyword
pub const VARIABLE_KEYWORD: &str = "var";
/// Resource declaration keyword
pub const RESOURCE_KEYWORD: &str = "resource";

/// Delimiter around string literals
pub const STRING_DELIMITER: &str = "'";
/// Opens an interpolation hole inside a string
pub const STRING_HOLE_OPEN: &str = "${";
/// Closes an interpolation hole
pub const STRING_HOLE_CLOSE: &str = "}";

/// Types allowed on parameter and output declarations, sorted by name
pub const DECLARATION_TYPE_NAMES: [&str; 5] = ["array", "bool", "int", "object", "string"];
