//! Built-in lints.

mod duplicate_method;
mod empty_fields;
mod unknown_field_type;
mod unsupported_method;

pub use duplicate_method::DuplicateMethodLint;
pub use empty_fields::EmptyFieldsLint;
pub use unknown_field_type::UnknownFieldTypeLint;
pub use unsupported_method::UnsupportedMethodLint;
