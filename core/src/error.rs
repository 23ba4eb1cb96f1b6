//! # Error Handling
//!
//! Provides the unified `FormatterError` enum used across the crate.
//!
//! "No codec found" is not an error: resolvers return `Option::None` for it.

use derive_more::{Display, From};

/// The crate-wide error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum FormatterError {
    /// Wrapper for IO errors raised by codecs while reading or writing payloads.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// A required input was absent. Carries the name of the missing argument.
    #[from(ignore)]
    #[display("Invalid argument: '{_0}' cannot be absent")]
    InvalidArgument(&'static str),

    /// A collection wrapper was built over a collection type with the wrong element kind.
    #[from(ignore)]
    #[display(
        "The element type '{element}' of the given collection type '{collection}' is not of the type '{expected}'."
    )]
    UnexpectedElementType {
        /// Full name of the offending element type.
        element: String,
        /// Full name of the collection type supplied.
        collection: String,
        /// Name of the element kind that was expected.
        expected: &'static str,
    },

    /// A type of one kind was supplied where another kind is required.
    #[from(ignore)]
    #[display("The type '{actual}' is not of the type '{expected}'.")]
    UnexpectedTypeKind {
        /// Full name of the supplied type.
        actual: String,
        /// Name of the kind that was expected.
        expected: &'static str,
    },

    /// A collection type was required but a non-collection type was supplied.
    #[from(ignore)]
    #[display("The type '{_0}' is not a collection type.")]
    ExpectedCollectionType(String),

    /// A type binding referenced a schema type the model does not declare.
    #[from(ignore)]
    #[display("Unknown schema type: '{_0}'")]
    UnknownSchemaType(String),

    /// Path text could not be split into segments.
    #[from(ignore)]
    #[display("Invalid OData path: {_0}")]
    InvalidPath(String),

    /// A schema declaration document could not be loaded.
    #[from(ignore)]
    #[display("Model Error: {_0}")]
    ModelLoad(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for FormatterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatterError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Helper type alias for Result using FormatterError.
pub type FormatterResult<T> = Result<T, FormatterError>;
