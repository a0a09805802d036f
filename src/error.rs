use thiserror::Error;

macro_rules! configuration_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Configuration {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Configuration {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure this crate reports happens while an [`crate::EnumValues`] table is being
/// constructed. Once a table exists, none of its accessors can fail.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::Configuration`] - The type is not an enum, or its constants cannot be determined
/// - [`Error::ContractViolation`] - A caller-supplied parallel list has the wrong length
///
/// ## Collaborator Errors
/// - [`Error::Naming`] - Raised by naming strategies or override providers, passed through as-is
/// - [`Error::UnknownFeature`] - A feature name in [`crate::config::FeatureSettings`] is not known
///
/// # Examples
///
/// ```rust
/// use enumvalues::{Error, EnumValues, MapperConfig, TypeDescriptor};
///
/// let config = MapperConfig::default();
/// let not_an_enum = TypeDescriptor::class("demo", "Point");
///
/// match EnumValues::construct(&config, &not_an_enum) {
///     Ok(_) => unreachable!(),
///     Err(Error::Configuration { message, .. }) => println!("Bad type: {}", message),
///     Err(e) => println!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied type descriptor can not be used to build an enum value table.
    ///
    /// Raised when the descriptor does not describe an enumerated type, when the type has no
    /// constants, or when a snapshot is restored against a different type. The error includes
    /// the source location where the problem was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the problem
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Configuration - {file}:{line}: {message}")]
    Configuration {
        /// The message to be printed for the Configuration error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A caller-supplied list does not line up with the constants of the type.
    ///
    /// Explicit external names, precompiled tokens and override provider output must all
    /// contain exactly one entry per constant, in ordinal order.
    #[error("Contract violation - {context}: expected {expected} entries, got {actual}")]
    ContractViolation {
        /// Which input was mismatched
        context: &'static str,
        /// Number of constants of the enumerated type
        expected: usize,
        /// Number of entries that were supplied
        actual: usize,
    },

    /// Failure reported by a naming strategy or an override provider.
    ///
    /// The resolver never creates this variant itself; it only forwards what user-supplied
    /// collaborators return.
    #[error("{0}")]
    Naming(String),

    /// A feature name could not be mapped to a known [`crate::config::EnumFeature`].
    #[error("Unknown enum feature - {0}")]
    UnknownFeature(String),
}
