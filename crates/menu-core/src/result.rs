//! Result type aliases.

use crate::MenuError;

/// A specialized `Result` type for menu service operations.
pub type MenuResult<T> = Result<T, MenuError>;
