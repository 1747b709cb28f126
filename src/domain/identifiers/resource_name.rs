use crate::domain::AppError;
use crate::impl_validated_id;

use super::validation::validate_resource_name;

/// A validated resource name, exactly as supplied by the user.
///
/// Guarantees:
/// - Non-empty and starts with an ASCII letter
/// - Contains only ASCII alphanumerics, `-`, or `_`
/// - No path separators or traversal components
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl_validated_id!(ResourceName, validate_resource_name, AppError::InvalidResourceName);
