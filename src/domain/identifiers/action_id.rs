use serde::{Deserialize, Deserializer};

use crate::domain::AppError;
use crate::impl_validated_id;

use super::validation::validate_action_id;

/// Conventional actions generated when none are supplied.
pub const DEFAULT_ACTIONS: [&str; 4] = ["index", "edit", "new", "show"];

/// A validated controller action identifier (`index`, `show`, `bulk_edit`, ...).
///
/// The set is open: any `[a-z][a-z0-9_]*` identifier is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(String);

impl_validated_id!(ActionId, validate_action_id, AppError::InvalidAction);

impl ActionId {
    /// The conventional default action list.
    pub fn defaults() -> Vec<ActionId> {
        DEFAULT_ACTIONS.iter().map(|a| ActionId(a.to_string())).collect()
    }

    /// Parse a list of raw action names, failing on the first invalid one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<ActionId>, AppError> {
        raw.iter().map(|a| ActionId::new(a.as_ref())).collect()
    }
}

impl<'de> Deserialize<'de> for ActionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ActionId::new(&s).map_err(serde::de::Error::custom)
    }
}
