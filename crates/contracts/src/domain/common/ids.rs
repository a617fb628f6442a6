use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for entity identifier newtypes.
///
/// Every id in the wire contracts is a uuid wrapped in its own type so a
/// `PlanId` can never be passed where a `LocationId` is expected.
pub trait EntityId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id the way it appears in URLs and JSON.
    fn as_string(&self) -> String;

    /// Parse an id from its string form.
    fn from_string(s: &str) -> Result<Self, String>;
}
