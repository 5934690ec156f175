//! `ActionRegistryV1`: the ordered, stable action catalog of a problem.
//!
//! Maps [`ActionId`] (list position) to [`ActionV1`] and names back to ids.
//! Order is the declaration order of the problem payload and never changes
//! for the lifetime of a search, so `ActionId` values are stable handles.
//! Content-addressed via canonical JSON for inclusion in problem digests.

use std::collections::BTreeMap;

use crate::operators::action::{ActionId, ActionV1};
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Error type for action registry construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two actions share the same grounded name.
    #[error("duplicate action name in registry: {name}")]
    DuplicateName { name: String },
    /// More actions than an `ActionId` can address.
    #[error("action registry too large: {count} actions")]
    TooManyActions { count: usize },
}

/// Ordered action catalog with name lookup.
#[derive(Debug, Clone)]
pub struct ActionRegistryV1 {
    actions: Vec<ActionV1>,
    by_name: BTreeMap<String, ActionId>,
}

impl ActionRegistryV1 {
    /// Build a registry preserving the order of `actions`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if two actions share a name,
    /// or [`RegistryError::TooManyActions`] if the list cannot be addressed
    /// by `u32` ids.
    pub fn new(actions: Vec<ActionV1>) -> Result<Self, RegistryError> {
        if u32::try_from(actions.len()).is_err() {
            return Err(RegistryError::TooManyActions {
                count: actions.len(),
            });
        }
        let mut by_name = BTreeMap::new();
        for (i, action) in actions.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let id = ActionId(i as u32);
            if by_name.insert(action.name().to_string(), id).is_some() {
                return Err(RegistryError::DuplicateName {
                    name: action.name().to_string(),
                });
            }
        }
        Ok(Self { actions, by_name })
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Look up by handle.
    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&ActionV1> {
        self.actions.get(id.index())
    }

    /// Look up a handle by grounded name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ActionId> {
        self.by_name.get(name).copied()
    }

    /// All actions in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[ActionV1] {
        &self.actions
    }

    /// `(ActionId, &ActionV1)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &ActionV1)> {
        self.actions.iter().enumerate().map(|(i, a)| {
            #[allow(clippy::cast_possible_truncation)]
            let id = ActionId(i as u32);
            (id, a)
        })
    }

    /// Canonical JSON: `{"actions":[{"add":[..],"del":[..],"name":..,"neg":[..],"pos":[..]}, ..]}`
    /// with fluents as indices.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        let actions: Vec<serde_json::Value> = self
            .actions
            .iter()
            .map(|a| {
                serde_json::json!({
                    "name": a.name(),
                    "pos": a.precondition().positive().iter().collect::<Vec<_>>(),
                    "neg": a.precondition().negative().iter().collect::<Vec<_>>(),
                    "add": a.effect().add().iter().collect::<Vec<_>>(),
                    "del": a.effect().delete().iter().collect::<Vec<_>>(),
                })
            })
            .collect();
        canonical_json_bytes(&serde_json::json!({ "actions": actions }))
    }

    /// Digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::ActionRegistry,
            &self.to_canonical_json_bytes()?,
        ))
    }
}
