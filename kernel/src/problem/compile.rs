//! Compilation boundary: `compile(payload) -> ProblemV1`.
//!
//! `compile()` turns a grounded JSON problem payload into a [`ProblemV1`].
//! It is a pure function: identical inputs produce identical problems and
//! identical digests. Fluents are referenced by name in the payload and
//! resolved to indices here; every reference must resolve (fail-closed).
//!
//! # Payload format
//!
//! ```json
//! {
//!   "name": "one-step",
//!   "requirements": [":strips"],
//!   "fluents": ["done"],
//!   "init": [],
//!   "goal": {"positive": ["done"], "negative": []},
//!   "actions": [{"name": "finish", "pre": {"positive": [], "negative": []},
//!                "add": ["done"], "del": []}]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::carrier::condition::{ConditionV1, EffectV1};
use crate::carrier::fluent_set::FluentSet;
use crate::carrier::state::StateV1;
use crate::operators::action::ActionV1;
use crate::operators::action_registry::{ActionRegistryV1, RegistryError};
use crate::problem::problem::ProblemV1;
use crate::problem::requirement::Requirement;
use crate::proof::canon::to_canonical_json_bytes;
use crate::proof::hash::{canonical_hash, HashDomain};

/// A set of literals by fluent name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralsPayloadV1 {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// One grounded action in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionPayloadV1 {
    pub name: String,
    #[serde(default)]
    pub pre: LiteralsPayloadV1,
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub del: Vec<String>,
}

/// The grounded problem payload accepted by [`compile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemPayloadV1 {
    pub name: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub fluents: Vec<String>,
    #[serde(default)]
    pub init: Vec<String>,
    #[serde(default)]
    pub goal: LiteralsPayloadV1,
    #[serde(default)]
    pub actions: Vec<ActionPayloadV1>,
}

impl ProblemPayloadV1 {
    /// Serialize to JSON bytes suitable for [`compile`].
    ///
    /// # Errors
    ///
    /// Returns [`CompilationFailure::InvalidPayload`] if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CompilationFailure> {
        serde_json::to_vec(self).map_err(|e| CompilationFailure::InvalidPayload {
            detail: e.to_string(),
        })
    }
}

/// Typed compilation failure. Fail-closed: no partial problem is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompilationFailure {
    /// Payload is not valid JSON or does not match the payload schema.
    #[error("invalid problem payload: {detail}")]
    InvalidPayload { detail: String },
    /// A fluent name is declared twice.
    #[error("duplicate fluent: {name}")]
    DuplicateFluent { name: String },
    /// A literal references a fluent that is not declared.
    #[error("unknown fluent {name:?} in {context}")]
    UnknownFluent { name: String, context: String },
    /// A requirement key is not a PDDL requirement.
    #[error("unknown requirement key: {key}")]
    UnknownRequirement { key: String },
    /// The action list could not be registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Digest computation failed.
    #[error("problem digest failed: {detail}")]
    DigestFailed { detail: String },
}

/// Result type for compilation.
pub type CompileResult = Result<ProblemV1, CompilationFailure>;

/// Compile a JSON problem payload into a [`ProblemV1`].
///
/// # Errors
///
/// Returns [`CompilationFailure`] on malformed JSON, duplicate fluents,
/// unresolved fluent references, unknown requirement keys or duplicate
/// action names.
pub fn compile(payload_bytes: &[u8]) -> CompileResult {
    let payload: ProblemPayloadV1 =
        serde_json::from_slice(payload_bytes).map_err(|e| CompilationFailure::InvalidPayload {
            detail: e.to_string(),
        })?;
    compile_payload(&payload)
}

/// Compile an already-parsed payload.
///
/// # Errors
///
/// See [`compile`].
pub fn compile_payload(payload: &ProblemPayloadV1) -> CompileResult {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    for (i, name) in payload.fluents.iter().enumerate() {
        if index.insert(name.as_str(), i).is_some() {
            return Err(CompilationFailure::DuplicateFluent { name: name.clone() });
        }
    }
    let fluent_count = payload.fluents.len();
    let resolve = |names: &[String], context: &str| -> Result<FluentSet, CompilationFailure> {
        let mut set = FluentSet::new(fluent_count);
        for name in names {
            let i = index
                .get(name.as_str())
                .ok_or_else(|| CompilationFailure::UnknownFluent {
                    name: name.clone(),
                    context: context.to_string(),
                })?;
            set.insert(*i);
        }
        Ok(set)
    };

    let mut requirements = BTreeSet::new();
    for key in &payload.requirements {
        let req = Requirement::parse(key)
            .ok_or_else(|| CompilationFailure::UnknownRequirement { key: key.clone() })?;
        requirements.insert(req);
    }

    let initial_state = StateV1::from_fluents(resolve(&payload.init, "init")?);
    let goal = ConditionV1::new(
        resolve(&payload.goal.positive, "goal")?,
        resolve(&payload.goal.negative, "goal")?,
    );

    let mut actions = Vec::with_capacity(payload.actions.len());
    for action in &payload.actions {
        let context = format!("action {:?}", action.name);
        let precondition = ConditionV1::new(
            resolve(&action.pre.positive, &context)?,
            resolve(&action.pre.negative, &context)?,
        );
        let effect = EffectV1::new(resolve(&action.add, &context)?, resolve(&action.del, &context)?);
        actions.push(ActionV1::new(action.name.clone(), precondition, effect));
    }
    let actions = ActionRegistryV1::new(actions)?;

    let canonical =
        to_canonical_json_bytes(payload).map_err(|e| CompilationFailure::DigestFailed {
            detail: e.to_string(),
        })?;
    let digest = canonical_hash(HashDomain::ProblemPayload, &canonical);

    Ok(ProblemV1 {
        name: payload.name.clone(),
        fluent_names: payload.fluents.clone(),
        actions,
        initial_state,
        goal,
        requirements,
        digest,
    })
}
