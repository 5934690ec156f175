//! World contract: the minimal trait a world must implement.
//!
//! Worlds provide domain data only: an identifier and a grounded problem
//! payload. Worlds may NOT run searches, validate plans or write results;
//! those are runner concerns.

use mrw_kernel::problem::compile::ProblemPayloadV1;
use mrw_kernel::proof::canon::to_canonical_json_bytes;

/// Typed failure for world construction and encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// Payload encoding failed.
    #[error("world payload encoding failed: {detail}")]
    EncodeFailure { detail: String },
    /// No world is registered under this name.
    #[error("unknown world: {name}")]
    UnknownWorld { name: String },
    /// The world spec parameter is malformed or out of range.
    #[error("invalid parameter for world {world}: {detail}")]
    InvalidParameter { world: String, detail: String },
}

/// The contract a world must implement to be run by the harness runner.
pub trait WorldV1 {
    /// Unique world identifier including parameters (e.g., `"gripper:4"`).
    fn world_id(&self) -> &str;

    /// The grounded problem payload.
    fn payload(&self) -> ProblemPayloadV1;

    /// Encode the payload as canonical JSON bytes for `compile()`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EncodeFailure`] if encoding fails.
    fn encode_payload(&self) -> Result<Vec<u8>, WorldError> {
        to_canonical_json_bytes(&self.payload()).map_err(|e| WorldError::EncodeFailure {
            detail: e.to_string(),
        })
    }
}
