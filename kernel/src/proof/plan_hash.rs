//! Plan digests: a hash chain over grounded action names.
//!
//! `chain_0 = H(PlanStepChain, problem_digest)`
//! `chain_i = H(PlanStepChain, chain_{i-1} || H(PlanStep, name_i))`
//!
//! Names rather than ids are hashed so a plan digest survives action
//! reordering in the payload as long as the problem digest does.

use crate::operators::action::ActionId;
use crate::problem::problem::ProblemV1;
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Digest of `plan` under `problem`.
#[must_use]
pub fn plan_digest(problem: &ProblemV1, plan: &[ActionId]) -> ContentHash {
    let mut chain = canonical_hash(
        HashDomain::PlanStepChain,
        problem.digest().as_str().as_bytes(),
    );
    for name in problem.action_names(plan) {
        let step = canonical_hash(HashDomain::PlanStep, name.as_bytes());
        let mut buf = chain.digest_bytes();
        buf.extend_from_slice(&step.digest_bytes());
        chain = canonical_hash(HashDomain::PlanStepChain, &buf);
    }
    chain
}
