//! `Stranded`: the only action needs a key that never appears, so every
//! walk dead-ends before its first step.

use mrw_kernel::problem::compile::ProblemPayloadV1;

use super::{action, literals, strips};
use crate::contract::WorldV1;

pub struct Stranded;

impl WorldV1 for Stranded {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "stranded"
    }

    fn payload(&self) -> ProblemPayloadV1 {
        ProblemPayloadV1 {
            name: "stranded".into(),
            requirements: strips(),
            fluents: vec!["have-key".into(), "door-open".into()],
            init: Vec::new(),
            goal: literals(vec!["door-open".into()], Vec::new()),
            actions: vec![action(
                "open-door".into(),
                vec!["have-key".into()],
                vec!["door-open".into()],
                Vec::new(),
            )],
        }
    }
}
