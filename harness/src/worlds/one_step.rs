//! `OneStep`: one action, applicable initially, reaches the goal.

use mrw_kernel::problem::compile::ProblemPayloadV1;

use super::{action, literals, strips};
use crate::contract::WorldV1;

pub struct OneStep;

impl WorldV1 for OneStep {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "one_step"
    }

    fn payload(&self) -> ProblemPayloadV1 {
        ProblemPayloadV1 {
            name: "one-step".into(),
            requirements: strips(),
            fluents: vec!["done".into()],
            init: Vec::new(),
            goal: literals(vec!["done".into()], Vec::new()),
            actions: vec![action("finish".into(), Vec::new(), vec!["done".into()], Vec::new())],
        }
    }
}
