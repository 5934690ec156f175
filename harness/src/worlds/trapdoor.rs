//! `Trapdoor`: a corridor where every cell also has a trapdoor.
//!
//! From cell `i` the walker may `advance` to `i + 1` or `fall` through the
//! trapdoor. After a fall nothing is applicable. Pure random walks reach
//! the end with probability `2^-L`, so dead ends dominate and dead-end
//! avoidance latches at the first activation check.

use mrw_kernel::problem::compile::ProblemPayloadV1;

use super::{action, literals};
use crate::contract::{WorldError, WorldV1};

#[derive(Debug, Clone)]
pub struct Trapdoor {
    id: String,
    length: usize,
}

impl Trapdoor {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameter`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, WorldError> {
        if length == 0 {
            return Err(WorldError::InvalidParameter {
                world: "trapdoor".into(),
                detail: "corridor needs at least one cell".into(),
            });
        }
        Ok(Self {
            id: format!("trapdoor:{length}"),
            length,
        })
    }
}

fn cell(i: usize) -> String {
    format!("at c{i}")
}

impl WorldV1 for Trapdoor {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn payload(&self) -> ProblemPayloadV1 {
        let mut fluents: Vec<String> = (0..=self.length).map(cell).collect();
        fluents.push("fallen".into());

        let mut actions = Vec::with_capacity(2 * self.length);
        for i in 0..self.length {
            actions.push(action(
                format!("advance c{i} c{}", i + 1),
                vec![cell(i)],
                vec![cell(i + 1)],
                vec![cell(i)],
            ));
            actions.push(action(
                format!("fall c{i}"),
                vec![cell(i)],
                vec!["fallen".into()],
                vec![cell(i)],
            ));
        }

        ProblemPayloadV1 {
            name: format!("trapdoor-{}", self.length),
            requirements: vec![":strips".into(), ":negative-preconditions".into()],
            fluents,
            init: vec![cell(0)],
            goal: literals(vec![cell(self.length)], vec!["fallen".into()]),
            actions,
        }
    }
}
