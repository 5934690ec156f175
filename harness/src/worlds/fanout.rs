//! `Fanout`: every state offers `width` no-op actions next to a three-key
//! chain that reaches the goal.
//!
//! More than 1000 applicable actions per step pushes the average branching
//! factor past the helpful-bias threshold. The key chain keeps the goal
//! reachable but rare.

use mrw_kernel::problem::compile::ProblemPayloadV1;

use super::{action, literals, strips};
use crate::contract::{WorldError, WorldV1};

const KEYS: usize = 3;

#[derive(Debug, Clone)]
pub struct Fanout {
    id: String,
    width: usize,
}

impl Fanout {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameter`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self, WorldError> {
        if width == 0 {
            return Err(WorldError::InvalidParameter {
                world: "fanout".into(),
                detail: "needs at least one no-op action".into(),
            });
        }
        Ok(Self {
            id: format!("fanout:{width}"),
            width,
        })
    }
}

fn key(i: usize) -> String {
    format!("key{i}")
}

impl WorldV1 for Fanout {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn payload(&self) -> ProblemPayloadV1 {
        let fluents = (1..=KEYS).map(key).collect();

        let mut actions: Vec<_> = (1..=KEYS)
            .map(|i| {
                let pre = if i == 1 { Vec::new() } else { vec![key(i - 1)] };
                action(format!("turn {}", key(i)), pre, vec![key(i)], Vec::new())
            })
            .collect();
        actions.extend(
            (0..self.width).map(|i| action(format!("idle {i}"), Vec::new(), Vec::new(), Vec::new())),
        );

        ProblemPayloadV1 {
            name: format!("fanout-{}", self.width),
            requirements: strips(),
            fluents,
            init: Vec::new(),
            goal: literals(vec![key(KEYS)], Vec::new()),
            actions,
        }
    }
}
