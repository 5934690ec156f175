//! `Gripper`: the classic two-room gripper benchmark, grounded.
//!
//! A robot with two grippers (`left`, `right`) must carry N balls from
//! `rooma` to `roomb`. Grounding yields `2 + 4N + 2` fluents and
//! `2 + 8N` actions. The shortest plan carries two balls per trip:
//! `2N` picks and drops plus `2·ceil(N/2) - 1` moves.

use mrw_kernel::problem::compile::ProblemPayloadV1;

use super::{action, literals, strips};
use crate::contract::{WorldError, WorldV1};

const ROOMS: [&str; 2] = ["rooma", "roomb"];
const GRIPPERS: [&str; 2] = ["left", "right"];

/// Gripper with `balls` balls.
#[derive(Debug, Clone)]
pub struct Gripper {
    id: String,
    balls: usize,
}

impl Gripper {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidParameter`] if `balls` is zero.
    pub fn new(balls: usize) -> Result<Self, WorldError> {
        if balls == 0 {
            return Err(WorldError::InvalidParameter {
                world: "gripper".into(),
                detail: "needs at least one ball".into(),
            });
        }
        Ok(Self {
            id: format!("gripper:{balls}"),
            balls,
        })
    }

    fn ball(i: usize) -> String {
        format!("ball{}", i + 1)
    }
}

fn at_robby(room: &str) -> String {
    format!("at-robby {room}")
}

fn at(ball: &str, room: &str) -> String {
    format!("at {ball} {room}")
}

fn free(gripper: &str) -> String {
    format!("free {gripper}")
}

fn carry(ball: &str, gripper: &str) -> String {
    format!("carry {ball} {gripper}")
}

impl WorldV1 for Gripper {
    fn world_id(&self) -> &str {
        &self.id
    }

    fn payload(&self) -> ProblemPayloadV1 {
        let balls: Vec<String> = (0..self.balls).map(Self::ball).collect();

        let mut fluents: Vec<String> = ROOMS.iter().map(|r| at_robby(r)).collect();
        fluents.extend(GRIPPERS.iter().map(|g| free(g)));
        for b in &balls {
            fluents.extend(ROOMS.iter().map(|r| at(b, r)));
            fluents.extend(GRIPPERS.iter().map(|g| carry(b, g)));
        }

        let mut init = vec![at_robby("rooma")];
        init.extend(GRIPPERS.iter().map(|g| free(g)));
        init.extend(balls.iter().map(|b| at(b, "rooma")));

        let goal = balls.iter().map(|b| at(b, "roomb")).collect();

        let mut actions = Vec::new();
        for from in ROOMS {
            for to in ROOMS.iter().filter(|&&to| to != from) {
                actions.push(action(
                    format!("move {from} {to}"),
                    vec![at_robby(from)],
                    vec![at_robby(to)],
                    vec![at_robby(from)],
                ));
            }
        }
        for b in &balls {
            for room in ROOMS {
                for g in GRIPPERS {
                    actions.push(action(
                        format!("pick {b} {room} {g}"),
                        vec![at(b, room), at_robby(room), free(g)],
                        vec![carry(b, g)],
                        vec![at(b, room), free(g)],
                    ));
                    actions.push(action(
                        format!("drop {b} {room} {g}"),
                        vec![carry(b, g), at_robby(room)],
                        vec![at(b, room), free(g)],
                        vec![carry(b, g)],
                    ));
                }
            }
        }

        ProblemPayloadV1 {
            name: format!("gripper-{}", self.balls),
            requirements: strips(),
            fluents,
            init,
            goal: literals(goal, Vec::new()),
            actions,
        }
    }
}
