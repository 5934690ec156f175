//! World implementations for the harness runner.
//!
//! Every world builds its payload with the helpers below so fluent and
//! action names follow one convention: space-separated PDDL-style atoms
//! such as `"at ball1 rooma"`.

pub mod fanout;
pub mod gripper;
pub mod one_step;
pub mod stranded;
pub mod trapdoor;

use mrw_kernel::problem::compile::{ActionPayloadV1, LiteralsPayloadV1};

use crate::contract::{WorldError, WorldV1};

/// Resolve a world spec `name[:param]`.
///
/// | spec            | world                                  |
/// |-----------------|----------------------------------------|
/// | `gripper[:N]`   | N balls (default 4)                    |
/// | `one_step`      | single goal-reaching action            |
/// | `stranded`      | nothing applicable in the initial state |
/// | `trapdoor[:L]`  | corridor of L cells (default 12)       |
/// | `fanout[:W]`    | W no-op actions per state (default 1200) |
///
/// # Errors
///
/// Returns [`WorldError::UnknownWorld`] for an unknown name and
/// [`WorldError::InvalidParameter`] for a bad or unexpected parameter.
pub fn world_by_name(spec: &str) -> Result<Box<dyn WorldV1>, WorldError> {
    let (name, param) = match spec.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (spec, None),
    };
    let parse = |default: usize| -> Result<usize, WorldError> {
        param.map_or(Ok(default), |p| {
            p.parse::<usize>().map_err(|e| WorldError::InvalidParameter {
                world: name.into(),
                detail: format!("{p:?}: {e}"),
            })
        })
    };
    let no_param = || -> Result<(), WorldError> {
        param.map_or(Ok(()), |p| {
            Err(WorldError::InvalidParameter {
                world: name.into(),
                detail: format!("takes no parameter, got {p:?}"),
            })
        })
    };
    match name {
        "gripper" => Ok(Box::new(gripper::Gripper::new(parse(4)?)?)),
        "one_step" => {
            no_param()?;
            Ok(Box::new(one_step::OneStep))
        }
        "stranded" => {
            no_param()?;
            Ok(Box::new(stranded::Stranded))
        }
        "trapdoor" => Ok(Box::new(trapdoor::Trapdoor::new(parse(12)?)?)),
        "fanout" => Ok(Box::new(fanout::Fanout::new(parse(1200)?)?)),
        _ => Err(WorldError::UnknownWorld { name: spec.into() }),
    }
}

pub(crate) fn literals(positive: Vec<String>, negative: Vec<String>) -> LiteralsPayloadV1 {
    LiteralsPayloadV1 { positive, negative }
}

pub(crate) fn action(
    name: String,
    pre: Vec<String>,
    add: Vec<String>,
    del: Vec<String>,
) -> ActionPayloadV1 {
    ActionPayloadV1 {
        name,
        pre: literals(pre, Vec::new()),
        add,
        del,
    }
}

pub(crate) fn strips() -> Vec<String> {
    vec![":strips".to_string()]
}
