//! Result projection and the top-level `solve` operation.

use crate::core::{Step, Volume};
use crate::search::Solver;
use serde::{Deserialize, Serialize};

/// One step of a solution as reported to callers.
///
/// `x` and `y` are the bucket levels after the action named by `title`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub x: Volume,
    pub y: Volume,
    pub title: String,
}

impl From<&Step> for SolutionStep {
    fn from(step: &Step) -> Self {
        Self {
            x: step.to.x,
            y: step.to.y,
            title: step.action.title().to_string(),
        }
    }
}

/// Convert search steps into output records, preserving order.
pub fn project(steps: &[Step]) -> Vec<SolutionStep> {
    steps.iter().map(SolutionStep::from).collect()
}

/// Find the shortest sequence of bucket operations that leaves `target`
/// units in either bucket.
///
/// Returns `None` for invalid input (no capacity, non-positive target,
/// target larger than both buckets) and for unreachable targets.
///
/// # Example
///
/// ```rust
/// let steps = twojug::solve(4, 3, 2).unwrap();
///
/// assert_eq!(steps.len(), 4);
/// assert_eq!((steps[3].x, steps[3].y), (4, 2));
/// assert!(twojug::solve(6, 4, 8).is_none());
/// ```
pub fn solve(x_capacity: i64, y_capacity: i64, target: i64) -> Option<Vec<SolutionStep>> {
    Solver::default().solve(x_capacity, y_capacity, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, JugState};

    #[test]
    fn step_projects_resulting_state_and_title() {
        let step = Step {
            from: JugState::new(0, 3),
            to: JugState::new(3, 0),
            action: Action::TransferYToX,
        };
        let projected = SolutionStep::from(&step);

        assert_eq!(projected.x, 3);
        assert_eq!(projected.y, 0);
        assert_eq!(projected.title, "Transfer bucket Y to bucket X");
    }

    #[test]
    fn project_keeps_order() {
        let steps = vec![
            Step {
                from: JugState::ORIGIN,
                to: JugState::new(4, 0),
                action: Action::FillX,
            },
            Step {
                from: JugState::new(4, 0),
                to: JugState::new(1, 3),
                action: Action::TransferXToY,
            },
        ];

        let titles: Vec<_> = project(&steps).into_iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Fill bucket X", "Transfer bucket X to bucket Y"]);
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn solution_step_serializes_as_record() {
        let step = SolutionStep {
            x: 0,
            y: 5,
            title: "Fill bucket Y".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert_eq!(json, r#"{"x":0,"y":5,"title":"Fill bucket Y"}"#);
    }

    #[test]
    fn solve_uses_exhaustive_defaults() {
        let steps = solve(0, 5, 5).unwrap();
        assert_eq!(
            steps,
            vec![SolutionStep {
                x: 0,
                y: 5,
                title: "Fill bucket Y".to_string(),
            }]
        );
    }
}
