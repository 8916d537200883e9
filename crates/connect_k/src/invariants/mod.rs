//! First-class invariants for connect-K.
//!
//! Invariants are logical properties that must hold throughout a game.
//! The engine checks them in debug builds after every state change, and
//! they are testable on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod index_matches_id;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use index_matches_id::IndexMatchesIdInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    IndexMatchesIdInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, GameConfig, Mark};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = Game::default();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_undo() {
        let mut game = Game::replay(GameConfig::new(5, 4).unwrap(), &[12, 6, 7, 18]).unwrap();
        game.undo();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::replay(GameConfig::TIC_TAC_TOE, &[4]).unwrap();
        // An O without a history entry breaks both history and turn order.
        game.board_mut().set_content(0, Some(Mark::O));
        game.board_mut().set_content(1, Some(Mark::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (IndexMatchesIdInvariant, HistoryConsistentInvariant);
        assert!(TwoInvariants::check_all(&Game::default()).is_ok());
    }
}
