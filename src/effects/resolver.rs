//! Square effect resolution.
//!
//! Two entry points, both exhaustive over `SquareType`:
//! - `resolve_pass_through`: the restricted subset applied to squares a
//!   player moves over (PROMOTION and PAYDAY only)
//! - `resolve_landing`: the full table, applied once to the square the
//!   player stops on

use serde::{Deserialize, Serialize};

use super::bonus::PassThroughBonus;
use crate::board::{Square, SquareType};
use crate::core::{Career, Player};

/// PROJECT_SUCCESS pays this much per square index.
pub const PROJECT_SUCCESS_RATE: i64 = 10_000;

/// TROUBLE costs this much per square index.
pub const TROUBLE_RATE: i64 = 5_000;

/// Flat TRAINING fee.
pub const TRAINING_FEE: i64 = 50_000;

/// One-time MARRIAGE cost.
pub const WEDDING_COST: i64 = 50_000;

/// Fixed bonuses on specific NORMAL squares: (square id, amount).
pub const NORMAL_SQUARE_BONUSES: &[(usize, i64)] = &[(1, 20_000), (15, 100_000)];

/// What a landing did to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingEffect {
    pub square_id: usize,
    pub square_type: SquareType,
    /// Net money change.
    pub money_delta: i64,
    pub career_before: Career,
    pub career_after: Career,
    /// True if this landing performed the marriage.
    pub married: bool,
}

impl LandingEffect {
    fn unchanged(square: &Square, career: Career) -> Self {
        Self {
            square_id: square.id,
            square_type: square.square_type,
            money_delta: 0,
            career_before: career,
            career_after: career,
            married: false,
        }
    }

    /// True if the landing changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.money_delta == 0 && self.career_before == self.career_after && !self.married
    }
}

/// Apply the pass-through subset of `square`'s effect.
///
/// Returns a notice when the square awarded something.
pub fn resolve_pass_through(player: &mut Player, square: &Square) -> Option<PassThroughBonus> {
    match square.square_type {
        SquareType::Promotion => {
            player.career = player.career.promoted();
            Some(PassThroughBonus::promotion(square.id, &square.label, player.career))
        }
        SquareType::Payday => {
            let salary = player.salary();
            player.money += salary;
            Some(PassThroughBonus::payday(square.id, &square.label, salary, player.career))
        }
        SquareType::Start
        | SquareType::ProjectSuccess
        | SquareType::Stop
        | SquareType::Training
        | SquareType::Normal
        | SquareType::Marriage
        | SquareType::Trouble
        | SquareType::Goal => None,
    }
}

/// Apply the full landing effect of `square`.
pub fn resolve_landing(player: &mut Player, square: &Square) -> LandingEffect {
    let mut effect = LandingEffect::unchanged(square, player.career);

    match square.square_type {
        SquareType::Payday => {
            effect.money_delta = player.salary();
        }
        SquareType::Promotion => {
            player.career = player.career.promoted();
        }
        SquareType::ProjectSuccess => {
            effect.money_delta = square.scale() * PROJECT_SUCCESS_RATE;
        }
        SquareType::Training => {
            effect.money_delta = -TRAINING_FEE;
        }
        SquareType::Trouble => {
            effect.money_delta = -(square.scale() * TROUBLE_RATE);
        }
        SquareType::Marriage => {
            if !player.is_married {
                player.is_married = true;
                effect.married = true;
                effect.money_delta = -WEDDING_COST;
            }
        }
        SquareType::Normal => {
            effect.money_delta = NORMAL_SQUARE_BONUSES
                .iter()
                .find(|(id, _)| *id == square.id)
                .map_or(0, |&(_, amount)| amount);
        }
        SquareType::Goal => {
            player.career = Career::CEILING;
        }
        SquareType::Start | SquareType::Stop => {}
    }

    player.money += effect.money_delta;
    effect.career_after = player.career;
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::PlayerId;

    fn player() -> Player {
        Player::new(PlayerId::new(0), "Test", 100_000)
    }

    fn square(id: usize, square_type: SquareType) -> Square {
        Square::new(id, square_type, "sq", "", 10)
    }

    #[test]
    fn test_landing_payday_uses_current_career() {
        let mut p = player();
        p.career = Career::Manager;

        let effect = resolve_landing(&mut p, &square(9, SquareType::Payday));

        assert_eq!(effect.money_delta, 1_500_000);
        assert_eq!(p.money, 1_600_000);
        assert_eq!(p.career, Career::Manager);
    }

    #[test]
    fn test_landing_promotion() {
        let mut p = player();
        let effect = resolve_landing(&mut p, &square(6, SquareType::Promotion));

        assert_eq!(p.career, Career::Consultant);
        assert_eq!(p.money, 100_000);
        assert_eq!(effect.career_before, Career::Analyst);
        assert_eq!(effect.career_after, Career::Consultant);
    }

    #[test]
    fn test_landing_promotion_at_ceiling() {
        let mut p = player();
        p.career = Career::President;
        let effect = resolve_landing(&mut p, &square(6, SquareType::Promotion));

        assert_eq!(p.career, Career::President);
        assert!(effect.is_noop());
    }

    #[test]
    fn test_landing_project_success_scales_with_id() {
        let mut p = player();
        resolve_landing(&mut p, &square(7, SquareType::ProjectSuccess));
        assert_eq!(p.money, 170_000);
    }

    #[test]
    fn test_landing_training() {
        let mut p = player();
        resolve_landing(&mut p, &square(8, SquareType::Training));
        assert_eq!(p.money, 50_000);
    }

    #[test]
    fn test_landing_trouble_can_go_negative() {
        let mut p = player();
        let effect = resolve_landing(&mut p, &square(58, SquareType::Trouble));
        assert_eq!(effect.money_delta, -290_000);
        assert_eq!(p.money, -190_000);
    }

    #[test]
    fn test_landing_marriage_once() {
        let mut p = player();

        let first = resolve_landing(&mut p, &square(17, SquareType::Marriage));
        assert!(first.married);
        assert!(p.is_married);
        assert_eq!(p.money, 50_000);

        let second = resolve_landing(&mut p, &square(17, SquareType::Marriage));
        assert!(!second.married);
        assert!(second.is_noop());
        assert_eq!(p.money, 50_000);
    }

    #[test]
    fn test_landing_normal_bonuses() {
        let mut p = player();
        resolve_landing(&mut p, &square(1, SquareType::Normal));
        assert_eq!(p.money, 120_000);

        resolve_landing(&mut p, &square(15, SquareType::Normal));
        assert_eq!(p.money, 220_000);

        let effect = resolve_landing(&mut p, &square(3, SquareType::Normal));
        assert!(effect.is_noop());
        assert_eq!(p.money, 220_000);
    }

    #[test]
    fn test_landing_goal_forces_president() {
        let mut p = player();
        let effect = resolve_landing(&mut p, &square(59, SquareType::Goal));

        assert_eq!(p.career, Career::President);
        assert_eq!(effect.money_delta, 0);
    }

    #[test]
    fn test_landing_start_and_stop_inert() {
        let mut p = player();
        assert!(resolve_landing(&mut p, &square(0, SquareType::Start)).is_noop());
        assert!(resolve_landing(&mut p, &square(4, SquareType::Stop)).is_noop());
        assert_eq!(p, player());
    }

    #[test]
    fn test_pass_through_only_promotion_and_payday() {
        let board = Board::standard();
        let mut p = player();

        // 1..=5: NORMAL, PAYDAY, NORMAL, TROUBLE, NORMAL
        let bonuses: Vec<_> = (1..=5)
            .filter_map(|i| resolve_pass_through(&mut p, &board[i]))
            .collect();

        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].square_id, 2);
        assert_eq!(bonuses[0].amount, 500_000);
        // NORMAL square 1 bonus and TROUBLE penalty are landing-only
        assert_eq!(p.money, 600_000);
    }

    #[test]
    fn test_pass_through_promotion() {
        let mut p = player();
        let bonus = resolve_pass_through(&mut p, &square(6, SquareType::Promotion)).unwrap();

        assert_eq!(p.career, Career::Consultant);
        assert_eq!(bonus.career, Career::Consultant);
        assert_eq!(bonus.square_id, 6);
    }
}
