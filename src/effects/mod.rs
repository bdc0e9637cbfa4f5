//! Square effects.
//!
//! - `resolve_landing`: full effect of the square a player stops on
//! - `resolve_pass_through`: PROMOTION/PAYDAY bonuses for squares passed over
//! - `PassThroughBonus`: the notice recorded for each pass-through bonus
//!
//! Both resolvers match exhaustively on `SquareType`, so a new square
//! type cannot be added without deciding its effect here.

mod bonus;
mod resolver;

pub use bonus::{BonusKind, PassThroughBonus};
pub use resolver::{
    resolve_landing, resolve_pass_through, LandingEffect, NORMAL_SQUARE_BONUSES,
    PROJECT_SUCCESS_RATE, TRAINING_FEE, TROUBLE_RATE, WEDDING_COST,
};
