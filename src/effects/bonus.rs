//! Pass-through bonus notices.
//!
//! A notice is recorded every time a player moves *through* a PROMOTION
//! or PAYDAY square without stopping on it. The list for the latest move
//! is published to the presentation layer until the turn rotates.

use serde::{Deserialize, Serialize};

use crate::core::Career;

/// Kind of pass-through bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BonusKind {
    Promotion,
    Payday,
}

impl BonusKind {
    /// Icon shown next to the notice.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            BonusKind::Promotion => "🚀",
            BonusKind::Payday => "💰",
        }
    }
}

/// A bonus collected while passing over a square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassThroughBonus {
    pub kind: BonusKind,
    /// The square that was passed.
    pub square_id: usize,
    /// Display text, e.g. `C昇格 → Consultant` or `初給与 +500,000`.
    pub label: String,
    pub icon: String,
    /// Money paid. Zero for promotions.
    pub amount: i64,
    /// Career after the bonus applied.
    pub career: Career,
}

impl PassThroughBonus {
    /// Notice for a promotion passed on `square_label`.
    pub fn promotion(square_id: usize, square_label: &str, career: Career) -> Self {
        Self {
            kind: BonusKind::Promotion,
            square_id,
            label: format!("{square_label} → {career}"),
            icon: BonusKind::Promotion.icon().to_string(),
            amount: 0,
            career,
        }
    }

    /// Notice for a salary collected on `square_label`.
    pub fn payday(square_id: usize, square_label: &str, amount: i64, career: Career) -> Self {
        Self {
            kind: BonusKind::Payday,
            square_id,
            label: format!("{square_label} +{}", group_thousands(amount)),
            icon: BonusKind::Payday.icon().to_string(),
            amount,
            career,
        }
    }
}

/// `1500000` → `1,500,000`.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_500_000), "1,500,000");
        assert_eq!(group_thousands(-50_000), "-50,000");
    }

    #[test]
    fn test_notices() {
        let promo = PassThroughBonus::promotion(6, "C昇格", Career::Consultant);
        assert_eq!(promo.kind, BonusKind::Promotion);
        assert_eq!(promo.label, "C昇格 → Consultant");
        assert_eq!(promo.icon, "🚀");
        assert_eq!(promo.amount, 0);

        let pay = PassThroughBonus::payday(2, "初給与", 500_000, Career::Analyst);
        assert_eq!(pay.kind, BonusKind::Payday);
        assert_eq!(pay.label, "初給与 +500,000");
        assert_eq!(pay.icon, "💰");
        assert_eq!(pay.amount, 500_000);
    }
}
