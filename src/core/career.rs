//! Career ladder and salary table.
//!
//! Careers form a closed, ordered progression from `Analyst` to
//! `President`. Promotion advances one rung and saturates at the top.

use serde::{Deserialize, Serialize};

/// A player's career rank.
///
/// Variants are declared in ladder order, so the derived `Ord` matches
/// seniority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Career {
    #[default]
    Analyst,
    Consultant,
    SeniorConsultant,
    Manager,
    SeniorManager,
    Partner,
    President,
}

impl Career {
    /// Every career, lowest rank first.
    pub const ALL: [Career; 7] = [
        Career::Analyst,
        Career::Consultant,
        Career::SeniorConsultant,
        Career::Manager,
        Career::SeniorManager,
        Career::Partner,
        Career::President,
    ];

    /// The highest rank.
    pub const CEILING: Career = Career::President;

    /// Zero-based position on the ladder.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// The next rung up, or `None` at the ceiling.
    #[must_use]
    pub fn next(self) -> Option<Career> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    /// Promote one step. A no-op at `President`.
    #[must_use]
    pub fn promoted(self) -> Career {
        self.next().unwrap_or(self)
    }

    /// Flat salary paid on a PAYDAY square for this rank.
    ///
    /// ```
    /// use career_life::core::Career;
    ///
    /// assert_eq!(Career::Analyst.salary(), 500_000);
    /// assert_eq!(Career::President.salary(), 10_000_000);
    /// ```
    #[must_use]
    pub const fn salary(self) -> i64 {
        match self {
            Career::Analyst => 500_000,
            Career::Consultant => 750_000,
            Career::SeniorConsultant => 1_000_000,
            Career::Manager => 1_500_000,
            Career::SeniorManager => 2_000_000,
            Career::Partner => 5_000_000,
            Career::President => 10_000_000,
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Career::Analyst => "Analyst",
            Career::Consultant => "Consultant",
            Career::SeniorConsultant => "Senior Consultant",
            Career::Manager => "Manager",
            Career::SeniorManager => "Senior Manager",
            Career::Partner => "Partner",
            Career::President => "President",
        }
    }
}

impl std::fmt::Display for Career {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
