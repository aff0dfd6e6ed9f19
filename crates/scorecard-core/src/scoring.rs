//! Score aggregation and tier classification.
//!
//! Pure functions over sparse score maps. Missing keys count as 0; values
//! are summed as stored, without clamping against subcriterion maxima.

use crate::project::ScoreMap;
use crate::rubric::{rubric, Category};

/// Sum of a category's subcriterion scores. Absent keys count as 0.
pub fn category_total(scores: &ScoreMap, category: &Category) -> u32 {
    category
        .subcriteria
        .iter()
        .map(|sub| scores.get(&sub.id).copied().unwrap_or(0))
        .sum()
}

/// Sum of all category totals across the rubric.
pub fn grand_total(scores: &ScoreMap) -> u32 {
    rubric()
        .iter()
        .map(|category| category_total(scores, category))
        .sum()
}

/// Qualitative label for a total score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Minimum total score for this tier.
    pub min: i32,
    pub label: &'static str,
    pub description: &'static str,
}

/// Tier thresholds, descending. The 0-minimum entry guarantees every score
/// maps to a tier.
pub static TIERS: [Tier; 5] = [
    Tier {
        min: 85,
        label: "STRONG CONTENDER",
        description: "High probability of a top 3 finish.",
    },
    Tier {
        min: 70,
        label: "COMPETITIVE",
        description: "Solid entry. Could win with a strong demo.",
    },
    Tier {
        min: 55,
        label: "RISKY",
        description: "Significant gaps to address.",
    },
    Tier {
        min: 40,
        label: "UNLIKELY",
        description: "Fundamental issues.",
    },
    Tier {
        min: 0,
        label: "NOT READY",
        description: "Should not compete.",
    },
];

/// First tier whose minimum is at or below the score. Negative scores land
/// on the final fallback tier.
pub fn tier_for(total: i32) -> &'static Tier {
    TIERS
        .iter()
        .find(|tier| total >= tier.min)
        .unwrap_or(&TIERS[TIERS.len() - 1])
}
