//! # ScoreAggregator
//!
//! Time-decayed hot-score ranking, computed at read time from current
//! counters. Pure and deterministic; there is no background recompute job,
//! so scores decay automatically as `now` advances.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ContentItem;

/// Tunable weights for the hot-score formula. Configuration data, not code:
/// deployments can override individual fields without touching the
/// algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    pub upvote_weight: f64,
    pub solution_weight: f64,
    pub view_weight: f64,
    pub decay_offset_hours: f64,
    pub decay_exponent: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            upvote_weight: 2.0,
            solution_weight: 5.0,
            view_weight: 0.1,
            decay_offset_hours: 2.0,
            decay_exponent: 1.5,
        }
    }
}

impl RankingWeights {
    /// `(upvotes*w_up + solutions*w_sol + views*w_view) / (age + offset)^exp`,
    /// rounded to one decimal. Age clamps to zero when `created_at` sits in
    /// the future (a data error, but never negative-exponentiated).
    pub fn hot_score(
        &self,
        upvotes: i64,
        solution_count: i64,
        views: i64,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> f64 {
        let age_hours = (now - created_at).num_milliseconds().max(0) as f64 / 3_600_000.0;
        let numerator = upvotes as f64 * self.upvote_weight
            + solution_count as f64 * self.solution_weight
            + views as f64 * self.view_weight;
        let raw = numerator / (age_hours + self.decay_offset_hours).powf(self.decay_exponent);
        (raw * 10.0).round() / 10.0
    }

    /// Score for a content item snapshot. Missing `views`/`solution_count`
    /// (solutions, comments) count as zero.
    pub fn hot_score_for(&self, item: &ContentItem, now: DateTime<Utc>) -> f64 {
        self.hot_score(
            item.upvotes,
            item.solution_count.unwrap_or(0),
            item.views.unwrap_or(0),
            item.created_at,
            now,
        )
    }
}

/// Orders snapshots by hot score descending; equal scores break the tie by
/// `created_at` descending (newest first).
pub fn rank(weights: &RankingWeights, items: Vec<ContentItem>, now: DateTime<Utc>) -> Vec<ContentItem> {
    let mut keyed: Vec<(f64, ContentItem)> = items
        .into_iter()
        .map(|item| (weights.hot_score_for(&item, now), item))
        .collect();
    keyed.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    keyed.into_iter().map(|(_, item)| item).collect()
}
