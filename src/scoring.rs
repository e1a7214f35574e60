//! Weighted alignment scoring between a user's ballots and a
//! representative's recorded positions.
//!
//! Each matched issue contributes a base alignment in [0, 1]. A stance is
//! anchored at 5 (support) or 0 (oppose) and the passion weight is added on
//! top, so the widest possible gap between two combined positions is 9.
//! The gap is scaled by [`POSITION_SPREAD`] and opposite stances pay a
//! further flat penalty. Per-issue results are then averaged under a
//! multiplier derived from the user's passion alone and mapped onto a
//! 0-100 scale.
//!
//! Two multiplier variants exist ([`WeightFormula`]) and both are kept
//! deliberately: cached scores written by the bulk refresh would shift if
//! either side were rebalanced onto the other curve.

/// Position value contributed by a supporting stance.
pub const SUPPORT_VALUE: i16 = 5;

/// Position value contributed by an opposing stance.
pub const OPPOSE_VALUE: i16 = 0;

/// Flat deduction applied when the two sides take opposite stances.
pub const STANCE_MISMATCH_PENALTY: f64 = 0.1;

/// Denominator that maps a combined-position gap into the [0, 1] band.
pub const POSITION_SPREAD: f64 = 10.0;

/// Lowest passion weight accepted at the write boundary.
pub const MIN_PASSION_WEIGHT: i16 = 1;

/// Highest passion weight accepted at the write boundary.
pub const MAX_PASSION_WEIGHT: i16 = 5;

/// Which passion-to-multiplier curve an aggregation uses.
///
/// The two curves agree on the legal passion range 1-5 (1.1 through 1.5)
/// but diverge outside it: the ladder clamps every unmapped weight to its
/// bottom step while the linear form keeps climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightFormula {
    /// Stepped multiplier used by the live alignment read.
    Ladder,
    /// Straight-line multiplier used by the bulk score refresh.
    Linear,
}

impl WeightFormula {
    pub fn multiplier(self, passion_weight: i16) -> f64 {
        match self {
            WeightFormula::Ladder => match passion_weight {
                5 => 1.5,
                4 => 1.4,
                3 => 1.3,
                2 => 1.2,
                _ => 1.1,
            },
            WeightFormula::Linear => 1.0 + f64::from(passion_weight) * 0.1,
        }
    }
}

/// A user ballot and a representative position on the same issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StancePair {
    pub user_stance: bool,
    pub user_passion: i16,
    pub rep_stance: bool,
    pub rep_passion: i16,
}

pub fn position_value(stance: bool) -> i16 {
    if stance { SUPPORT_VALUE } else { OPPOSE_VALUE }
}

pub fn combined_position(stance: bool, passion_weight: i16) -> i16 {
    position_value(stance) + passion_weight
}

/// Base alignment for one matched issue, before passion weighting.
pub fn base_alignment(pair: StancePair) -> f64 {
    let user_position = combined_position(pair.user_stance, pair.user_passion);
    let rep_position = combined_position(pair.rep_stance, pair.rep_passion);
    let gap = f64::from((user_position - rep_position).abs());
    assert!(gap >= 0.0, "Position gap cannot be negative");

    let mut score = 1.0 - gap / POSITION_SPREAD;
    if pair.user_stance != pair.rep_stance {
        score -= STANCE_MISMATCH_PENALTY;
    }
    score
}

/// Aggregate a set of matched issues into a 0-100 alignment score.
///
/// Returns `None` when there is nothing to aggregate; a user and a
/// representative with no issues in common have no score at all rather
/// than a zero.
pub fn weighted_percentage<I>(pairs: I, formula: WeightFormula) -> Option<f64>
where
    I: IntoIterator<Item = StancePair>,
{
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for pair in pairs {
        // The multiplier tracks the user's passion, never the
        // representative's.
        let multiplier = formula.multiplier(pair.user_passion);
        assert!(multiplier >= 1.0, "Weight multiplier below unity");
        weighted_sum += base_alignment(pair) * multiplier;
        weight_total += multiplier;
    }

    if weight_total <= 0.0 {
        return None;
    }
    Some(weighted_sum / weight_total * 100.0)
}

/// Render a 0-100 score the way clients display it, rounding halves away
/// from zero.
pub fn format_percentage(score: f64) -> String {
    assert!(score.is_finite(), "Alignment score must be finite");
    format!("{}%", score.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn pair(
        user_stance: bool,
        user_passion: i16,
        rep_stance: bool,
        rep_passion: i16,
    ) -> StancePair {
        StancePair {
            user_stance,
            user_passion,
            rep_stance,
            rep_passion,
        }
    }

    #[test]
    fn stances_anchor_at_five_and_zero() {
        assert_eq!(position_value(true), 5);
        assert_eq!(position_value(false), 0);
        assert_eq!(combined_position(true, 3), 8);
        assert_eq!(combined_position(false, 1), 1);
    }

    #[test]
    fn identical_ballots_align_perfectly() {
        let base = base_alignment(pair(true, 4, true, 4));
        assert!((base - 1.0).abs() < EPS);

        let opposed_match = base_alignment(pair(false, 2, false, 2));
        assert!((opposed_match - 1.0).abs() < EPS);
    }

    #[test]
    fn same_stance_gap_scales_by_tenths() {
        // Support 5 vs support 3: positions 10 and 8.
        let base = base_alignment(pair(true, 5, true, 3));
        assert!((base - 0.8).abs() < EPS);
    }

    #[test]
    fn opposite_stances_pay_flat_penalty() {
        // Support 3 vs oppose 2: positions 8 and 2, gap 6.
        let base = base_alignment(pair(true, 3, false, 2));
        assert!((base - 0.3).abs() < EPS);
    }

    #[test]
    fn penalty_is_exactly_a_tenth() {
        // Same gap of 2 on both pairs; only the stance match differs.
        let agreeing = base_alignment(pair(true, 3, true, 1));
        let disagreeing = base_alignment(pair(true, 1, false, 4));
        assert!((agreeing - disagreeing - STANCE_MISMATCH_PENALTY).abs() < EPS);
    }

    #[test]
    fn support_and_oppose_bands_do_not_overlap() {
        // Support occupies 6-10 and oppose 1-5 for in-range weights. The
        // bands are asymmetric around the midpoint and that asymmetry is
        // load-bearing: rebalancing it would change every mixed-stance gap.
        for weight in MIN_PASSION_WEIGHT..=MAX_PASSION_WEIGHT {
            let support = combined_position(true, weight);
            let oppose = combined_position(false, weight);
            assert!((6..=10).contains(&support));
            assert!((1..=5).contains(&oppose));
        }
    }

    #[test]
    fn maximum_disagreement_bottoms_out_at_zero() {
        // Support 5 vs oppose 1 is the widest legal gap (10 vs 1).
        let base = base_alignment(pair(true, 5, false, 1));
        assert!(base.abs() < EPS);
    }

    #[test]
    fn ladder_multiplier_steps() {
        assert_eq!(WeightFormula::Ladder.multiplier(1), 1.1);
        assert_eq!(WeightFormula::Ladder.multiplier(2), 1.2);
        assert_eq!(WeightFormula::Ladder.multiplier(3), 1.3);
        assert_eq!(WeightFormula::Ladder.multiplier(4), 1.4);
        assert_eq!(WeightFormula::Ladder.multiplier(5), 1.5);
        // Unmapped weights fall to the bottom step, matching the
        // catch-all arm the read path has always had.
        assert_eq!(WeightFormula::Ladder.multiplier(0), 1.1);
        assert_eq!(WeightFormula::Ladder.multiplier(7), 1.1);
    }

    #[test]
    fn linear_tracks_ladder_on_legal_range() {
        for weight in MIN_PASSION_WEIGHT..=MAX_PASSION_WEIGHT {
            let ladder = WeightFormula::Ladder.multiplier(weight);
            let linear = WeightFormula::Linear.multiplier(weight);
            assert!(
                (ladder - linear).abs() < EPS,
                "curves disagree at weight {weight}: {ladder} vs {linear}"
            );
        }
    }

    #[test]
    fn formulas_diverge_above_legal_range() {
        // The divergence is intentional; cached refresh scores written
        // with out-of-range weights would shift if the curves were ever
        // unified.
        assert_eq!(WeightFormula::Ladder.multiplier(7), 1.1);
        assert!(WeightFormula::Linear.multiplier(7) > 1.5);
    }

    #[test]
    fn empty_overlap_has_no_score() {
        assert!(weighted_percentage(Vec::new(), WeightFormula::Ladder).is_none());
        assert!(weighted_percentage(Vec::new(), WeightFormula::Linear).is_none());
    }

    #[test]
    fn perfect_agreement_scores_one_hundred() {
        let score = weighted_percentage(vec![pair(true, 5, true, 5)], WeightFormula::Ladder)
            .expect("one pair must produce a score");
        assert!((score - 100.0).abs() < EPS);
    }

    #[test]
    fn strongest_disagreement_on_one_issue_scores_forty() {
        // Support 5 vs oppose 5: positions 10 and 5, gap 5, penalty 0.1,
        // base 0.4. A single issue scores its own base.
        let score = weighted_percentage(vec![pair(true, 5, false, 5)], WeightFormula::Ladder)
            .expect("one pair must produce a score");
        assert!((score - 40.0).abs() < EPS);
        assert_eq!(format_percentage(score), "40%");
    }

    #[test]
    fn recomputation_is_deterministic() {
        let pairs = vec![
            pair(true, 5, true, 2),
            pair(false, 3, true, 4),
            pair(true, 1, false, 1),
        ];
        let first = weighted_percentage(pairs.clone(), WeightFormula::Ladder);
        let second = weighted_percentage(pairs, WeightFormula::Ladder);
        assert_eq!(first, second);
    }

    #[test]
    fn worked_example_two_issues() {
        // Issue A: full agreement at passion 5 (base 1.0, weight 1.5).
        // Issue B: support 3 vs oppose 2 (base 0.3, weight 1.3).
        // (1.0 * 1.5 + 0.3 * 1.3) / (1.5 + 1.3) * 100 = 67.5
        let pairs = vec![pair(true, 5, true, 5), pair(true, 3, false, 2)];
        let score = weighted_percentage(pairs.clone(), WeightFormula::Ladder)
            .expect("two pairs must produce a score");
        assert!((score - 67.5).abs() < EPS);

        // Both curves coincide on legal weights, so the refresh formula
        // lands on the same number here.
        let linear = weighted_percentage(pairs, WeightFormula::Linear)
            .expect("two pairs must produce a score");
        assert!((linear - 67.5).abs() < EPS);
    }

    #[test]
    fn weight_follows_user_passion() {
        // Issue A: base 1.0 under user passion 5. Issue B: user opposes
        // at passion 1 against a representative supporting at passion 3,
        // so positions 1 and 8 give base 0.2. Weights must be 1.5 and
        // 1.1; picking up the representative's passion for B (3 -> 1.3)
        // would shift the total.
        let pairs = vec![pair(true, 5, true, 5), pair(false, 1, true, 3)];
        let score = weighted_percentage(pairs, WeightFormula::Ladder)
            .expect("two pairs must produce a score");
        let expected = (1.0 * 1.5 + 0.2 * 1.1) / (1.5 + 1.1) * 100.0;
        assert!((score - expected).abs() < EPS);
        assert!((expected - 66.153_846_153_846_15).abs() < 1e-6);
    }

    #[test]
    fn formats_rounded_integer_percent() {
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(100.0), "100%");
        assert_eq!(format_percentage(86.4), "86%");
        assert_eq!(format_percentage(39.9999), "40%");
    }

    #[test]
    fn rounds_halves_away_from_zero() {
        assert_eq!(format_percentage(67.5), "68%");
        assert_eq!(format_percentage(0.5), "1%");
    }
}
