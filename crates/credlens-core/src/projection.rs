//! Display-only aggregates derived from records.
//!
//! Every function here is pure. Zero divisors produce `0` instead of NaN so
//! the presentation layer never renders `NaN%`.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use credlens_model::Proposal;

use crate::error::FilterError;

/// Share of `part` in `total` as a percentage in `[0, 100]`.
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Renders a percentage with a fixed number of decimals, e.g. `66.7%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.decimals$}%")
}

/// Whole-number progress for progress bars.
pub fn progress(completed: u64, total: u64) -> u8 {
    // `percentage` is clamped to 100, so the cast cannot truncate.
    percentage(completed, total).round() as u8
}

/// Badge tier for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
    Excellent,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
            Tier::Excellent => "Excellent",
        }
    }

    /// Scale used for issuer trust scores.
    pub fn trust_scale() -> TierScale<Tier> {
        TierScale {
            bands: vec![(40.0, Tier::Low), (70.0, Tier::Medium), (90.0, Tier::High)],
            top: Tier::Excellent,
        }
    }

    pub fn for_trust_score(score: f64) -> Tier {
        Self::trust_scale().tier(score)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered thresholds mapping a score to a label.
///
/// A score below a band's upper bound gets that band's label; scores at or
/// above the last bound get `top`.
#[derive(Debug, Clone, PartialEq)]
pub struct TierScale<L> {
    bands: Vec<(f64, L)>,
    top: L,
}

impl<L: Copy> TierScale<L> {
    pub fn new(bands: Vec<(f64, L)>, top: L) -> Result<Self, FilterError> {
        if bands.is_empty() {
            return Err(FilterError::InvalidTierScale {
                message: "at least one threshold is required".to_string(),
            });
        }
        if bands.iter().any(|(bound, _)| !bound.is_finite()) {
            return Err(FilterError::InvalidTierScale {
                message: "thresholds must be finite".to_string(),
            });
        }
        if bands.windows(2).any(|pair| pair[0].0 >= pair[1].0) {
            return Err(FilterError::InvalidTierScale {
                message: "thresholds must be strictly ascending".to_string(),
            });
        }
        Ok(Self { bands, top })
    }

    pub fn tier(&self, score: f64) -> L {
        if score.is_nan() {
            return self.bands.first().map_or(self.top, |(_, label)| *label);
        }
        self.bands
            .iter()
            .find(|(bound, _)| score < *bound)
            .map_or(self.top, |(_, label)| *label)
    }
}

/// Vote counts for a governance proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VoteTally {
    pub votes_for: u64,
    pub votes_against: u64,
    pub votes_abstain: u64,
}

impl VoteTally {
    pub fn from_counts(votes_for: u64, votes_against: u64, votes_abstain: u64) -> Self {
        Self {
            votes_for,
            votes_against,
            votes_abstain,
        }
    }

    /// Total votes cast; saturates at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.votes_for
            .saturating_add(self.votes_against)
            .saturating_add(self.votes_abstain)
    }

    pub fn for_pct(&self) -> f64 {
        percentage(self.votes_for, self.total())
    }

    pub fn against_pct(&self) -> f64 {
        percentage(self.votes_against, self.total())
    }

    pub fn abstain_pct(&self) -> f64 {
        percentage(self.votes_abstain, self.total())
    }

    pub fn quorum_reached(&self, quorum: u64) -> bool {
        self.total() >= quorum
    }
}

impl From<&Proposal> for VoteTally {
    fn from(proposal: &Proposal) -> Self {
        Self::from_counts(
            u64::from(proposal.votes_for),
            u64::from(proposal.votes_against),
            u64::from(proposal.votes_abstain),
        )
    }
}

/// Formats a date the way list views show it, e.g. `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Short expiry badge text relative to `today`.
pub fn expiry_label(expires: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(expires) = expires else {
        return "No expiry".to_string();
    };
    match days_between(today, expires) {
        days if days < 0 => "Expired".to_string(),
        0 => "Expires today".to_string(),
        1 => "Expires in 1 day".to_string(),
        days => format!("Expires in {days} days"),
    }
}

/// Shortens `text` to at most `max` chars with one `…` in the middle.
pub fn truncate_middle(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }
    match max {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let keep = max - 1;
            let head = keep.div_ceil(2);
            let tail = keep / 2;
            let mut out: String = chars[..head].iter().collect();
            out.push('…');
            out.extend(&chars[chars.len() - tail..]);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_total_is_zero_percent() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(progress(3, 0), 0);
        assert_eq!(format_percentage(percentage(0, 0), 1), "0.0%");
    }

    #[test]
    fn percentage_is_clamped() {
        assert_eq!(percentage(5, 4), 100.0);
        assert_eq!(progress(2, 3), 67);
        assert_eq!(format_percentage(percentage(2, 3), 1), "66.7%");
    }

    #[test]
    fn non_finite_values_render_as_zero() {
        assert_eq!(format_percentage(f64::NAN, 0), "0%");
    }

    #[test]
    fn trust_tiers_follow_thresholds() {
        assert_eq!(Tier::for_trust_score(12.0), Tier::Low);
        assert_eq!(Tier::for_trust_score(40.0), Tier::Medium);
        assert_eq!(Tier::for_trust_score(89.9), Tier::High);
        assert_eq!(Tier::for_trust_score(90.0), Tier::Excellent);
        assert_eq!(Tier::for_trust_score(f64::NAN), Tier::Low);
    }

    #[test]
    fn tier_scale_rejects_unordered_thresholds() {
        assert!(TierScale::new(vec![(50.0, 'a'), (50.0, 'b')], 'c').is_err());
        assert!(TierScale::<char>::new(Vec::new(), 'c').is_err());
        let scale = TierScale::new(vec![(1.0, 'a')], 'b').unwrap();
        assert_eq!(scale.tier(0.5), 'a');
        assert_eq!(scale.tier(1.0), 'b');
    }

    #[test]
    fn tally_without_votes_is_all_zero() {
        let tally = VoteTally::default();
        assert_eq!(tally.for_pct(), 0.0);
        assert_eq!(tally.against_pct(), 0.0);
        assert!(!tally.quorum_reached(1));
        assert!(tally.quorum_reached(0));
    }

    #[test]
    fn tally_total_saturates() {
        let tally = VoteTally::from_counts(u64::MAX, 1, 0);
        assert_eq!(tally.total(), u64::MAX);
        assert_eq!(tally.for_pct(), 100.0);
        assert!(tally.against_pct() < 0.001);
        assert!(tally.quorum_reached(u64::MAX));
    }

    #[test]
    fn dates_render_without_padding() {
        assert_eq!(format_date(date(2024, 1, 5)), "Jan 5, 2024");
    }

    #[test]
    fn expiry_labels() {
        let today = date(2024, 6, 1);
        assert_eq!(expiry_label(None, today), "No expiry");
        assert_eq!(expiry_label(Some(date(2024, 5, 31)), today), "Expired");
        assert_eq!(expiry_label(Some(today), today), "Expires today");
        assert_eq!(expiry_label(Some(date(2024, 6, 2)), today), "Expires in 1 day");
        assert_eq!(expiry_label(Some(date(2024, 6, 11)), today), "Expires in 10 days");
    }

    #[test]
    fn truncates_identifiers_in_the_middle() {
        assert_eq!(truncate_middle("did:ethr:0x1234567890abcdef", 12), "did:et…bcdef");
        assert_eq!(truncate_middle("short", 12), "short");
        assert_eq!(truncate_middle("héllo wörld", 5), "hé…ld");
        assert_eq!(truncate_middle("abc", 1), "…");
    }
}
