use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::catalog::PlatformId;
use super::super::domain::{FeedbackCategory, FeedbackRecord};

/// Records required before any pattern analysis runs.
pub const MIN_PATTERN_SAMPLE: usize = 5;
/// Records a platform needs before it can be flagged over- or underrated.
pub const MIN_RATING_FLAG_SAMPLE: usize = 10;

const OVERRATED_ACCURACY: f64 = 0.5;
const UNDERRATED_ACCURACY: f64 = 0.8;
const MISSING_FEATURE_RATE: f64 = 0.3;
const RECURRING_FEATURE_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternFlag {
    Overrated,
    Underrated,
    MissingFeatures,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformFeedbackPattern {
    pub platform: PlatformId,
    pub total: usize,
    pub good_fit_count: usize,
    pub poor_fit_count: usize,
    pub missing_feature_count: usize,
    pub accuracy_rate: f64,
    pub missing_feature_rate: f64,
    pub average_rating: f64,
    pub flags: Vec<PatternFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringFeatureRequest {
    pub feature: String,
    pub count: usize,
}

/// Aggregate view of historical feedback handed to the weight advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackDiagnostics {
    pub sample_size: usize,
    pub platforms: Vec<PlatformFeedbackPattern>,
    pub recurring_missing_features: Vec<RecurringFeatureRequest>,
}

impl FeedbackDiagnostics {
    pub fn flagged(&self, flag: PatternFlag) -> impl Iterator<Item = PlatformId> + '_ {
        self.platforms
            .iter()
            .filter(move |pattern| pattern.flags.contains(&flag))
            .map(|pattern| pattern.platform)
    }
}

/// Group feedback per platform and flag accuracy problems.
///
/// Returns `None` below [`MIN_PATTERN_SAMPLE`] records.
pub fn analyze_patterns(history: &[FeedbackRecord]) -> Option<FeedbackDiagnostics> {
    if history.len() < MIN_PATTERN_SAMPLE {
        return None;
    }

    let mut grouped: BTreeMap<PlatformId, Vec<&FeedbackRecord>> = BTreeMap::new();
    for record in history {
        grouped.entry(record.platform_id).or_default().push(record);
    }

    let platforms = PlatformId::ALL
        .into_iter()
        .filter_map(|platform| {
            grouped
                .get(&platform)
                .map(|records| summarize(platform, records))
        })
        .collect();

    let mut feature_counts: BTreeMap<String, usize> = BTreeMap::new();
    for feature in history
        .iter()
        .filter_map(|record| record.missing_feature.as_deref())
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
    {
        *feature_counts.entry(feature.to_string()).or_insert(0) += 1;
    }

    let mut recurring_missing_features: Vec<RecurringFeatureRequest> = feature_counts
        .into_iter()
        .filter(|(_, count)| *count >= RECURRING_FEATURE_COUNT)
        .map(|(feature, count)| RecurringFeatureRequest { feature, count })
        .collect();
    recurring_missing_features.sort_by(|left, right| right.count.cmp(&left.count));

    Some(FeedbackDiagnostics {
        sample_size: history.len(),
        platforms,
        recurring_missing_features,
    })
}

fn summarize(platform: PlatformId, records: &[&FeedbackRecord]) -> PlatformFeedbackPattern {
    let total = records.len();
    let count = |category: FeedbackCategory| {
        records
            .iter()
            .filter(|record| record.feedback_category == category)
            .count()
    };
    let good_fit_count = count(FeedbackCategory::GoodFit);
    let poor_fit_count = count(FeedbackCategory::PoorFit);
    let missing_feature_count = count(FeedbackCategory::MissingFeature);

    let accuracy_rate = good_fit_count as f64 / total as f64;
    let missing_feature_rate = missing_feature_count as f64 / total as f64;
    let average_rating = records
        .iter()
        .map(|record| f64::from(record.rating))
        .sum::<f64>()
        / total as f64;

    let mut flags = Vec::new();
    if total >= MIN_RATING_FLAG_SAMPLE {
        if accuracy_rate < OVERRATED_ACCURACY {
            flags.push(PatternFlag::Overrated);
        } else if accuracy_rate > UNDERRATED_ACCURACY {
            flags.push(PatternFlag::Underrated);
        }
    }
    if missing_feature_rate > MISSING_FEATURE_RATE {
        flags.push(PatternFlag::MissingFeatures);
    }

    PlatformFeedbackPattern {
        platform,
        total,
        good_fit_count,
        poor_fit_count,
        missing_feature_count,
        accuracy_rate,
        missing_feature_rate,
        average_rating,
        flags,
    }
}
