use crate::config::AutoSelectPolicy;
use crate::score::outcome::ScoredCrop;

/// Sort scored crops by descending score.
///
/// The sort is stable: crops with equal scores keep the order they were
/// given in, which for catalog-derived lists is catalog order.
pub fn rank(mut crops: Vec<ScoredCrop>) -> Vec<ScoredCrop> {
    crops.sort_by(|a, b| b.score.cmp(&a.score));
    crops
}

/// Pick crops for automatic land allocation from a ranked list.
///
/// Keeps crops scoring strictly above `policy.min_score`, at most
/// `policy.max_crops` of them, in ranked order.
pub fn select_top(ranked: &[ScoredCrop], policy: &AutoSelectPolicy) -> Vec<ScoredCrop> {
    let selected: Vec<ScoredCrop> = ranked
        .iter()
        .filter(|c| c.score > policy.min_score)
        .take(policy.max_crops)
        .cloned()
        .collect();

    if selected.is_empty() {
        tracing::warn!(
            min_score = policy.min_score,
            candidates = ranked.len(),
            "no crop passed the auto-select threshold"
        );
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::schema::CropProfile;
    use crate::model::{Season, WaterNeed};
    use crate::score::outcome::Suitability;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn scored(id: &str, score: u8) -> ScoredCrop {
        ScoredCrop {
            crop: CropProfile {
                id: id.into(),
                name: id.into(),
                description: String::new(),
                growing_period: "100 days".into(),
                water_need: WaterNeed::Low,
                season: Season::Rabi,
                requirements: BTreeMap::new(),
                yield_per_acre: dec!(10),
                yield_unit: "quintal".into(),
                price_per_unit: dec!(1000),
            },
            score,
            suitability: Suitability::from_score(score),
            breakdown: vec![],
            unmatched_requirements: vec![],
        }
    }

    fn ids(crops: &[ScoredCrop]) -> Vec<&str> {
        crops.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![scored("a", 40), scored("b", 90), scored("c", 65)]);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank(vec![
            scored("first", 70),
            scored("top", 95),
            scored("second", 70),
            scored("third", 70),
        ]);
        assert_eq!(ids(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(vec![]).is_empty());
    }

    #[test]
    fn test_select_top_threshold_is_exclusive() {
        let ranked = rank(vec![scored("a", 90), scored("b", 61), scored("c", 60)]);
        let selected = select_top(&ranked, &AutoSelectPolicy::default());
        assert_eq!(ids(&selected), vec!["a", "b"]);
    }

    #[test]
    fn test_select_top_caps_count() {
        let ranked = rank((0..6).map(|i| scored(&format!("c{i}"), 90 - i)).collect());
        let selected = select_top(&ranked, &AutoSelectPolicy::default());
        assert_eq!(ids(&selected), vec!["c0", "c1", "c2", "c3"]);
    }

    #[test]
    fn test_select_top_custom_policy() {
        let ranked = rank(vec![scored("a", 90), scored("b", 75), scored("c", 55)]);
        let policy = AutoSelectPolicy {
            min_score: 50,
            max_crops: 2,
        };
        assert_eq!(ids(&select_top(&ranked, &policy)), vec!["a", "b"]);
    }

    #[test]
    fn test_select_top_none_qualify() {
        let ranked = rank(vec![scored("a", 40)]);
        assert!(select_top(&ranked, &AutoSelectPolicy::default()).is_empty());
    }
}
