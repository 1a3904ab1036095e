use std::sync::Arc;

use impact_echo::verification::scoring::{score_filename, score_metadata, score_text};
use impact_echo::verification::{
    classify, finalize_score, Aggregator, EvidenceFile, FieldValue, FixedRandomness, Submission,
};
use proptest::prelude::*;

fn field_value() -> impl Strategy<Value = Option<FieldValue>> {
    prop_oneof![
        Just(None),
        any::<bool>().prop_map(|value| Some(FieldValue::Flag(value))),
        (-1000.0f64..1000.0).prop_map(|value| Some(FieldValue::Number(value))),
        "[a-z0-9 .-]{0,12}".prop_map(|value| Some(FieldValue::Text(value))),
    ]
}

fn submission() -> impl Strategy<Value = Submission> {
    (
        proptest::option::of(".{0,160}"),
        proptest::collection::vec(proptest::option::of("[A-Za-z0-9_.]{0,24}"), 0..4),
        field_value(),
        field_value(),
        field_value(),
        field_value(),
    )
        .prop_map(|(description, files, campaign, geo_lat, geo_lng, amount)| Submission {
            donation_id: None,
            description,
            evidence_files: files
                .into_iter()
                .map(|filename| EvidenceFile { filename })
                .collect(),
            campaign,
            geo_lat,
            geo_lng,
            amount,
        })
}

proptest! {
    #[test]
    fn text_score_never_exceeds_cap(text in ".{0,300}") {
        prop_assert!(score_text(Some(text.as_str())) <= 95);
    }

    #[test]
    fn filename_score_is_stable_and_capped(name in "[A-Za-z0-9_.]{0,40}") {
        let score = score_filename(Some(name.as_str()));
        prop_assert!(score <= 95);
        prop_assert!(score >= 50);
        prop_assert_eq!(score, score_filename(Some(name.as_str())));
    }

    #[test]
    fn metadata_score_is_bounded(submission in submission()) {
        let score = score_metadata(&submission);
        prop_assert!((60..=95).contains(&score));
    }

    #[test]
    fn final_score_is_clamped_for_any_jitter(submission in submission(), jitter in -5i32..=5) {
        let aggregator = Aggregator::new(Arc::new(FixedRandomness::new(jitter)));
        let assessment = aggregator.aggregate(&submission).expect("aggregates");
        prop_assert!((40..=95).contains(&assessment.score));
        prop_assert_eq!(assessment.status, classify(assessment.score));
    }

    #[test]
    fn finalize_is_clamped(raw in 0.0f64..120.0, jitter in -5i32..=5) {
        let score = finalize_score(raw, jitter);
        prop_assert!((40..=95).contains(&score));
    }
}
