use lexguard_extract::{Extractor, RuleBasedRecognizer, analyze};
use proptest::prelude::*;

proptest! {
    #[test]
    fn extraction_is_deterministic(text in "\\PC{0,300}") {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn mixed_script_text_never_panics(text in "[a-zA-Z0-9 .,₹$\\u{0900}-\\u{097F}\n]{0,400}") {
        let extractor = Extractor::new().with_recognizer(RuleBasedRecognizer);
        let e = extractor.analyze(&text);
        let _ = extractor.identify_parties(&text);

        let lang = &e.language_detection;
        prop_assert!((0.0..=1.0).contains(&lang.english_ratio));
        prop_assert!((0.0..=1.0).contains(&lang.hindi_ratio));
        prop_assert_eq!(e.statistics.character_count, text.chars().count());
    }

    #[test]
    fn clause_ids_are_sequential(text in "[A-Za-z .!?\n]{0,400}") {
        let e = analyze(&text);
        for (i, clause) in e.clauses.iter().enumerate() {
            prop_assert_eq!(clause.id, i + 1);
            prop_assert!(clause.text.chars().count() >= 10);
        }
    }

    #[test]
    fn key_terms_sorted_by_count(text in "(shall |may |fee |liable |dispute |[a-z]{1,6} ){0,60}") {
        let terms = analyze(&text).key_terms;
        for pair in terms.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        prop_assert!(terms.iter().all(|t| t.count > 0));
    }

    #[test]
    fn contexts_are_bounded(pad in "[a-z ]{0,200}", amount in 1u32..1_000_000) {
        let text = format!("{pad}Rs. {amount}{pad}");
        let e = analyze(&text);
        prop_assert!(!e.monetary_values.is_empty());
        for m in &e.monetary_values {
            prop_assert!(m.context.chars().count() <= 50 + m.original.chars().count() + 50);
        }
    }
}
