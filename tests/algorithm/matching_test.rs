#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use symptom_dx::algorithm::matching::extract_symptoms;
    use symptom_dx::{
        CodeResolver, ConditionEntry, MatchStrategy, Matcher, MatcherConfig, NO_MATCH_CODE,
        PatientRecord, ReferenceTable, SymptomSet, UNKNOWN, jaccard_similarity,
        resolve_secondary_code,
    };

    use crate::utils::sample_reference;

    const VOCABULARY: [&str; 10] = [
        "redness",
        "pain",
        "itching",
        "tearing",
        "blurry vision",
        "halos",
        "dryness",
        "swelling",
        "floaters",
        "discharge",
    ];

    fn random_symptoms(rng: &mut StdRng, max: usize) -> Vec<&'static str> {
        let count = rng.random_range(0..=max);
        (0..count)
            .map(|_| VOCABULARY[rng.random_range(0..VOCABULARY.len())])
            .collect()
    }

    fn random_table(rng: &mut StdRng, entries: usize) -> ReferenceTable {
        let entries = (0..entries)
            .map(|i| {
                let symptoms = random_symptoms(rng, 3);
                ConditionEntry::new(&format!("Condition {i}"), &format!("C{i:03}"), &symptoms)
                    .with_cpt_code(&format!("9{i:04}"))
            })
            .collect();
        ReferenceTable::new(entries).unwrap()
    }

    #[test]
    fn test_similarity_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let a = random_symptoms(&mut rng, 5);
            let b = random_symptoms(&mut rng, 5);

            assert_eq!(jaccard_similarity(&a, &b), jaccard_similarity(&b, &a));
            assert_eq!(jaccard_similarity(&a, Vec::<&str>::new()), 0.0);
            if !a.is_empty() {
                assert_eq!(jaccard_similarity(&a, &a), 1.0);
            }
            let score = jaccard_similarity(&a, &b);
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_winner_is_maximal_and_earliest() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let table = random_table(&mut rng, 12);
            let patient = SymptomSet::from_pieces(random_symptoms(&mut rng, 4));
            let matcher =
                Matcher::with_strategy(&table, MatcherConfig::default(), MatchStrategy::Linear)
                    .unwrap();

            let scores = matcher.score_all(&patient);
            let Some(best) = matcher.best_candidate(&patient) else {
                assert!(scores.iter().all(|candidate| candidate.score == 0.0));
                continue;
            };

            for other in &scores {
                assert!(best.score >= other.score);
                if other.score == best.score {
                    assert!(best.position <= other.position);
                }
            }
        }
    }

    #[test]
    fn test_linear_and_indexed_agree() {
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let table = random_table(&mut rng, 20);
            let patient = SymptomSet::from_pieces(random_symptoms(&mut rng, 4));

            let config = MatcherConfig::default();
            let linear = Matcher::with_strategy(&table, config.clone(), MatchStrategy::Linear)
                .unwrap();
            let indexed = Matcher::with_strategy(&table, config, MatchStrategy::Indexed).unwrap();

            let a = linear.find_best_match(&patient);
            let b = indexed.find_best_match(&patient);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_matching_is_idempotent() {
        let table = sample_reference().unwrap();
        let matcher = Matcher::new(&table, MatcherConfig::default()).unwrap();
        let patient = SymptomSet::from_pieces(["blurry vision", "Redness"]);

        let first = matcher.find_best_match(&patient);
        let second = matcher.find_best_match(&patient);
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_thirds_overlap_scenario() {
        let table = ReferenceTable::new(vec![
            ConditionEntry::new("Keratitis", "H16.9", &["blurry vision", "redness", "pain"])
                .with_cpt_code("92004")
                .with_prescription("Antiviral eye drops"),
        ])
        .unwrap();
        let matcher = Matcher::new(&table, MatcherConfig::default()).unwrap();
        let outcome = matcher.find_best_match(&SymptomSet::from_pieces(["redness", "pain"]));

        assert_eq!(outcome.condition, "Keratitis");
        assert_eq!(outcome.icd_code, "H16.9");
        assert_eq!(outcome.prescription, "Antiviral eye drops");
        assert_eq!(resolve_secondary_code(&outcome.icd_code, &table), "92004");
    }

    #[test]
    fn test_no_overlap_scenario() {
        let table =
            ReferenceTable::new(vec![ConditionEntry::new("Allergy", "H10.1", &["itching"])])
                .unwrap();
        let matcher = Matcher::new(&table, MatcherConfig::default()).unwrap();
        let outcome = matcher.find_best_match(&SymptomSet::from_pieces(["pain"]));

        assert_eq!(outcome.condition, UNKNOWN);
        assert_eq!(outcome.icd_code, NO_MATCH_CODE);
        assert_eq!(outcome.prescription, UNKNOWN);
        assert_eq!(resolve_secondary_code(&outcome.icd_code, &table), NO_MATCH_CODE);
    }

    #[test]
    fn test_resolver_against_sample_table() {
        let table = sample_reference().unwrap();
        let resolver = CodeResolver::new(&table);

        assert_eq!(resolver.resolve("H10.1"), "92012");
        assert_eq!(resolver.resolve(NO_MATCH_CODE), NO_MATCH_CODE);
        assert_eq!(resolver.resolve("X99.9"), NO_MATCH_CODE);
        assert_eq!(resolve_secondary_code("X99.9", &table), NO_MATCH_CODE);
    }

    #[test]
    fn test_extractor_dedup_across_columns() {
        let record = PatientRecord::new()
            .with_field("symptom1", "Pain")
            .with_field("symptom2", "pain")
            .with_field("symptom3", "PAIN");
        assert_eq!(extract_symptoms(&record).as_slice(), ["Pain"]);
    }

    #[test]
    fn test_sample_table_skips_entry_without_symptoms() {
        let table = sample_reference().unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.candidate_count(), 8);
    }
}
