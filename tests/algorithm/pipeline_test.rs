#[cfg(test)]
mod tests {
    use symptom_dx::{
        ConditionEntry, DiagnosisPipeline, MatcherConfig, NO_MATCH_CODE, PatientRecord,
        ReferenceTable, UNKNOWN, process_batch, read_patient_records, read_reference_table,
        validate_patient_records,
    };

    use crate::utils::{sample_patients_path, sample_reference, sample_vitals_path, write_file};

    #[test]
    fn test_sample_batch_counts() {
        let table = sample_reference().unwrap();
        let patients = read_patient_records(&sample_patients_path()).unwrap();
        validate_patient_records(&patients).unwrap();

        let outcome = process_batch(&patients, &table, MatcherConfig::default()).unwrap();
        assert_eq!(outcome.total_records, 5);
        assert_eq!(outcome.processed_count, 4);
        assert_eq!(outcome.error_count, 1);
        assert_eq!(outcome.matched_count(), 3);
        assert!(
            outcome
                .results
                .iter()
                .all(|r| r.patient_email != "no.symptoms@example.com")
        );
    }

    #[test]
    fn test_sample_batch_results_in_input_order() {
        let table = sample_reference().unwrap();
        let patients = read_patient_records(&sample_patients_path()).unwrap();
        let outcome = process_batch(&patients, &table, MatcherConfig::default()).unwrap();

        let diagnoses: Vec<&str> = outcome.results.iter().map(|r| r.diagnosis.as_str()).collect();
        assert_eq!(
            diagnoses,
            ["Keratitis", "Allergic conjunctivitis", "Dry eye syndrome", UNKNOWN]
        );

        let keratitis = &outcome.results[0];
        assert_eq!(keratitis.patient_email, "jane.doe@example.com");
        assert_eq!(keratitis.icd_code, "H16.9");
        assert_eq!(keratitis.cpt_code, "92004");
        assert_eq!(keratitis.eye, "left");
        assert_eq!(keratitis.onset_date, "2024-04-28");
        assert_eq!(keratitis.severity, "Moderate");
        assert_eq!(keratitis.insurance, "Covered");

        let allergy = &outcome.results[1];
        assert_eq!(allergy.symptoms, "itching, tearing");

        let dry_eye = &outcome.results[2];
        assert_eq!(dry_eye.insurance, UNKNOWN);
        assert_eq!(dry_eye.symptoms, "Dryness, burning");

        let unknown = &outcome.results[3];
        assert_eq!(unknown.icd_code, NO_MATCH_CODE);
        assert_eq!(unknown.cpt_code, NO_MATCH_CODE);
        assert_eq!(unknown.eye, UNKNOWN);
        assert_eq!(unknown.symptoms, "headache, nausea");
    }

    #[test]
    fn test_json_vitals_batch() {
        let table = sample_reference().unwrap();
        let patients = read_patient_records(&sample_vitals_path()).unwrap();
        let outcome = process_batch(&patients, &table, MatcherConfig::default()).unwrap();

        assert_eq!(outcome.processed_count, 2);
        assert_eq!(outcome.results[0].diagnosis, "Retinal detachment");
        assert_eq!(outcome.results[0].cpt_code, "67108");
        assert_eq!(outcome.results[0].eye, "right");
        assert_eq!(outcome.results[0].onset_date, "2024-05-04");
        assert_eq!(outcome.results[1].diagnosis, "Hordeolum");
        assert_eq!(outcome.results[1].patient_email, "sam.lee@example.com");
    }

    #[test]
    fn test_each_symptomless_record_counts_once() {
        let table = sample_reference().unwrap();
        let pipeline = DiagnosisPipeline::new(&table, MatcherConfig::default()).unwrap();

        let base = vec![PatientRecord::new().with_field("symptoms", "redness, itching")];
        let mut with_blank = base.clone();
        with_blank.push(PatientRecord::new().with_field("email", "x@example.com"));

        let before = pipeline.run(&base);
        let after = pipeline.run(&with_blank);
        assert_eq!(after.error_count, before.error_count + 1);
        assert_eq!(after.results.len(), before.results.len());
    }

    #[test]
    fn test_padded_reference_keeps_secondary_codes() {
        let dir = tempfile::tempdir().unwrap();
        let reference = write_file(
            dir.path(),
            "icd_cpt_codes_extended.csv",
            "symptom1,symptom2,symptom3,condition,icd_code,cpt_code,severity\n\
             redness, pain, blurry vision, Keratitis, H16.9, 92004, Moderate\n",
        )
        .unwrap();
        let table = read_reference_table(&reference).unwrap();
        let patients = vec![PatientRecord::new().with_field("symptoms", "redness, pain")];

        let outcome = process_batch(&patients, &table, MatcherConfig::default()).unwrap();
        let result = &outcome.results[0];
        assert_eq!(result.diagnosis, "Keratitis");
        assert_eq!(result.icd_code, "H16.9");
        assert_eq!(result.cpt_code, "92004");
        assert_eq!(result.severity, "Moderate");
    }

    #[test]
    fn test_padded_entry_codes_resolve_in_pipeline() {
        let table = ReferenceTable::new(vec![
            ConditionEntry::new("Keratitis", " H16.9 ", &["redness", "pain"])
                .with_cpt_code(" 92004 "),
        ])
        .unwrap();
        let patients = vec![PatientRecord::new().with_field("symptom1", "pain")];

        let outcome = process_batch(&patients, &table, MatcherConfig::default()).unwrap();
        assert_eq!(outcome.results[0].icd_code, "H16.9");
        assert_eq!(outcome.results[0].cpt_code, "92004");
    }

    #[test]
    fn test_indexed_pipeline_matches_linear() {
        let table = sample_reference().unwrap();
        let patients = read_patient_records(&sample_patients_path()).unwrap();

        let indexed_config = MatcherConfig::builder().index_min_entries(1).build().unwrap();
        let linear = process_batch(&patients, &table, MatcherConfig::default()).unwrap();
        let indexed = process_batch(&patients, &table, indexed_config).unwrap();

        let codes = |outcome: &symptom_dx::BatchOutcome| -> Vec<String> {
            outcome.results.iter().map(|r| r.icd_code.clone()).collect()
        };
        assert_eq!(codes(&linear), codes(&indexed));
    }
}
