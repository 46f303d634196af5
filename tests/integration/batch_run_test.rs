#[cfg(test)]
mod tests {
    use std::fs;

    use symptom_dx::{DxError, export_results, read_results, render_results, run_batch};

    use crate::utils::{
        sample_patients_path, sample_reference_path, sample_vitals_path, scratch_config, write_file,
    };

    #[test]
    fn test_run_batch_writes_results_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path(), sample_reference_path(), sample_patients_path());

        let report = run_batch(&config).unwrap();
        assert_eq!(report.outcome.total_records, 5);
        assert_eq!(report.outcome.processed_count, 4);
        assert_eq!(report.outcome.error_count, 1);
        assert_eq!(report.output_path, config.output_path);

        assert_eq!(report.summary.total, 4);
        assert_eq!(report.summary.matched, 3);
        assert_eq!(report.summary.by_diagnosis.get("Keratitis"), Some(&1));
        assert_eq!(report.summary.by_diagnosis.get("Unknown"), Some(&1));
        assert_eq!(report.summary.by_severity.get("Mild"), Some(&2));

        let written = read_results(&config.output_path).unwrap();
        assert_eq!(written, report.outcome.results);
    }

    #[test]
    fn test_last_results_download_verbatim_and_listed() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(dir.path(), sample_reference_path(), sample_patients_path());
        run_batch(&config).unwrap();

        let mut downloaded = Vec::new();
        export_results(&config.output_path, &mut downloaded).unwrap();
        assert_eq!(downloaded, fs::read(&config.output_path).unwrap());

        let listed = render_results(&read_results(&config.output_path).unwrap());
        assert!(listed.contains("1. jane.doe@example.com: Keratitis (ICD H16.9, CPT 92004)"));
        assert_eq!(listed.lines().filter(|line| !line.starts_with(' ')).count(), 4);
    }

    #[test]
    fn test_run_batch_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let csv_config =
            scratch_config(dir.path(), sample_reference_path(), sample_patients_path());
        run_batch(&csv_config).unwrap();

        let json_config = scratch_config(dir.path(), sample_reference_path(), sample_vitals_path());
        run_batch(&json_config).unwrap();

        let written = read_results(&json_config.output_path).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].diagnosis, "Retinal detachment");
    }

    #[test]
    fn test_missing_reference_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = scratch_config(
            dir.path(),
            dir.path().join("icd_cpt_codes_extended.csv"),
            sample_patients_path(),
        );

        let err = run_batch(&config).unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().contains("reference table"));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_empty_patient_file_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let patients = write_file(dir.path(), "patients.csv", "").unwrap();
        let config = scratch_config(dir.path(), sample_reference_path(), patients);

        assert!(run_batch(&config).unwrap_err().is_missing_input());
        assert!(!config.output_path.exists());
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = scratch_config(dir.path(), sample_reference_path(), sample_patients_path());
        run_batch(&good).unwrap();
        let before = fs::read_to_string(&good.output_path).unwrap();

        let patients =
            write_file(dir.path(), "patients.csv", "email,age\na@example.com,40\n").unwrap();
        let bad = scratch_config(dir.path(), sample_reference_path(), patients);
        assert!(matches!(run_batch(&bad), Err(DxError::Schema(_))));

        let after = fs::read_to_string(&good.output_path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_unsupported_patient_format() {
        let dir = tempfile::tempdir().unwrap();
        let patients = write_file(dir.path(), "patients.txt", "symptoms\npain\n").unwrap();
        let config = scratch_config(dir.path(), sample_reference_path(), patients);
        assert!(matches!(run_batch(&config), Err(DxError::Schema(_))));
    }

    #[test]
    fn test_all_records_without_symptoms_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let patients = write_file(
            dir.path(),
            "patients.csv",
            "email,symptoms\na@example.com,\nb@example.com, \n",
        )
        .unwrap();
        let config = scratch_config(dir.path(), sample_reference_path(), patients);

        let report = run_batch(&config).unwrap();
        assert_eq!(report.outcome.error_count, 2);
        assert!(report.outcome.results.is_empty());

        let contents = fs::read_to_string(&config.output_path).unwrap();
        assert!(contents.starts_with("patient_email,diagnosis,icd_code"));
        assert!(read_results(&config.output_path).unwrap().is_empty());
    }
}
