// Wire-format tests for the diagnosis API payloads.

use clinic_scribe::{DiagnoseOptions, Diagnosis, DiagnosisResponse, TranscriptionResponse};

#[test]
fn test_diagnosis_response_uses_portuguese_wire_names() {
    let raw = r#"{
        "success": true,
        "diagnostico": "virose",
        "doencas": ["gripe"],
        "exames": ["hemograma"],
        "medicamentos": ["dipirona"],
        "observacoes": "repouso",
        "confianca": 0.9,
        "timestamp": "2026-08-30T12:00:00Z"
    }"#;

    let response: DiagnosisResponse = serde_json::from_str(raw).unwrap();
    assert!(response.success);
    assert_eq!(response.diagnosis, "virose");

    let diagnosis: Diagnosis = response.into();
    assert_eq!(diagnosis.conditions, vec!["gripe"]);
    assert_eq!(diagnosis.confidence, Some(0.9));
}

#[test]
fn test_confidence_is_optional() {
    let raw = r#"{
        "success": true,
        "diagnostico": "a avaliar",
        "doencas": [],
        "exames": [],
        "medicamentos": [],
        "observacoes": "",
        "timestamp": "2026-08-30T12:00:00Z"
    }"#;

    let response: DiagnosisResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.confidence, None);
}

#[test]
fn test_transcription_response_shape() {
    let raw = r#"{
        "success": true,
        "transcript": "paciente com febre",
        "timestamp": "2026-08-30T12:00:00Z"
    }"#;

    let response: TranscriptionResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.transcript, "paciente com febre");
    assert_eq!(response.confidence, None);
}

#[test]
fn test_diagnose_options_omit_missing_patient_data() {
    let json = serde_json::to_string(&DiagnoseOptions::default()).unwrap();
    assert_eq!(json, "{}");

    let options = DiagnoseOptions {
        patient_age: Some(42),
        patient_gender: Some("F".to_string()),
    };
    let value = serde_json::to_value(&options).unwrap();
    assert_eq!(value["patientAge"], 42);
    assert_eq!(value["patientGender"], "F");
}
