// Tests for the JSON-file-backed consultation history.

use chrono::Utc;
use clinic_scribe::{Consultation, Diagnosis, HistoryStore};
use tempfile::TempDir;

fn diagnosis(text: &str) -> Diagnosis {
    Diagnosis {
        diagnosis: text.to_string(),
        conditions: vec!["gripe".to_string()],
        exams: vec!["hemograma".to_string()],
        medications: vec!["dipirona".to_string()],
        notes: "repouso e hidratacao".to_string(),
        confidence: Some(0.8),
    }
}

fn consultation(id: i64, text: &str) -> Consultation {
    Consultation {
        id,
        date: Utc::now(),
        transcript: format!("paciente {} ", id),
        diagnosis: diagnosis(text),
    }
}

#[test]
fn test_missing_file_is_empty_history() {
    let dir = TempDir::new().unwrap();
    let store = HistoryStore::open(dir.path().join("consultations.json")).unwrap();

    assert!(store.consultations().is_empty());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consultations.json");

    let mut store = HistoryStore::open(&path).unwrap();
    store
        .save(Consultation::new(
            "paciente com febre ".to_string(),
            diagnosis("virose"),
        ))
        .unwrap();

    let reloaded = HistoryStore::open(&path).unwrap();
    assert_eq!(reloaded.consultations().len(), 1);
    assert_eq!(reloaded.consultations()[0].diagnosis.diagnosis, "virose");
    assert_eq!(reloaded.consultations()[0].transcript, "paciente com febre ");
}

#[test]
fn test_newest_first_and_trimmed_to_max() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consultations.json");

    let mut store = HistoryStore::with_max_entries(&path, 2).unwrap();
    store.save(consultation(1, "a")).unwrap();
    store.save(consultation(2, "b")).unwrap();
    store.save(consultation(3, "c")).unwrap();

    let entries = store.consultations();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, 3);
    assert_eq!(entries[1].id, 2);
}

#[test]
fn test_delete_by_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consultations.json");

    let mut store = HistoryStore::open(&path).unwrap();
    store.save(consultation(1, "a")).unwrap();
    store.save(consultation(2, "b")).unwrap();

    store.delete(1).unwrap();

    assert_eq!(store.consultations().len(), 1);
    assert_eq!(store.consultations()[0].id, 2);

    // Unknown ids are ignored
    store.delete(99).unwrap();
    assert_eq!(store.consultations().len(), 1);
}

#[test]
fn test_clear_removes_backing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consultations.json");

    let mut store = HistoryStore::open(&path).unwrap();
    store.save(consultation(1, "a")).unwrap();
    assert!(path.exists());

    store.clear().unwrap();

    assert!(store.consultations().is_empty());
    assert!(!path.exists());

    let reloaded = HistoryStore::open(&path).unwrap();
    assert!(reloaded.consultations().is_empty());
}

#[test]
fn test_diagnosis_persisted_with_wire_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("consultations.json");

    let mut store = HistoryStore::open(&path).unwrap();
    store.save(consultation(1, "virose")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"diagnostico\""));
    assert!(raw.contains("\"doencas\""));
    assert!(raw.contains("\"observacoes\""));
}
