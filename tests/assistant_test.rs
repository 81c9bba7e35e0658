//! End-to-end submission flow: advisor + recommenders + entry store.

use crop_advisor::{
    Assistant, Catalog, EntryStore, RotationStatus,
};
use tempfile::tempdir;

fn assistant_with_db(dir: &tempfile::TempDir) -> Assistant {
    let store = EntryStore::open(dir.path().join("entries.db")).unwrap();
    Assistant::new(Catalog::builtin(), store)
}

#[test]
fn same_family_submission_warns_and_is_logged() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    // Wheat -> Rice are both Poaceae.
    let report = assistant.submit(3.0, "Wheat", "Rice", "Clay").unwrap();

    assert_eq!(report.rotation.status, RotationStatus::SameFamily);
    assert!(report.rotation.message.contains("Poaceae"));
    for name in ["Soybean", "Potato", "Cotton"] {
        assert!(report.rotation.alternatives.iter().any(|a| a == name));
    }
    for name in ["Wheat", "Maize", "Rice", "Barley"] {
        assert!(!report.rotation.alternatives.iter().any(|a| a == name));
    }

    // Clay is high fertility, slow drainage: both sentences, fertility first.
    assert!(report
        .soil_management
        .starts_with("Maintain fertility with residues/cover crops."));
    assert!(report.soil_management.contains("raised beds"));

    assert!(report.saved.is_some());
    let entries = assistant.list_entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, report.saved.unwrap());
    assert_eq!(entries[0].recommendation, report.rotation.message);
}

#[test]
fn good_rotation_suggests_soil_compatible_next_crops() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    let report = assistant.submit(1.5, "Wheat", "Soybean", "Loamy").unwrap();

    assert_eq!(report.rotation.status, RotationStatus::Good);
    assert!(report.rotation.alternatives.is_empty());

    for name in [
        "Soybean", "Potato", "Tomato", "Cotton", "Sunflower", "Cabbage", "Carrot", "Onion",
        "Lentil", "Chickpea", "Mustard",
    ] {
        assert!(report.next_crops.iter().any(|c| c == name), "missing {}", name);
    }
    for name in ["Wheat", "Maize", "Rice", "Barley"] {
        assert!(!report.next_crops.iter().any(|c| c == name));
    }

    // Loamy suits every builtin technique.
    assert!(report.soil_techniques.iter().any(|t| t == "Crop Rotation"));
    assert!(report.soil_techniques.iter().any(|t| t == "Drip Irrigation"));
}

#[test]
fn submission_round_trips_all_seven_fields() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    let report = assistant.submit(2.25, "Rice", "Potato", "Sandy").unwrap();
    let entries = assistant.list_entries().unwrap();
    let entry = &entries[0];

    assert_eq!(entry.farmland_size, 2.25);
    assert_eq!(entry.previous_crop, "Rice");
    assert_eq!(entry.current_crop, "Potato");
    assert_eq!(entry.soil_type, "Sandy");
    assert_eq!(entry.recommendation, report.rotation.message);
    assert_eq!(entry.fertilizer, report.fertilizer);
    assert_eq!(entry.techniques, report.crop_techniques.join(", "));
}

#[test]
fn entries_come_back_newest_first() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    let first = assistant.submit(1.0, "Wheat", "Soybean", "Loamy").unwrap();
    let second = assistant.submit(2.0, "Soybean", "Maize", "Sandy").unwrap();

    let entries = assistant.list_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, second.saved.unwrap());
    assert_eq!(entries[1].id, first.saved.unwrap());
}

#[test]
fn advice_survives_a_missing_store() {
    let mut assistant = Assistant::without_store(Catalog::builtin());

    let report = assistant.submit(2.0, "Wheat", "Rice", "Clay").unwrap();
    assert_eq!(report.rotation.status, RotationStatus::SameFamily);
    assert!(report.saved.is_none());
    assert!(!report.render().is_empty());
}

#[test]
fn unknown_crops_flow_through_as_advice_not_errors() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    let report = assistant.submit(1.0, "Durian", "Wheat", "Clay").unwrap();
    assert_eq!(report.rotation.status, RotationStatus::UnknownCrop);
    assert!(report.rotation.message.contains("Durian"));
    // Fertilizer keys off the current crop, which is known.
    assert!(report.fertilizer.contains("NPK"));
}

#[test]
fn invalid_inputs_are_rejected() {
    let dir = tempdir().unwrap();
    let mut assistant = assistant_with_db(&dir);

    assert!(assistant.submit(0.0, "Wheat", "Rice", "Clay").is_err());
    assert!(assistant.submit(-2.0, "Wheat", "Rice", "Clay").is_err());
    assert!(assistant.submit(f64::NAN, "Wheat", "Rice", "Clay").is_err());
    assert!(assistant.submit(1.0, "Wheat", "Rice", "Martian").is_err());
}
