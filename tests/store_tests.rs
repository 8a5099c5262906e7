//! Score store tests - profile identity, monotonic bests, write skipping.
//!
//! Each test works against its own file under the system temp directory.

use std::fs;
use std::path::PathBuf;

use tui_mole::store::{ScoreStore, DEFAULT_DIFFICULTY};
use tui_mole::types::Difficulty;
use uuid::Uuid;

struct TempStore {
    path: PathBuf,
}

impl TempStore {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("tui-mole-test-{}.json", Uuid::new_v4()));
        Self { path }
    }

    fn open(&self) -> ScoreStore {
        ScoreStore::new(&self.path)
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_missing_file_reads_as_empty_collection() {
    let tmp = TempStore::new();
    let store = tmp.open();
    assert!(store.load_profiles().unwrap().is_empty());
    assert!(store.current_user().is_none());
    assert_eq!(store.max_score(Difficulty::Easy), None);
}

#[test]
fn test_create_persists_a_fresh_profile() {
    let tmp = TempStore::new();
    let mut store = tmp.open();
    store.create_or_resume("Ana").unwrap();

    let user = store.current_user().expect("current user set");
    assert_eq!(user.name, "ana");
    assert_eq!(user.display_name, "Ana");
    assert_eq!(user.last_difficulty, DEFAULT_DIFFICULTY);
    for d in Difficulty::ALL {
        assert_eq!(user.score_for(d), 0);
    }

    let profiles = store.load_profiles().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, user.id);
}

#[test]
fn test_case_and_accent_variants_resolve_to_one_profile() {
    let tmp = TempStore::new();
    let mut store = tmp.open();

    store.create_or_resume("Aná").unwrap();
    let id = store.current_user().unwrap().id;

    for variant in ["ana", "ANA", "Aná", "anÁ"] {
        store.create_or_resume(variant).unwrap();
        assert_eq!(store.current_user().unwrap().id, id, "variant {variant:?}");
    }

    // No second record was created.
    assert_eq!(store.load_profiles().unwrap().len(), 1);
    // First spelling is kept for display.
    assert_eq!(store.current_user().unwrap().display_name, "Aná");
}

#[test]
fn test_resume_across_store_instances() {
    let tmp = TempStore::new();
    let id = {
        let mut store = tmp.open();
        store.create_or_resume("Bruno").unwrap();
        store.current_user().unwrap().id
    };

    let mut reopened = tmp.open();
    reopened.create_or_resume("bruno").unwrap();
    assert_eq!(reopened.current_user().unwrap().id, id);
}

#[test]
fn test_best_score_never_decreases() {
    let tmp = TempStore::new();
    let mut store = tmp.open();
    store.create_or_resume("Ana").unwrap();

    store.update_user_data(Difficulty::Easy, Some(100)).unwrap();
    assert_eq!(store.max_score(Difficulty::Easy), Some(100));

    store.update_user_data(Difficulty::Easy, Some(50)).unwrap();
    store.update_user_data(Difficulty::Easy, Some(100)).unwrap();
    store.update_user_data(Difficulty::Easy, None).unwrap();
    assert_eq!(store.max_score(Difficulty::Easy), Some(100));

    // The persisted copy agrees.
    let profiles = store.load_profiles().unwrap();
    assert_eq!(profiles[0].score_for(Difficulty::Easy), 100);
}

#[test]
fn test_scores_are_tracked_per_tier() {
    let tmp = TempStore::new();
    let mut store = tmp.open();
    store.create_or_resume("Ana").unwrap();

    store.update_user_data(Difficulty::Easy, Some(40)).unwrap();
    store.update_user_data(Difficulty::Hard, Some(90)).unwrap();

    assert_eq!(store.max_score(Difficulty::Easy), Some(40));
    assert_eq!(store.max_score(Difficulty::Hard), Some(90));
    assert_eq!(store.max_score(Difficulty::Medium), Some(0));
}

#[test]
fn test_redundant_update_skips_the_persistence_write() {
    let tmp = TempStore::new();
    let mut store = tmp.open();
    store.create_or_resume("Ana").unwrap();
    store.update_user_data(Difficulty::Easy, Some(100)).unwrap();

    // Remove the file; an update that changes nothing must not recreate it.
    fs::remove_file(store.path()).unwrap();
    store.update_user_data(Difficulty::Easy, Some(80)).unwrap();
    assert!(!store.path().exists(), "redundant update wrote the file");

    // A difficulty change does write.
    store.update_user_data(Difficulty::Medium, None).unwrap();
    assert!(store.path().exists());
}

#[test]
fn test_last_difficulty_follows_updates_and_survives_reopen() {
    let tmp = TempStore::new();
    {
        let mut store = tmp.open();
        store.create_or_resume("Ana").unwrap();
        store.update_user_data(Difficulty::Hard, Some(30)).unwrap();
    }

    let mut reopened = tmp.open();
    reopened.create_or_resume("ana").unwrap();
    let user = reopened.current_user().unwrap();
    assert_eq!(user.last_difficulty, Difficulty::Hard);
    assert_eq!(user.score_for(Difficulty::Hard), 30);
}

#[test]
fn test_update_without_current_user_is_a_noop() {
    let tmp = TempStore::new();
    let mut store = tmp.open();

    store.update_user_data(Difficulty::Easy, Some(999)).unwrap();
    assert!(!store.path().exists());
    assert_eq!(store.max_score(Difficulty::Easy), None);
}

#[test]
fn test_profiles_accumulate_per_player() {
    let tmp = TempStore::new();
    let mut store = tmp.open();

    store.create_or_resume("Ana").unwrap();
    store.update_user_data(Difficulty::Easy, Some(10)).unwrap();
    store.create_or_resume("Bruno").unwrap();
    store.update_user_data(Difficulty::Easy, Some(20)).unwrap();

    let profiles = store.load_profiles().unwrap();
    assert_eq!(profiles.len(), 2);

    // Switching back resumes Ana's record untouched.
    store.create_or_resume("ana").unwrap();
    assert_eq!(store.max_score(Difficulty::Easy), Some(10));
}
