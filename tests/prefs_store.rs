use eternum::prefs::{keys, NarrationPrefs, PrefStore};

fn temp_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("prefs.toml")
}

#[tokio::test]
async fn missing_file_reads_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = PrefStore::open(temp_path(&dir)).await.unwrap();

    assert_eq!(store.get(keys::SCREEN_READER).await, None);
    assert_eq!(store.narration_prefs().await, NarrationPrefs::default());

    let snapshot = store.settings_snapshot().await;
    assert!(!snapshot.notifications);
    assert_eq!(snapshot.font_size, 16);
    assert!(snapshot.audio);
}

#[tokio::test]
async fn values_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir);

    let store = PrefStore::open(path.clone()).await.unwrap();
    store.set_bool(keys::SCREEN_READER, true).await.unwrap();
    store.set_bool(keys::SPEAK_MENUS, true).await.unwrap();
    store.set(keys::FONT_SIZE, "20").await.unwrap();

    let reopened = PrefStore::open(path).await.unwrap();
    let prefs = reopened.narration_prefs().await;
    assert!(prefs.screen_reader);
    assert!(prefs.speak_menus);
    assert_eq!(prefs.locale, "pt-BR");
    assert_eq!(reopened.settings_snapshot().await.font_size, 20);
}

#[tokio::test]
async fn reset_clears_settings_but_not_the_burial_handoff() {
    let dir = tempfile::tempdir().unwrap();
    let store = PrefStore::open(temp_path(&dir)).await.unwrap();

    store.set_bool(keys::SCREEN_READER, true).await.unwrap();
    store.set_bool(keys::NOTIFICATIONS, true).await.unwrap();
    store.set(keys::BURIAL_SITE, "Q:12 L:34").await.unwrap();

    store.reset_settings().await.unwrap();

    assert_eq!(store.narration_prefs().await, NarrationPrefs::default());
    assert_eq!(store.get(keys::NOTIFICATIONS).await, None);
    assert_eq!(
        store.get(keys::BURIAL_SITE).await.as_deref(),
        Some("Q:12 L:34")
    );
}

#[tokio::test]
async fn malformed_values_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = PrefStore::open(temp_path(&dir)).await.unwrap();

    store.set(keys::FONT_SIZE, "huge").await.unwrap();
    store.set(keys::SCREEN_READER, "yes").await.unwrap();

    assert_eq!(store.settings_snapshot().await.font_size, 16);
    assert!(!store.narration_prefs().await.screen_reader);
}

#[tokio::test]
async fn remove_many_only_touches_the_given_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = PrefStore::open(temp_path(&dir)).await.unwrap();

    store.set(keys::FONT_SIZE, "18").await.unwrap();
    store.set_bool(keys::AUDIO, false).await.unwrap();
    store.remove_many(&[keys::FONT_SIZE]).await.unwrap();

    assert_eq!(store.get(keys::FONT_SIZE).await, None);
    assert_eq!(store.get(keys::AUDIO).await.as_deref(), Some("false"));
}
