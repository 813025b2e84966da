//! Integration tests for the file-backed role cache
//!
//! The role cache is the piece that must survive process restarts, so these
//! tests exercise RoleCache over FileStore: persistence across instances,
//! recovery from corrupted state files, and tampered values.

use std::sync::Arc;

use tempfile::TempDir;

use rafiq::adapters::storage::FileStore;
use rafiq::core::roles::{RoleCache, ROLE_CACHE_KEY};
use rafiq::domain::Role;

fn cache_at(path: &std::path::Path) -> RoleCache {
    RoleCache::new(Arc::new(FileStore::new(path)))
}

#[test]
fn test_role_survives_new_store_instance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    cache_at(&path).set(Role::Doctor).unwrap();

    // A fresh store instance reads the same file.
    assert_eq!(cache_at(&path).get(), Some(Role::Doctor));
}

#[test]
fn test_clear_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let cache = cache_at(&path);
    cache.set(Role::Patient).unwrap();
    cache.clear().unwrap();

    assert_eq!(cache_at(&path).get(), None);
}

#[test]
fn test_corrupted_file_reads_absent_and_recovers_on_set() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();

    let cache = cache_at(&path);
    assert_eq!(cache.get(), None);

    // Writing replaces the corrupt file with a fresh one.
    cache.set(Role::Patient).unwrap();
    assert_eq!(cache_at(&path).get(), Some(Role::Patient));
}

#[test]
fn test_tampered_role_value_reads_absent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, format!("{{\"{ROLE_CACHE_KEY}\":\"superuser\"}}")).unwrap();

    assert_eq!(cache_at(&path).get(), None);
}

#[test]
fn test_missing_parent_directories_are_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("state.json");

    cache_at(&path).set(Role::Doctor).unwrap();

    assert!(path.exists());
    assert_eq!(cache_at(&path).get(), Some(Role::Doctor));
}

#[test]
fn test_roles_overwrite_each_other() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");

    let cache = cache_at(&path);
    cache.set(Role::Patient).unwrap();
    cache.set(Role::Doctor).unwrap();

    assert_eq!(cache_at(&path).get(), Some(Role::Doctor));
}
