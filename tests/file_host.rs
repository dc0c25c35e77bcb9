//! File-backed host tests: the `watch` flow without real file system events

use std::time::Duration;
use tempfile::tempdir;
use vdata_nav::host::{FileHost, LogSurface, TextHost};
use vdata_nav::runtime::Runtime;
use vdata_nav::scheduler::ManualTimers;
use vdata_nav::schema::{FileSchemaStore, SchemaStore};
use vdata_nav::EditorConfig;

#[test]
fn test_saved_file_is_rebuilt_after_debounce() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("abilities.vdata");
    std::fs::write(&path, "{\n\tability_a =\n\t{\n\t}\n}\n").unwrap();

    let mut runtime = Runtime::start(
        FileHost::new(&path),
        ManualTimers::new(),
        Box::new(FileSchemaStore::at(dir.path().join("schema.json"))),
        Box::new(LogSurface::new()),
        EditorConfig::default(),
    )
    .unwrap();
    assert_eq!(runtime.view().items.len(), 1);
    assert_eq!(runtime.view().folds.len(), 2);

    std::fs::write(
        &path,
        "{\n\tability_a =\n\t{\n\t}\n\tability_b =\n\t{\n\t}\n}\n",
    )
    .unwrap();
    runtime.host_mut().notify_changed();
    runtime.pump();
    runtime.timers_mut().advance(Duration::from_millis(300));
    assert!(runtime.tick());

    let labels: Vec<String> = runtime.view().items.into_iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["ability_a", "ability_b"]);
    assert_eq!(runtime.view().folds.len(), 3);
}

#[test]
fn test_schema_selection_is_written_to_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hero.vdata");
    std::fs::write(&path, "{\n\t_class = \"CCitadelHero\"\n}\n").unwrap();
    let store_path = dir.path().join("state").join("schema.json");

    let mut runtime = Runtime::start(
        FileHost::new(&path),
        ManualTimers::new(),
        Box::new(FileSchemaStore::at(&store_path)),
        Box::new(LogSurface::new()),
        EditorConfig::default(),
    )
    .unwrap();

    runtime.host_mut().set_position(2, 1).unwrap();
    runtime.pump();

    let record = FileSchemaStore::at(&store_path).load().unwrap().unwrap();
    assert_eq!(record.name, "CCitadelHero");
    assert!(record.ts > 0);
}

#[test]
fn test_missing_file_fails_to_start() {
    let dir = tempdir().unwrap();
    let result = Runtime::start(
        FileHost::new(dir.path().join("missing.vdata")),
        ManualTimers::new(),
        Box::new(FileSchemaStore::at(dir.path().join("schema.json"))),
        Box::new(LogSurface::new()),
        EditorConfig::default(),
    );
    assert!(result.is_err());
}
