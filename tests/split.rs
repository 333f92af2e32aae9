use std::fs;

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;

use recipe_chunks::{chunks, combine, split};

fn records(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({"id": i})).collect()
}

#[test]
fn every_chunk_but_the_last_is_full() {
    let dir = tempdir().unwrap();
    let chunks_dir = dir.path().join("chunks");

    let written = split::write_chunks(&records(5), &chunks_dir, 2).unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(written[0], chunks_dir.join("part0.json"));
    assert_eq!(written[2], chunks_dir.join("part2.json"));

    let sizes: Vec<usize> = written
        .iter()
        .map(|p| combine::read_records(p).unwrap().len())
        .collect();
    assert_eq!(sizes, vec![2, 2, 1]);
}

#[test]
fn exact_multiple_leaves_no_empty_trailing_chunk() {
    let dir = tempdir().unwrap();
    let chunks_dir = dir.path().join("chunks");

    let written = split::write_chunks(&records(4), &chunks_dir, 2).unwrap();

    assert_eq!(written.len(), 2);
    assert!(!chunks_dir.join("part2.json").exists());
}

#[test]
fn empty_input_creates_the_directory_but_no_files() {
    let dir = tempdir().unwrap();
    let chunks_dir = dir.path().join("chunks");

    let written = split::write_chunks(&[], &chunks_dir, 10).unwrap();

    assert!(written.is_empty());
    assert!(chunks_dir.is_dir());
    assert_eq!(fs::read_dir(&chunks_dir).unwrap().count(), 0);
}

#[test]
fn zero_chunk_size_is_rejected() {
    let dir = tempdir().unwrap();
    assert!(split::write_chunks(&records(3), dir.path(), 0).is_err());
}

#[test]
fn split_then_combine_round_trips_the_payload() {
    let dir = tempdir().unwrap();
    let chunks_dir = dir.path().join("chunks");
    let original = vec![
        json!({"title": "Борщ украинский", "servings": 4}),
        json!({"title": "Okonomiyaki お好み焼き"}),
        json!({"title": "Tarte Tatin", "steps": ["peel", "caramelize", "bake"]}),
        json!(null),
        json!(42),
    ];

    split::write_chunks(&original, &chunks_dir, 2).unwrap();

    let mut recombined = Vec::new();
    for chunk in chunks::list_chunks(&chunks_dir).unwrap() {
        recombined.append(&mut combine::read_records(&chunk.path).unwrap());
    }
    assert_eq!(recombined, original);
}
