//! Loader behavior against generator-shaped block files.

use docdex::{IndexError, Loader};
use std::fs;
use tempfile::TempDir;

const ALL_0: &str = r#"var searchData=
[
  ['parse_5fpolicy_12',['parse_policy',['../classdocs_1_1parse__policy.html',1,'docs::parse_policy'],['../classdocs_1_1reader.html#a3f1',1,'docs::reader::parse_policy()']]],
  ['parser_13',['parser',['../classdocs_1_1parser.html',1,'docs']]],
  ['peek_14',['peek',['../classdocs_1_1parser.html#a91c',1,'docs::parser']]]
];
"#;

#[test]
fn test_load_single_block() {
    let mut loader = Loader::new();
    loader.add_str("all_0.js", ALL_0).unwrap();
    let store = loader.finish();

    assert_eq!(store.len(), 3);

    let record = store.get("parse_5fpolicy_12").unwrap();
    assert_eq!(&*record.label, "parse_policy");
    assert_eq!(record.targets.len(), 2);
    assert_eq!(record.targets[0].kind, 1);
    assert_eq!(
        &*record.targets[1].locator,
        "../classdocs_1_1reader.html#a3f1"
    );
}

#[test]
fn test_directory_loads_js_files_in_name_order() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("search");
    fs::create_dir(&dir).unwrap();

    // Same id in both shards: the later file is the authoritative revision.
    fs::write(
        dir.join("all_0.js"),
        "var searchData=\n[\n  ['peek_14',['peek',['../old.html#a1',1,'docs::parser']]]\n];\n",
    )
    .unwrap();
    fs::write(
        dir.join("all_1.js"),
        "var searchData=\n[\n  ['peek_14',['peek',['../new.html#a2',1,'docs::parser']]],\n  ['poll_15',['poll',['../p.html#a3',1,'docs::parser']]]\n];\n",
    )
    .unwrap();
    // Non-block files in the directory are ignored.
    fs::write(dir.join("search.css"), "body {}").unwrap();

    let mut loader = Loader::new();
    loader.add_path(&dir).unwrap();

    let summaries = loader.summaries().to_vec();
    assert_eq!(summaries.len(), 2);
    assert!(summaries[0].source.ends_with("all_0.js"));
    assert_eq!(summaries[0].records, 1);
    assert_eq!(summaries[1].records, 2);

    let store = loader.finish();
    assert_eq!(store.len(), 2);
    assert_eq!(&*store.get("peek_14").unwrap().targets[0].locator, "../new.html#a2");
}

#[test]
fn test_duplicate_id_within_one_file_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("all_0.js");
    fs::write(
        &file,
        "[['peek_14',['peek',['../a.html',1,'docs']]],['peek_14',['peek',['../b.html',1,'docs']]]]",
    )
    .unwrap();

    let mut loader = Loader::new();
    let err = loader.add_path(&file).unwrap_err();
    assert!(matches!(err, IndexError::DuplicateId { ref id, .. } if id == "peek_14"));
}

#[test]
fn test_missing_path_is_io_error() {
    let temp = TempDir::new().unwrap();
    let mut loader = Loader::new();
    let err = loader.add_path(&temp.path().join("absent.js")).unwrap_err();
    assert!(matches!(err, IndexError::Io { .. }));
}

#[test]
fn test_entities_decoded_in_labels_and_contexts() {
    let block = r#"var searchData=
[
  ['operator_3d_3d_40',['operator==',['../cmp.html#a7',1,'docs::basic_value&lt; Policy &gt;::operator==()']]]
];
"#;
    let mut loader = Loader::new();
    loader.add_str("operators_0.js", block).unwrap();
    let store = loader.finish();

    let record = store.get("operator_3d_3d_40").unwrap();
    assert_eq!(
        &*record.targets[0].context,
        "docs::basic_value< Policy >::operator==()"
    );
}

#[test]
fn test_empty_block_array_is_valid_and_empty() {
    let mut loader = Loader::new();
    loader.add_str("all_9.js", "var searchData=\n[\n];\n").unwrap();
    assert_eq!(loader.summaries()[0].records, 0);
    assert!(loader.finish().is_empty());
}

#[test]
fn test_malformed_block_reports_source_name() {
    let mut loader = Loader::new();
    let err = loader
        .add_str("broken.js", "[['id_1',['label',[]]]]")
        .unwrap_err();
    match err {
        IndexError::MalformedRecord {
            source_name,
            position,
            reason,
        } => {
            assert_eq!(source_name, "broken.js");
            assert_eq!(position, 0);
            assert_eq!(reason, "no targets");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}
