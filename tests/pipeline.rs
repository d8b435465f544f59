use std::fs;
use std::path::Path;

use piledriver::annotate::Tagger;
use piledriver::io::writer::SampleWriter;
use piledriver::pipelines::conllu::types::{DocMetadata, Document};
use piledriver::pipelines::Conllu;
use piledriver::validate;

fn doc(id: &str, text: &str) -> Document {
    Document::new(
        id.to_string(),
        text.to_string(),
        "test".to_string(),
        DocMetadata::default(),
    )
}

fn write_sample(path: &Path, docs: &[Document]) {
    let mut writer = SampleWriter::create(path).unwrap();
    writer.write(docs).unwrap();
    writer.finish().unwrap();
}

fn header_ids(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|l| l.strip_prefix("# newdoc id = "))
        .map(|id| id.to_string())
        .collect()
}

#[test]
fn slice_partitioning() {
    let dst = tempfile::tempdir().unwrap();
    let sample = dst.path().join("sample.jsonl.gz");
    let docs: Vec<Document> = (0..27000)
        .map(|i| doc(&format!("doc-{}", i), "Slicing is deterministic."))
        .collect();
    write_sample(&sample, &docs);

    let out = dst.path().join("conll");
    let pipeline = Conllu::new(sample, out.clone(), "arxiv".to_string(), 9999, false);
    let summary = pipeline.run_with(&Tagger::new()).unwrap();

    let rows: Vec<usize> = summary.iter().map(|m| m.rows).collect();
    assert_eq!(rows, vec![9999, 9999, 7002]);

    for name in [
        "arxiv_slice0000.conllu",
        "arxiv_slice0001.conllu",
        "arxiv_slice0002.conllu",
    ] {
        assert!(out.join("arxiv").join(name).exists(), "missing {}", name);
    }
    assert!(!out.join("arxiv").join("arxiv_slice0003.conllu").exists());
}

#[test]
fn document_ids_roundtrip_once() {
    let dst = tempfile::tempdir().unwrap();
    let sample = dst.path().join("sample.jsonl.gz");
    let docs: Vec<Document> = (0..30)
        .map(|i| doc(&format!("doc-{}", i), "Each document appears once."))
        .collect();
    write_sample(&sample, &docs);

    let out = dst.path().join("conll");
    let pipeline = Conllu::new(sample, out.clone(), "test".to_string(), 7, false);
    let summary = pipeline.run_with(&Tagger::new()).unwrap();
    assert_eq!(summary.len(), 5);

    let mut seen = Vec::new();
    for meta in &summary {
        let content = fs::read_to_string(&meta.output).unwrap();
        seen.extend(header_ids(&content));
    }

    assert_eq!(seen.len(), 30);
    for i in 0..30 {
        let id = format!("doc-{}", i);
        assert_eq!(seen.iter().filter(|s| **s == id).count(), 1, "id {}", id);
    }
}

#[test]
fn empty_sample_still_writes_a_slice() {
    let dst = tempfile::tempdir().unwrap();
    let sample = dst.path().join("sample.jsonl.gz");
    write_sample(&sample, &[]);

    let out = dst.path().join("conll");
    let pipeline = Conllu::new(sample, out.clone(), "test".to_string(), 9999, false);
    let summary = pipeline.run_with(&Tagger::new()).unwrap();

    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].rows, 0);

    let slice = out.join("test").join("test_slice0000.conllu");
    assert!(slice.exists());
    assert_eq!(fs::read_to_string(&slice).unwrap(), "");
}

#[test_log::test]
fn failing_document_is_skipped_not_fatal() {
    let dst = tempfile::tempdir().unwrap();
    let sample = dst.path().join("sample.jsonl.gz");
    // doc-5 is empty: annotation fails for it and only it
    let docs: Vec<Document> = (0..10)
        .map(|i| {
            if i == 5 {
                doc("doc-5", "")
            } else {
                doc(&format!("doc-{}", i), "This one is fine.")
            }
        })
        .collect();
    write_sample(&sample, &docs);

    let out = dst.path().join("conll");
    let pipeline = Conllu::new(sample, out.clone(), "test".to_string(), 9999, false);
    let summary = pipeline.run_with(&Tagger::new()).unwrap();

    // the slice still counts all 10 rows, the output only has 9 blocks
    assert_eq!(summary[0].rows, 10);
    let content = fs::read_to_string(&summary[0].output).unwrap();
    let ids = header_ids(&content);
    assert_eq!(ids.len(), 9);
    assert!(!ids.contains(&"doc-5".to_string()));
}

#[test]
fn validator_agrees_with_written_output() {
    let dst = tempfile::tempdir().unwrap();
    let sample = dst.path().join("sample.jsonl.gz");
    let docs: Vec<Document> = (0..4)
        .map(|i| {
            doc(
                &format!("doc-{}", i),
                "The dog is running. It stopped here.",
            )
        })
        .collect();
    write_sample(&sample, &docs);

    let out = dst.path().join("conll");
    let pipeline = Conllu::new(sample, out, "test".to_string(), 9999, false);
    let summary = pipeline.run_with(&Tagger::new()).unwrap();
    let slice = Path::new(&summary[0].output);

    let report = validate::validate_file(slice).unwrap();
    // 2 sentences per document, 5 + 4 tokens each
    assert_eq!(report.sentences, 8);
    assert_eq!(report.tokens, 36);

    // tallying is read-only and idempotent
    let again = validate::validate_file(slice).unwrap();
    assert_eq!(report, again);
}
