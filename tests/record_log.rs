//! Black-box tests against the public API: sinks in, log records out
//!
//! Run with: `cargo test --test record_log`

use quadsink::{
    xsd, ConsumerId, Dataset, DatasetClassifier, Destination, DocumentRecord, HashKeyer, LogReader,
    Quad, RecordSerializer, SinkConfig, TripleLogSink,
};
use std::collections::HashSet;
use tempfile::TempDir;

const EINSTEIN: &str = "http://dbpedia.org/resource/Albert_Einstein";

fn config(dir: &TempDir) -> SinkConfig {
    SinkConfig::default().with_log_path(dir.path().join("triples.log"))
}

fn sample_batch() -> Vec<Quad> {
    vec![
        Quad::literal("labels", EINSTEIN, "http://www.w3.org/2000/01/rdf-schema#label", "Albert Einstein", xsd::STRING),
        Quad::resource("article_categories", EINSTEIN, "http://purl.org/dc/terms/subject", "http://dbpedia.org/resource/Category:Physicists"),
        Quad::literal("geo_coordinates", EINSTEIN, "http://www.w3.org/2003/01/geo/wgs84_pos#lat", "48.4", "http://www.w3.org/2001/XMLSchema#float"),
        Quad::literal("short_abstracts", EINSTEIN, "http://www.w3.org/2000/01/rdf-schema#comment", "Physicist.", xsd::STRING),
        Quad::literal("long_abstracts", EINSTEIN, "http://dbpedia.org/ontology/abstract", "German-born physicist.", xsd::STRING),
    ]
}

#[test]
fn records_from_several_documents_are_read_back_in_order() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir);

    for (id, title) in [("1", "Albert Einstein"), ("2", "Ulm"), ("3", "Empty Page")] {
        let sink = TripleLogSink::new(&cfg, title, id);
        sink.open();
        if id != "3" {
            sink.write(&sample_batch());
        }
        sink.close();
    }

    let records = LogReader::read_all(&cfg.log_path).unwrap();
    let ids: Vec<&str> = records.iter().map(|r| r.document_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(records[1].resource_uri, "http://dbpedia.org/resource/Ulm");
    assert!(records[2].is_empty());
}

#[test]
fn abstracts_share_one_consumer_group() {
    let dir = TempDir::new().unwrap();
    let sink = TripleLogSink::new(&config(&dir), "Albert Einstein", "1");
    sink.write(&sample_batch());

    let snapshot = sink.snapshot().unwrap();
    let abstracts = snapshot
        .group(&ConsumerId::from("org.dbpedia.extraction.mappings.AbstractExtractor"))
        .unwrap();
    assert_eq!(abstracts.len(), 2);
    assert_eq!(snapshot.group_count(), 4);
    assert_eq!(snapshot.triple_count(), 5);
}

#[test]
fn stored_keys_match_their_triples() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir);
    let sink = TripleLogSink::new(&cfg, "Albert Einstein", "1");
    sink.write(&sample_batch());
    sink.close();

    let records = LogReader::read_all(&cfg.log_path).unwrap();
    for group in records[0].groups.values() {
        for (key, triple) in group {
            assert_eq!(&HashKeyer::key(&triple.s, &triple.p, &triple.o), key);
        }
    }
}

#[test]
fn record_round_trips_through_the_log() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir);
    let sink = TripleLogSink::new(&cfg, "Albert Einstein", "1");
    sink.write(&sample_batch());
    sink.write(&[Quad::literal("labels", EINSTEIN, "http://example.org/note", "tab\there \"quoted\"\nnewline", xsd::STRING)]);
    let expected = sink.snapshot().unwrap();
    sink.close();

    let records = LogReader::read_all(&cfg.log_path).unwrap();
    assert_eq!(records, vec![expected]);
}

#[test]
fn serializer_round_trips_empty_record() {
    let empty = DocumentRecord::new("0", "http://dbpedia.org/resource/Nothing");
    let blob = RecordSerializer::serialize(&empty).unwrap();
    assert_eq!(blob, "{}");
    let restored = DocumentRecord::from_parts("0", "http://dbpedia.org/resource/Nothing", RecordSerializer::deserialize(&blob).unwrap());
    assert_eq!(restored, empty);
}

#[test]
fn classification_table_is_total() {
    let known: HashSet<&str> = Dataset::ALL.iter().map(|d| d.name()).collect();
    assert_eq!(known.len(), 19);
    for dataset in Dataset::ALL {
        assert_eq!(DatasetClassifier::classify(dataset.name()).as_str(), dataset.consumer());
    }
    assert_eq!(
        DatasetClassifier::classify("UnknownXYZ").as_str(),
        "org.dbpedia.extraction.mappings.MappingExtractor"
    );
}

#[test]
fn failed_append_loses_only_that_record() {
    let dir = TempDir::new().unwrap();
    let good = config(&dir);
    let bad = SinkConfig::default().with_log_path(dir.path().join("missing").join("triples.log"));

    let lost = TripleLogSink::new(&bad, "Lost", "1");
    lost.write(&sample_batch());
    lost.close();

    let kept = TripleLogSink::new(&good, "Kept", "2");
    kept.write(&sample_batch());
    kept.close();

    let records = LogReader::read_all(&good.log_path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].document_id, "2");
    assert!(!bad.log_path.exists());
}
