//! Library-level scenarios: parse, store, retrieve, generate.

use codesamples::error::{MarkupViolation, SampleError};
use codesamples::generate::{SampleGenerator, ServiceModel};
use codesamples::store::{write_samples, SampleReader};
use codesamples::MarkupParser;
use std::path::Path;
use tempfile::TempDir;

fn parse(input: &str) -> codesamples::Result<Vec<codesamples::SampleRecord>> {
    MarkupParser::default().parse_str("Samples.java", input)
}

#[test]
fn stored_samples_read_back_unchanged() {
    let input = "\
//BEGIN_SAMPLE:S.A
//TITLE:First
//DESCRIPTION:First sample
    alpha();
        beta();
//END_SAMPLE
//BEGIN_SAMPLE:T.B
//TITLE:Second
//DESCRIPTION:Other service
gamma();
//END_SAMPLE
//BEGIN_SAMPLE:S.C
//TITLE:Third
//DESCRIPTION:Same service again
delta();
//END_SAMPLE
";
    let samples = parse(input).unwrap();
    let dir = TempDir::new().unwrap();
    let written = write_samples(&samples, dir.path()).unwrap();
    assert_eq!(written.len(), 2);

    let reader = SampleReader::new(dir.path()).unwrap();
    for record in &samples {
        let got = reader
            .read_sample(record.service(), record.id())
            .unwrap()
            .unwrap();
        assert_eq!(got.title(), record.title());
        assert_eq!(got.description(), record.description());
        assert_eq!(got.content(), record.formatted_code());
    }
    let a = reader.read_sample("S", "A").unwrap().unwrap();
    assert_eq!(a.content(), "alpha();\n    beta();");
}

#[test]
fn hidden_lines_never_reach_the_store() {
    let input = "\
//BEGIN_SAMPLE:S.A
//TITLE:t
//DESCRIPTION:d
visible();
//BEGIN_HIDDEN
secret();
//END_HIDDEN
//END_SAMPLE
";
    let samples = parse(input).unwrap();
    let dir = TempDir::new().unwrap();
    write_samples(&samples, dir.path()).unwrap();
    let stored = std::fs::read_to_string(dir.path().join("S.json")).unwrap();
    assert!(!stored.contains("secret"));
    assert!(stored.contains("visible();"));
}

#[test]
fn end_while_hidden_is_rejected() {
    let input = "\
//BEGIN_SAMPLE:S.A
//TITLE:t
//DESCRIPTION:d
x();
//BEGIN_HIDDEN
//END_SAMPLE
";
    match parse(input).unwrap_err() {
        SampleError::Markup { violation, line, .. } => {
            assert_eq!(violation, MarkupViolation::EndWhileHidden);
            assert_eq!(line, 6);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn generated_samples_survive_extraction_and_storage() {
    let path = format!("{}/tests/fixtures/models/s3.json", env!("CARGO_MANIFEST_DIR"));
    let model = ServiceModel::from_path(Path::new(&path)).unwrap();
    let source = SampleGenerator::new(&model).generate().unwrap();
    let samples = MarkupParser::default()
        .parse_str("AmazonS3GeneratedSamples.java", &source)
        .unwrap();
    assert_eq!(samples.len(), 2);

    let dir = TempDir::new().unwrap();
    write_samples(&samples, dir.path()).unwrap();
    let reader = SampleReader::new(dir.path()).unwrap();
    let put = reader.read_sample("AmazonS3", "PutObject").unwrap().unwrap();
    assert_eq!(put.title(), "To upload an object");
    assert_eq!(
        put.content(),
        "AmazonS3 client = new AmazonS3Client();\n\
         PutObjectRequest request = new PutObjectRequest()\n        \
         .withBucket(\"examplebucket\")\n        \
         //Object key name\n        \
         .withKey(\"HappyFace.jpg\")\n        \
         .addMetadataEntry(\"owner\", \"alice\");\n\
         PutObjectResult response = client.putObject(request);"
    );
}
