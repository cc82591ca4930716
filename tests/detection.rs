//! End-to-end detection scenarios over the public API.

use docsim::{
    detect, DetectConfig, DetectionEngine, Reference, ShingleSet, SourceDescriptor, SourceKind,
    SHINGLE_K,
};

const FOX: &str = "The quick brown fox jumps over the lazy dog everyday.";
const CORAL: &str = "Completely unrelated content about aquatic biology and coral reefs.";
const COMPILERS: &str =
    "A tutorial on compiling distributed systems in a functional language.";

fn submission(id: &str) -> SourceDescriptor {
    SourceDescriptor::submission(id, format!("Submission {id}"))
}

#[test]
fn identical_document_scores_approximately_100() {
    let report = detect(FOX, &[Reference::new(FOX, submission("twin"))]);

    assert_eq!(report.matches.len(), 1);
    let m = &report.matches[0];
    assert!(m.combined_score > 99.0, "combined {}", m.combined_score);
    assert!(report.overall_score > 99.0, "overall {}", report.overall_score);
    assert!(
        m.sentence_matches
            .iter()
            .any(|s| s.target_sentence == s.reference_sentence),
        "expected at least one identical sentence pair"
    );
}

#[test]
fn unrelated_document_is_filtered_out() {
    let report = detect(CORAL, &[Reference::new(COMPILERS, submission("other"))]);

    assert!(report.matches.is_empty());
    assert_eq!(report.overall_score, 0.0);
}

#[test]
fn near_duplicate_plus_unrelated_keeps_exactly_one_match() {
    let near_duplicate =
        "The quick brown fox jumps over the lazy dog everyday. What a sight that is.";
    let report = detect(
        FOX,
        &[
            Reference::new(near_duplicate, submission("near")),
            Reference::new(COMPILERS, submission("far")),
        ],
    );

    assert_eq!(report.matches.len(), 1);
    let m = &report.matches[0];
    assert_eq!(m.source.id, "near");
    assert!(m.combined_score > 50.0, "combined {}", m.combined_score);
    // With a single survivor the overall score is that survivor's score.
    assert!((report.overall_score - m.combined_score).abs() < 1e-9);
}

#[test]
fn overall_score_is_mean_of_surviving_scores() {
    let partial = "The quick brown fox jumps over the lazy dog everyday. Extra trailing words.";
    let report = detect(
        FOX,
        &[
            Reference::new(FOX, submission("a")),
            Reference::new(partial, submission("b")),
        ],
    );

    assert_eq!(report.matches.len(), 2);
    let mean = report.matches.iter().map(|m| m.combined_score).sum::<f64>()
        / report.matches.len() as f64;
    assert!((report.overall_score - mean).abs() < 1e-9);
}

#[test]
fn report_never_contains_insignificant_matches() {
    let references: Vec<Reference<SourceDescriptor>> = vec![
        Reference::new(FOX, submission("dup")),
        Reference::new(COMPILERS, submission("unrelated")),
        Reference::new("", submission("empty")),
    ];
    let report = detect(FOX, &references);

    for m in &report.matches {
        assert!(m.combined_score > 20.0, "leaked {}", m.combined_score);
    }
    assert_eq!(report.matches.len(), 1);
}

#[test]
fn sentence_matches_respect_the_minimum_length() {
    let target = format!("Ok. {FOX} No.");
    let report = detect(&target, &[Reference::new(target.as_str(), submission("r"))]);

    for m in &report.matches {
        for s in &m.sentence_matches {
            assert!(s.target_sentence.chars().count() >= 20);
            assert!(s.reference_sentence.chars().count() >= 20);
        }
    }
}

#[test]
fn empty_reference_list_is_exactly_zero() {
    let report = detect::<SourceDescriptor>(FOX, &[]);
    assert_eq!(report.overall_score, 0.0);
    assert!(report.matches.is_empty());
}

#[test]
fn descriptor_contents_are_copied_verbatim() {
    let descriptor = SourceDescriptor {
        id: "web-1".to_string(),
        name: "Some Web Page".to_string(),
        kind: SourceKind::Internet,
        url: Some("https://example.org/page".to_string()),
    };
    let report = detect(FOX, &[Reference::new(FOX, descriptor.clone())]);
    assert_eq!(report.matches[0].source, descriptor);
}

#[test]
fn reports_serialize_to_json() {
    let report = detect(FOX, &[Reference::new(FOX, submission("a"))]);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert!(json["overall_score"].as_f64().expect("score") > 99.0);
    let matches = json["matches"].as_array().expect("matches array");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["source"]["kind"], "submission");
    assert!(matches[0]["sentence_matches"]
        .as_array()
        .is_some_and(|s| !s.is_empty()));
}

#[test]
fn parallel_and_sequential_reports_agree() {
    let target = "The quick brown fox jumps over the lazy dog everyday. \
                  A second sentence with plenty of characters inside it. \
                  Coral reefs host a staggering share of marine species.";
    let references = [
        Reference::new(target, submission("all")),
        Reference::new(
            "Coral reefs host a staggering share of marine species. Unrelated filler here.",
            submission("tail"),
        ),
        Reference::new(COMPILERS, submission("none")),
    ];

    let sequential = detect(target, &references);
    let parallel = DetectionEngine::with_config(DetectConfig {
        use_parallel: true,
        ..Default::default()
    })
    .expect("valid config")
    .detect(target, &references);

    assert_eq!(sequential, parallel);
}

#[test]
fn fingerprints_agree_with_engine_defaults() {
    // Ten words: enough for k = 5 windows; identical text fingerprints equal.
    let text = "one two three four five six seven eight nine ten";
    let a = ShingleSet::fingerprint(text, SHINGLE_K);
    let b = ShingleSet::fingerprint(text, SHINGLE_K);
    assert_eq!(a.jaccard(&b), 100.0);
    assert_eq!(a.len(), 6);
}

#[test]
fn matched_text_sample_is_bounded() {
    let target = "The quick brown fox jumps over the lazy dog everyday. \
                  A second sentence with plenty of characters inside it. \
                  A third sentence that also clears the length cutoff easily.";
    let report = detect(target, &[Reference::new(target, submission("self"))]);

    let m = &report.matches[0];
    assert!(m.sentence_matches.len() >= 3, "engine output is untruncated");
    assert_eq!(m.matched_text(2).lines().count(), 2);
}
