use flate2::write::GzEncoder;
use flate2::Compression;
use navquill::config::Config;
use navquill::indicator::HighlightCommand;
use navquill::script::loader::{load_script_file, parse_script};
use navquill::script::runner::StepOutcome;
use navquill::script::{replay, ScriptError, ScriptEvent};
use std::fs;
use std::io::Write;
use tempfile::TempDir;

const SCRIPT: &str = r#"
documents:
  - name: main.rs
    lines: 300
  - name: lib.rs
    lines: 80
events:
  - caret: { document: main.rs, line: 10, column: 4 }
  - caret: { document: main.rs, line: 15 }
  - caret: { document: lib.rs, line: 40 }
  - insert: { document: main.rs, first_line: 0, count: 5 }
  - back
  - forward
  - highlight: { channel: word-highlight, ranges: [[0, 4], [90, 94]] }
  - highlight: { channel: word-highlight, ranges: [[0, 4], [90, 94]] }
  - close: lib.rs
"#;

#[test]
fn test_parse_script() {
    let script = parse_script(SCRIPT).unwrap();

    assert_eq!(script.documents.len(), 2);
    assert_eq!(script.events.len(), 9);
    assert_eq!(
        script.events[1],
        ScriptEvent::Caret {
            document: "main.rs".to_string(),
            line: 15,
            column: 0,
            virtual_space: 0,
        }
    );
    assert_eq!(script.events[4], ScriptEvent::Back);
    assert_eq!(script.events[8], ScriptEvent::Close("lib.rs".to_string()));
}

#[test]
fn test_replay_outcomes() {
    let script = parse_script(SCRIPT).unwrap();
    let report = replay(&script, &Config::default()).unwrap();
    let outcomes: Vec<&StepOutcome> = report.steps.iter().map(|step| &step.outcome).collect();

    assert_eq!(outcomes[0], &StepOutcome::CaretMoved { recorded: false });
    assert_eq!(outcomes[1], &StepOutcome::CaretMoved { recorded: false });
    assert_eq!(outcomes[2], &StepOutcome::CaretMoved { recorded: true });
    assert_eq!(outcomes[3], &StepOutcome::LinesInserted);

    match outcomes[4] {
        StepOutcome::Jumped { target, .. } => {
            // Line 15 shifted down by the insertion
            assert_eq!(target.document, "main.rs");
            assert_eq!(target.line, 20);
        }
        other => panic!("expected a jump, got {:?}", other),
    }
    match outcomes[5] {
        StepOutcome::Jumped { target, .. } => assert_eq!(target.document, "lib.rs"),
        other => panic!("expected a jump, got {:?}", other),
    }

    match outcomes[6] {
        StepOutcome::Highlighted { changed, commands } => {
            assert!(changed);
            assert_eq!(commands.len(), 3);
            assert_eq!(
                commands[0],
                HighlightCommand::Clear {
                    channel: "word-highlight".to_string()
                }
            );
        }
        other => panic!("expected highlights, got {:?}", other),
    }
    assert_eq!(
        outcomes[7],
        &StepOutcome::Highlighted {
            changed: false,
            commands: Vec::new()
        }
    );
    assert_eq!(
        outcomes[8],
        &StepOutcome::Closed {
            history_changed: false
        }
    );

    assert_eq!(report.back.len(), 1);
    assert_eq!(report.back[0].line, 20);
    assert!(report.current.is_none());
    assert!(report.forward.is_empty());
}

#[test]
fn test_report_text_and_json() {
    let script = parse_script(SCRIPT).unwrap();
    let report = replay(&script, &Config::default()).unwrap();

    let text = report.to_string();
    assert!(text.contains("bookmark recorded"));
    assert!(text.contains("back to main.rs:21:1"));
    assert!(text.contains("History:"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["steps"][2]["outcome"]["outcome"], "caret_moved");
    assert_eq!(json["steps"][2]["outcome"]["recorded"], true);
}

#[test]
fn test_unknown_document_is_reported() {
    let script = parse_script(
        r#"
events:
  - open: { name: a.rs, lines: 10 }
  - close: a.rs
  - caret: { document: a.rs, line: 1 }
"#,
    )
    .unwrap();

    let err = replay(&script, &Config::default()).unwrap_err();
    assert_eq!(
        err,
        ScriptError::UnknownDocument {
            event: 2,
            name: "a.rs".to_string()
        }
    );
    assert_eq!(err.to_string(), "Event 2: document 'a.rs' is not open");
}

#[test]
fn test_caret_out_of_range_is_reported() {
    let script = parse_script(
        r#"
documents:
  - { name: a.rs, lines: 10 }
events:
  - caret: { document: a.rs, line: 10 }
"#,
    )
    .unwrap();

    let err = replay(&script, &Config::default()).unwrap_err();
    assert!(matches!(err, ScriptError::LineOutOfRange { line: 10, line_count: 10, .. }));
}

#[test]
fn test_bad_highlights_are_reported() {
    let unknown = parse_script("events:\n  - highlight: { channel: nope, ranges: [] }\n").unwrap();
    assert!(matches!(
        replay(&unknown, &Config::default()),
        Err(ScriptError::UnknownChannel { event: 0, .. })
    ));

    let inverted =
        parse_script("events:\n  - highlight: { channel: error, ranges: [[9, 2]] }\n").unwrap();
    assert_eq!(
        replay(&inverted, &Config::default()).unwrap_err(),
        ScriptError::InvertedRange {
            event: 0,
            start: 9,
            end: 2
        }
    );
}

#[test]
fn test_load_plain_and_gzipped_files() {
    let dir = TempDir::new().unwrap();

    let plain = dir.path().join("session.yaml");
    fs::write(&plain, SCRIPT).unwrap();
    let from_plain = load_script_file(&plain).unwrap();

    let gzipped = dir.path().join("session.yaml.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SCRIPT.as_bytes()).unwrap();
    fs::write(&gzipped, encoder.finish().unwrap()).unwrap();
    let from_gzip = load_script_file(&gzipped).unwrap();

    assert_eq!(from_plain, from_gzip);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    assert!(load_script_file(dir.path().join("missing.yaml")).is_err());
}

#[test]
fn test_parse_rejects_unknown_event() {
    assert!(parse_script("events:\n  - teleport: { line: 3 }\n").is_err());
}

#[test]
fn test_map_form_file_replays() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.yaml");
    fs::write(
        &path,
        "documents:\n  - name: main.rs\n    lines: 300\nevents:\n  - caret: { document: main.rs, line: 10 }\n  - caret: { document: main.rs, line: 200 }\n  - back\n  - close_all\n",
    )
    .unwrap();

    let script = load_script_file(&path).unwrap();
    assert_eq!(script.events[2], ScriptEvent::Back);
    assert_eq!(script.events[3], ScriptEvent::CloseAll);

    let report = replay(&script, &Config::default()).unwrap();
    assert_eq!(
        report.steps[1].outcome,
        StepOutcome::CaretMoved { recorded: true }
    );
    assert!(matches!(
        &report.steps[2].outcome,
        StepOutcome::Jumped { target, .. } if target.line == 10
    ));
    assert_eq!(report.steps[3].outcome, StepOutcome::SessionReset);
}

#[test]
fn test_edit_past_end_is_reported() {
    let delete = parse_script(
        r#"
documents:
  - { name: a.rs, lines: 100 }
events:
  - caret: { document: a.rs, line: 90 }
  - caret: { document: a.rs, line: 0 }
  - delete: { document: a.rs, first_line: 95, count: 50 }
"#,
    )
    .unwrap();
    assert_eq!(
        replay(&delete, &Config::default()).unwrap_err(),
        ScriptError::EditOutOfRange {
            event: 2,
            name: "a.rs".to_string(),
            first_line: 95,
            count: 50,
            line_count: 100,
        }
    );

    let insert = parse_script(
        "documents:\n  - { name: a.rs, lines: 10 }\nevents:\n  - insert: { document: a.rs, first_line: 11, count: 1 }\n",
    )
    .unwrap();
    assert!(matches!(
        replay(&insert, &Config::default()),
        Err(ScriptError::EditOutOfRange { event: 0, .. })
    ));
}
