use std::io::Write;
use std::path::Path;

use claude_contextline::models::MessageUsage;
use claude_contextline::transcript::scan_transcript;

fn write_transcript(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn missing_file_yields_empty_scan() {
    let scan = scan_transcript(Path::new("/nonexistent/transcript.jsonl"));
    assert_eq!(scan.usage, None);
    assert_eq!(scan.prompt, None);
}

#[test]
fn newest_usage_record_wins() {
    let file = write_transcript(&[
        r#"{"type":"assistant","message":{"usage":{"input_tokens":1,"output_tokens":1}}}"#,
        r#"{"type":"user","message":{"content":"latest question"}}"#,
        r#"{"type":"assistant","message":{"usage":{"input_tokens":500,"cache_read_input_tokens":40000,"output_tokens":250}}}"#,
    ]);
    let scan = scan_transcript(file.path());
    let usage = scan.usage.unwrap();
    assert_eq!(usage.input_tokens, 500);
    assert_eq!(usage.cache_read_input_tokens, 40_000);
    assert_eq!(usage.raw_total(), 40_750);
    assert_eq!(scan.prompt.as_deref(), Some("latest question"));
}

#[test]
fn older_usage_never_overwrites_newest_when_scan_runs_to_exhaustion() {
    // No user prompt anywhere, so the scan walks the whole file; the usage
    // tuple captured from the newest record must survive the older one.
    let file = write_transcript(&[
        r#"{"type":"assistant","message":{"usage":{"input_tokens":999999,"output_tokens":999999}}}"#,
        r#"{"type":"assistant","message":{"usage":{"input_tokens":500,"output_tokens":250}}}"#,
    ]);
    let scan = scan_transcript(file.path());
    let usage = scan.usage.unwrap();
    assert_eq!(usage.input_tokens, 500);
    assert_eq!(usage.output_tokens, 250);
    assert_eq!(scan.prompt, None);
}

#[test]
fn assistant_record_without_usage_does_not_stop_the_search() {
    let file = write_transcript(&[
        r#"{"type":"assistant","message":{"usage":{"input_tokens":77}}}"#,
        r#"{"type":"assistant","message":{"content":[{"type":"text","text":"thinking..."}]}}"#,
        r#"{"type":"user","message":{"content":"q"}}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.usage.unwrap().input_tokens, 77);
}

#[test]
fn malformed_and_blank_lines_are_skipped() {
    let file = write_transcript(&[
        r#"{"type":"assistant","message":{"usage":{"output_tokens":9}}}"#,
        "",
        "not json at all {{{",
        r#"{"type":"user","message":{"content":"still found"}}"#,
        r#"{"truncated":"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.usage.unwrap().output_tokens, 9);
    assert_eq!(scan.prompt.as_deref(), Some("still found"));
}

#[test]
fn meta_user_records_are_not_prompt_sources() {
    let file = write_transcript(&[
        r#"{"type":"user","message":{"content":"real prompt"}}"#,
        r#"{"type":"user","isMeta":true,"message":{"content":"injected context"}}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.prompt.as_deref(), Some("real prompt"));
}

#[test]
fn structured_prompt_parts_are_joined() {
    let file = write_transcript(&[
        r#"{"type":"user","message":{"content":[{"type":"text","text":"part one"},{"type":"text","text":"part two"}]}}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.prompt.as_deref(), Some("part one part two"));
}

#[test]
fn long_prompts_truncate_to_47_chars_plus_ellipsis() {
    let long = "a".repeat(80);
    let line = format!(r#"{{"type":"user","message":{{"content":"{long}"}}}}"#);
    let file = write_transcript(&[&line]);
    let scan = scan_transcript(file.path());
    let prompt = scan.prompt.unwrap();
    assert_eq!(prompt, format!("{}...", "a".repeat(47)));
    assert_eq!(prompt.chars().count(), 50);
}

#[test]
fn empty_user_content_keeps_scanning_older_records() {
    let file = write_transcript(&[
        r#"{"type":"user","message":{"content":"older prompt"}}"#,
        r#"{"type":"user","message":{"content":""}}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.prompt.as_deref(), Some("older prompt"));
}

#[test]
fn usage_fields_default_to_zero_when_absent() {
    let file = write_transcript(&[
        r#"{"type":"assistant","message":{"usage":{"input_tokens":12}}}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(
        scan.usage,
        Some(MessageUsage {
            input_tokens: 12,
            ..Default::default()
        })
    );
}

#[test]
fn transcript_with_no_qualifying_records_yields_defaults() {
    let file = write_transcript(&[
        r#"{"type":"summary","summary":"compacted"}"#,
        r#"{"type":"system_message","content":"notice"}"#,
    ]);
    let scan = scan_transcript(file.path());
    assert_eq!(scan.usage, None);
    assert_eq!(scan.prompt, None);
}
