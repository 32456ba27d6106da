//! # Transcript Module
//!
//! Scans a Claude Code transcript (JSONL) backwards for the two pieces of
//! session state the line needs: the most recent assistant usage payload and
//! the most recent non-meta user prompt.
//!
//! Records are heterogeneous and occasionally truncated mid-write, so every
//! line is parsed defensively: blank or malformed lines are skipped, missing
//! keys default to empty, and a missing file yields empty results.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::models::MessageUsage;

/// Prompts longer than this are truncated for display.
pub const PROMPT_MAX_CHARS: usize = 50;
const PROMPT_KEEP_CHARS: usize = 47;

/// Result of one backward pass over the transcript. Either field may be
/// absent when the file is missing or holds no qualifying record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranscriptScan {
    pub usage: Option<MessageUsage>,
    pub prompt: Option<String>,
}

/// Scan the transcript newest-first, keeping the first usage payload and the
/// first non-empty user prompt encountered. The first match in scan order is
/// the most recent record, so neither field is ever overwritten by an older
/// one; the loop exits as soon as both are held.
pub fn scan_transcript(path: &Path) -> TranscriptScan {
    let Ok(contents) = fs::read_to_string(path) else {
        return TranscriptScan::default();
    };

    let mut scan = TranscriptScan::default();
    for line in contents.lines().rev() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(record) = serde_json::from_str::<Value>(line) else {
            continue;
        };
        let kind = record.get("type").and_then(Value::as_str);

        if scan.prompt.is_none()
            && kind == Some("user")
            && !record.get("isMeta").and_then(Value::as_bool).unwrap_or(false)
        {
            if let Some(message) = record.get("message") {
                scan.prompt = extract_prompt(message);
            }
        }

        if scan.usage.is_none() && kind == Some("assistant") {
            scan.usage = record
                .get("message")
                .and_then(|m| m.get("usage"))
                .and_then(|u| serde_json::from_value::<MessageUsage>(u.clone()).ok());
        }

        if scan.usage.is_some() && scan.prompt.is_some() {
            break;
        }
    }
    scan
}

/// Pull display text out of a user message, preferring the structured
/// parts representation: all `{"type":"text"}` parts joined with single
/// spaces. Falls back to a plain string body, then to the first element of
/// the list carrying any text at all. Empty extractions return `None` so
/// the scan keeps looking at older records.
fn extract_prompt(message: &Value) -> Option<String> {
    let text = match message.get("content") {
        Some(Value::Array(parts)) => {
            let joined = parts
                .iter()
                .filter(|p| p.get("type").and_then(Value::as_str) == Some("text"))
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                parts
                    .iter()
                    .find_map(|p| match p {
                        Value::String(s) => Some(s.clone()),
                        other => other
                            .get("text")
                            .and_then(Value::as_str)
                            .filter(|t| !t.is_empty())
                            .map(str::to_owned),
                    })
                    .unwrap_or_default()
            } else {
                joined
            }
        }
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    };

    if text.is_empty() {
        return None;
    }
    Some(truncate_prompt(&text))
}

fn truncate_prompt(text: &str) -> String {
    if text.chars().count() > PROMPT_MAX_CHARS {
        let head: String = text.chars().take(PROMPT_KEEP_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truncation_keeps_47_chars_plus_ellipsis() {
        let long = "x".repeat(51);
        let out = truncate_prompt(&long);
        assert_eq!(out.chars().count(), 50);
        assert_eq!(out, format!("{}...", "x".repeat(47)));
    }

    #[test]
    fn truncation_leaves_exactly_50_alone() {
        let exact = "y".repeat(50);
        assert_eq!(truncate_prompt(&exact), exact);
    }

    #[test]
    fn structured_parts_join_with_single_spaces() {
        let message = json!({
            "content": [
                {"type": "text", "text": "fix the"},
                {"type": "tool_result", "content": "ignored"},
                {"type": "text", "text": "tests"},
            ]
        });
        assert_eq!(extract_prompt(&message).as_deref(), Some("fix the tests"));
    }

    #[test]
    fn plain_string_content_is_used_directly() {
        let message = json!({"content": "hello there"});
        assert_eq!(extract_prompt(&message).as_deref(), Some("hello there"));
    }

    #[test]
    fn list_without_text_parts_falls_back_to_first_textual_item() {
        let message = json!({
            "content": [
                {"type": "tool_result", "text": "tool output"},
            ]
        });
        assert_eq!(extract_prompt(&message).as_deref(), Some("tool output"));
    }

    #[test]
    fn empty_content_yields_none() {
        assert_eq!(extract_prompt(&json!({"content": ""})), None);
        assert_eq!(extract_prompt(&json!({"content": []})), None);
        assert_eq!(extract_prompt(&json!({})), None);
    }
}
