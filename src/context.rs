//! # Context Module
//!
//! Resolves a model's context-window limit and turns raw transcript token
//! counts into a utilization figure plus a progress-bar fill count.

/// Context overhead in tokens: system prompt, system tools, MCP tools,
/// custom agents, and memory files that occupy the window but never appear
/// in transcript usage data.
///
/// Recalibrate by running `/context` in Claude Code and summing those
/// categories, e.g. 3.1k (system) + 18.6k (tools) + 63.2k (MCP) + 2.2k
/// (agents) + 1.2k (memory) = 88.3k. Override at runtime with
/// `--context-overhead` or `CLAUDE_CONTEXT_OVERHEAD`.
pub const DEFAULT_CONTEXT_OVERHEAD: u64 = 88_300;

/// Fallback window size for models the id heuristic does not recognize.
pub const DEFAULT_CONTEXT_LIMIT: u64 = 1_000_000;

/// Default progress bar width in cells.
pub const DEFAULT_BAR_WIDTH: usize = 20;

/// Resolve the context-window limit from the model id alone. Ids carrying a
/// "1m" marker get the 1M window, "200k" gets 200k, anything else defaults
/// to 1M. The window size the hook payload declares is not consulted here;
/// the heuristic supersedes it.
pub fn context_limit_for_model(model_id: &str) -> u64 {
    let id = model_id.to_lowercase();
    if id.contains("1m") {
        1_000_000
    } else if id.contains("200k") {
        200_000
    } else {
        DEFAULT_CONTEXT_LIMIT
    }
}

/// Derived utilization for one render. `percent` and `filled` are left
/// unclamped when usage overruns the window; the renderer saturates the bar
/// instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextUsage {
    pub used_tokens: u64,
    pub limit_tokens: u64,
    pub percent: f64,
    pub filled: usize,
}

/// Combine raw transcript tokens with the fixed overhead against a window
/// limit. A zero limit falls back to [`DEFAULT_CONTEXT_LIMIT`] rather than
/// dividing by zero.
pub fn calc_context_usage(
    raw_tokens: u64,
    limit_tokens: u64,
    overhead_tokens: u64,
    bar_width: usize,
) -> ContextUsage {
    let limit = if limit_tokens == 0 {
        DEFAULT_CONTEXT_LIMIT
    } else {
        limit_tokens
    };
    let used = raw_tokens + overhead_tokens;
    ContextUsage {
        used_tokens: used,
        limit_tokens: limit,
        percent: used as f64 / limit as f64 * 100.0,
        filled: (bar_width as u64 * used / limit) as usize,
    }
}
