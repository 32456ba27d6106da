use anyhow::{Context, Result};
use chrono::Local;
use owo_colors::OwoColorize;
use std::path::Path;

use claude_contextline::cli::Args;
use claude_contextline::context::{calc_context_usage, context_limit_for_model};
use claude_contextline::display::{RenderConfig, Segments, render_line};
use claude_contextline::git::read_git_branch;
use claude_contextline::models::HookJson;
use claude_contextline::transcript::scan_transcript;
use claude_contextline::utils::{read_stdin, version_cache_path};
use claude_contextline::version::{
    FileStatusCache, VersionStatus, fetch_latest_tag, version_status,
};

fn main() -> Result<()> {
    let args = Args::parse();
    let stdin = read_stdin()?;
    if stdin.is_empty() {
        println!(
            "Claude Code\n{} {}",
            "❯".cyan(),
            "[waiting for valid input]".dimmed()
        );
        return Ok(());
    }
    let hook: HookJson = serde_json::from_slice(&stdin).context("parse hook json")?;

    let scan = scan_transcript(Path::new(&hook.transcript_path));
    let raw_tokens = scan.usage.map(|u| u.raw_total()).unwrap_or(0);
    let limit = context_limit_for_model(&hook.model.id);
    let usage = calc_context_usage(raw_tokens, limit, args.context_overhead, args.bar_width);

    let workspace = Path::new(&hook.workspace.current_dir);
    let dir_label = workspace
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| hook.workspace.current_dir.clone());
    let git_branch = read_git_branch(workspace);

    let status = if args.no_version_check {
        VersionStatus::Current
    } else {
        let cache = FileStatusCache::new(version_cache_path(args.cache_dir.as_deref()));
        version_status(&hook.version, &cache, fetch_latest_tag)
    };

    let clock = Local::now().format("%H:%M:%S").to_string();
    let cfg = RenderConfig {
        bar_width: args.bar_width,
        ..RenderConfig::default()
    };
    let line = render_line(
        &cfg,
        &Segments {
            dir_label: &dir_label,
            git_branch: git_branch.as_deref(),
            model_name: &hook.model.display_name,
            usage,
            session_id: &hook.session_id,
            version: &hook.version,
            version_status: status,
            clock: &clock,
            prompt: scan.prompt.as_deref(),
        },
    );
    println!("{line}");
    Ok(())
}
