//! # Display Module
//!
//! Assembles the final ANSI line. Pure string building: the renderer does no
//! IO and no computation beyond clipping the bar fill to its width.

use owo_colors::OwoColorize;

use crate::context::{ContextUsage, DEFAULT_BAR_WIDTH};
use crate::utils::format_thousands;
use crate::version::VersionStatus;

const ORANGE: (u8, u8, u8) = (255, 135, 0);
const SESSION_ID_CHARS: usize = 8;

/// Render-time knobs, passed explicitly so tests can inject alternates.
pub struct RenderConfig {
    pub bar_width: usize,
    pub fallback_prompt: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            fallback_prompt: "no recent prompt",
        }
    }
}

/// Everything the line shows, already computed upstream.
pub struct Segments<'a> {
    pub dir_label: &'a str,
    pub git_branch: Option<&'a str>,
    pub model_name: &'a str,
    pub usage: ContextUsage,
    pub session_id: &'a str,
    pub version: &'a str,
    pub version_status: VersionStatus,
    pub clock: &'a str,
    pub prompt: Option<&'a str>,
}

/// Usage color steps: green under 50%, yellow under 80%, orange under 90%,
/// red beyond.
fn colorize_usage(text: &str, percent: f64) -> String {
    if percent < 50.0 {
        text.green().to_string()
    } else if percent < 80.0 {
        text.yellow().to_string()
    } else if percent < 90.0 {
        text.truecolor(ORANGE.0, ORANGE.1, ORANGE.2).to_string()
    } else {
        text.red().to_string()
    }
}

/// The fill is clipped to the bar width; overruns saturate instead of
/// widening the bar or panicking on a negative pad.
fn progress_bar(filled: usize, width: usize) -> String {
    let fill = filled.min(width);
    format!("{}{}", "█".repeat(fill), "░".repeat(width - fill))
}

pub fn render_line(cfg: &RenderConfig, seg: &Segments) -> String {
    let sep = format!(" {} ", "|".bright_black());

    let mut dir_part = format!("📁 {}", seg.dir_label.bright_white());
    if let Some(branch) = seg.git_branch {
        dir_part.push_str(&format!("{}", format!(" ⚡️{branch}").green()));
    }

    let model_part = format!("[{}]", seg.model_name.magenta()).bold().to_string();

    let bar = progress_bar(seg.usage.filled, cfg.bar_width);
    let usage_part = format!(
        "[{}] {} ({})",
        colorize_usage(&bar, seg.usage.percent),
        colorize_usage(&format!("{:.1}%", seg.usage.percent), seg.usage.percent),
        format_thousands(seg.usage.used_tokens).cyan(),
    );

    let session_part = seg
        .session_id
        .chars()
        .take(SESSION_ID_CHARS)
        .collect::<String>()
        .white()
        .to_string();

    let version_text = format!("{} ({})", seg.version, seg.version_status.as_str());
    let version_part = match seg.version_status {
        VersionStatus::Current => version_text.green().to_string(),
        VersionStatus::Outdated => version_text
            .truecolor(ORANGE.0, ORANGE.1, ORANGE.2)
            .to_string(),
    };

    let prompt_part = seg
        .prompt
        .unwrap_or(cfg.fallback_prompt)
        .dimmed()
        .to_string();

    [
        dir_part,
        model_part,
        usage_part,
        session_part,
        version_part,
        seg.clock.white().to_string(),
        prompt_part,
    ]
    .join(&sep)
}
