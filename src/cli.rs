use crate::context::{DEFAULT_BAR_WIDTH, DEFAULT_CONTEXT_OVERHEAD};

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Context overhead in tokens (system prompt, tools, MCP, agents,
    /// memory). See `context::DEFAULT_CONTEXT_OVERHEAD` for how to
    /// recalibrate.
    #[arg(long, env = "CLAUDE_CONTEXT_OVERHEAD", default_value_t = DEFAULT_CONTEXT_OVERHEAD)]
    pub context_overhead: u64,

    /// Directory holding the version-check cache. Defaults to ~/.claude
    #[arg(long, env = "CLAUDE_STATUSLINE_CACHE_DIR")]
    pub cache_dir: Option<String>,

    /// Skip the remote version check and report the version as current
    #[arg(long)]
    pub no_version_check: bool,

    /// Progress bar width in cells
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub bar_width: usize,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
