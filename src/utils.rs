use std::io::Read;
use std::path::PathBuf;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Location of the version-check cache: `<override>/version_check_cache`
/// when a directory override is given, `~/.claude/version_check_cache`
/// otherwise.
pub fn version_cache_path(override_dir: Option<&str>) -> PathBuf {
    let base = match override_dir {
        Some(dir) => PathBuf::from(dir),
        None => directories::BaseDirs::new()
            .map(|b| b.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".claude"),
    };
    base.join("version_check_cache")
}

/// Group digits with commas: 88300 -> "88,300".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
