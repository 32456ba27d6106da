use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct HookModel {
    pub id: String,
    pub display_name: String,
    /// Window size as declared by the hook. Currently superseded by the
    /// id-based heuristic in `context::context_limit_for_model`.
    #[allow(dead_code)]
    pub context_window: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct HookWorkspace {
    pub current_dir: String,
}

#[derive(Deserialize, Debug)]
pub struct HookJson {
    pub session_id: String,
    pub transcript_path: String,
    pub model: HookModel,
    pub workspace: HookWorkspace,
    pub version: String,
}
