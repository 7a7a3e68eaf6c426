// ── Diagnostic finding types ──

use serde::{Deserialize, Serialize};

/// Finding severity. Declaration order doubles as report order: `Critical`
/// sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Good,
}

/// One diagnostic result. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Which analyzer produced this, e.g. `"rf-analysis"`.
    pub module: &'static str,
    pub title: String,
    pub detail: String,
    /// May be empty for `good` findings.
    pub recommendation: String,
    /// Controller UI breadcrumb, e.g. `"Settings > WiFi > Advanced"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_path: Option<String>,
    /// Machine-readable change payload for `apply-plan`-style consumers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<serde_json::Value>,
}

impl Finding {
    pub fn new(
        severity: Severity,
        module: &'static str,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            module,
            title: title.into(),
            detail: detail.into(),
            recommendation: String::new(),
            ui_path: None,
            change: None,
        }
    }

    pub fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = recommendation.into();
        self
    }

    pub fn at_ui_path(mut self, ui_path: impl Into<String>) -> Self {
        self.ui_path = Some(ui_path.into());
        self
    }

    pub fn with_change(mut self, change: serde_json::Value) -> Self {
        self.change = Some(change);
        self
    }
}
