use serde::{Deserialize, Serialize};
use crate::types::BodyId;

/// Everything the display surface can ask of the engine.
/// Variants are never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ViewCommand {
    // ── Planet cards ──────────────────────────────
    /// Toggle: selecting the selected body clears the selection.
    SelectBody { id: BodyId },
    ClearSelection,

    // ── Globe ─────────────────────────────────────
    HoverMarker { city: String },
    ClearHover,

    // ── Age calculator ────────────────────────────
    /// Raw text from the age field, validated by the engine.
    SubmitAge { input: String },

    // ── Light-speed panel ─────────────────────────
    SendSignal,
}

impl ViewCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            ViewCommand::SelectBody { .. }  => "select_body",
            ViewCommand::ClearSelection     => "clear_selection",
            ViewCommand::HoverMarker { .. } => "hover_marker",
            ViewCommand::ClearHover         => "clear_hover",
            ViewCommand::SubmitAge { .. }   => "submit_age",
            ViewCommand::SendSignal         => "send_signal",
        }
    }
}
