//! Engine events, the record of every state change.
//!
//! RULE: The engine reports each change to view state as exactly one
//! event. Rejected input becomes an event too, never an error.

use crate::{
    clock::ObservationInstant,
    types::{BodyId, Tick},
};
use serde::{Deserialize, Serialize};

/// Variants are added over time, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrreryEvent {
    // ── Clock events ───────────────────────────────
    TickStarted {
        tick:    Tick,
        instant: ObservationInstant,
    },
    TickCompleted {
        tick: Tick,
    },

    // ── Selection and hover ────────────────────────
    BodySelected {
        tick: Tick,
        id:   BodyId,
    },
    SelectionCleared {
        tick: Tick,
    },
    MarkerHovered {
        tick: Tick,
        city: String,
    },
    HoverCleared {
        tick: Tick,
    },

    // ── Age calculator ─────────────────────────────
    AgesCalculated {
        tick:            Tick,
        earth_age_years: f64,
        result_count:    usize,
    },
    AgeInputRejected {
        tick:  Tick,
        input: String,
    },

    // ── Light-speed panel ──────────────────────────
    SignalSent {
        tick:  Tick,
        from:  BodyId,
        until: ObservationInstant,
    },
    SignalCompleted {
        tick: Tick,
        from: BodyId,
    },

    // ── Commands with no effect ────────────────────
    CommandIgnored {
        tick:         Tick,
        command_type: String,
        reason:       String,
    },
}

impl OrreryEvent {
    /// Stable string name of the variant, used in log lines.
    pub fn type_name(&self) -> &'static str {
        match self {
            OrreryEvent::TickStarted { .. }      => "tick_started",
            OrreryEvent::TickCompleted { .. }    => "tick_completed",
            OrreryEvent::BodySelected { .. }     => "body_selected",
            OrreryEvent::SelectionCleared { .. } => "selection_cleared",
            OrreryEvent::MarkerHovered { .. }    => "marker_hovered",
            OrreryEvent::HoverCleared { .. }     => "hover_cleared",
            OrreryEvent::AgesCalculated { .. }   => "ages_calculated",
            OrreryEvent::AgeInputRejected { .. } => "age_input_rejected",
            OrreryEvent::SignalSent { .. }       => "signal_sent",
            OrreryEvent::SignalCompleted { .. }  => "signal_completed",
            OrreryEvent::CommandIgnored { .. }   => "command_ignored",
        }
    }
}
