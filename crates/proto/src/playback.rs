// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Playback transport command bodies.

use serde::{Deserialize, Serialize};

/// State of the playback transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    #[serde(rename = "TS_STOPPED")]
    Stopped,
    #[serde(rename = "TS_PLAYING")]
    Playing,
    #[serde(rename = "TS_RECORDING")]
    Recording,
    #[serde(rename = "TS_FAST_FORWARD")]
    FastForward,
    #[serde(rename = "TS_REWIND")]
    Rewind,
}

/// Playback mode flag. Several may be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    #[serde(rename = "PM_NORMAL")]
    Normal,
    #[serde(rename = "PM_LOOP")]
    Loop,
    #[serde(rename = "PM_DYNAMIC_TRANSPORT")]
    DynamicTransport,
}

impl PlaybackMode {
    /// Ordinal the host emits in place of the symbolic name in
    /// `GetPlaybackMode` responses.
    pub fn ordinal(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Loop => 1,
            Self::DynamicTransport => 2,
        }
    }

    /// Resolve an ordinal back to the mode; `None` for unknown values.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Normal),
            1 => Some(Self::Loop),
            2 => Some(Self::DynamicTransport),
            _ => None,
        }
    }

    /// Symbolic wire name.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Normal => "PM_NORMAL",
            Self::Loop => "PM_LOOP",
            Self::DynamicTransport => "PM_DYNAMIC_TRANSPORT",
        }
    }
}

/// Record mode of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordMode {
    #[serde(rename = "RM_NORMAL")]
    Normal,
    #[serde(rename = "RM_LOOP")]
    Loop,
    #[serde(rename = "RM_DESTRUCTIVE")]
    Destructive,
    #[serde(rename = "RM_QUICK_PUNCH")]
    QuickPunch,
}

/// Response body of `GetTransportState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransportStateResponse {
    pub current_setting: TransportState,
}

/// Response body of `GetTransportArmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetTransportArmedResponse {
    pub is_transport_armed: bool,
}

/// Response body of `GetPlaybackMode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPlaybackModeResponse {
    pub current_modes: Vec<PlaybackMode>,
}

/// Request body of `SetPlaybackMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetPlaybackModeRequest {
    pub playback_mode: PlaybackMode,
}

/// Response body of `GetRecordMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRecordModeResponse {
    pub current_setting: RecordMode,
}

/// Request body of `SetRecordMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecordModeRequest {
    pub record_mode: RecordMode,
    pub record_arm_transport: bool,
}
