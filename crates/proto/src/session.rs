// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle and session property command bodies.
//!
//! Request bodies never use `skip_serializing_if`: the host is
//! schema-strict about field presence, so default-valued fields must
//! still appear in the marshaled JSON.

use serde::{Deserialize, Serialize};

/// Audio file format of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionAudioFormat {
    #[serde(rename = "SAF_WAVE")]
    Wave,
    #[serde(rename = "SAF_AIFF")]
    Aiff,
}

impl SessionAudioFormat {
    /// Ordinal used where the host expects the bare enum position
    /// instead of the symbolic name.
    pub fn ordinal(self) -> i32 {
        match self {
            Self::Wave => 0,
            Self::Aiff => 1,
        }
    }

    /// Symbolic wire name.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Wave => "SAF_WAVE",
            Self::Aiff => "SAF_AIFF",
        }
    }
}

/// Session sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleRate {
    #[serde(rename = "SR_44100")]
    Sr44100,
    #[serde(rename = "SR_48000")]
    Sr48000,
    #[serde(rename = "SR_88200")]
    Sr88200,
    #[serde(rename = "SR_96000")]
    Sr96000,
    #[serde(rename = "SR_176400")]
    Sr176400,
    #[serde(rename = "SR_192000")]
    Sr192000,
}

impl SampleRate {
    /// Rate in hertz.
    pub fn hertz(self) -> u32 {
        match self {
            Self::Sr44100 => 44_100,
            Self::Sr48000 => 48_000,
            Self::Sr88200 => 88_200,
            Self::Sr96000 => 96_000,
            Self::Sr176400 => 176_400,
            Self::Sr192000 => 192_000,
        }
    }
}

/// Session bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BitDepth {
    #[serde(rename = "BIT_16")]
    Bit16,
    #[serde(rename = "BIT_24")]
    Bit24,
    #[serde(rename = "BIT_32_FLOAT")]
    Bit32Float,
}

/// I/O settings preset applied to a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IoSettings {
    #[serde(rename = "IO_LAST")]
    Last,
    #[serde(rename = "IO_STEREO_MIX")]
    StereoMix,
    #[serde(rename = "IO_SURROUND_MIX")]
    SurroundMix,
}

/// Request body of `CreateSession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub session_name: String,
    pub session_location: String,
    pub file_type: SessionAudioFormat,
    pub sample_rate: SampleRate,
    pub bit_depth: BitDepth,
    pub input_output_settings: IoSettings,
    pub is_interleaved: bool,
}

/// Request body of `OpenSession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSessionRequest {
    pub session_path: String,
}

/// Request body of `CloseSession`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseSessionRequest {
    pub save_on_close: bool,
}

/// Request body of `SaveSessionAs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSessionAsRequest {
    pub session_name: String,
    pub session_location: String,
}

/// Response body of `GetSessionName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionNameResponse {
    pub session_name: String,
}

/// Response body of `GetSessionPath`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionPathResponse {
    pub session_path: String,
}

/// Response body of `GetSessionSampleRate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionSampleRateResponse {
    pub sample_rate: SampleRate,
}

/// Response body of `GetSessionAudioFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionAudioFormatResponse {
    pub current_setting: SessionAudioFormat,
}

/// Response body of `GetSessionStartTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionStartTimeResponse {
    /// Timecode string in the session's current format.
    pub session_start_time: String,
}

/// Response body of `GetSessionLength`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetSessionLengthResponse {
    pub session_length: String,
}
