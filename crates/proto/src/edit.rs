// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edit command bodies.

use serde::{Deserialize, Serialize};

/// Automation data scope for the `*Special` edit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationData {
    #[serde(rename = "AD_ALL")]
    All,
    #[serde(rename = "AD_VOLUME")]
    Volume,
    #[serde(rename = "AD_PAN")]
    Pan,
    #[serde(rename = "AD_MUTE")]
    Mute,
}

/// Paste behavior for `PasteSpecial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasteOption {
    #[serde(rename = "PO_MERGE")]
    Merge,
    #[serde(rename = "PO_REPEAT_TO_FILL")]
    RepeatToFill,
    #[serde(rename = "PO_TO_CURRENT_AUTOMATION_TYPE")]
    ToCurrentAutomationType,
}

/// Request body of `CutSpecial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSpecialRequest {
    pub automation_data: AutomationData,
}

/// Request body of `CopySpecial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySpecialRequest {
    pub automation_data: AutomationData,
}

/// Request body of `ClearSpecial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSpecialRequest {
    pub automation_data: AutomationData,
}

/// Request body of `PasteSpecial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteSpecialRequest {
    pub paste_option: PasteOption,
}

/// Request body of `SelectAllClipsOnTrack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectAllClipsOnTrackRequest {
    pub track_name: String,
}

/// Request body of `RenameTargetTrack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTargetTrackRequest {
    pub current_name: String,
    pub new_name: String,
}
