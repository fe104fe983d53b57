// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command identifiers understood by the host scripting service.

use std::fmt;

use thiserror::Error;

/// A command id as carried in the request envelope header.
///
/// Discriminants are the wire values. Gaps between groups are reserved
/// for future commands of the same group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CommandId {
    // Host / connection
    HostReadyCheck = 0,
    AuthorizeConnection = 1,
    RegisterConnection = 2,
    GetVersion = 3,

    // Session lifecycle and properties
    CreateSession = 10,
    OpenSession = 11,
    CloseSession = 12,
    SaveSession = 13,
    SaveSessionAs = 14,
    GetSessionName = 15,
    GetSessionPath = 16,
    GetSessionSampleRate = 17,
    GetSessionAudioFormat = 18,
    GetSessionStartTime = 19,
    GetSessionLength = 20,

    // Playback transport
    GetTransportState = 30,
    GetTransportArmed = 31,
    GetPlaybackMode = 32,
    SetPlaybackMode = 33,
    GetRecordMode = 34,
    SetRecordMode = 35,
    TogglePlayState = 36,
    ToggleRecordEnable = 37,

    // Edit
    Cut = 50,
    Copy = 51,
    Paste = 52,
    Clear = 53,
    CutSpecial = 54,
    CopySpecial = 55,
    PasteSpecial = 56,
    ClearSpecial = 57,
    SelectAllClipsOnTrack = 58,
    TrimToSelection = 59,
    RenameTargetTrack = 60,
}

/// Error returned when an integer does not name a known command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown command id {0}")]
pub struct UnknownCommand(pub i32);

impl CommandId {
    /// Wire value of this command.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Symbolic name, as used in audit lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::HostReadyCheck => "HostReadyCheck",
            Self::AuthorizeConnection => "AuthorizeConnection",
            Self::RegisterConnection => "RegisterConnection",
            Self::GetVersion => "GetVersion",
            Self::CreateSession => "CreateSession",
            Self::OpenSession => "OpenSession",
            Self::CloseSession => "CloseSession",
            Self::SaveSession => "SaveSession",
            Self::SaveSessionAs => "SaveSessionAs",
            Self::GetSessionName => "GetSessionName",
            Self::GetSessionPath => "GetSessionPath",
            Self::GetSessionSampleRate => "GetSessionSampleRate",
            Self::GetSessionAudioFormat => "GetSessionAudioFormat",
            Self::GetSessionStartTime => "GetSessionStartTime",
            Self::GetSessionLength => "GetSessionLength",
            Self::GetTransportState => "GetTransportState",
            Self::GetTransportArmed => "GetTransportArmed",
            Self::GetPlaybackMode => "GetPlaybackMode",
            Self::SetPlaybackMode => "SetPlaybackMode",
            Self::GetRecordMode => "GetRecordMode",
            Self::SetRecordMode => "SetRecordMode",
            Self::TogglePlayState => "TogglePlayState",
            Self::ToggleRecordEnable => "ToggleRecordEnable",
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::Clear => "Clear",
            Self::CutSpecial => "CutSpecial",
            Self::CopySpecial => "CopySpecial",
            Self::PasteSpecial => "PasteSpecial",
            Self::ClearSpecial => "ClearSpecial",
            Self::SelectAllClipsOnTrack => "SelectAllClipsOnTrack",
            Self::TrimToSelection => "TrimToSelection",
            Self::RenameTargetTrack => "RenameTargetTrack",
        }
    }

    /// Every command in the contract, in wire order.
    pub fn all() -> &'static [CommandId] {
        &[
            Self::HostReadyCheck,
            Self::AuthorizeConnection,
            Self::RegisterConnection,
            Self::GetVersion,
            Self::CreateSession,
            Self::OpenSession,
            Self::CloseSession,
            Self::SaveSession,
            Self::SaveSessionAs,
            Self::GetSessionName,
            Self::GetSessionPath,
            Self::GetSessionSampleRate,
            Self::GetSessionAudioFormat,
            Self::GetSessionStartTime,
            Self::GetSessionLength,
            Self::GetTransportState,
            Self::GetTransportArmed,
            Self::GetPlaybackMode,
            Self::SetPlaybackMode,
            Self::GetRecordMode,
            Self::SetRecordMode,
            Self::TogglePlayState,
            Self::ToggleRecordEnable,
            Self::Cut,
            Self::Copy,
            Self::Paste,
            Self::Clear,
            Self::CutSpecial,
            Self::CopySpecial,
            Self::PasteSpecial,
            Self::ClearSpecial,
            Self::SelectAllClipsOnTrack,
            Self::TrimToSelection,
            Self::RenameTargetTrack,
        ]
    }
}

impl TryFrom<i32> for CommandId {
    type Error = UnknownCommand;

    fn try_from(code: i32) -> Result<Self, UnknownCommand> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or(UnknownCommand(code))
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
