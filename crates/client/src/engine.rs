// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Convenience facade over the protocol client.
//!
//! One method per host feature: build the operation, run it, unwrap the
//! delivered response. Nothing here touches the protocol discipline;
//! that all lives in [`Client`].

use oplink_proto::{
    AutomationData, BitDepth, ClearSpecialRequest, CloseSessionRequest, CommandId,
    CopySpecialRequest, CreateSessionRequest, CutSpecialRequest, IoSettings, OpenSessionRequest,
    PasteOption, PasteSpecialRequest, PlaybackMode, RecordMode, RenameTargetTrackRequest,
    SampleRate, SaveSessionAsRequest, SelectAllClipsOnTrackRequest, SessionAudioFormat,
    SetPlaybackModeRequest, SetRecordModeRequest, TransportState,
};

use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::ops;

/// High-level interface to the host scripting service.
pub struct Engine {
    client: Client,
}

impl Engine {
    /// Connect and authenticate, yielding a ready engine.
    pub fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self { client: Client::connect(config)? })
    }

    /// Wrap an already-connected client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying protocol client.
    pub fn client_mut(&mut self) -> &mut Client {
        &mut self.client
    }

    /// Close the engine and release the connection. Idempotent.
    pub fn close(&mut self) {
        self.client.close();
    }

    // -- Host --

    /// Scripting protocol version running on the host.
    pub fn version(&mut self) -> Result<i32, ClientError> {
        let mut op = ops::GetVersion::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetVersion })?;
        Ok(response.version)
    }

    /// Liveness probe; succeeds even without an authenticated session.
    pub fn host_ready_check(&mut self) -> Result<(), ClientError> {
        self.client.run(&mut ops::HostReadyCheck::new())
    }

    // -- Session lifecycle --

    /// Create a new session.
    #[allow(clippy::too_many_arguments)]
    pub fn create_session(
        &mut self,
        name: &str,
        location: &str,
        file_type: SessionAudioFormat,
        sample_rate: SampleRate,
        bit_depth: BitDepth,
        io_settings: IoSettings,
        is_interleaved: bool,
    ) -> Result<(), ClientError> {
        let mut op = ops::CreateSession::new(CreateSessionRequest {
            session_name: name.to_string(),
            session_location: location.to_string(),
            file_type,
            sample_rate,
            bit_depth,
            input_output_settings: io_settings,
            is_interleaved,
        });
        self.client.run(&mut op)
    }

    /// Open the session at `path`.
    pub fn open_session(&mut self, path: &str) -> Result<(), ClientError> {
        let mut op =
            ops::OpenSession::new(OpenSessionRequest { session_path: path.to_string() });
        self.client.run(&mut op)
    }

    /// Close the open session.
    pub fn close_session(&mut self, save_on_close: bool) -> Result<(), ClientError> {
        let mut op = ops::CloseSession::new(CloseSessionRequest { save_on_close });
        self.client.run(&mut op)
    }

    /// Save the open session in place.
    pub fn save_session(&mut self) -> Result<(), ClientError> {
        self.client.run(&mut ops::SaveSession::new())
    }

    /// Save the open session under a new name at a new location.
    pub fn save_session_as(&mut self, name: &str, location: &str) -> Result<(), ClientError> {
        let mut op = ops::SaveSessionAs::new(SaveSessionAsRequest {
            session_name: name.to_string(),
            session_location: location.to_string(),
        });
        self.client.run(&mut op)
    }

    // -- Session properties --

    /// Name of the open session.
    pub fn session_name(&mut self) -> Result<String, ClientError> {
        let mut op = ops::GetSessionName::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionName })?;
        Ok(response.session_name)
    }

    /// Path of the open session.
    pub fn session_path(&mut self) -> Result<String, ClientError> {
        let mut op = ops::GetSessionPath::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionPath })?;
        Ok(response.session_path)
    }

    /// Sample rate of the open session, in hertz.
    pub fn session_sample_rate(&mut self) -> Result<u32, ClientError> {
        let mut op = ops::GetSessionSampleRate::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionSampleRate })?;
        Ok(response.sample_rate.hertz())
    }

    /// Audio file format of the open session.
    pub fn session_audio_format(&mut self) -> Result<SessionAudioFormat, ClientError> {
        let mut op = ops::GetSessionAudioFormat::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionAudioFormat })?;
        Ok(response.current_setting)
    }

    /// Start timecode of the open session.
    pub fn session_start_time(&mut self) -> Result<String, ClientError> {
        let mut op = ops::GetSessionStartTime::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionStartTime })?;
        Ok(response.session_start_time)
    }

    /// Length of the open session in the current timecode format.
    pub fn session_length(&mut self) -> Result<String, ClientError> {
        let mut op = ops::GetSessionLength::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetSessionLength })?;
        Ok(response.session_length)
    }

    // -- Playback transport --

    /// Current transport state.
    pub fn transport_state(&mut self) -> Result<TransportState, ClientError> {
        let mut op = ops::GetTransportState::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetTransportState })?;
        Ok(response.current_setting)
    }

    /// Transport record-arm state.
    pub fn transport_armed(&mut self) -> Result<bool, ClientError> {
        let mut op = ops::GetTransportArmed::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetTransportArmed })?;
        Ok(response.is_transport_armed)
    }

    /// Active playback modes as `(normal, loop, dynamic_transport)`.
    pub fn playback_modes(&mut self) -> Result<(bool, bool, bool), ClientError> {
        let mut op = ops::GetPlaybackMode::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetPlaybackMode })?;
        let modes = &response.current_modes;
        Ok((
            modes.contains(&PlaybackMode::Normal),
            modes.contains(&PlaybackMode::Loop),
            modes.contains(&PlaybackMode::DynamicTransport),
        ))
    }

    /// Set the playback mode.
    pub fn set_playback_mode(&mut self, mode: PlaybackMode) -> Result<(), ClientError> {
        let mut op = ops::SetPlaybackMode::new(SetPlaybackModeRequest { playback_mode: mode });
        self.client.run(&mut op)
    }

    /// Current record mode.
    pub fn record_mode(&mut self) -> Result<RecordMode, ClientError> {
        let mut op = ops::GetRecordMode::new();
        self.client.run(&mut op)?;
        let response = op
            .response
            .ok_or(ClientError::EmptyResponse { command: CommandId::GetRecordMode })?;
        Ok(response.current_setting)
    }

    /// Set the record mode, optionally arming the transport.
    pub fn set_record_mode(
        &mut self,
        mode: RecordMode,
        record_arm_transport: bool,
    ) -> Result<(), ClientError> {
        let mut op = ops::SetRecordMode::new(SetRecordModeRequest {
            record_mode: mode,
            record_arm_transport,
        });
        self.client.run(&mut op)
    }

    /// Toggle between play and stop.
    pub fn toggle_play_state(&mut self) -> Result<(), ClientError> {
        self.client.run(&mut ops::TogglePlayState::new())
    }

    /// Toggle record enable.
    pub fn toggle_record_enable(&mut self) -> Result<(), ClientError> {
        self.client.run(&mut ops::ToggleRecordEnable::new())
    }

    // -- Edit --

    /// Edit > Cut, optionally restricted to automation data.
    pub fn cut(&mut self, special: Option<AutomationData>) -> Result<(), ClientError> {
        match special {
            Some(automation_data) => {
                let mut op = ops::CutSpecial::new(CutSpecialRequest { automation_data });
                self.client.run(&mut op)
            }
            None => self.client.run(&mut ops::Cut::new()),
        }
    }

    /// Edit > Copy, optionally restricted to automation data.
    pub fn copy(&mut self, special: Option<AutomationData>) -> Result<(), ClientError> {
        match special {
            Some(automation_data) => {
                let mut op = ops::CopySpecial::new(CopySpecialRequest { automation_data });
                self.client.run(&mut op)
            }
            None => self.client.run(&mut ops::Copy::new()),
        }
    }

    /// Edit > Paste, optionally with a non-default paste behavior.
    pub fn paste(&mut self, special: Option<PasteOption>) -> Result<(), ClientError> {
        match special {
            Some(paste_option) => {
                let mut op = ops::PasteSpecial::new(PasteSpecialRequest { paste_option });
                self.client.run(&mut op)
            }
            None => self.client.run(&mut ops::Paste::new()),
        }
    }

    /// Edit > Clear, optionally restricted to automation data.
    pub fn clear(&mut self, special: Option<AutomationData>) -> Result<(), ClientError> {
        match special {
            Some(automation_data) => {
                let mut op = ops::ClearSpecial::new(ClearSpecialRequest { automation_data });
                self.client.run(&mut op)
            }
            None => self.client.run(&mut ops::Clear::new()),
        }
    }

    /// Select every clip on the named track.
    pub fn select_all_clips_on_track(&mut self, track_name: &str) -> Result<(), ClientError> {
        let mut op = ops::SelectAllClipsOnTrack::new(SelectAllClipsOnTrackRequest {
            track_name: track_name.to_string(),
        });
        self.client.run(&mut op)
    }

    /// Trim selected clips to the edit selection range.
    pub fn trim_to_selection(&mut self) -> Result<(), ClientError> {
        self.client.run(&mut ops::TrimToSelection::new())
    }

    /// Rename a track in the open session.
    pub fn rename_track(&mut self, current_name: &str, new_name: &str) -> Result<(), ClientError> {
        let mut op = ops::RenameTargetTrack::new(RenameTargetTrackRequest {
            current_name: current_name.to_string(),
            new_name: new_name.to_string(),
        });
        self.client.run(&mut op)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
