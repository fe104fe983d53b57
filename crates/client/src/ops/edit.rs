// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edit operations on the timeline selection.

use crate::define_op;
use crate::proto::{
    ClearSpecialRequest, CommandId, CopySpecialRequest, CutSpecialRequest, PasteSpecialRequest,
    RenameTargetTrackRequest, SelectAllClipsOnTrackRequest,
};

define_op! {
    /// Cuts the edit selection.
    pub struct Cut => CommandId::Cut;
}

define_op! {
    /// Copies the edit selection.
    pub struct Copy => CommandId::Copy;
}

define_op! {
    /// Pastes at the edit insertion point.
    pub struct Paste => CommandId::Paste;
}

define_op! {
    /// Clears the edit selection.
    pub struct Clear => CommandId::Clear;
}

define_op! {
    /// Cuts a subset of automation data from the selection.
    pub struct CutSpecial => CommandId::CutSpecial, request: CutSpecialRequest;
}

define_op! {
    /// Copies a subset of automation data from the selection.
    pub struct CopySpecial => CommandId::CopySpecial, request: CopySpecialRequest;
}

define_op! {
    /// Pastes with a non-default paste behavior.
    pub struct PasteSpecial => CommandId::PasteSpecial, request: PasteSpecialRequest;
}

define_op! {
    /// Clears a subset of automation data from the selection.
    pub struct ClearSpecial => CommandId::ClearSpecial, request: ClearSpecialRequest;
}

define_op! {
    /// Selects every clip on the named track.
    pub struct SelectAllClipsOnTrack => CommandId::SelectAllClipsOnTrack,
        request: SelectAllClipsOnTrackRequest;
}

define_op! {
    /// Trims selected clips to the edit selection range.
    pub struct TrimToSelection => CommandId::TrimToSelection;
}

define_op! {
    /// Renames a track in the open session.
    pub struct RenameTargetTrack => CommandId::RenameTargetTrack,
        request: RenameTargetTrackRequest;
}
