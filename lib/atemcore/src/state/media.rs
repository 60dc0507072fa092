use crate::protocol::enums::{ClipBank, Macro, MediaPlayer, MediaPlayerSourceType, StillBank};
use crate::state::ValueMap;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MediaPlayerSource {
    pub kind: Option<MediaPlayerSourceType>,
    pub still_index: u8,
    pub clip_index: u8,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ClipSource {
    pub is_used: bool,
    pub file_name: String,
    pub frames: u16,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AudioClipSource {
    pub is_used: bool,
    pub file_name: String,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct StillFile {
    pub is_used: bool,
    pub file_name: String,
}

#[derive(Default)]
pub struct MediaPlayers {
    pub still_banks: u8,
    pub clip_banks: u8,
    pub source: ValueMap<MediaPlayer, MediaPlayerSource>,
    pub clip_source: ValueMap<ClipBank, ClipSource>,
    pub audio_source: ValueMap<ClipBank, AudioClipSource>,
    pub still_file: ValueMap<StillBank, StillFile>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MediaPoolStorage {
    pub clip1_max_length: u16,
    pub clip2_max_length: u16,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ClipPlayer {
    pub playing: bool,
    pub loop_playback: bool,
    pub at_beginning: bool,
    pub clip_frame: u16,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MacroRunState {
    pub running: bool,
    pub waiting: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MacroRunStatus {
    pub state: MacroRunState,
    pub is_looping: bool,
    pub index: u16,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MacroRecordingStatus {
    pub is_recording: bool,
    pub index: u16,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct MacroProperties {
    pub is_used: bool,
    pub name: String,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MacroPool {
    pub banks: u8,
}

#[derive(Default)]
pub struct Macros {
    pub pool: MacroPool,
    pub run_status: MacroRunStatus,
    pub recording_status: MacroRecordingStatus,
    pub properties: ValueMap<Macro, MacroProperties>,
}
