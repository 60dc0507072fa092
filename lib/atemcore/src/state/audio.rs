use crate::protocol::enums::{
    AudioMixerInputMixOption, AudioMixerInputPlugType, AudioMixerInputType, AudioSource,
};
use crate::state::ValueMap;

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AudioMixerConfig {
    pub audio_channels: u8,
    pub has_monitor: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioInput {
    pub kind: Option<AudioMixerInputType>,
    pub from_media_player: bool,
    pub plug: Option<AudioMixerInputPlugType>,
    pub mix_option: Option<AudioMixerInputMixOption>,
    /// Fader level in dB, converted from the raw word.
    pub volume: f64,
    pub balance: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioMaster {
    pub volume: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AudioMonitor {
    pub monitor_audio: bool,
    pub volume: f64,
    pub mute: bool,
    pub solo: bool,
    pub solo_input: Option<AudioSource>,
    pub dim: bool,
}

/// Raw meter words as delivered by the switcher.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LevelPeak {
    pub left: u16,
    pub right: u16,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LevelPair {
    pub left: u16,
    pub right: u16,
    pub peak: LevelPeak,
}

#[derive(Default)]
pub struct AudioLevels {
    pub num_sources: u16,
    pub master: LevelPair,
    pub monitor: u16,
    pub sources: ValueMap<AudioSource, LevelPair>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AudioTallyFlag {
    pub is_mixed_in: bool,
}

#[derive(Default)]
pub struct AudioTally {
    pub num_sources: u16,
    pub sources: ValueMap<AudioSource, AudioTallyFlag>,
}

#[derive(Default)]
pub struct AudioMixer {
    pub config: AudioMixerConfig,
    pub input: ValueMap<AudioSource, AudioInput>,
    pub master: AudioMaster,
    pub monitor: AudioMonitor,
    pub levels: AudioLevels,
    pub tally: AudioTally,
}
