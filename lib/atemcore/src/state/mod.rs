//! The switcher state mirror. Pure data: created empty on connect and
//! mutated only by the inbound decoders. Callers read it as an eventually
//! consistent snapshot.

pub mod audio;
pub mod camera;
pub mod inputs;
pub mod keyers;
pub mod media;
pub mod supersource;
pub mod tally;
pub mod transition;

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::protocol::enums::{
    AuxChannel, Camera, ColorGenerator, Dsk, DownConverterMode, Keyer, MediaPlayer, MixEffect,
    ProtoEnum, VideoModeFormat, VideoSource,
};

pub use self::audio::AudioMixer;
pub use self::camera::CameraControl;
pub use self::inputs::{InputProperties, MultiViewers};
pub use self::keyers::{DownstreamKeyer, FadeToBlack, Key, UpstreamKeyer};
pub use self::media::{ClipPlayer, Macros, MediaPlayers, MediaPoolStorage};
pub use self::supersource::SuperSource;
pub use self::tally::Tally;
pub use self::transition::Transition;

/// Fixed collection keyed by a protocol enumeration. Allocated once at its
/// full size; indexing with the enum can never miss.
pub struct ValueMap<K: ProtoEnum, T> {
    items: Vec<T>,
    _key: PhantomData<K>,
}

impl<K: ProtoEnum, T: Default> Default for ValueMap<K, T> {
    fn default() -> Self {
        ValueMap {
            items: (0..K::COUNT).map(|_| T::default()).collect(),
            _key: PhantomData,
        }
    }
}

impl<K: ProtoEnum, T> ValueMap<K, T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<K: ProtoEnum, T> Index<K> for ValueMap<K, T> {
    type Output = T;

    #[inline]
    fn index(&self, key: K) -> &T {
        &self.items[key.ordinal()]
    }
}

impl<K: ProtoEnum, T> IndexMut<K> for ValueMap<K, T> {
    #[inline]
    fn index_mut(&mut self, key: K) -> &mut T {
        &mut self.items[key.ordinal()]
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BorderEdge {
    pub width: f64,
    pub softness: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bevel {
    pub kind: Option<crate::protocol::enums::BorderBevel>,
    pub position: f64,
    pub softness: f64,
}

/// Border block shared by the DVE keyer, fly key frames and super source.
/// Not every command writes every field.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Border {
    pub enabled: bool,
    pub bevel: Bevel,
    pub inner: BorderEdge,
    pub outer: BorderEdge,
    pub opacity: u8,
    pub hue: f64,
    pub saturation: f64,
    pub luma: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LightSource {
    pub direction: f64,
    pub altitude: u8,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ProtocolVersion {
    pub major: u16,
    pub minor: u16,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct Topology {
    pub m_es: u8,
    pub sources: u8,
    pub color_generators: u8,
    pub aux_busses: u8,
    pub downstream_keyers: u8,
    pub stingers: u8,
    pub dves: u8,
    pub super_sources: u8,
    pub has_sd_output: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PowerStatus {
    pub main: bool,
    pub backup: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct DownConverter {
    pub mode: Option<DownConverterMode>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct VideoMode {
    pub format: Option<VideoModeFormat>,
}

/// Video standards the switcher can run, from the packed topology flags.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[allow(non_snake_case)]
pub struct VideoModeFlags {
    pub f525i59_94_ntsc: bool,
    pub f625i_50_pal: bool,
    pub f525i59_94_ntsc_16_9: bool,
    pub f625i_50_pal_16_9: bool,
    pub f720p50: bool,
    pub f720p59_94: bool,
    pub f1080i50: bool,
    pub f1080i59_94: bool,
    pub f1080p23_98: bool,
    pub f1080p24: bool,
    pub f1080p25: bool,
    pub f1080p29_97: bool,
    pub f1080p50: bool,
    pub f1080p59_94: bool,
    pub f2160p23_98: bool,
    pub f2160p24: bool,
    pub f2160p25: bool,
    pub f2160p29_97: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct VideoMixerConfig {
    pub modes: VideoModeFlags,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MixEffectConfig {
    pub keyers: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ColorValue {
    pub hue: f64,
    pub saturation: f64,
    pub luma: f64,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AuxSource {
    pub input: Option<VideoSource>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ProgramInput {
    pub video_source: Option<VideoSource>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PreviewInput {
    pub video_source: Option<VideoSource>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TimeCode {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct LastStateChange {
    pub time_code: TimeCode,
}

/// Root of the mirror.
#[derive(Default)]
pub struct SwitcherState {
    pub atem_model: String,
    pub warning_text: String,
    pub protocol_version: ProtocolVersion,
    pub topology: Topology,
    pub power: PowerStatus,
    pub down_converter: DownConverter,
    pub video_mode: VideoMode,
    pub video_mixer: VideoMixerConfig,
    pub mix_effect_config: ValueMap<MixEffect, MixEffectConfig>,
    pub multi_viewer: MultiViewers,
    pub super_source: SuperSource,
    pub tally: Tally,
    pub audio_mixer: AudioMixer,
    pub macros: Macros,
    pub media_player: MediaPlayers,
    pub media_pool_storage: MediaPoolStorage,
    pub clip_player: ValueMap<MediaPlayer, ClipPlayer>,
    pub input_properties: ValueMap<VideoSource, InputProperties>,
    pub program_input: ValueMap<MixEffect, ProgramInput>,
    pub preview_input: ValueMap<MixEffect, PreviewInput>,
    pub transition: ValueMap<MixEffect, Transition>,
    pub keyer: ValueMap<MixEffect, ValueMap<Keyer, UpstreamKeyer>>,
    pub key: ValueMap<MixEffect, ValueMap<Keyer, Key>>,
    pub downstream_keyer: ValueMap<Dsk, DownstreamKeyer>,
    pub fade_to_black: ValueMap<MixEffect, FadeToBlack>,
    pub color_generator: ValueMap<ColorGenerator, ColorValue>,
    pub aux_source: ValueMap<AuxChannel, AuxSource>,
    pub camera_control: ValueMap<Camera, CameraControl>,
    pub last_state_change: LastStateChange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::StillBank;

    #[test]
    fn test_value_map_is_fully_allocated() {
        let map: ValueMap<VideoSource, ProgramInput> = ValueMap::default();
        assert_eq!(map.len(), VideoSource::COUNT);
    }

    #[test]
    fn test_value_map_indexing() {
        let mut map: ValueMap<MixEffect, ProgramInput> = ValueMap::default();
        map[MixEffect::MixEffect3].video_source = Some(VideoSource::Input7);

        assert_eq!(map[MixEffect::MixEffect3].video_source, Some(VideoSource::Input7));
        assert_eq!(map[MixEffect::MixEffect1].video_source, None);
    }

    #[test]
    fn test_state_tree_defaults_empty() {
        let state = SwitcherState::default();

        assert_eq!(state.atem_model, "");
        assert_eq!(state.topology.m_es, 0);
        assert_eq!(state.program_input[MixEffect::MixEffect1].video_source, None);
        assert_eq!(state.media_player.still_file.len(), StillBank::COUNT);
    }
}
