use crate::protocol::enums::{
    DveTransitionStyle, MediaPlayer, PatternStyle, TransitionStyle, VideoSource,
};
use crate::state::Point;

/// Which layers the next transition carries.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TransitionSelection {
    pub background: bool,
    pub key1: bool,
    pub key2: bool,
    pub key3: bool,
    pub key4: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct TransitionPreview {
    pub enabled: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MixTransition {
    pub rate: u8,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct DipTransition {
    pub rate: u8,
    pub input: Option<VideoSource>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WipeTransition {
    pub rate: u8,
    pub pattern: Option<PatternStyle>,
    pub width: f64,
    pub fill_source: Option<VideoSource>,
    pub symmetry: f64,
    pub softness: f64,
    pub position: Point,
    pub reverse: bool,
    pub flip_flop: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DveTransition {
    pub rate: u8,
    pub style: Option<DveTransitionStyle>,
    pub fill_source: Option<VideoSource>,
    pub key_source: Option<VideoSource>,
    pub enable_key: bool,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
    pub reverse: bool,
    pub flip_flop: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StingerTransition {
    pub source: Option<MediaPlayer>,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
    pub pre_roll: u16,
    pub clip_duration: u16,
    pub trigger_point: u16,
    pub mix_rate: u16,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Transition {
    pub style: Option<TransitionStyle>,
    pub next_transition: TransitionSelection,
    pub style_next: Option<TransitionStyle>,
    pub next_transition_next: TransitionSelection,
    pub preview: TransitionPreview,
    pub in_transition: bool,
    pub frames_remaining: u8,
    pub position: u16,
    pub mix: MixTransition,
    pub dip: DipTransition,
    pub wipe: WipeTransition,
    pub dve: DveTransition,
    pub stinger: StingerTransition,
}
