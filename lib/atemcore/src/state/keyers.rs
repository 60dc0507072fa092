use crate::protocol::enums::{KeyFrame, KeyerType, PatternStyle, VideoSource};
use crate::state::{Border, LightSource, Point, ValueMap};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AtKeyFrame {
    pub a: bool,
    pub b: bool,
    pub full: bool,
    pub run_to_infinite: bool,
}

/// One stored position of a flying key.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FlyKeyFrame {
    pub size: Point,
    pub position: Point,
    pub rotation: f64,
    pub border: Border,
    pub light_source: LightSource,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Default)]
pub struct KeyerFly {
    pub enabled: bool,
    pub is_a_set: bool,
    pub is_b_set: bool,
    pub at_key_frame: AtKeyFrame,
    pub run_to_infinite_index: u8,
    pub key_frame: ValueMap<KeyFrame, FlyKeyFrame>,
}

/// Base parameters of an upstream keyer.
#[derive(Default)]
pub struct UpstreamKeyer {
    pub on_air: bool,
    pub kind: Option<KeyerType>,
    pub fill_source: Option<VideoSource>,
    pub key_source: Option<VideoSource>,
    pub masked: bool,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub fly: KeyerFly,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LumaKey {
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ChromaKey {
    pub hue: f64,
    pub gain: f64,
    pub y_suppress: f64,
    pub lift: f64,
    pub narrow: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PatternKey {
    pub pattern: Option<PatternStyle>,
    pub size: f64,
    pub symmetry: f64,
    pub softness: f64,
    pub position: Point,
    pub invert_pattern: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DveKey {
    pub size: Point,
    pub position: Point,
    pub rotation: f64,
    pub border: Border,
    pub shadow: bool,
    pub light_source: LightSource,
    pub masked: bool,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub rate: u8,
}

/// Per-mode key adjustments of an upstream keyer.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Key {
    pub luma: LumaKey,
    pub chroma: ChromaKey,
    pub pattern: PatternKey,
    pub dve: DveKey,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DownstreamKeyer {
    pub tie: bool,
    pub rate: u8,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
    pub masked: bool,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    pub on_air: bool,
    pub in_transition: bool,
    pub is_auto_transitioning: bool,
    pub frames_remaining: u8,
    pub fill_source: Option<VideoSource>,
    pub key_source: Option<VideoSource>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct FadeToBlackState {
    pub fully_black: bool,
    pub in_transition: bool,
    pub frames_remaining: u8,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct FadeToBlack {
    pub rate: u8,
    pub state: FadeToBlackState,
}
