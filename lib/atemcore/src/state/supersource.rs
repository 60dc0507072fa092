use crate::protocol::enums::{SsBox, VideoSource};
use crate::state::{Border, Edges, LightSource, Point, ValueMap};

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct SuperSourceConfig {
    pub boxes: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SuperSourceBox {
    pub enabled: bool,
    pub input_source: Option<VideoSource>,
    pub position: Point,
    pub size: f64,
    pub cropped: bool,
    pub crop: Edges,
}

#[derive(Default)]
pub struct SuperSource {
    pub config: SuperSourceConfig,
    pub fill_source: Option<VideoSource>,
    pub key_source: Option<VideoSource>,
    pub foreground: bool,
    pub pre_multiplied: bool,
    pub clip: f64,
    pub gain: f64,
    pub invert_key: bool,
    pub border: Border,
    pub light_source: LightSource,
    pub box_parameters: ValueMap<SsBox, SuperSourceBox>,
}
