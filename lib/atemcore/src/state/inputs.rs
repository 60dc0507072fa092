use crate::protocol::enums::{
    ExternalPortType, MultiViewer, MultiViewerLayout, SwitcherPortType, VideoSource, Window,
};
use crate::state::ValueMap;

/// External connector types an input can present.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct ExternalPortFlags {
    pub sdi: bool,
    pub hdmi: bool,
    pub component: bool,
    pub composite: bool,
    pub s_video: bool,
}

/// Where a source may be routed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct InputAvailability {
    pub auxiliary: bool,
    pub multiviewer: bool,
    pub super_source_art: bool,
    pub super_source_box: bool,
    pub key_sources_everywhere: bool,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MeAvailability {
    pub me1_fill_sources: bool,
    pub me2_fill_sources: bool,
}

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct InputProperties {
    pub long_name: String,
    pub short_name: String,
    pub available_external_ports: ExternalPortFlags,
    pub external_port_type: Option<ExternalPortType>,
    pub port_type: Option<SwitcherPortType>,
    pub availability: InputAvailability,
    pub me_availability: MeAvailability,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MultiViewerConfig {
    pub multi_viewers: u8,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MultiViewerProperties {
    pub layout: Option<MultiViewerLayout>,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct MultiViewerWindow {
    pub video_source: Option<VideoSource>,
}

#[derive(Default)]
pub struct MultiViewers {
    pub config: MultiViewerConfig,
    pub properties: ValueMap<MultiViewer, MultiViewerProperties>,
    pub input: ValueMap<MultiViewer, ValueMap<Window, MultiViewerWindow>>,
}
