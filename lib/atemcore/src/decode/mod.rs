//! Inbound command decoders. One handler per 4-character tag, reading from
//! the input buffer into the state mirror. Handlers are pure with respect to
//! the network: no I/O, no cross-tag side effects.

pub mod audio;
pub mod camera;
pub mod config;
pub mod keyers;
pub mod media;
pub mod mixer;
pub mod supersource;
pub mod tally;

use std::fmt;

use hashbrown::HashMap;
use lazy_static::lazy_static;
use prism::logging::Logger;

use crate::net::buffer::{BufferError, ByteBuffer};
use crate::protocol::enums::ProtoEnum;
use crate::protocol::Tag;
use crate::state::SwitcherState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload is shorter than the layout requires.
    Buffer(BufferError),
    /// A decoded code-point is not assigned in the enumeration.
    UnknownEnum { what: &'static str, code: i64 },
    /// A variable-length count prefix exceeds the enumeration size.
    BadCount { what: &'static str, count: u16 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::Buffer(err) => write!(f, "{}", err),
            DecodeError::UnknownEnum { what, code } => {
                write!(f, "UNKNOWN {} {}", what, code)
            }
            DecodeError::BadCount { what, count } => {
                write!(f, "UNKNOWN {} count {}", what, count)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<BufferError> for DecodeError {
    #[inline]
    fn from(err: BufferError) -> Self {
        DecodeError::Buffer(err)
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

pub type Handler = fn(&mut SwitcherState, &ByteBuffer, &Logger) -> DecodeResult<()>;

/// Enumerated value from a one byte field.
#[inline]
pub(crate) fn enum8<E: ProtoEnum>(buf: &ByteBuffer, offset: usize) -> DecodeResult<E> {
    enum_code(buf.u8(offset)? as u16)
}

/// Enumerated value from a two byte field.
#[inline]
pub(crate) fn enum16<E: ProtoEnum>(buf: &ByteBuffer, offset: usize) -> DecodeResult<E> {
    enum_code(buf.u16(offset)?)
}

#[inline]
pub(crate) fn enum_code<E: ProtoEnum>(code: u16) -> DecodeResult<E> {
    E::from_code(code).ok_or(DecodeError::UnknownEnum {
        what: E::WHAT,
        code: code as i64,
    })
}

/// The decoder registry, generated from a static list rather than by
/// reflection. Tags absent here are either known-but-undecoded (see the tag
/// table) or unknown.
static DECODERS: &[(&[u8; 4], Handler)] = &[
    (b"_ver", config::version),
    (b"_pin", config::product_id),
    (b"Warn", config::warning),
    (b"_top", config::topology),
    (b"_MeC", config::mix_effect_config),
    (b"_mpl", config::media_players),
    (b"_MvC", config::multi_viewer_config),
    (b"_SSC", config::super_source_config),
    (b"_TlC", config::tally_channel_config),
    (b"_AMC", config::audio_mixer_config),
    (b"_VMC", config::video_mixer_config),
    (b"_MAC", config::macro_pool),
    (b"Powr", config::power),
    (b"DcOt", config::down_converter),
    (b"VidM", config::video_mode),
    (b"InPr", config::input_properties),
    (b"MvPr", config::multi_viewer_properties),
    (b"MvIn", config::multi_viewer_input),
    (b"PrgI", mixer::program_input),
    (b"PrvI", mixer::preview_input),
    (b"TrSS", mixer::transition_settings),
    (b"TrPr", mixer::transition_preview),
    (b"TrPs", mixer::transition_position),
    (b"TMxP", mixer::transition_mix),
    (b"TDpP", mixer::transition_dip),
    (b"TWpP", mixer::transition_wipe),
    (b"TDvP", mixer::transition_dve),
    (b"TStP", mixer::transition_stinger),
    (b"FtbP", mixer::fade_to_black),
    (b"FtbS", mixer::fade_to_black_state),
    (b"ColV", mixer::color_generator),
    (b"AuxS", mixer::aux_source),
    (b"KeOn", keyers::keyer_on_air),
    (b"KeBP", keyers::keyer_base),
    (b"KeLm", keyers::key_luma),
    (b"KeCk", keyers::key_chroma),
    (b"KePt", keyers::key_pattern),
    (b"KeDV", keyers::key_dve),
    (b"KeFS", keyers::keyer_fly),
    (b"KKFP", keyers::keyer_fly_key_frame),
    (b"DskB", keyers::dsk_sources),
    (b"DskP", keyers::dsk_parameters),
    (b"DskS", keyers::dsk_state),
    (b"RCPS", media::clip_player),
    (b"MPCE", media::media_player_source),
    (b"MPSp", media::media_pool_storage),
    (b"MPCS", media::clip_source),
    (b"MPAS", media::audio_clip_source),
    (b"MPfe", media::still_file),
    (b"MRPr", media::macro_run_status),
    (b"MPrp", media::macro_properties),
    (b"MRcS", media::macro_recording_status),
    (b"SSrc", supersource::super_source),
    (b"SSBP", supersource::box_parameters),
    (b"AMIP", audio::mixer_input),
    (b"AMMO", audio::mixer_master),
    (b"AMmO", audio::mixer_monitor),
    (b"AMLv", audio::mixer_levels),
    (b"AMTl", audio::mixer_tally),
    (b"TlIn", tally::by_index),
    (b"TlSr", tally::by_source),
    (b"Time", tally::time_code),
    (b"CCdP", camera::camera_control),
];

lazy_static! {
    static ref TABLE: HashMap<Tag, Handler> = DECODERS
        .iter()
        .map(|&(tag, handler)| (Tag(*tag), handler))
        .collect();
}

#[inline]
pub fn handler_for(tag: Tag) -> Option<Handler> {
    TABLE.get(&tag).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::tags;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(TABLE.len(), DECODERS.len());
    }

    #[test]
    fn test_every_decoded_tag_has_a_name() {
        for &(tag, _) in DECODERS {
            assert!(tags::is_known(Tag(*tag)), "{:?} missing from tag table", tag);
        }
    }

    #[test]
    fn test_lookup() {
        assert!(handler_for(Tag(*b"PrgI")).is_some());
        assert!(handler_for(Tag(*b"InCm")).is_none());
        assert!(handler_for(Tag(*b"ZZZZ")).is_none());
    }
}
