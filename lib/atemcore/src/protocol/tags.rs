//! Command tag table: every 4-character tag the switcher is known to send,
//! mapped to a human readable name for events and diagnostics. Tags present
//! here but without a decoder are accepted silently; tags absent entirely
//! raise a warning event.

use hashbrown::HashMap;
use lazy_static::lazy_static;

use crate::protocol::Tag;

static COMMAND_NAMES: &[(&[u8; 4], &str)] = &[
    (b"_ver", "Protocol Version"),
    (b"_pin", "Product Id"),
    (b"Warn", "Warning"),
    (b"_top", "Topology"),
    (b"_MeC", "Mix Effect Config"),
    (b"_mpl", "Media Players"),
    (b"_MvC", "Multi View Config"),
    (b"_SSC", "Super Source Config"),
    (b"_TlC", "Tally Channel Config"),
    (b"_AMC", "Audio Mixer Config"),
    (b"_VMC", "Video Mixer Config"),
    (b"_MAC", "Macro Pool"),
    (b"Powr", "Power"),
    (b"DcOt", "Down Converter"),
    (b"VidM", "Video Mode"),
    (b"InPr", "Input Properties"),
    (b"MvPr", "Multi Viewer Properties"),
    (b"MvIn", "Multi Viewer Input"),
    (b"PrgI", "Program Input"),
    (b"PrvI", "Preview Input"),
    (b"TrSS", "Transition"),
    (b"TrPr", "Transition Preview"),
    (b"TrPs", "Transition Position"),
    (b"TMxP", "Transition Mix"),
    (b"TDpP", "Transition Dip"),
    (b"TWpP", "Transition Wipe"),
    (b"TDvP", "Transition DVE"),
    (b"TStP", "Transition Stinger"),
    (b"KeOn", "Keyer On Air"),
    (b"KeBP", "Keyer Base"),
    (b"KeLm", "Key Luma"),
    (b"KeCk", "Key Chroma"),
    (b"KePt", "Key Pattern"),
    (b"KeDV", "Key DVE"),
    (b"KeFS", "Keyer Fly"),
    (b"KKFP", "Keyer Fly Key Frame"),
    (b"DskB", "Downstream Keyer (B)"),
    (b"DskP", "Downstream Keyer (P)"),
    (b"DskS", "Downstream Keyer (S)"),
    (b"FtbP", "Fade-To-Black"),
    (b"FtbS", "Fade-To-Black State"),
    (b"ColV", "Color Generator"),
    (b"AuxS", "Aux Source"),
    (b"CCdP", "Camera Control"),
    (b"RCPS", "Clip Player"),
    (b"MPCE", "Media Player Source"),
    (b"MPSp", "Media Pool Storage"),
    (b"MPCS", "Media Player Clip Source"),
    (b"MPAS", "Media Player Audio Source"),
    (b"MPfe", "Media Player Still Files"),
    (b"MRPr", "Macro Run Status"),
    (b"MPrp", "Macro Properties"),
    (b"MRcS", "Macro Recording Status"),
    (b"SSrc", "Super Source"),
    (b"SSBP", "Super Source Box Parameters"),
    (b"AMIP", "Audio Mixer Input"),
    (b"AMMO", "Audio Mixer Master"),
    (b"AMmO", "Audio Mixer Monitor"),
    (b"AMLv", "Audio Mixer Levels"),
    (b"AMTl", "Audio Mixer Tally"),
    (b"TlIn", "Tally By Index"),
    (b"TlSr", "Tally By Source"),
    (b"Time", "Last State Change Time Code"),
    // Known tags without a decoder. Recorded so they do not raise
    // unknown-command warnings.
    (b"InCm", "Initialization Completed"),
    (b"LKST", "Lock State"),
    (b"PLCK", "Acquire Media Lock"),
    (b"LKOB", "Lock Obtained"),
    (b"LOCK", "Set Lock State"),
    (b"FTDE", "Data Transfer Error"),
    (b"FTUA", "Data Transfer Ack"),
    (b"FTSD", "Data Transfer to Switcher"),
    (b"FTSU", "Data Transfer Request"),
    (b"FTCD", "Data Transfer Upload Continue"),
    (b"FTDa", "Data Transfer Data"),
    (b"FTDC", "Data Transfer Completed"),
    (b"FTFD", "Data File Description"),
    (b"RXMS", "HyperDeck Settings Get"),
    (b"CCdo", "Camera Control Options"),
    (b"TlFc", "Tally Channel Flags"),
    (b"MMOP", "Macro Monitor Properties"),
    (b"V3sl", "SDI 3G Output Level"),
    (b"VuMC", "VU Meter Config"),
    (b"VuMo", "VU Meter Opacity"),
    (b"MvVM", "Multi Viewer VU Meters"),
    (b"AMHP", "Audio Mixer Headphones"),
    (b"AMPP", "Audio Mixer Properties"),
    (b"ATMP", "Audio Talkback Properties"),
    (b"_DVE", "DVE Config"),
    (b"PZCS", "PTZ RS-485 Config"),
    (b"RXCC", "HyperDeck Clip Count"),
    (b"RXCP", "HyperDeck Clip Info"),
    (b"RXSS", "HyperDeck Storage Media Info"),
    (b"TMIP", "Time Code Mode"),
    (b"SPtM", "Serial Port Mode"),
    (b"SPZS", "PTZ Settings"),
];

lazy_static! {
    static ref NAMES: HashMap<Tag, &'static str> = COMMAND_NAMES
        .iter()
        .map(|&(tag, name)| (Tag(*tag), name))
        .collect();
}

/// Friendly name of a known tag.
#[inline]
pub fn name_of(tag: Tag) -> Option<&'static str> {
    NAMES.get(&tag).copied()
}

/// True for tags the protocol table knows about, decoded or not.
#[inline]
pub fn is_known(tag: Tag) -> bool {
    NAMES.contains_key(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoded_tags_are_known() {
        for tag in &[b"PrgI", b"AMLv", b"TlSr", b"_ver", b"KKFP"] {
            assert!(is_known(Tag(**tag)), "{:?} missing", tag);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(name_of(Tag(*b"PrgI")), Some("Program Input"));
        assert_eq!(name_of(Tag(*b"InCm")), Some("Initialization Completed"));
        assert_eq!(name_of(Tag(*b"XXXX")), None);
    }

    #[test]
    fn test_no_duplicate_tags() {
        assert_eq!(NAMES.len(), COMMAND_NAMES.len());
    }
}
