//! Decoders for tally state and the last-change time code.

use prism::logging::Logger;

use crate::decode::{enum16, DecodeError, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::protocol::enums::{ProtoEnum, VideoSource};
use crate::state::SwitcherState;

/// Two bytes per record after the count: a flag byte and a reserved byte.
pub fn by_index(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let count = buf.u16(0)?;
    if count as usize >= VideoSource::COUNT {
        return Err(DecodeError::BadCount {
            what: VideoSource::WHAT,
            count,
        });
    }

    state.tally.by_index.sources = count;

    for index in 0..count as usize {
        let flags = &mut state.tally.by_index.flags[index];
        flags.program = buf.flag8(2 + 2 * index, 0)?;
        flags.preview = buf.flag8(2 + 2 * index, 1)?;
    }

    Ok(())
}

/// Three bytes per record after the count: a source word and a flag byte.
pub fn by_source(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let count = buf.u16(0)?;
    if count as usize >= VideoSource::COUNT {
        return Err(DecodeError::BadCount {
            what: VideoSource::WHAT,
            count,
        });
    }

    state.tally.by_source.sources = count;

    for index in 0..count as usize {
        let offset = 2 + 3 * index;
        let source = enum16::<VideoSource>(buf, offset)?;
        let flags = &mut state.tally.by_source.flags[source];

        flags.program = buf.flag8(offset + 2, 0)?;
        flags.preview = buf.flag8(offset + 2, 1)?;
    }

    Ok(())
}

pub fn time_code(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let code = &mut state.last_state_change.time_code;

    code.hour = buf.u8(0)?;
    code.minute = buf.u8(1)?;
    code.second = buf.u8(2)?;
    code.frame = buf.u8(3)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_by_index_wire_fixture() {
        // Payload of the documented TlIn sub-packet
        // 00 0E 00 00 54 6C 49 6E 00 02 01 00 02 00.
        let state = decode(by_index, &[0x00, 0x02, 0x01, 0x00, 0x02, 0x00]);

        assert_eq!(state.tally.by_index.sources, 2);
        assert!(state.tally.by_index.flags[0].program);
        assert!(!state.tally.by_index.flags[0].preview);
        assert!(!state.tally.by_index.flags[1].program);
        assert!(state.tally.by_index.flags[1].preview);
    }

    #[test]
    fn test_by_index_rejects_bad_count() {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(64);
        buf.load(&[0x00, 0xFF, 0x00, 0x00]);

        let result = by_index(&mut state, &buf, &logging::discard());
        assert!(result.is_err());
        assert_eq!(state.tally.by_index.sources, 0);
    }

    #[test]
    fn test_by_source() {
        let mut payload = vec![0u8; 8];
        payload[0..2].copy_from_slice(&(2u16).to_be_bytes());
        payload[2..4].copy_from_slice(&(4u16).to_be_bytes()); // input4
        payload[4] = 0x01; // program
        payload[5..7].copy_from_slice(&(1000u16).to_be_bytes()); // colorBars
        payload[7] = 0x02; // preview

        let state = decode(by_source, &payload);

        assert_eq!(state.tally.by_source.sources, 2);
        assert!(state.tally.by_source.flags[VideoSource::Input4].program);
        assert!(state.tally.by_source.flags[VideoSource::ColorBars].preview);
        assert!(!state.tally.by_source.flags[VideoSource::ColorBars].program);
    }

    #[test]
    fn test_time_code() {
        let state = decode(time_code, &[13, 59, 30, 12, 0, 0, 0, 0]);
        let code = &state.last_state_change.time_code;

        assert_eq!((code.hour, code.minute, code.second, code.frame), (13, 59, 30, 12));
    }
}
