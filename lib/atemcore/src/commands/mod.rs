//! Outbound command encoding. Each setter frames one sub-packet into the
//! output buffer through the relocatable offset base; bundling packs several
//! sub-packets into a single datagram, coalescing consecutive setters that
//! target the same command and index tuple.

pub mod audio;
pub mod camera;
pub mod dsk;
pub mod exec;
pub mod keyers;
pub mod media;
pub mod supersource;
pub mod transition;
pub mod video;

use std::net::UdpSocket;

use crate::error::AtemError;
use crate::net::buffer::ByteBuffer;
use crate::net::endpoint::send_all;
use crate::net::shared::{ErrorType, NetworkError, NetworkResult};
use crate::protocol::{flags, CMD_HEADER_LEN, CMD_STR_OFFSET, HEADER_LEN, OUTPUT_BUFFER_LEN};

/// Everything the caller-thread send path owns: the output buffer, the
/// bundle cursor, the local packet id counter and a cloned socket handle.
/// Lives behind one mutex so bundling sequences cannot interleave.
pub(crate) struct Outbound {
    pub buf: ByteBuffer,
    pub packet_len: usize,
    pub bundling: bool,
    pub bundle_offset: usize,
    pub local_id: u16,
    pub session_id: u16,
    pub socket: Option<UdpSocket>,
}

impl Outbound {
    pub fn new() -> Outbound {
        Outbound {
            buf: ByteBuffer::new(OUTPUT_BUFFER_LEN),
            packet_len: 0,
            bundling: false,
            bundle_offset: 0,
            local_id: 0,
            session_id: 0,
            socket: None,
        }
    }

    /// Reset all per-session counters and adopt the new session's socket.
    pub fn reset_session(&mut self, socket: Option<UdpSocket>) {
        self.buf.reset();
        self.packet_len = 0;
        self.bundling = false;
        self.bundle_offset = 0;
        self.local_id = 0;
        self.session_id = 0;
        self.socket = socket;
    }

    /// Stamp the packet header over bytes 0..12 of the output buffer. Data
    /// packets advance the local packet id; hello, ack and resend-request
    /// packets do not.
    pub fn stamp_header(&mut self, header_flags: u8, length: usize, ack_id: u16) {
        self.buf
            .set_raw_u16(0, ((header_flags as u16) << 11) | (length as u16 & 0x07FF));
        self.buf.set_raw_u16(2, self.session_id);
        self.buf.set_raw_u16(4, ack_id);

        if header_flags & (flags::HELLO | flags::ACK | flags::REQUEST_NEXT_AFTER) == 0 {
            self.local_id = self.local_id.wrapping_add(1);
            self.buf.set_raw_u16(10, self.local_id);
        }
    }

    /// Hand the first `length` bytes of the output buffer to the socket.
    pub fn send(&mut self, length: usize) -> NetworkResult<usize> {
        let socket = self
            .socket
            .as_ref()
            .ok_or(NetworkError::Fatal(ErrorType::Closed))?;

        send_all(socket, &self.buf.raw()[..length])
    }

    /// Frame a command sub-packet of `cmd_bytes` payload bytes. During a
    /// bundle a setter matching the previous sub-packet on tag and index
    /// tuple merges into it; otherwise the bundle cursor advances first.
    pub fn prepare_command(
        &mut self,
        tag: &[u8; 4],
        cmd_bytes: usize,
        index_match: bool,
    ) -> Result<(), AtemError> {
        let mut offset = self.bundle_offset;

        if self.bundling {
            if self.packet_len > 0 {
                let previous = self.buf.raw_tag(HEADER_LEN + offset + CMD_STR_OFFSET);
                if !index_match || previous != *tag {
                    offset = self.packet_len - HEADER_LEN;
                }
            }
        } else {
            self.buf.reset();
        }

        let packet_len = HEADER_LEN + offset + CMD_HEADER_LEN + cmd_bytes;
        if packet_len > OUTPUT_BUFFER_LEN {
            return Err(AtemError::BundleOverflow);
        }

        self.bundle_offset = offset;
        self.packet_len = packet_len;

        self.buf
            .set_raw_u16(HEADER_LEN + offset, (CMD_HEADER_LEN + cmd_bytes) as u16);
        self.buf.set_raw_tag(HEADER_LEN + offset + CMD_STR_OFFSET, tag);
        self.buf.set_base(HEADER_LEN + offset + CMD_HEADER_LEN);

        Ok(())
    }

    /// Finalise and transmit the sub-packet. Inside a bundle this is a
    /// no-op; `bundle_end` sends the whole batch.
    pub fn finish_command(&mut self) -> Result<(), AtemError> {
        if self.bundling {
            return Ok(());
        }

        self.buf.clear_base();

        let length = self.packet_len;
        self.stamp_header(flags::ACK_REQUEST, length, 0);
        self.send(length)?;
        self.packet_len = 0;

        Ok(())
    }

    pub fn bundle_begin(&mut self) {
        self.buf.reset();
        self.packet_len = 0;
        self.bundle_offset = 0;
        self.bundling = true;
    }

    pub fn bundle_end(&mut self) -> Result<(), AtemError> {
        if self.bundling && self.packet_len > 0 {
            self.buf.clear_base();

            let length = self.packet_len;
            self.stamp_header(flags::ACK_REQUEST, length, 0);
            self.send(length)?;
            self.packet_len = 0;
        }

        self.bundling = false;
        self.bundle_offset = 0;
        self.buf.clear_base();

        Ok(())
    }

    // Payload-relative probes for the index-match checks. Out-of-window
    // reads answer with an all-ones pattern that never matches an index.

    #[inline]
    pub fn probe_u8(&self, offset: usize) -> u8 {
        self.buf.u8(offset).unwrap_or(0xFF)
    }

    #[inline]
    pub fn probe_u16(&self, offset: usize) -> u16 {
        self.buf.u16(offset).unwrap_or(0xFFFF)
    }
}

/// Round a payload size up to the 4-byte granularity commands use.
#[inline]
pub(crate) fn pad4(bytes: usize) -> usize {
    (bytes + 3) & !3
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn outbound_pair() -> (Outbound, UdpSocket) {
        let remote = UdpSocket::bind("127.0.0.1:0").unwrap();
        remote
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();

        let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
        socket.connect(remote.local_addr().unwrap()).unwrap();

        let mut out = Outbound::new();
        out.socket = Some(socket);
        out.session_id = 0x5DB7;

        (out, remote)
    }

    fn recv(remote: &UdpSocket) -> Vec<u8> {
        let mut buf = [0u8; 512];
        let count = remote.recv(&mut buf).unwrap();
        buf[..count].to_vec()
    }

    #[test]
    fn test_single_command_packet() {
        let (mut out, remote) = outbound_pair();

        out.prepare_command(b"CPgI", 4, false).unwrap();
        out.buf.set_u8(0, 0).unwrap();
        out.buf.set_u16(2, 3).unwrap();
        out.finish_command().unwrap();

        let datagram = recv(&remote);

        // Header: ackRequest, 24 bytes, session id, local packet id 1.
        assert_eq!(datagram[0], 0x08);
        assert_eq!(datagram[1], 24);
        assert_eq!(&datagram[2..4], &[0x5D, 0xB7]);
        assert_eq!(&datagram[10..12], &[0x00, 0x01]);

        // Body: 00 0C 00 00 "CPgI" 00 00 00 03.
        assert_eq!(
            &datagram[12..],
            &[0x00, 0x0C, 0x00, 0x00, 0x43, 0x50, 0x67, 0x49, 0x00, 0x00, 0x00, 0x03]
        );
    }

    #[test]
    fn test_local_id_advances_per_data_packet() {
        let (mut out, remote) = outbound_pair();

        for expected in 1..=3u16 {
            out.prepare_command(b"DCut", 4, false).unwrap();
            out.buf.set_u8(0, 0).unwrap();
            out.finish_command().unwrap();

            let datagram = recv(&remote);
            assert_eq!(&datagram[10..12], &expected.to_be_bytes());
        }
    }

    #[test]
    fn test_acks_do_not_advance_local_id() {
        let (mut out, remote) = outbound_pair();

        out.buf.reset();
        out.stamp_header(flags::ACK, HEADER_LEN, 17);
        out.send(HEADER_LEN).unwrap();

        let datagram = recv(&remote);
        assert_eq!(out.local_id, 0);
        assert_eq!(datagram[0], 0x80);
        assert_eq!(&datagram[4..6], &[0x00, 0x11]);
        assert_eq!(&datagram[10..12], &[0x00, 0x00]);
    }

    #[test]
    fn test_bundle_coalesces_same_tag_and_index() {
        let (mut out, remote) = outbound_pair();
        out.bundle_begin();

        // set wipe rate, mE 0, rate 30
        let index_match = out.probe_u8(2) == 0;
        out.prepare_command(b"CTWp", 20, index_match).unwrap();
        out.buf.set_flag16(0, 0).unwrap();
        out.buf.set_u8(2, 0).unwrap();
        out.buf.set_u8(3, 30).unwrap();
        out.finish_command().unwrap();

        // set wipe pattern, mE 0, pattern 7
        let index_match = out.probe_u8(2) == 0;
        assert!(index_match);
        out.prepare_command(b"CTWp", 20, index_match).unwrap();
        out.buf.set_flag16(0, 1).unwrap();
        out.buf.set_u8(2, 0).unwrap();
        out.buf.set_u8(4, 7).unwrap();
        out.finish_command().unwrap();

        out.bundle_end().unwrap();

        let datagram = recv(&remote);

        // One sub-packet of 28 bytes in a 40 byte datagram.
        assert_eq!(datagram.len(), 40);
        assert_eq!(datagram[0], 0x08);
        assert_eq!(datagram[1], 40);
        assert_eq!(&datagram[12..14], &[0x00, 28]);
        assert_eq!(&datagram[16..20], b"CTWp");

        // Field bits 0 and 1 merged into byte 1, rate and pattern in place.
        assert_eq!(datagram[20], 0x00);
        assert_eq!(datagram[21], 0x03);
        assert_eq!(datagram[22], 0x00);
        assert_eq!(datagram[23], 30);
        assert_eq!(datagram[24], 7);
    }

    #[test]
    fn test_bundle_separates_different_commands() {
        let (mut out, remote) = outbound_pair();
        out.bundle_begin();

        out.prepare_command(b"CPgI", 4, false).unwrap();
        out.buf.set_u8(0, 0).unwrap();
        out.buf.set_u16(2, 2).unwrap();
        out.finish_command().unwrap();

        out.prepare_command(b"CPvI", 4, true).unwrap();
        out.buf.set_u8(0, 0).unwrap();
        out.buf.set_u16(2, 3).unwrap();
        out.finish_command().unwrap();

        out.bundle_end().unwrap();

        let datagram = recv(&remote);

        assert_eq!(datagram.len(), 12 + 12 + 12);
        assert_eq!(&datagram[16..20], b"CPgI");
        assert_eq!(&datagram[28..32], b"CPvI");
    }

    #[test]
    fn test_bundle_overflow_leaves_state_intact() {
        let (mut out, remote) = outbound_pair();
        out.bundle_begin();

        for _ in 0..3 {
            out.prepare_command(b"CKDV", 64, false).unwrap();
            out.buf.set_u8(4, 0).unwrap();
            out.finish_command().unwrap();
        }

        // 12 + 3*72 = 228; one more 72 byte sub-packet would hit 300.
        let result = out.prepare_command(b"CKDV", 64, false);
        assert_eq!(result.unwrap_err(), AtemError::BundleOverflow);

        // The bundle is still usable and flushes the three framed commands.
        out.bundle_end().unwrap();
        let datagram = recv(&remote);
        assert_eq!(datagram.len(), 12 + 3 * 72);
    }

    #[test]
    fn test_pad4() {
        assert_eq!(pad4(6), 8);
        assert_eq!(pad4(8), 8);
        assert_eq!(pad4(9), 12);
    }
}
