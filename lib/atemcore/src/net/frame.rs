use byteorder::{BigEndian, ByteOrder};

/// Size of the packet header.
pub const HEADER_LEN: usize = 12;

/// Header flag bits. The five flags live in the top five bits of byte 0,
/// the low three bits of byte 0 plus byte 1 carry the 11-bit packet length.
pub mod flags {
    /// Peer must acknowledge reception of this packet.
    pub const ACK_REQUEST: u8 = 0x01;
    /// Part of the session handshake.
    pub const HELLO: u8 = 0x02;
    /// This packet is a retransmission.
    pub const RESEND: u8 = 0x04;
    /// Asking the peer to retransmit.
    pub const REQUEST_NEXT_AFTER: u8 = 0x08;
    /// This packet acknowledges the id in the ack-id field.
    pub const ACK: u8 = 0x10;
}

#[derive(Debug, Eq, PartialEq)]
pub enum FrameError {
    Truncated(usize),
}

/// Decoded 12-byte packet header.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct PacketHeader {
    pub flags: u8,
    pub length: u16,
    pub session_id: u16,
    pub ack_id: u16,
    pub resend_id: u16,
    pub unknown: u16,
    pub local_id: u16,
}

impl PacketHeader {
    #[inline]
    pub fn read(data: &[u8]) -> Result<PacketHeader, FrameError> {
        if data.len() < HEADER_LEN {
            return Err(FrameError::Truncated(data.len()));
        }

        let word0 = BigEndian::read_u16(&data[0..2]);

        Ok(PacketHeader {
            flags: (word0 >> 11) as u8,
            length: word0 & 0x07FF,
            session_id: BigEndian::read_u16(&data[2..4]),
            ack_id: BigEndian::read_u16(&data[4..6]),
            resend_id: BigEndian::read_u16(&data[6..8]),
            unknown: BigEndian::read_u16(&data[8..10]),
            local_id: BigEndian::read_u16(&data[10..12]),
        })
    }

    #[inline]
    pub fn write(&self, out: &mut [u8]) {
        BigEndian::write_u16(&mut out[0..2], ((self.flags as u16) << 11) | (self.length & 0x07FF));
        BigEndian::write_u16(&mut out[2..4], self.session_id);
        BigEndian::write_u16(&mut out[4..6], self.ack_id);
        BigEndian::write_u16(&mut out[6..8], self.resend_id);
        BigEndian::write_u16(&mut out[8..10], self.unknown);
        BigEndian::write_u16(&mut out[10..12], self.local_id);
    }

    #[inline]
    pub fn has(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_hello_reply() {
        // Captured switcher hello response.
        let data = [
            0x18, 0x14, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01,
        ];

        let header = PacketHeader::read(&data).unwrap();

        assert_eq!(header.flags, flags::ACK_REQUEST | flags::HELLO);
        assert_eq!(header.length, 20);
        assert_eq!(header.session_id, 0x5DB7);
        assert_eq!(header.ack_id, 0);
        assert_eq!(header.unknown, 2);
        assert_eq!(header.local_id, 1);
        assert!(header.has(flags::HELLO));
        assert!(!header.has(flags::RESEND));
    }

    #[test]
    fn test_read_truncated() {
        let result = PacketHeader::read(&[0x10, 0x0C, 0x00]);
        assert_eq!(result.unwrap_err(), FrameError::Truncated(3));
    }

    #[test]
    fn test_roundtrip_all_flag_masks() {
        for mask in 0u8..0x20 {
            for &length in &[12u16, 20, 0x07FF] {
                let header = PacketHeader {
                    flags: mask,
                    length,
                    session_id: 0xABCD,
                    ack_id: 17,
                    resend_id: 3,
                    unknown: 0x0102,
                    local_id: 0xFFFE,
                };

                let mut buf = [0u8; HEADER_LEN];
                header.write(&mut buf);

                assert_eq!(PacketHeader::read(&buf).unwrap(), header);
            }
        }
    }

    #[test]
    fn test_length_masked_to_11_bits() {
        let header = PacketHeader {
            flags: flags::ACK,
            length: 0x0FFF,
            ..PacketHeader::default()
        };

        let mut buf = [0u8; HEADER_LEN];
        header.write(&mut buf);

        assert_eq!(PacketHeader::read(&buf).unwrap().length, 0x07FF);
    }
}
