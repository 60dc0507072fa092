//! Setters for the downstream keyers.

use crate::error::AtemResult;
use crate::net::buffer::{BufferResult, ByteBuffer};
use crate::protocol::enums::{resolve, Dsk, Sel, VideoSource};
use crate::switcher::Switcher;

const MASK_RANGE: (f64, f64) = (-16000.0, 16000.0);
const MASK_UNITS: (f64, f64) = (-9.0, 9.0);

impl Switcher {
    fn dsk_field(
        &self,
        tag: &[u8; 4],
        cmd_bytes: usize,
        dsk: Dsk,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == dsk.code() as u8;
        out.prepare_command(tag, cmd_bytes, index_match)?;
        out.buf.set_flag8(0, bit)?;
        out.buf.set_u8(1, dsk.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    fn dsk_plain(
        &self,
        tag: &[u8; 4],
        dsk: Dsk,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == dsk.code() as u8;
        out.prepare_command(tag, 4, index_match)?;
        out.buf.set_u8(0, dsk.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    pub fn set_downstream_keyer_fill_source<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        fill_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        let fill: VideoSource = resolve(fill_source)?;
        self.dsk_plain(b"CDsF", dsk, |buf| buf.set_u16(2, fill.code()))
    }

    pub fn set_downstream_keyer_key_source<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        key_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        let key: VideoSource = resolve(key_source)?;
        self.dsk_plain(b"CDsC", dsk, |buf| buf.set_u16(2, key.code()))
    }

    pub fn set_downstream_keyer_tie<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        tie: bool,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_plain(b"CDsT", dsk, |buf| buf.set_u8(1, tie as u8))
    }

    pub fn set_downstream_keyer_rate<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        rate: u8,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_plain(b"CDsR", dsk, |buf| buf.set_u8(1, rate))
    }

    pub fn set_downstream_keyer_pre_multiplied<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        pre_multiplied: bool,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsG", 12, dsk, 0, |buf| buf.set_u8(2, pre_multiplied as u8))
    }

    pub fn set_downstream_keyer_clip<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        clip: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsG", 12, dsk, 1, |buf| buf.set_fixed_u16(4, 10.0, clip))
    }

    pub fn set_downstream_keyer_gain<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        gain: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsG", 12, dsk, 2, |buf| buf.set_fixed_u16(6, 10.0, gain))
    }

    pub fn set_downstream_keyer_invert_key<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        invert_key: bool,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsG", 12, dsk, 3, |buf| buf.set_u8(8, invert_key as u8))
    }

    pub fn set_downstream_keyer_masked<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        masked: bool,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsM", 12, dsk, 0, |buf| buf.set_u8(2, masked as u8))
    }

    pub fn set_downstream_keyer_top<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        top: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsM", 12, dsk, 1, |buf| buf.set_fixed_s16(4, 1000.0, top))
    }

    pub fn set_downstream_keyer_bottom<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        bottom: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsM", 12, dsk, 2, |buf| buf.set_fixed_s16(6, 1000.0, bottom))
    }

    pub fn set_downstream_keyer_left<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        left: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsM", 12, dsk, 3, |buf| {
            buf.set_scaled_s16(8, MASK_UNITS, MASK_RANGE, left)
        })
    }

    pub fn set_downstream_keyer_right<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        right: f64,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_field(b"CDsM", 12, dsk, 4, |buf| {
            buf.set_scaled_s16(10, MASK_UNITS, MASK_RANGE, right)
        })
    }

    pub fn set_downstream_keyer_on_air<'a>(
        &self,
        dsk: impl Into<Sel<'a, Dsk>>,
        on_air: bool,
    ) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        self.dsk_plain(b"CDsL", dsk, |buf| buf.set_u8(1, on_air as u8))
    }
}
