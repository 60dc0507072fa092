//! Stateless actions: cut, auto, DSK auto, fade to black and macro
//! recording.

use crate::commands::pad4;
use crate::error::AtemResult;
use crate::protocol::enums::{resolve, Dsk, Macro, MixEffect, Sel};
use crate::switcher::Switcher;

impl Switcher {
    /// Cut on a mix effect.
    pub fn exec_cut<'a>(&self, me: impl Into<Sel<'a, MixEffect>>) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"DCut", 4, true)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.finish_command()
    }

    /// Auto transition on a mix effect.
    pub fn exec_auto<'a>(&self, me: impl Into<Sel<'a, MixEffect>>) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"DAut", 4, true)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.finish_command()
    }

    /// Auto transition a downstream keyer.
    pub fn exec_downstream_keyer_auto<'a>(&self, dsk: impl Into<Sel<'a, Dsk>>) -> AtemResult<()> {
        let dsk: Dsk = resolve(dsk)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"DDsA", 4, true)?;
        out.buf.set_u8(0, dsk.code() as u8)?;
        out.finish_command()
    }

    /// Fade a mix effect to black (or back).
    pub fn exec_fade_to_black<'a>(&self, me: impl Into<Sel<'a, MixEffect>>) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"FtbA", 4, true)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, 0x02)?;
        out.finish_command()
    }

    /// Start recording into a macro slot. Name and description are optional;
    /// the payload carries both behind u16 length prefixes and is padded to
    /// the 4-byte command granularity.
    pub fn exec_macro_record<'a>(
        &self,
        macro_index: impl Into<Sel<'a, Macro>>,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AtemResult<()> {
        let macro_index: Macro = resolve(macro_index)?;
        let name = name.unwrap_or("");
        let description = description.unwrap_or("");
        let cmd_bytes = pad4(6 + name.len() + description.len());

        let mut out = self.begin_command()?;

        out.prepare_command(b"MSRc", cmd_bytes, true)?;
        out.buf.set_u16(0, macro_index.code())?;
        out.buf.set_u16(2, name.len() as u16)?;
        out.buf.set_u16(4, description.len() as u16)?;
        out.buf.set_bytes(6, name.as_bytes())?;
        out.buf.set_bytes(6 + name.len(), description.as_bytes())?;
        out.finish_command()
    }

    /// Stop the macro recording in progress.
    pub fn exec_macro_stop_recording(&self) -> AtemResult<()> {
        self.exec_macro_record(Macro::Stop, None, None)
    }
}
