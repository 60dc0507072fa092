//! Setters for clip players, media player sources, the media pool and
//! macro control.

use crate::error::AtemResult;
use crate::net::buffer::{BufferResult, ByteBuffer};
use crate::protocol::enums::{
    resolve, Macro, MacroAction, MediaPlayer, MediaPlayerSourceType, Sel,
};
use crate::switcher::Switcher;

impl Switcher {
    fn clip_player_field(
        &self,
        player: MediaPlayer,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == player.code() as u8;
        out.prepare_command(b"SCPS", 8, index_match)?;
        out.buf.set_flag8(0, bit)?;
        out.buf.set_u8(1, player.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    fn media_player_source_field(
        &self,
        player: MediaPlayer,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == player.code() as u8;
        out.prepare_command(b"MPSS", 8, index_match)?;
        out.buf.set_flag8(0, bit)?;
        out.buf.set_u8(1, player.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    pub fn set_clip_player_playing<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        playing: bool,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.clip_player_field(player, 0, |buf| buf.set_u8(2, playing as u8))
    }

    pub fn set_clip_player_loop<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        loop_playback: bool,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.clip_player_field(player, 1, |buf| buf.set_u8(3, loop_playback as u8))
    }

    pub fn set_clip_player_at_beginning<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        at_beginning: bool,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.clip_player_field(player, 2, |buf| buf.set_u8(4, at_beginning as u8))
    }

    pub fn set_clip_player_clip_frame<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        clip_frame: u16,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.clip_player_field(player, 3, |buf| buf.set_u16(6, clip_frame))
    }

    pub fn set_media_player_source_type<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        kind: impl Into<Sel<'a, MediaPlayerSourceType>>,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        let kind: MediaPlayerSourceType = resolve(kind)?;
        self.media_player_source_field(player, 0, |buf| buf.set_u8(2, kind.code() as u8))
    }

    pub fn set_media_player_source_still_index<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        still_index: u8,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.media_player_source_field(player, 1, |buf| buf.set_u8(3, still_index))
    }

    pub fn set_media_player_source_clip_index<'a>(
        &self,
        media_player: impl Into<Sel<'a, MediaPlayer>>,
        clip_index: u8,
    ) -> AtemResult<()> {
        let player: MediaPlayer = resolve(media_player)?;
        self.media_player_source_field(player, 2, |buf| buf.set_u8(4, clip_index))
    }

    /// Split the media pool between the two clip banks, in frames.
    pub fn set_media_pool_clip1_max_length(&self, clip1_max_length: u16) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CMPS", 4, true)?;
        out.buf.set_u16(0, clip1_max_length)?;
        out.finish_command()
    }

    /// Run, stop, continue or delete a macro.
    pub fn set_macro_action<'a>(
        &self,
        macro_index: impl Into<Sel<'a, Macro>>,
        action: impl Into<Sel<'a, MacroAction>>,
    ) -> AtemResult<()> {
        let macro_index: Macro = resolve(macro_index)?;
        let action: MacroAction = resolve(action)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(0) == macro_index.code();
        out.prepare_command(b"MAct", 4, index_match)?;
        out.buf.set_u16(0, macro_index.code())?;
        out.buf.set_u8(2, action.code() as u8)?;
        out.finish_command()
    }

    pub fn set_macro_run_change_properties_looping(&self, looping: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"MRCP", 4, true)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, looping as u8)?;
        out.finish_command()
    }

    /// Insert a timed pause into the macro currently being recorded.
    pub fn set_macro_add_pause_frames(&self, frames: u16) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"MSlp", 4, true)?;
        out.buf.set_u16(2, frames)?;
        out.finish_command()
    }
}
