//! Setters for video routing: program/preview buses, inputs, multi viewers,
//! aux outputs, color generators and global video settings.

use crate::error::AtemResult;
use crate::protocol::enums::{
    resolve, AuxChannel, ColorGenerator, DownConverterMode, ExternalPortType, MixEffect,
    MultiViewer, MultiViewerLayout, Sel, VideoModeFormat, VideoSource, Window,
};
use crate::switcher::Switcher;

impl Switcher {
    pub fn set_down_converter_mode<'a>(
        &self,
        mode: impl Into<Sel<'a, DownConverterMode>>,
    ) -> AtemResult<()> {
        let mode: DownConverterMode = resolve(mode)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"CDcO", 4, true)?;
        out.buf.set_u8(0, mode.code() as u8)?;
        out.finish_command()
    }

    pub fn set_video_mode_format<'a>(
        &self,
        format: impl Into<Sel<'a, VideoModeFormat>>,
    ) -> AtemResult<()> {
        let format: VideoModeFormat = resolve(format)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"CVdM", 4, true)?;
        out.buf.set_u8(0, format.code() as u8)?;
        out.finish_command()
    }

    pub fn set_input_long_name<'a>(
        &self,
        video_source: impl Into<Sel<'a, VideoSource>>,
        long_name: &str,
    ) -> AtemResult<()> {
        let source: VideoSource = resolve(video_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CInL", 32, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_string(4, 20, long_name)?;
        out.finish_command()
    }

    pub fn set_input_short_name<'a>(
        &self,
        video_source: impl Into<Sel<'a, VideoSource>>,
        short_name: &str,
    ) -> AtemResult<()> {
        let source: VideoSource = resolve(video_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CInL", 32, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_string(24, 4, short_name)?;
        out.finish_command()
    }

    pub fn set_input_external_port_type<'a>(
        &self,
        video_source: impl Into<Sel<'a, VideoSource>>,
        port_type: impl Into<Sel<'a, ExternalPortType>>,
    ) -> AtemResult<()> {
        let source: VideoSource = resolve(video_source)?;
        let port_type: ExternalPortType = resolve(port_type)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CInL", 32, index_match)?;
        out.buf.set_flag8(0, 2)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_u16(28, port_type.code())?;
        out.finish_command()
    }

    pub fn set_multi_viewer_layout<'a>(
        &self,
        multi_viewer: impl Into<Sel<'a, MultiViewer>>,
        layout: impl Into<Sel<'a, MultiViewerLayout>>,
    ) -> AtemResult<()> {
        let mv: MultiViewer = resolve(multi_viewer)?;
        let layout: MultiViewerLayout = resolve(layout)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == mv.code() as u8;
        out.prepare_command(b"CMvP", 4, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, mv.code() as u8)?;
        out.buf.set_u8(2, layout.code() as u8)?;
        out.finish_command()
    }

    pub fn set_multi_viewer_input<'a>(
        &self,
        multi_viewer: impl Into<Sel<'a, MultiViewer>>,
        window: impl Into<Sel<'a, Window>>,
        video_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let mv: MultiViewer = resolve(multi_viewer)?;
        let window: Window = resolve(window)?;
        let source: VideoSource = resolve(video_source)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(0) == mv.code() as u8 && out.probe_u8(1) == window.code() as u8;
        out.prepare_command(b"CMvI", 4, index_match)?;
        out.buf.set_u8(0, mv.code() as u8)?;
        out.buf.set_u8(1, window.code() as u8)?;
        out.buf.set_u16(2, source.code())?;
        out.finish_command()
    }

    /// Cut the program bus of a mix effect to a source.
    pub fn set_program_input<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        video_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let source: VideoSource = resolve(video_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == me.code() as u8;
        out.prepare_command(b"CPgI", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u16(2, source.code())?;
        out.finish_command()
    }

    pub fn set_preview_input<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        video_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let source: VideoSource = resolve(video_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == me.code() as u8;
        out.prepare_command(b"CPvI", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u16(2, source.code())?;
        out.finish_command()
    }

    pub fn set_aux_source<'a>(
        &self,
        aux_channel: impl Into<Sel<'a, AuxChannel>>,
        input: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let aux: AuxChannel = resolve(aux_channel)?;
        let input: VideoSource = resolve(input)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == aux.code() as u8;
        out.prepare_command(b"CAuS", 4, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, aux.code() as u8)?;
        out.buf.set_u16(2, input.code())?;
        out.finish_command()
    }

    pub fn set_color_generator_hue<'a>(
        &self,
        color_generator: impl Into<Sel<'a, ColorGenerator>>,
        hue: f64,
    ) -> AtemResult<()> {
        let generator: ColorGenerator = resolve(color_generator)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == generator.code() as u8;
        out.prepare_command(b"CClV", 8, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, generator.code() as u8)?;
        out.buf.set_fixed_u16(2, 10.0, hue)?;
        out.finish_command()
    }

    pub fn set_color_generator_saturation<'a>(
        &self,
        color_generator: impl Into<Sel<'a, ColorGenerator>>,
        saturation: f64,
    ) -> AtemResult<()> {
        let generator: ColorGenerator = resolve(color_generator)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == generator.code() as u8;
        out.prepare_command(b"CClV", 8, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u8(1, generator.code() as u8)?;
        out.buf.set_fixed_u16(4, 10.0, saturation)?;
        out.finish_command()
    }

    pub fn set_color_generator_luma<'a>(
        &self,
        color_generator: impl Into<Sel<'a, ColorGenerator>>,
        luma: f64,
    ) -> AtemResult<()> {
        let generator: ColorGenerator = resolve(color_generator)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == generator.code() as u8;
        out.prepare_command(b"CClV", 8, index_match)?;
        out.buf.set_flag8(0, 2)?;
        out.buf.set_u8(1, generator.code() as u8)?;
        out.buf.set_fixed_u16(6, 10.0, luma)?;
        out.finish_command()
    }
}
