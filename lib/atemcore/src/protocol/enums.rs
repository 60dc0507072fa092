//! Switcher field value enumerations. The integer code-points are fixed by
//! the protocol and match existing deployments; do not renumber.

use crate::error::AtemError;

pub trait ProtoEnum: Copy + 'static {
    const WHAT: &'static str;
    const COUNT: usize;

    fn code(self) -> u16;
    fn from_code(code: u16) -> Option<Self>
    where
        Self: Sized;
    fn by_name(name: &str) -> Option<Self>
    where
        Self: Sized;
    fn name(self) -> &'static str;
    fn ordinal(self) -> usize;
}

/// Setter argument accepting an enum variant, its protocol name, or its raw
/// integer code-point.
pub enum Sel<'a, E> {
    Value(E),
    Name(&'a str),
    Code(i64),
}

impl<'a, E> From<&'a str> for Sel<'a, E> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Sel::Name(name)
    }
}

impl<'a, E> From<u8> for Sel<'a, E> {
    #[inline]
    fn from(code: u8) -> Self {
        Sel::Code(code as i64)
    }
}

impl<'a, E> From<u16> for Sel<'a, E> {
    #[inline]
    fn from(code: u16) -> Self {
        Sel::Code(code as i64)
    }
}

impl<'a, E> From<i32> for Sel<'a, E> {
    #[inline]
    fn from(code: i32) -> Self {
        Sel::Code(code as i64)
    }
}

impl<'a, E> From<i64> for Sel<'a, E> {
    #[inline]
    fn from(code: i64) -> Self {
        Sel::Code(code)
    }
}

/// Resolve a setter argument into the enum, erroring on unknown names and
/// code-points.
#[inline]
pub fn resolve<'a, E, S>(sel: S) -> Result<E, AtemError>
where
    E: ProtoEnum,
    S: Into<Sel<'a, E>>,
{
    match sel.into() {
        Sel::Value(value) => Ok(value),
        Sel::Name(name) => E::by_name(name).ok_or_else(|| AtemError::UnknownName {
            what: E::WHAT,
            name: name.to_string(),
        }),
        Sel::Code(code) => {
            let narrowed = if (0..=0xFFFF).contains(&code) {
                E::from_code(code as u16)
            } else {
                None
            };

            narrowed.ok_or(AtemError::UnknownCode { what: E::WHAT, code })
        }
    }
}

macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:expr => {
            $($variant:ident = $code:expr, $str:expr;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const COUNT: usize = $name::ALL.len();

            #[inline]
            pub fn code(self) -> u16 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            #[inline]
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $str),+
                }
            }

            #[inline]
            pub fn from_code(code: u16) -> Option<$name> {
                $name::ALL.iter().copied().find(|v| v.code() == code)
            }

            #[inline]
            pub fn by_name(name: &str) -> Option<$name> {
                $name::ALL.iter().copied().find(|v| v.name() == name)
            }

            #[inline]
            pub fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ProtoEnum for $name {
            const WHAT: &'static str = $what;
            const COUNT: usize = $name::COUNT;

            #[inline]
            fn code(self) -> u16 {
                $name::code(self)
            }

            #[inline]
            fn from_code(code: u16) -> Option<Self> {
                $name::from_code(code)
            }

            #[inline]
            fn by_name(name: &str) -> Option<Self> {
                $name::by_name(name)
            }

            #[inline]
            fn name(self) -> &'static str {
                $name::name(self)
            }

            #[inline]
            fn ordinal(self) -> usize {
                $name::ordinal(self)
            }
        }

        impl<'a> From<$name> for Sel<'a, $name> {
            #[inline]
            fn from(value: $name) -> Self {
                Sel::Value(value)
            }
        }
    };
}

proto_enum! {
    VideoSource, "video source" => {
        Black = 0, "black";
        Input1 = 1, "input1";
        Input2 = 2, "input2";
        Input3 = 3, "input3";
        Input4 = 4, "input4";
        Input5 = 5, "input5";
        Input6 = 6, "input6";
        Input7 = 7, "input7";
        Input8 = 8, "input8";
        Input9 = 9, "input9";
        Input10 = 10, "input10";
        Input11 = 11, "input11";
        Input12 = 12, "input12";
        Input13 = 13, "input13";
        Input14 = 14, "input14";
        Input15 = 15, "input15";
        Input16 = 16, "input16";
        Input17 = 17, "input17";
        Input18 = 18, "input18";
        Input19 = 19, "input19";
        Input20 = 20, "input20";
        Input21 = 21, "input21";
        Input22 = 22, "input22";
        Input23 = 23, "input23";
        Input24 = 24, "input24";
        Input25 = 25, "input25";
        Input26 = 26, "input26";
        Input27 = 27, "input27";
        Input28 = 28, "input28";
        Input29 = 29, "input29";
        Input30 = 30, "input30";
        Input31 = 31, "input31";
        Input32 = 32, "input32";
        Input33 = 33, "input33";
        Input34 = 34, "input34";
        Input35 = 35, "input35";
        Input36 = 36, "input36";
        Input37 = 37, "input37";
        Input38 = 38, "input38";
        Input39 = 39, "input39";
        Input40 = 40, "input40";
        ColorBars = 1000, "colorBars";
        Color1 = 2001, "color1";
        Color2 = 2002, "color2";
        MediaPlayer1 = 3010, "mediaPlayer1";
        MediaPlayer1Key = 3011, "mediaPlayer1Key";
        MediaPlayer2 = 3020, "mediaPlayer2";
        MediaPlayer2Key = 3021, "mediaPlayer2Key";
        MediaPlayer3 = 3030, "mediaPlayer3";
        MediaPlayer3Key = 3031, "mediaPlayer3Key";
        MediaPlayer4 = 3040, "mediaPlayer4";
        MediaPlayer4Key = 3041, "mediaPlayer4Key";
        Key1Mask = 4010, "key1Mask";
        Key2Mask = 4020, "key2Mask";
        Key3Mask = 4030, "key3Mask";
        Key4Mask = 4040, "key4Mask";
        Key5Mask = 4050, "key5Mask";
        Key6Mask = 4060, "key6Mask";
        Key7Mask = 4070, "key7Mask";
        Key8Mask = 4080, "key8Mask";
        Key9Mask = 4090, "key9Mask";
        Key10Mask = 4100, "key10Mask";
        Key11Mask = 4110, "key11Mask";
        Key12Mask = 4120, "key12Mask";
        Key13Mask = 4130, "key13Mask";
        Key14Mask = 4140, "key14Mask";
        Key15Mask = 4150, "key15Mask";
        Key16Mask = 4160, "key16Mask";
        Dsk1Mask = 5010, "dsk1Mask";
        Dsk2Mask = 5020, "dsk2Mask";
        Dsk3Mask = 5030, "dsk3Mask";
        Dsk4Mask = 5040, "dsk4Mask";
        SuperSource = 6000, "superSource";
        SuperSource2 = 6001, "superSource2";
        CleanFeed1 = 7001, "cleanFeed1";
        CleanFeed2 = 7002, "cleanFeed2";
        CleanFeed3 = 7003, "cleanFeed3";
        CleanFeed4 = 7004, "cleanFeed4";
        Auxilary1 = 8001, "auxilary1";
        Auxilary2 = 8002, "auxilary2";
        Auxilary3 = 8003, "auxilary3";
        Auxilary4 = 8004, "auxilary4";
        Auxilary5 = 8005, "auxilary5";
        Auxilary6 = 8006, "auxilary6";
        Auxilary7 = 8007, "auxilary7";
        Auxilary8 = 8008, "auxilary8";
        Auxilary9 = 8009, "auxilary9";
        Auxilary10 = 8010, "auxilary10";
        Auxilary11 = 8011, "auxilary11";
        Auxilary12 = 8012, "auxilary12";
        Auxilary13 = 8013, "auxilary13";
        Auxilary14 = 8014, "auxilary14";
        Auxilary15 = 8015, "auxilary15";
        Auxilary16 = 8016, "auxilary16";
        Auxilary17 = 8017, "auxilary17";
        Auxilary18 = 8018, "auxilary18";
        Auxilary19 = 8019, "auxilary19";
        Auxilary20 = 8020, "auxilary20";
        Auxilary21 = 8021, "auxilary21";
        Auxilary22 = 8022, "auxilary22";
        Auxilary23 = 8023, "auxilary23";
        Auxilary24 = 8024, "auxilary24";
        Me1Prog = 10010, "mE1Prog";
        Me1Prev = 10011, "mE1Prev";
        Me2Prog = 10020, "mE2Prog";
        Me2Prev = 10021, "mE2Prev";
        Me3Prog = 10030, "mE3Prog";
        Me3Prev = 10031, "mE3Prev";
        Me4Prog = 10040, "mE4Prog";
        Me4Prev = 10041, "mE4Prev";
        Input1Direct = 11001, "input1Direct";
    }
}

proto_enum! {
    AudioSource, "audio source" => {
        Input1 = 1, "input1";
        Input2 = 2, "input2";
        Input3 = 3, "input3";
        Input4 = 4, "input4";
        Input5 = 5, "input5";
        Input6 = 6, "input6";
        Input7 = 7, "input7";
        Input8 = 8, "input8";
        Input9 = 9, "input9";
        Input10 = 10, "input10";
        Input11 = 11, "input11";
        Input12 = 12, "input12";
        Input13 = 13, "input13";
        Input14 = 14, "input14";
        Input15 = 15, "input15";
        Input16 = 16, "input16";
        Input17 = 17, "input17";
        Input18 = 18, "input18";
        Input19 = 19, "input19";
        Input20 = 20, "input20";
        Xlr = 1001, "xlr";
        AesEbu = 1101, "aes_ebu";
        Rca = 1201, "rca";
        Mic1 = 1301, "mic1";
        Mic2 = 1302, "mic2";
        Mp1 = 2001, "mp1";
        Mp2 = 2002, "mp2";
        Mp3 = 2003, "mp3";
        Mp4 = 2004, "mp4";
    }
}

proto_enum! {
    DownConverterMode, "down converter mode" => {
        CenterCut = 0, "centerCut";
        LetterBox = 1, "letterBox";
        Anamorphic = 2, "anamorphic";
    }
}

proto_enum! {
    VideoModeFormat, "video mode format" => {
        F525i5994Ntsc = 0, "f525i59_94_ntsc";
        F625i50Pal = 1, "f625i_50_pal";
        F525i5994Ntsc169 = 2, "f525i59_94_ntsc_16_9";
        F625i50Pal169 = 3, "f625i_50_pal_16_9";
        F720p50 = 4, "f720p50";
        F720p5994 = 5, "f720p59_94";
        F1080i50 = 6, "f1080i50";
        F1080i5994 = 7, "f1080i59_94";
        F1080p2398 = 8, "f1080p23_98";
        F1080p24 = 9, "f1080p24";
        F1080p25 = 10, "f1080p25";
        F1080p2997 = 11, "f1080p29_97";
        F1080p50 = 12, "f1080p50";
        F1080p5994 = 13, "f1080p59_94";
        F2160p2398 = 14, "f2160p23_98";
        F2160p24 = 15, "f2160p24";
        F2160p25 = 16, "f2160p25";
        F2160p2997 = 17, "f2160p29_97";
    }
}

proto_enum! {
    ExternalPortType, "external port type" => {
        Internal = 0, "internal";
        Sdi = 1, "sdi";
        Hdmi = 2, "hdmi";
        Composite = 3, "composite";
        Component = 4, "component";
        SVideo = 5, "sVideo";
    }
}

proto_enum! {
    SwitcherPortType, "switcher port type" => {
        External = 0, "external";
        Black = 1, "black";
        ColorBars = 2, "colorBars";
        ColorGenerator = 3, "colorGenerator";
        MediaPlayerFill = 4, "mediaPlayerFill";
        MediaPlayerKey = 5, "mediaPlayerKey";
        SuperSource = 6, "superSource";
        ExternalDirect = 6, "externalDirect";
        MeOutput = 128, "mEOutput";
        Auxiliary = 129, "auxiliary";
        Mask = 130, "mask";
        Multiviewer = 131, "multiviewer";
    }
}

proto_enum! {
    MultiViewerLayout, "multi viewer layout" => {
        Top = 0, "top";
        Bottom = 1, "bottom";
        Left = 2, "left";
        Right = 3, "right";
    }
}

proto_enum! {
    TransitionStyle, "transition style" => {
        Mix = 0, "mix";
        Dip = 1, "dip";
        Wipe = 2, "wipe";
        Dve = 3, "dVE";
        Sting = 4, "sting";
    }
}

proto_enum! {
    KeyerType, "keyer type" => {
        Luma = 0, "luma";
        Chroma = 1, "chroma";
        Pattern = 2, "pattern";
        Dve = 3, "dVE";
    }
}

proto_enum! {
    BorderBevel, "border bevel" => {
        No = 0, "no";
        InOut = 1, "inOut";
        In = 2, "in";
        Out = 3, "out";
    }
}

proto_enum! {
    MediaPlayerSourceType, "media player source type" => {
        Still = 1, "still";
        Clip = 2, "clip";
    }
}

proto_enum! {
    AudioMixerInputType, "audio mixer input type" => {
        ExternalVideo = 0, "externalVideo";
        MediaPlayer = 1, "mediaPlayer";
        ExternalAudio = 2, "externalAudio";
    }
}

proto_enum! {
    AudioMixerInputPlugType, "audio mixer input plug type" => {
        Internal = 0, "internal";
        Sdi = 1, "sdi";
        Hdmi = 2, "hdmi";
        Component = 3, "component";
        Composite = 4, "composite";
        SVideo = 5, "sVideo";
        Xlr = 32, "xlr";
        AesEbu = 64, "aes_ebu";
        Rca = 128, "rca";
    }
}

proto_enum! {
    AudioMixerInputMixOption, "audio mixer input mix option" => {
        Off = 0, "off";
        On = 1, "on";
        Afv = 2, "afv";
    }
}

proto_enum! {
    DveTransitionStyle, "DVE transition style" => {
        SwooshTopLeft = 0, "swooshTopLeft";
        SwooshTop = 1, "swooshTop";
        SwooshTopRight = 2, "swooshTopRight";
        SwooshLeft = 3, "swooshLeft";
        SwooshRight = 4, "swooshRight";
        SwooshBottomLeft = 5, "swooshBottomLeft";
        SwooshBottom = 6, "swooshBottom";
        SwooshBottomRight = 7, "swooshBottomRight";
        SpinCwTopLeft = 8, "spinCWTopLeft";
        SpinCwTopRight = 9, "spinCWTopRight";
        SpinCwBottomLeft = 10, "spinCWBottomLeft";
        SpinCwBottomRight = 11, "spinCWBottomRight";
        SpinCcwTopLeft = 12, "spinCCWTopLeft";
        SpinCcwTopRight = 13, "spinCCWTopRight";
        SpinCcwBottomLeft = 14, "spinCCWBottomLeft";
        SpinCcwBottomRight = 15, "spinCCWBottomRight";
        SqueezeTopLeft = 16, "squeezeTopLeft";
        SqueezeTop = 17, "squeezeTop";
        SqueezeTopRight = 18, "squeezeTopRight";
        SqueezeLeft = 19, "squeezeLeft";
        SqueezeRight = 20, "squeezeRight";
        SqueezeBottomLeft = 21, "squeezeBottomLeft";
        SqueezeBottom = 22, "squeezeBottom";
        SqueezeBottomRight = 23, "squeezeBottomRight";
        PushTopLeft = 24, "pushTopLeft";
        PushTop = 25, "pushTop";
        PushTopRight = 26, "pushTopRight";
        PushLeft = 27, "pushLeft";
        PushRight = 28, "pushRight";
        PushBottomLeft = 29, "pushBottomLeft";
        PushBottom = 30, "pushBottom";
        PushBottomRight = 31, "pushBottomRight";
        GraphicCwSpin = 32, "graphicCWSpin";
        GraphicCcwSpin = 33, "graphicCCWSpin";
        GraphicLogoWipe = 34, "graphicLogoWipe";
    }
}

proto_enum! {
    PatternStyle, "pattern style" => {
        LeftToRightBar = 0, "leftToRightBar";
        TopToBottomBar = 1, "topToBottomBar";
        HorizontalBarnDoor = 2, "horizontalBarnDoor";
        VerticalBarnDoor = 3, "verticalBarnDoor";
        CornersInFourBox = 4, "cornersInFourBox";
        RectangleIris = 5, "rectangleIris";
        DiamondIris = 6, "diamondIris";
        CircleIris = 7, "circleIris";
        TopLeftBox = 8, "topLeftBox";
        TopRightBox = 9, "topRightBox";
        BottomRightBox = 10, "bottomRightBox";
        BottomLeftBox = 11, "bottomLeftBox";
        TopCentreBox = 12, "topCentreBox";
        RightCentreBox = 13, "rightCentreBox";
        BottomCentreBox = 14, "bottomCentreBox";
        LeftCentreBox = 15, "leftCentreBox";
        TopLeftDiagonal = 16, "topLeftDiagonal";
        TopRightDiagonal = 17, "topRightDiagonal";
    }
}

proto_enum! {
    SharpeningLevel, "camera control sharpening level" => {
        Off = 0, "off";
        Low = 1, "low";
        Medium = 2, "medium";
        High = 3, "high";
    }
}

proto_enum! {
    MacroAction, "macro action" => {
        RunMacro = 0, "runMacro";
        StopMacro = 1, "stopMacro";
        StopRecording = 2, "stopRecording";
        InsertWaitForUser = 3, "insertWaitForUser";
        ContinueMacro = 4, "continueMacro";
        DeleteMacro = 5, "deleteMacro";
    }
}

proto_enum! {
    KeyFrame, "key frame" => {
        A = 1, "a";
        B = 2, "b";
        Full = 3, "full";
        RunToInfinite = 4, "runToInfinite";
    }
}

proto_enum! {
    MixEffect, "mix effect" => {
        MixEffect1 = 0, "mixEffect1";
        MixEffect2 = 1, "mixEffect2";
        MixEffect3 = 2, "mixEffect3";
        MixEffect4 = 3, "mixEffect4";
    }
}

proto_enum! {
    MultiViewer, "multi viewer" => {
        MultiViewer1 = 0, "multiViewer1";
        MultiViewer2 = 1, "multiViewer2";
    }
}

proto_enum! {
    Window, "window" => {
        Window1 = 0, "window1";
        Window2 = 1, "window2";
        Window3 = 2, "window3";
        Window4 = 3, "window4";
        Window5 = 4, "window5";
        Window6 = 5, "window6";
        Window7 = 6, "window7";
        Window8 = 7, "window8";
        Window9 = 8, "window9";
        Window10 = 9, "window10";
    }
}

proto_enum! {
    Keyer, "keyer" => {
        Keyer1 = 0, "keyer1";
        Keyer2 = 1, "keyer2";
        Keyer3 = 2, "keyer3";
        Keyer4 = 3, "keyer4";
    }
}

proto_enum! {
    Dsk, "downstream keyer" => {
        Dsk1 = 0, "dsk1";
        Dsk2 = 1, "dsk2";
    }
}

proto_enum! {
    ColorGenerator, "color generator" => {
        ColorGenerator1 = 0, "colorGenerator1";
        ColorGenerator2 = 1, "colorGenerator2";
    }
}

proto_enum! {
    AuxChannel, "aux channel" => {
        AuxChannel1 = 0, "auxChannel1";
        AuxChannel2 = 1, "auxChannel2";
        AuxChannel3 = 2, "auxChannel3";
        AuxChannel4 = 3, "auxChannel4";
        AuxChannel5 = 4, "auxChannel5";
        AuxChannel6 = 5, "auxChannel6";
    }
}

proto_enum! {
    Camera, "camera" => {
        Camera1 = 1, "camera1";
        Camera2 = 2, "camera2";
        Camera3 = 3, "camera3";
        Camera4 = 4, "camera4";
        Camera5 = 5, "camera5";
        Camera6 = 6, "camera6";
        Camera7 = 7, "camera7";
        Camera8 = 8, "camera8";
        Camera9 = 9, "camera9";
        Camera10 = 10, "camera10";
        Camera11 = 11, "camera11";
        Camera12 = 12, "camera12";
        Camera13 = 13, "camera13";
        Camera14 = 14, "camera14";
        Camera15 = 15, "camera15";
        Camera16 = 16, "camera16";
        Camera17 = 17, "camera17";
        Camera18 = 18, "camera18";
        Camera19 = 19, "camera19";
        Camera20 = 20, "camera20";
    }
}

proto_enum! {
    MediaPlayer, "media player" => {
        MediaPlayer1 = 0, "mediaPlayer1";
        MediaPlayer2 = 1, "mediaPlayer2";
        MediaPlayer3 = 2, "mediaPlayer3";
        MediaPlayer4 = 3, "mediaPlayer4";
    }
}

proto_enum! {
    ClipBank, "clip bank" => {
        ClipBank1 = 0, "clipBank1";
        ClipBank2 = 1, "clipBank2";
    }
}

proto_enum! {
    StillBank, "still bank" => {
        StillBank1 = 0, "stillBank1";
        StillBank2 = 1, "stillBank2";
        StillBank3 = 2, "stillBank3";
        StillBank4 = 3, "stillBank4";
        StillBank5 = 4, "stillBank5";
        StillBank6 = 5, "stillBank6";
        StillBank7 = 6, "stillBank7";
        StillBank8 = 7, "stillBank8";
        StillBank9 = 8, "stillBank9";
        StillBank10 = 9, "stillBank10";
        StillBank11 = 10, "stillBank11";
        StillBank12 = 11, "stillBank12";
        StillBank13 = 12, "stillBank13";
        StillBank14 = 13, "stillBank14";
        StillBank15 = 14, "stillBank15";
        StillBank16 = 15, "stillBank16";
        StillBank17 = 16, "stillBank17";
        StillBank18 = 17, "stillBank18";
        StillBank19 = 18, "stillBank19";
        StillBank20 = 19, "stillBank20";
        StillBank21 = 20, "stillBank21";
        StillBank22 = 21, "stillBank22";
        StillBank23 = 22, "stillBank23";
        StillBank24 = 23, "stillBank24";
        StillBank25 = 24, "stillBank25";
        StillBank26 = 25, "stillBank26";
        StillBank27 = 26, "stillBank27";
        StillBank28 = 27, "stillBank28";
        StillBank29 = 28, "stillBank29";
        StillBank30 = 29, "stillBank30";
        StillBank31 = 30, "stillBank31";
        StillBank32 = 31, "stillBank32";
    }
}

proto_enum! {
    Macro, "macro" => {
        Stop = 0xFFFF, "stop";
        Macro1 = 0, "macro1";
        Macro2 = 1, "macro2";
        Macro3 = 2, "macro3";
        Macro4 = 3, "macro4";
        Macro5 = 4, "macro5";
        Macro6 = 5, "macro6";
        Macro7 = 6, "macro7";
        Macro8 = 7, "macro8";
        Macro9 = 8, "macro9";
        Macro10 = 9, "macro10";
        Macro11 = 10, "macro11";
        Macro12 = 11, "macro12";
        Macro13 = 12, "macro13";
        Macro14 = 13, "macro14";
        Macro15 = 14, "macro15";
        Macro16 = 15, "macro16";
        Macro17 = 16, "macro17";
        Macro18 = 17, "macro18";
        Macro19 = 18, "macro19";
        Macro20 = 19, "macro20";
        Macro21 = 20, "macro21";
        Macro22 = 21, "macro22";
        Macro23 = 22, "macro23";
        Macro24 = 23, "macro24";
        Macro25 = 24, "macro25";
        Macro26 = 25, "macro26";
        Macro27 = 26, "macro27";
        Macro28 = 27, "macro28";
        Macro29 = 28, "macro29";
        Macro30 = 29, "macro30";
        Macro31 = 30, "macro31";
        Macro32 = 31, "macro32";
        Macro33 = 32, "macro33";
        Macro34 = 33, "macro34";
        Macro35 = 34, "macro35";
        Macro36 = 35, "macro36";
        Macro37 = 36, "macro37";
        Macro38 = 37, "macro38";
        Macro39 = 38, "macro39";
        Macro40 = 39, "macro40";
        Macro41 = 40, "macro41";
        Macro42 = 41, "macro42";
        Macro43 = 42, "macro43";
        Macro44 = 43, "macro44";
        Macro45 = 44, "macro45";
        Macro46 = 45, "macro46";
        Macro47 = 46, "macro47";
        Macro48 = 47, "macro48";
        Macro49 = 48, "macro49";
        Macro50 = 49, "macro50";
        Macro51 = 50, "macro51";
        Macro52 = 51, "macro52";
        Macro53 = 52, "macro53";
        Macro54 = 53, "macro54";
        Macro55 = 54, "macro55";
        Macro56 = 55, "macro56";
        Macro57 = 56, "macro57";
        Macro58 = 57, "macro58";
        Macro59 = 58, "macro59";
        Macro60 = 59, "macro60";
        Macro61 = 60, "macro61";
        Macro62 = 61, "macro62";
        Macro63 = 62, "macro63";
        Macro64 = 63, "macro64";
        Macro65 = 64, "macro65";
        Macro66 = 65, "macro66";
        Macro67 = 66, "macro67";
        Macro68 = 67, "macro68";
        Macro69 = 68, "macro69";
        Macro70 = 69, "macro70";
        Macro71 = 70, "macro71";
        Macro72 = 71, "macro72";
        Macro73 = 72, "macro73";
        Macro74 = 73, "macro74";
        Macro75 = 74, "macro75";
        Macro76 = 75, "macro76";
        Macro77 = 76, "macro77";
        Macro78 = 77, "macro78";
        Macro79 = 78, "macro79";
        Macro80 = 79, "macro80";
        Macro81 = 80, "macro81";
        Macro82 = 81, "macro82";
        Macro83 = 82, "macro83";
        Macro84 = 83, "macro84";
        Macro85 = 84, "macro85";
        Macro86 = 85, "macro86";
        Macro87 = 86, "macro87";
        Macro88 = 87, "macro88";
        Macro89 = 88, "macro89";
        Macro90 = 89, "macro90";
        Macro91 = 90, "macro91";
        Macro92 = 91, "macro92";
        Macro93 = 92, "macro93";
        Macro94 = 93, "macro94";
        Macro95 = 94, "macro95";
        Macro96 = 95, "macro96";
        Macro97 = 96, "macro97";
        Macro98 = 97, "macro98";
        Macro99 = 98, "macro99";
        Macro100 = 99, "macro100";
    }
}

proto_enum! {
    SsBox, "super source box" => {
        Box1 = 0, "box1";
        Box2 = 1, "box2";
        Box3 = 2, "box3";
        Box4 = 3, "box4";
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrips() {
        for &source in VideoSource::ALL {
            // superSource/externalDirect share a code-point in
            // SwitcherPortType, but video sources are unique.
            assert_eq!(VideoSource::from_code(source.code()), Some(source));
        }

        for &source in AudioSource::ALL {
            assert_eq!(AudioSource::from_code(source.code()), Some(source));
        }
    }

    #[test]
    fn test_name_roundtrips() {
        for &style in DveTransitionStyle::ALL {
            assert_eq!(DveTransitionStyle::by_name(style.name()), Some(style));
        }
    }

    #[test]
    fn test_known_code_points() {
        assert_eq!(VideoSource::ColorBars.code(), 1000);
        assert_eq!(VideoSource::Me1Prev.code(), 10011);
        assert_eq!(AudioSource::AesEbu.code(), 1101);
        assert_eq!(Macro::Stop.code(), 0xFFFF);
        assert_eq!(Macro::Macro100.code(), 99);
        assert_eq!(KeyFrame::RunToInfinite.code(), 4);
        assert_eq!(DveTransitionStyle::SpinCcwBottomRight.code(), 15);
        assert_eq!(AudioMixerInputPlugType::Rca.code(), 128);
        assert_eq!(SwitcherPortType::Multiviewer.code(), 131);
    }

    #[test]
    fn test_unknown_lookups() {
        assert_eq!(VideoSource::from_code(9999), None);
        assert_eq!(VideoSource::by_name("inputOne"), None);
    }

    #[test]
    fn test_ordinals_are_dense() {
        assert_eq!(MixEffect::MixEffect1.ordinal(), 0);
        assert_eq!(MixEffect::MixEffect4.ordinal(), 3);
        assert_eq!(MixEffect::COUNT, 4);
        assert_eq!(StillBank::COUNT, 32);
        assert_eq!(Macro::COUNT, 101);
        assert_eq!(VideoSource::COUNT, 111);
    }

    #[test]
    fn test_resolve_accepts_value_name_and_code() {
        let by_value: MixEffect = resolve(MixEffect::MixEffect2).unwrap();
        let by_name: MixEffect = resolve("mixEffect2").unwrap();
        let by_code: MixEffect = resolve(1u16).unwrap();

        assert_eq!(by_value, MixEffect::MixEffect2);
        assert_eq!(by_name, MixEffect::MixEffect2);
        assert_eq!(by_code, MixEffect::MixEffect2);
    }

    #[test]
    fn test_resolve_rejects_unknowns() {
        let bad_name = resolve::<MixEffect, _>("mixEffect9");
        let bad_code = resolve::<MixEffect, _>(9u16);
        let negative = resolve::<MixEffect, _>(-1i64);

        assert!(bad_name.is_err());
        assert!(bad_code.is_err());
        assert!(negative.is_err());
    }
}
