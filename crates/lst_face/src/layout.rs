//! Data-driven face layout.
//!
//! The face is three stacked panels (local, UTC, sidereal), each with a
//! one-sixth-width label column. Geometry is expressed as fractions of
//! the screen so the renderer can scale it to any bounds; colors are
//! resolved per target profile (the monochrome profile collapses the
//! panel tints). Pure data: nothing here draws.

use crate::readout::Readout;

/// Render target hardware class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetProfile {
    /// Black-and-white display; panel tints collapse to clear/white.
    Monochrome,
    /// Color display with per-panel tints.
    Color,
}

/// Every positioned element on the face, labels included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LocalLabel,
    DstFlag,
    LocalTime,
    LocalDate,
    UtcLabel,
    UtcTime,
    Mjd,
    LstLabel,
    LstTime,
}

/// What a slot displays: a fixed label or a live readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Label(&'static str),
    Readout(Readout),
}

/// Frame as fractions of the screen bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Abstract font classes; the renderer maps them to real fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// Large clock digits (local and UTC readouts).
    BigNumbers,
    /// Slightly smaller digits (sidereal readout).
    MediumNumbers,
    /// Heavy single-letter panel labels.
    PanelLabel,
    /// Small bold text (date, MJD, DST marker).
    SmallBold,
}

/// Semantic color roles, resolved per profile by [`color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    LabelBackground,
    LabelText,
    DstText,
    LocalPanel,
    UtcPanel,
    LstPanel,
    PanelText,
    Transparent,
}

/// Concrete colors the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
    Clear,
    Yellow,
    PastelYellow,
    MintGreen,
    PictonBlue,
}

/// One positioned element of the face layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSpec {
    pub slot: Slot,
    pub content: Content,
    pub frame: FracRect,
    pub align: Align,
    pub font: FontRole,
    pub foreground: ColorRole,
    pub background: ColorRole,
}

// Shared geometry constants. The label column is a sixth of the width;
// the three panels split the height evenly; the DST, date and MJD rows
// are a quarter of a panel tall.
const LABEL_W: f32 = 1.0 / 6.0;
const TIME_W: f32 = 1.0 - LABEL_W;
const PANEL_H: f32 = 1.0 / 3.0;
const ROW_H: f32 = PANEL_H / 4.0;
const DST_Y: f32 = PANEL_H - ROW_H * 1.2;
const DATE_Y: f32 = PANEL_H - ROW_H * 0.1;
const MJD_Y: f32 = PANEL_H + ROW_H;
const UTC_Y: f32 = PANEL_H + ROW_H * 1.5;
const LST_Y: f32 = MJD_Y + PANEL_H;
const LST_H: f32 = 1.0 - LST_Y;

/// The face layout, in creation order (later elements draw on top).
pub static FACE_LAYOUT: [ElementSpec; 9] = [
    ElementSpec {
        slot: Slot::LocalLabel,
        content: Content::Label("L"),
        frame: FracRect { x: 0.0, y: 0.0, w: LABEL_W, h: PANEL_H },
        align: Align::Center,
        font: FontRole::PanelLabel,
        foreground: ColorRole::LabelText,
        background: ColorRole::LabelBackground,
    },
    ElementSpec {
        slot: Slot::DstFlag,
        content: Content::Readout(Readout::DstFlag),
        frame: FracRect { x: 0.0, y: DST_Y, w: LABEL_W, h: ROW_H },
        align: Align::Center,
        font: FontRole::SmallBold,
        foreground: ColorRole::DstText,
        background: ColorRole::LabelBackground,
    },
    ElementSpec {
        slot: Slot::LocalTime,
        content: Content::Readout(Readout::LocalTime),
        frame: FracRect { x: LABEL_W, y: 0.0, w: TIME_W, h: PANEL_H },
        align: Align::Center,
        font: FontRole::BigNumbers,
        foreground: ColorRole::PanelText,
        background: ColorRole::LocalPanel,
    },
    ElementSpec {
        slot: Slot::LocalDate,
        content: Content::Readout(Readout::LocalDate),
        frame: FracRect { x: 0.0, y: DATE_Y, w: 1.0, h: ROW_H },
        align: Align::Center,
        font: FontRole::SmallBold,
        foreground: ColorRole::PanelText,
        background: ColorRole::Transparent,
    },
    ElementSpec {
        slot: Slot::UtcLabel,
        content: Content::Label("U"),
        frame: FracRect { x: 0.0, y: MJD_Y, w: LABEL_W, h: PANEL_H },
        align: Align::Center,
        font: FontRole::PanelLabel,
        foreground: ColorRole::LabelText,
        background: ColorRole::LabelBackground,
    },
    ElementSpec {
        slot: Slot::UtcTime,
        content: Content::Readout(Readout::UtcTime),
        frame: FracRect { x: LABEL_W, y: UTC_Y, w: TIME_W, h: PANEL_H },
        align: Align::Center,
        font: FontRole::BigNumbers,
        foreground: ColorRole::PanelText,
        background: ColorRole::UtcPanel,
    },
    ElementSpec {
        slot: Slot::Mjd,
        content: Content::Readout(Readout::Mjd),
        frame: FracRect { x: LABEL_W, y: MJD_Y, w: TIME_W, h: ROW_H },
        align: Align::Right,
        font: FontRole::SmallBold,
        foreground: ColorRole::PanelText,
        background: ColorRole::UtcPanel,
    },
    ElementSpec {
        slot: Slot::LstLabel,
        content: Content::Label("S"),
        frame: FracRect { x: 0.0, y: LST_Y, w: LABEL_W, h: LST_H },
        align: Align::Center,
        font: FontRole::PanelLabel,
        foreground: ColorRole::LabelText,
        background: ColorRole::LabelBackground,
    },
    ElementSpec {
        slot: Slot::LstTime,
        content: Content::Readout(Readout::LstTime),
        frame: FracRect { x: LABEL_W, y: LST_Y, w: TIME_W, h: LST_H },
        align: Align::Center,
        font: FontRole::MediumNumbers,
        foreground: ColorRole::PanelText,
        background: ColorRole::LstPanel,
    },
];

/// Resolve a color role for a target profile.
pub fn color(profile: TargetProfile, role: ColorRole) -> Color {
    match (profile, role) {
        (_, ColorRole::LabelBackground) => Color::Black,
        (_, ColorRole::LabelText) => Color::White,
        (_, ColorRole::PanelText) => Color::Black,
        (_, ColorRole::Transparent) => Color::Clear,
        (TargetProfile::Color, ColorRole::DstText) => Color::Yellow,
        (TargetProfile::Color, ColorRole::LocalPanel) => Color::PastelYellow,
        (TargetProfile::Color, ColorRole::UtcPanel) => Color::MintGreen,
        (TargetProfile::Color, ColorRole::LstPanel) => Color::PictonBlue,
        (TargetProfile::Monochrome, ColorRole::DstText) => Color::White,
        (TargetProfile::Monochrome, _) => Color::Clear,
    }
}
