//! The 2D drawing surface the renderer paints onto, plus colors and a command recorder.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Opaque RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// `#rrggbb` form, as canvas style strings expect.
    pub fn to_hex(self) -> alloc::string::String {
        alloc::format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Foreground colors offered to the user.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Palette {
    #[default]
    White,
    Gray,
    Lime,
    Blue,
}

impl Palette {
    pub const ALL: [Palette; 4] = [Palette::White, Palette::Gray, Palette::Lime, Palette::Blue];

    /// Look up a swatch by name; anything unrecognised is white.
    pub fn from_name(name: &str) -> Self {
        match name {
            "gray" => Palette::Gray,
            "lime" => Palette::Lime,
            "blue" => Palette::Blue,
            _ => Palette::White,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Palette::White => "white",
            Palette::Gray => "gray",
            Palette::Lime => "lime",
            Palette::Blue => "blue",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Palette::White => Color::rgb(0xe6, 0xe6, 0xe6),
            Palette::Gray => Color::rgb(0xc1, 0xc1, 0xc1),
            Palette::Lime => Color::rgb(0xbf, 0xec, 0xc0),
            Palette::Blue => Color::rgb(0xc8, 0xdf, 0xff),
        }
    }
}

/// Immediate-mode 2D drawing surface, shaped after the HTML canvas context.
///
/// Paths are built with `begin_path` and the path primitives, then painted
/// with `stroke` or `fill`. `arc` and `ellipse` continue the current path.
pub trait Surface<F: Float> {
    fn fill_rect(&mut self, origin: Vec2<F>, size: Vec2<F>);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Vec2<F>);
    fn line_to(&mut self, p: Vec2<F>);
    fn quadratic_curve_to(&mut self, control: Vec2<F>, end: Vec2<F>);
    fn arc(&mut self, center: Vec2<F>, radius: F, start: F, end: F);
    fn ellipse(&mut self, center: Vec2<F>, radii: Vec2<F>, rotation: F, start: F, end: F);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn set_alpha(&mut self, alpha: F);
    fn set_line_width(&mut self, width: F);
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    /// Round line caps and joins.
    fn set_round_caps(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2<F>);
    fn rotate(&mut self, angle: F);

    /// Full circle, as its own sub-path of the current path.
    fn circle(&mut self, center: Vec2<F>, radius: F) {
        self.move_to(Vec2::new(center.x + radius, center.y));
        self.arc(center, radius, F::zero(), F::tau());
    }

    /// Full, possibly rotated ellipse as its own sub-path.
    fn oval(&mut self, center: Vec2<F>, radii: Vec2<F>, rotation: F) {
        self.move_to(center + Vec2::from_angle(rotation).scale(radii.x));
        self.ellipse(center, radii, rotation, F::zero(), F::tau());
    }

    /// Single stroked segment.
    fn segment(&mut self, from: Vec2<F>, to: Vec2<F>) {
        self.begin_path();
        self.move_to(from);
        self.line_to(to);
        self.stroke();
    }
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand<F: Float> {
    FillRect { origin: Vec2<F>, size: Vec2<F> },
    BeginPath,
    MoveTo(Vec2<F>),
    LineTo(Vec2<F>),
    QuadraticCurveTo { control: Vec2<F>, end: Vec2<F> },
    Arc { center: Vec2<F>, radius: F, start: F, end: F },
    Ellipse { center: Vec2<F>, radii: Vec2<F>, rotation: F, start: F, end: F },
    Stroke,
    Fill,
    Alpha(F),
    LineWidth(F),
    StrokeColor(Color),
    FillColor(Color),
    RoundCaps,
    Save,
    Restore,
    Translate(Vec2<F>),
    Rotate(F),
}

/// Surface that keeps every call in order instead of painting.
#[derive(Clone, Debug, Default)]
pub struct CommandRecorder<F: Float> {
    commands: AllocVec<DrawCommand<F>>,
}

impl<F: Float> CommandRecorder<F> {
    pub fn new() -> Self {
        CommandRecorder { commands: AllocVec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand<F>] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of `Stroke` calls.
    pub fn strokes(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Stroke)).count()
    }

    /// Number of `Fill` calls.
    pub fn fills(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Fill)).count()
    }
}

impl<F: Float> Surface<F> for CommandRecorder<F> {
    fn fill_rect(&mut self, origin: Vec2<F>, size: Vec2<F>) {
        self.commands.push(DrawCommand::FillRect { origin, size });
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }
    fn move_to(&mut self, p: Vec2<F>) {
        self.commands.push(DrawCommand::MoveTo(p));
    }
    fn line_to(&mut self, p: Vec2<F>) {
        self.commands.push(DrawCommand::LineTo(p));
    }
    fn quadratic_curve_to(&mut self, control: Vec2<F>, end: Vec2<F>) {
        self.commands.push(DrawCommand::QuadraticCurveTo { control, end });
    }
    fn arc(&mut self, center: Vec2<F>, radius: F, start: F, end: F) {
        self.commands.push(DrawCommand::Arc { center, radius, start, end });
    }
    fn ellipse(&mut self, center: Vec2<F>, radii: Vec2<F>, rotation: F, start: F, end: F) {
        self.commands.push(DrawCommand::Ellipse { center, radii, rotation, start, end });
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }
    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
    fn set_alpha(&mut self, alpha: F) {
        self.commands.push(DrawCommand::Alpha(alpha));
    }
    fn set_line_width(&mut self, width: F) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }
    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }
    fn set_round_caps(&mut self) {
        self.commands.push(DrawCommand::RoundCaps);
    }
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }
    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }
    fn translate(&mut self, offset: Vec2<F>) {
        self.commands.push(DrawCommand::Translate(offset));
    }
    fn rotate(&mut self, angle: F) {
        self.commands.push(DrawCommand::Rotate(angle));
    }
}
