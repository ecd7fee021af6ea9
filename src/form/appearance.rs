//! Default-appearance (DA) directive synthesis and parsing.
//!
//! A field's DA entry is a restricted content-stream fragment selecting
//! font, size, color and text render mode, e.g. `/Helv 10 Tf 0 g`. See
//! ISO 32000-1:2008, Section 12.7.3.3 - Variable Text.
//!
//! This module always emits the canonical operator order
//! `Tf [Tr] [w] color`, but the parser tolerates reordering and unknown
//! operators, since third-party producers are not consistent here.

use std::collections::HashMap;

/// Text render mode, from the `Tr` operator (PDF Table 106).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Fill glyph outlines (mode 0)
    #[default]
    Fill,
    /// Stroke glyph outlines (mode 1)
    Stroke,
    /// Fill, then stroke (mode 2) - used for poor-man's-bold
    FillThenStroke,
    /// Neither fill nor stroke (mode 3)
    Invisible,
}

impl RenderMode {
    /// Numeric operand of the `Tr` operator.
    pub fn code(&self) -> i64 {
        match self {
            RenderMode::Fill => 0,
            RenderMode::Stroke => 1,
            RenderMode::FillThenStroke => 2,
            RenderMode::Invisible => 3,
        }
    }

    /// Parse a `Tr` operand. Clipping modes (4-7) and out-of-range values
    /// are not distinguished by this crate.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(RenderMode::Fill),
            1 => Some(RenderMode::Stroke),
            2 => Some(RenderMode::FillThenStroke),
            3 => Some(RenderMode::Invisible),
            _ => None,
        }
    }

    /// Whether glyph outlines are stroked in this mode.
    pub fn involves_stroke(&self) -> bool {
        matches!(self, RenderMode::Stroke | RenderMode::FillThenStroke)
    }
}

/// A color in the device gray or RGB space, as set by `g`/`rg` (fill) or
/// `G`/`RG` (stroke).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Device gray, 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// Device RGB, components 0.0 to 1.0
    Rgb(f64, f64, f64),
}

impl Color {
    /// Black in device gray, the conventional form-fill default.
    pub const BLACK: Color = Color::Gray(0.0);

    fn write(&self, out: &mut String, ops: (&str, &str)) {
        let (gray_op, rgb_op) = ops;
        match self {
            Color::Gray(g) => {
                out.push_str(&format!(" {} {}", g, gray_op));
            },
            Color::Rgb(r, g, b) => {
                out.push_str(&format!(" {} {} {} {}", r, g, b, rgb_op));
            },
        }
    }
}

/// Default font size for synthesized directives, in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Stroke width used by the poor-man's-bold preset, in user units.
pub const BOLD_STROKE_WIDTH: f64 = 0.5;

/// Conventional resource name of the Helvetica form font.
pub const HELVETICA: &str = "Helv";

/// A parsed or synthesized default-appearance directive.
///
/// A `font_size` of 0 means "auto-size to fit" per the PDF spec.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceDirective {
    /// Font resource name, without the leading slash.
    pub font_name: String,
    /// Font size in points; 0.0 requests auto-sizing.
    pub font_size: f64,
    /// Text render mode.
    pub render_mode: RenderMode,
    /// Stroke width; only meaningful for stroke-involving render modes.
    pub stroke_width: Option<f64>,
    /// Fill color.
    pub fill_color: Color,
    /// Stroke color, when the directive sets one.
    pub stroke_color: Option<Color>,
}

impl AppearanceDirective {
    /// Plain fill rendering at the default size, black.
    pub fn plain(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            font_size: DEFAULT_FONT_SIZE,
            render_mode: RenderMode::Fill,
            stroke_width: None,
            fill_color: Color::BLACK,
            stroke_color: None,
        }
    }

    /// Poor-man's-bold: fill-then-stroke with a 0.5 unit stroke, producing
    /// visually heavier glyphs without a distinct bold font program.
    pub fn synthetic_bold(font_name: impl Into<String>) -> Self {
        Self {
            font_name: font_name.into(),
            font_size: DEFAULT_FONT_SIZE,
            render_mode: RenderMode::FillThenStroke,
            stroke_width: Some(BOLD_STROKE_WIDTH),
            fill_color: Color::BLACK,
            stroke_color: None,
        }
    }

    /// Override the font size in points. 0.0 requests auto-sizing.
    pub fn with_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Whether the directive requests auto-sizing.
    pub fn is_auto_size(&self) -> bool {
        self.font_size == 0.0
    }

    /// Serialize to the DA token stream in canonical order.
    pub fn to_da_string(&self) -> String {
        let mut out = format!("/{} {} Tf", self.font_name, self.font_size);

        if self.render_mode != RenderMode::Fill {
            out.push_str(&format!(" {} Tr", self.render_mode.code()));
        }
        if let Some(width) = self.stroke_width {
            out.push_str(&format!(" {} w", width));
        }
        if let Some(stroke) = self.stroke_color {
            stroke.write(&mut out, ("G", "RG"));
        }
        self.fill_color.write(&mut out, ("g", "rg"));

        out
    }

    /// Parse a DA token stream.
    ///
    /// Returns `None` when no font selection (`Tf`) can be recovered; an
    /// empty or unintelligible string is not an error, it simply carries
    /// no directive. Operators this crate does not model are skipped.
    pub fn parse(da: &str) -> Option<Self> {
        let mut operands: Vec<Operand> = Vec::new();

        let mut font_name: Option<String> = None;
        let mut font_size = DEFAULT_FONT_SIZE;
        let mut render_mode = RenderMode::Fill;
        let mut stroke_width = None;
        let mut fill_color = Color::BLACK;
        let mut stroke_color = None;

        for token in da.split_whitespace() {
            match token {
                "Tf" => {
                    let size = pop_number(&mut operands);
                    let name = pop_name(&mut operands);
                    if let (Some(name), Some(size)) = (name, size) {
                        font_name = Some(name);
                        font_size = size;
                    }
                    operands.clear();
                },
                "Tr" => {
                    if let Some(code) = pop_number(&mut operands) {
                        if let Some(mode) = RenderMode::from_code(code as i64) {
                            render_mode = mode;
                        }
                    }
                    operands.clear();
                },
                "w" => {
                    stroke_width = pop_number(&mut operands).or(stroke_width);
                    operands.clear();
                },
                "g" => {
                    if let Some(gray) = pop_number(&mut operands) {
                        fill_color = Color::Gray(gray);
                    }
                    operands.clear();
                },
                "rg" => {
                    if let Some(color) = pop_rgb(&mut operands) {
                        fill_color = color;
                    }
                    operands.clear();
                },
                "G" => {
                    if let Some(gray) = pop_number(&mut operands) {
                        stroke_color = Some(Color::Gray(gray));
                    }
                    operands.clear();
                },
                "RG" => {
                    if let Some(color) = pop_rgb(&mut operands) {
                        stroke_color = Some(color);
                    }
                    operands.clear();
                },
                _ => {
                    if let Ok(number) = token.parse::<f64>() {
                        operands.push(Operand::Number(number));
                    } else if let Some(name) = token.strip_prefix('/') {
                        operands.push(Operand::Name(name.to_string()));
                    } else {
                        // Unknown operator; drop whatever it consumed.
                        operands.clear();
                    }
                },
            }
        }

        font_name.map(|font_name| Self {
            font_name,
            font_size,
            render_mode,
            stroke_width,
            fill_color,
            stroke_color,
        })
    }
}

/// Operand accumulated while scanning a DA token stream.
enum Operand {
    Number(f64),
    Name(String),
}

fn pop_number(operands: &mut Vec<Operand>) -> Option<f64> {
    match operands.pop() {
        Some(Operand::Number(n)) => Some(n),
        _ => None,
    }
}

fn pop_name(operands: &mut Vec<Operand>) -> Option<String> {
    // The font operand may not be adjacent if a producer interleaved
    // unmodeled tokens; take the most recent name.
    for i in (0..operands.len()).rev() {
        if matches!(operands[i], Operand::Name(_)) {
            if let Operand::Name(name) = operands.remove(i) {
                return Some(name);
            }
        }
    }
    None
}

fn pop_rgb(operands: &mut Vec<Operand>) -> Option<Color> {
    let b = pop_number(operands)?;
    let g = pop_number(operands)?;
    let r = pop_number(operands)?;
    Some(Color::Rgb(r, g, b))
}

/// The appearance forced onto a reserved field name: plain fill rendering
/// at a fixed size, keeping the caller's font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedAppearance {
    /// Font size in points.
    pub size: f64,
}

impl ForcedAppearance {
    /// Apply the override to a synthesized directive. The font name is
    /// kept; size, render mode, stroke and colors are replaced.
    pub fn apply(&self, directive: AppearanceDirective) -> AppearanceDirective {
        AppearanceDirective::plain(directive.font_name).with_size(self.size)
    }
}

/// Per-field-name appearance overrides, matched case-insensitively.
///
/// The default table carries the one legacy entry: `Field1` is always
/// rendered plain at 12 pt, whatever preset the caller asked for. The
/// table is injectable so deployments can extend or clear it.
#[derive(Debug, Clone)]
pub struct AppearanceOverrides {
    forced: HashMap<String, ForcedAppearance>,
}

impl AppearanceOverrides {
    /// An empty override table.
    pub fn empty() -> Self {
        Self {
            forced: HashMap::new(),
        }
    }

    /// Add or replace an override for a field name.
    pub fn insert(&mut self, field_name: impl Into<String>, forced: ForcedAppearance) {
        self.forced.insert(field_name.into().to_ascii_lowercase(), forced);
    }

    /// Look up the override for a field name, case-insensitively.
    ///
    /// Note the asymmetry with field lookup, which is case-sensitive; the
    /// legacy behavior is preserved deliberately.
    pub fn lookup(&self, field_name: &str) -> Option<ForcedAppearance> {
        self.forced.get(&field_name.to_ascii_lowercase()).copied()
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.forced.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forced.is_empty()
    }
}

impl Default for AppearanceOverrides {
    fn default() -> Self {
        let mut overrides = Self::empty();
        overrides.insert("Field1", ForcedAppearance { size: 12.0 });
        overrides
    }
}
