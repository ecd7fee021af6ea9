//! Font programs registrable as form default resources.
//!
//! Two kinds of program exist: the Base-14 standard fonts, which every
//! viewer provides and which need no embedded data, and TrueType/OpenType
//! programs parsed from raw bytes via the `ttf-parser` crate.

use bytes::Bytes;
use ttf_parser::Face;

use crate::error::{Error, Result};

/// PDF Base-14 standard fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Helvetica
    Helvetica,
    /// Helvetica-Bold
    HelveticaBold,
    /// Helvetica-Oblique
    HelveticaOblique,
    /// Helvetica-BoldOblique
    HelveticaBoldOblique,
    /// Times-Roman
    TimesRoman,
    /// Times-Bold
    TimesBold,
    /// Times-Italic
    TimesItalic,
    /// Times-BoldItalic
    TimesBoldItalic,
    /// Courier
    Courier,
    /// Courier-Bold
    CourierBold,
    /// Courier-Oblique
    CourierOblique,
    /// Courier-BoldOblique
    CourierBoldOblique,
    /// Symbol
    Symbol,
    /// ZapfDingbats
    ZapfDingbats,
}

impl StandardFont {
    /// The font's PostScript base name.
    pub fn base_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }
}

/// Parsed TrueType/OpenType font program.
///
/// The raw bytes are kept for later embedding by the document writer; the
/// metrics needed for form appearance work are extracted up front so the
/// parsed face does not have to be held alive.
#[derive(Debug, Clone)]
pub struct TrueTypeFont {
    /// Original font file bytes
    data: Bytes,
    /// PostScript name from the name table, if present
    postscript_name: Option<String>,
    /// Family name from the name table, if present
    family_name: Option<String>,
    /// Units per em
    units_per_em: u16,
    /// Ascender in font units
    ascender: i16,
    /// Descender in font units (negative value)
    descender: i16,
    /// Whether the face reports itself as bold
    is_bold: bool,
    /// Number of glyphs
    num_glyphs: u16,
}

impl TrueTypeFont {
    /// Parse a TrueType/OpenType font from raw data.
    pub fn parse(data: impl Into<Bytes>) -> Result<Self> {
        let data = data.into();
        if data.is_empty() {
            return Err(Error::Font("Font file is empty".to_string()));
        }

        let face = Face::parse(&data, 0)
            .map_err(|e| Error::Font(format!("Failed to parse font file: {}", e)))?;

        let postscript_name = face
            .names()
            .into_iter()
            .find(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .and_then(|name| name.to_string());

        let family_name = face
            .names()
            .into_iter()
            .find(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .and_then(|name| name.to_string());

        let units_per_em = face.units_per_em();
        let ascender = face.ascender();
        let descender = face.descender();
        let is_bold = face.is_bold();
        let num_glyphs = face.number_of_glyphs();

        Ok(Self {
            data,
            postscript_name,
            family_name,
            units_per_em,
            ascender,
            descender,
            is_bold,
            num_glyphs,
        })
    }

    /// Get the font's PostScript name.
    pub fn postscript_name(&self) -> Option<&str> {
        self.postscript_name.as_deref()
    }

    /// Get the font family name.
    pub fn family_name(&self) -> Option<&str> {
        self.family_name.as_deref()
    }

    /// Get units per em for this font.
    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Get the ascender in font units.
    pub fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Get the descender in font units (negative value).
    pub fn descender(&self) -> i16 {
        self.descender
    }

    /// Check if the font is bold.
    pub fn is_bold(&self) -> bool {
        self.is_bold
    }

    /// Get the number of glyphs in the font.
    pub fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }

    /// Get the raw font data for embedding.
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }
}

/// A font program registrable into a form's default resources.
#[derive(Debug, Clone)]
pub enum FontProgram {
    /// A Base-14 standard font; viewers supply the glyphs.
    Standard(StandardFont),
    /// An embedded TrueType/OpenType program.
    TrueType(TrueTypeFont),
}

impl FontProgram {
    /// The PostScript-style base name describing this program.
    ///
    /// TrueType programs fall back from PostScript name to family name to
    /// a placeholder; the name is descriptive only and is never used as a
    /// resource key.
    pub fn base_name(&self) -> String {
        match self {
            FontProgram::Standard(font) => font.base_name().to_string(),
            FontProgram::TrueType(font) => font
                .postscript_name()
                .or(font.family_name())
                .unwrap_or("Unknown")
                .to_string(),
        }
    }

    /// Whether this program carries embedded font data.
    pub fn is_embedded(&self) -> bool {
        matches!(self, FontProgram::TrueType(_))
    }
}

impl From<StandardFont> for FontProgram {
    fn from(font: StandardFont) -> Self {
        FontProgram::Standard(font)
    }
}

impl From<TrueTypeFont> for FontProgram {
    fn from(font: TrueTypeFont) -> Self {
        FontProgram::TrueType(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_font_base_names() {
        assert_eq!(StandardFont::Helvetica.base_name(), "Helvetica");
        assert_eq!(StandardFont::HelveticaBold.base_name(), "Helvetica-Bold");
        assert_eq!(StandardFont::TimesRoman.base_name(), "Times-Roman");
        assert_eq!(StandardFont::ZapfDingbats.base_name(), "ZapfDingbats");
    }

    #[test]
    fn test_empty_font_rejected() {
        let result = TrueTypeFont::parse(Bytes::new());
        assert!(matches!(result, Err(Error::Font(_))));
    }

    #[test]
    fn test_garbage_font_rejected() {
        let result = TrueTypeFont::parse(Bytes::from_static(b"not a font at all"));
        assert!(matches!(result, Err(Error::Font(_))));
    }

    #[test]
    fn test_standard_program_not_embedded() {
        let program = FontProgram::from(StandardFont::CourierBold);
        assert!(!program.is_embedded());
        assert_eq!(program.base_name(), "Courier-Bold");
    }
}
