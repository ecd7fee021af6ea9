//! Form field records and capability views.
//!
//! A field is a dictionary of PDF object entries. Views over a field
//! (generic `FormField`, narrowed `TextField`) share one underlying
//! record, so a mutation through either view is visible to both — the
//! same discipline as re-wrapping a field dictionary into a concrete
//! subtype in other toolkits.

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;

use crate::form::appearance::AppearanceDirective;
use crate::object::{Dictionary, Object};

/// Field type from the /FT entry.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// Button field (/Btn) - checkbox, radio button, push button
    Button,
    /// Text field (/Tx) - single or multi-line text
    Text,
    /// Choice field (/Ch) - list box or combo box
    Choice,
    /// Signature field (/Sig)
    Signature,
    /// Unknown/unrecognized field type
    Unknown(String),
}

impl FieldType {
    /// Parse from the /FT name.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Btn" => FieldType::Button,
            "Tx" => FieldType::Text,
            "Ch" => FieldType::Choice,
            "Sig" => FieldType::Signature,
            _ => FieldType::Unknown(tag.to_string()),
        }
    }

    /// The /FT name for this type.
    pub fn tag(&self) -> &str {
        match self {
            FieldType::Button => "Btn",
            FieldType::Text => "Tx",
            FieldType::Choice => "Ch",
            FieldType::Signature => "Sig",
            FieldType::Unknown(tag) => tag,
        }
    }
}

bitflags! {
    /// Field flags from the /Ff entry (PDF Tables 221, 226, 228, 230).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FieldFlags: u32 {
        /// Field is read-only (bit 1)
        const READ_ONLY = 1;
        /// Field is required (bit 2)
        const REQUIRED = 1 << 1;
        /// Field should not be exported (bit 3)
        const NO_EXPORT = 1 << 2;
        /// Text field allows multiple lines (bit 13)
        const MULTILINE = 1 << 12;
        /// Text field is a password field (bit 14)
        const PASSWORD = 1 << 13;
        /// Radio button (bit 16)
        const RADIO = 1 << 15;
        /// Button is a push button (bit 17)
        const PUSH_BUTTON = 1 << 16;
        /// Choice is a combo box (bit 18)
        const COMBO = 1 << 17;
        /// Text field does not scroll (bit 24)
        const DO_NOT_SCROLL = 1 << 23;
        /// Text field uses comb formatting (bit 25)
        const COMB = 1 << 24;
    }
}

/// A form field backed by a shared mutable record.
#[derive(Debug, Clone)]
pub struct FormField {
    record: Rc<RefCell<Dictionary>>,
}

impl FormField {
    /// Wrap an existing field record.
    pub fn from_record(record: Dictionary) -> Self {
        Self {
            record: Rc::new(RefCell::new(record)),
        }
    }

    /// Create a field of the given type with an empty record apart from
    /// the /FT tag.
    pub fn new(field_type: FieldType) -> Self {
        let mut record = Dictionary::new();
        record.insert("FT".to_string(), Object::Name(field_type.tag().to_string()));
        Self::from_record(record)
    }

    /// Create a text field with an initial default-appearance directive.
    pub fn text_with_appearance(da: &str) -> Self {
        let field = Self::new(FieldType::Text);
        field.set_default_appearance(da);
        field
    }

    /// The shared record handle. Views created from it alias this field.
    pub fn record(&self) -> Rc<RefCell<Dictionary>> {
        Rc::clone(&self.record)
    }

    /// Read an entry from the record.
    pub fn entry(&self, key: &str) -> Option<Object> {
        self.record.borrow().get(key).cloned()
    }

    /// Write an entry into the record.
    pub fn set_entry(&self, key: impl Into<String>, value: Object) {
        self.record.borrow_mut().insert(key.into(), value);
    }

    /// Field type from the /FT entry, if tagged.
    pub fn field_type(&self) -> Option<FieldType> {
        self.entry("FT")
            .and_then(|obj| obj.as_name().map(FieldType::from_tag))
    }

    /// Field flags from the /Ff entry.
    pub fn flags(&self) -> FieldFlags {
        self.entry("Ff")
            .and_then(|obj| obj.as_integer())
            .map(|bits| FieldFlags::from_bits_truncate(bits as u32))
            .unwrap_or_default()
    }

    /// Check if field is read-only.
    pub fn is_readonly(&self) -> bool {
        self.flags().contains(FieldFlags::READ_ONLY)
    }

    /// Current value from the /V entry, decoded as text.
    pub fn value(&self) -> Option<String> {
        self.entry("V").and_then(|obj| obj.as_text())
    }

    /// Raw default-appearance string from the /DA entry.
    ///
    /// `None` means the entry is absent (the field inherits the form's
    /// default); an empty string is a present, empty entry. Callers that
    /// rewrite appearances must keep the two apart.
    pub fn default_appearance(&self) -> Option<String> {
        self.entry("DA").and_then(|obj| obj.as_text())
    }

    /// Whether the record carries a /DA entry at all.
    pub fn has_default_appearance(&self) -> bool {
        self.record.borrow().contains_key("DA")
    }

    /// Overwrite the /DA entry in place.
    pub fn set_default_appearance(&self, da: &str) {
        self.set_entry("DA", Object::from_text(da));
    }

    /// Parse the current default-appearance directive, if one is present
    /// and intelligible.
    pub fn appearance(&self) -> Option<AppearanceDirective> {
        self.default_appearance()
            .and_then(|da| AppearanceDirective::parse(&da))
    }

    /// Coerce to the text-entry capability.
    ///
    /// Returns a `TextField` view over the same record when the field is
    /// tagged /Tx; otherwise `None`. Value commits require this view.
    pub fn as_text_field(&self) -> Option<TextField> {
        match self.field_type() {
            Some(FieldType::Text) => Some(TextField {
                record: Rc::clone(&self.record),
            }),
            _ => None,
        }
    }
}

/// Text-entry view over a form field record.
///
/// Constructed through [`FormField::as_text_field`]; shares the record
/// with the generic view it was derived from.
#[derive(Debug, Clone)]
pub struct TextField {
    record: Rc<RefCell<Dictionary>>,
}

impl TextField {
    /// Commit a text value to the /V entry.
    pub fn set_value(&self, value: &str) {
        self.record
            .borrow_mut()
            .insert("V".to_string(), Object::from_text(value));
    }

    /// Current value, decoded as text.
    pub fn value(&self) -> Option<String> {
        self.record.borrow().get("V").and_then(|obj| obj.as_text())
    }

    /// Whether the field is a multiline text field.
    pub fn is_multiline(&self) -> bool {
        self.record
            .borrow()
            .get("Ff")
            .and_then(|obj| obj.as_integer())
            .map(|bits| FieldFlags::from_bits_truncate(bits as u32).contains(FieldFlags::MULTILINE))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_tags() {
        assert_eq!(FieldType::from_tag("Tx"), FieldType::Text);
        assert_eq!(FieldType::from_tag("Btn"), FieldType::Button);
        assert_eq!(FieldType::from_tag("Ch"), FieldType::Choice);
        assert_eq!(FieldType::from_tag("Sig"), FieldType::Signature);
        assert!(matches!(FieldType::from_tag("Other"), FieldType::Unknown(_)));
        assert_eq!(FieldType::Text.tag(), "Tx");
    }

    #[test]
    fn test_new_field_carries_type_tag() {
        let field = FormField::new(FieldType::Text);
        assert_eq!(field.field_type(), Some(FieldType::Text));
    }

    #[test]
    fn test_absent_da_vs_empty_da() {
        let field = FormField::new(FieldType::Text);
        assert!(!field.has_default_appearance());
        assert_eq!(field.default_appearance(), None);

        field.set_default_appearance("");
        assert!(field.has_default_appearance());
        assert_eq!(field.default_appearance(), Some(String::new()));
    }

    #[test]
    fn test_appearance_parsing() {
        let field = FormField::text_with_appearance("/Helv 10 Tf 0 g");
        let directive = field.appearance().unwrap();
        assert_eq!(directive.font_name, "Helv");
        assert_eq!(directive.font_size, 10.0);
    }

    #[test]
    fn test_text_field_view_shares_record() {
        let field = FormField::text_with_appearance("/Helv 10 Tf 0 g");
        let text = field.as_text_field().unwrap();

        text.set_value("My first name");

        // Visible through the generic view too.
        assert_eq!(field.value(), Some("My first name".to_string()));
    }

    #[test]
    fn test_non_text_field_has_no_text_capability() {
        let checkbox = FormField::new(FieldType::Button);
        assert!(checkbox.as_text_field().is_none());

        let untagged = FormField::from_record(Dictionary::new());
        assert!(untagged.as_text_field().is_none());
    }

    #[test]
    fn test_flags() {
        let field = FormField::new(FieldType::Text);
        assert_eq!(field.flags(), FieldFlags::empty());
        assert!(!field.is_readonly());

        field.set_entry(
            "Ff",
            Object::Integer((FieldFlags::READ_ONLY | FieldFlags::MULTILINE).bits() as i64),
        );
        assert!(field.is_readonly());
        assert!(field.flags().contains(FieldFlags::MULTILINE));
        assert!(field.as_text_field().unwrap().is_multiline());
    }

    #[test]
    fn test_value_text_encoding_round_trip() {
        let field = FormField::new(FieldType::Text);
        field.as_text_field().unwrap().set_value("Štěpán");
        assert_eq!(field.value(), Some("Štěpán".to_string()));
    }
}
