//! Interactive form (AcroForm) model and field-filling support.
//!
//! The model is deliberately narrow: a form owns an ordered mapping from
//! fully-qualified field name to field record, a shared default-resources
//! table for fonts, and the form-level appearance defaults. Loading and
//! saving the surrounding document is the document-model collaborator's
//! job; this module covers everything between "I have a form" and "the
//! field carries its new value and appearance".

pub mod appearance;
pub mod field;
pub mod filler;
pub mod resources;

pub use appearance::{
    AppearanceDirective, AppearanceOverrides, Color, ForcedAppearance, RenderMode,
};
pub use field::{FieldFlags, FieldType, FormField, TextField};
pub use filler::{AppearancePreset, FormFiller, SetOutcome};
pub use resources::ResourceTable;

use indexmap::IndexMap;

use crate::fonts::FontProgram;

/// An interactive form: named fields plus shared defaults.
#[derive(Debug, Clone, Default)]
pub struct AcroForm {
    /// Fully-qualified field name → field, in document order.
    fields: IndexMap<String, FormField>,
    /// Shared default resources (/DR), attached lazily on first font
    /// registration when the document's producer did not define one.
    default_resources: Option<ResourceTable>,
    /// Form-level default appearance (/DA) inherited by fields without
    /// their own directive.
    default_appearance: Option<String>,
    /// Whether viewers should regenerate field appearances
    /// (/NeedAppearances).
    need_appearances: bool,
}

impl AcroForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    // === Fields ===

    /// Insert a field under its fully-qualified name.
    ///
    /// Replaces any field already registered under that name.
    pub fn insert_field(&mut self, name: impl Into<String>, field: FormField) {
        self.fields.insert(name.into(), field);
    }

    /// Locate a field by fully-qualified name.
    ///
    /// The match is single-level and case-sensitive; resolving dotted
    /// names into nested kids is the field-tree collaborator's job.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.get(name)
    }

    /// Whether a field with the given name exists.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in document order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|name| name.as_str()).collect()
    }

    /// Iterate over (name, field) entries in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FormField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // === Default resources ===

    /// The shared default-resources table, if one is attached.
    pub fn default_resources(&self) -> Option<&ResourceTable> {
        self.default_resources.as_ref()
    }

    /// Attach (or replace) the default-resources table.
    pub fn set_default_resources(&mut self, table: ResourceTable) {
        self.default_resources = Some(table);
    }

    /// Register a font program into the default resources, creating and
    /// attaching the table if the form has none yet.
    ///
    /// Returns the allocated resource name, usable in appearance
    /// directives via [`AppearancePreset::CustomFont`].
    pub fn add_default_font(&mut self, program: FontProgram) -> String {
        self.default_resources
            .get_or_insert_with(ResourceTable::new)
            .add_font(program)
    }

    /// Register several font programs, returning names in input order.
    ///
    /// The table is attached once at the end rather than per program.
    pub fn add_default_fonts(
        &mut self,
        programs: impl IntoIterator<Item = FontProgram>,
    ) -> Vec<String> {
        let mut table = self.default_resources.take().unwrap_or_default();
        let names = table.add_fonts(programs);
        self.default_resources = Some(table);
        names
    }

    // === Form-level defaults ===

    /// Form-level default appearance string.
    pub fn default_appearance(&self) -> Option<&str> {
        self.default_appearance.as_deref()
    }

    /// Set the form-level default appearance string.
    pub fn set_default_appearance(&mut self, da: impl Into<String>) {
        self.default_appearance = Some(da.into());
    }

    /// Whether viewers are asked to regenerate field appearances.
    pub fn need_appearances(&self) -> bool {
        self.need_appearances
    }

    /// Set the NeedAppearances flag.
    pub fn set_need_appearances(&mut self, need: bool) {
        self.need_appearances = need;
    }
}
