//! Shared font resource table for a form.
//!
//! Default-appearance directives refer to fonts by symbolic name; those
//! names must resolve through the form's default resources (/DR) at
//! render time. The table hands out collision-free names so programs
//! registered here never shadow resources the document's original
//! producer defined.

use indexmap::IndexMap;

use crate::fonts::FontProgram;

/// Prefix for allocated font resource names.
const FONT_NAME_PREFIX: &str = "F";

/// Name → font program table, insertion-ordered.
///
/// Names are unique for the table's lifetime; once assigned, a name is
/// never reused for a different program. Registration does not
/// deduplicate by program identity — registering the same program twice
/// yields two names, matching how shared resource dictionaries are
/// actually grown.
#[derive(Debug, Clone)]
pub struct ResourceTable {
    fonts: IndexMap<String, FontProgram>,
    /// Next candidate numeral; monotonic, scoped to this table.
    next_font_id: u32,
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            fonts: IndexMap::new(),
            next_font_id: 1,
        }
    }

    /// Insert a font under an externally chosen name.
    ///
    /// Used when materializing a table from a document whose producer
    /// already named its resources. Replaces any existing entry with the
    /// same name.
    pub fn insert(&mut self, name: impl Into<String>, program: FontProgram) {
        self.fonts.insert(name.into(), program);
    }

    /// Register a font program under a freshly allocated name.
    ///
    /// Candidates are `F1`, `F2`, ... in order; any candidate already
    /// present (however it got there) is skipped, so pre-populated tables
    /// cannot collide with allocated names.
    pub fn add_font(&mut self, program: FontProgram) -> String {
        let name = loop {
            let candidate = format!("{}{}", FONT_NAME_PREFIX, self.next_font_id);
            self.next_font_id += 1;
            if !self.fonts.contains_key(&candidate) {
                break candidate;
            }
            log::debug!("Font resource name '{}' already taken, skipping", candidate);
        };

        log::debug!("Registered font '{}' as /{}", program.base_name(), name);
        self.fonts.insert(name.clone(), program);
        name
    }

    /// Register several programs, returning their names in input order.
    pub fn add_fonts(&mut self, programs: impl IntoIterator<Item = FontProgram>) -> Vec<String> {
        programs.into_iter().map(|p| self.add_font(p)).collect()
    }

    /// Look up a program by resource name.
    pub fn get(&self, name: &str) -> Option<&FontProgram> {
        self.fonts.get(name)
    }

    /// Whether a resource name is taken.
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Iterate over (name, program) entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FontProgram)> {
        self.fonts.iter().map(|(name, program)| (name.as_str(), program))
    }

    /// All resource names in insertion order.
    pub fn font_names(&self) -> Vec<&str> {
        self.fonts.keys().map(|name| name.as_str()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
