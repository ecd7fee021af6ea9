//! # acrofill
//!
//! AcroForm form-filling toolkit: default-appearance directives, shared
//! font resources, and field values.
//!
//! The crate covers the narrow but hazard-prone middle of form filling:
//!
//! - **Appearance directives** — the compact `/Helv 10 Tf 0 g` token
//!   grammar stored under a field's /DA key, with a tolerant parser and a
//!   canonical writer ([`AppearanceDirective`]).
//! - **Font resources** — collision-free registration of font programs
//!   into the form's shared default-resources table ([`ResourceTable`]),
//!   including parsed TrueType programs and the Base-14 standard fonts.
//! - **Field filling** — locating fields by name and committing text
//!   values so viewers regenerate the on-page rendering consistently
//!   ([`FormFiller`]), including the poor-man's-bold preset.
//!
//! Loading and saving whole documents is out of scope; the crate operates
//! on the in-memory [`AcroForm`] model a document loader hands it.
//!
//! ## Quick Start
//!
//! ```
//! use acrofill::{AcroForm, AppearancePreset, FormField, FormFiller, SetOutcome};
//!
//! # fn main() -> acrofill::Result<()> {
//! let mut form = AcroForm::new();
//! form.insert_field("FirstName", FormField::text_with_appearance("/Helv 10 Tf 0 g"));
//!
//! let mut filler = FormFiller::new(&mut form);
//! let outcome = filler.set_value_with_appearance(
//!     "FirstName",
//!     "My first name",
//!     AppearancePreset::SyntheticBold,
//! )?;
//! assert_eq!(outcome, SetOutcome::Applied);
//! # Ok(())
//! # }
//! ```
//!
//! ## Permissiveness policy
//!
//! Form filling is best-effort across heterogeneous third-party
//! documents. Only a missing field is an error; a field without a prior
//! appearance directive keeps inheriting the form default, and a field
//! without text entry is simply not written to. Both quiet paths are
//! observable through [`SetOutcome`].

#![warn(missing_docs)]

// Error handling
pub mod error;

// Field record object model
pub mod object;

// Font programs (Base-14 and parsed TrueType)
pub mod fonts;

// Form model, appearance directives, resource table, filler
pub mod form;

// Re-exports
pub use error::{Error, Result};
pub use fonts::{FontProgram, StandardFont, TrueTypeFont};
pub use form::{
    AcroForm, AppearanceDirective, AppearanceOverrides, AppearancePreset, Color, FieldFlags,
    FieldType, ForcedAppearance, FormField, FormFiller, RenderMode, ResourceTable, SetOutcome,
    TextField,
};
pub use object::{Dictionary, Object};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
