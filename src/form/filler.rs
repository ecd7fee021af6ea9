//! Committing values to fields with consistent appearances.
//!
//! Filling is permissive by policy: the target population is
//! heterogeneous, sometimes malformed, third-party documents, and the
//! historical behavior is best-effort. A missing field is the only
//! reported error; every other deviation (no prior appearance to rewrite,
//! field without text entry) completes quietly. Those quiet paths are
//! still surfaced as distinct [`SetOutcome`] variants so callers and
//! tests can observe which one was taken.

use crate::error::{Error, Result};
use crate::form::appearance::{AppearanceDirective, AppearanceOverrides, HELVETICA};
use crate::form::AcroForm;

/// Appearance preset requested for a fill operation.
#[derive(Debug, Clone, PartialEq)]
pub enum AppearancePreset {
    /// Fill-mode rendering with the conventional Helvetica form font.
    Plain,
    /// Poor-man's-bold: fill-then-stroke with a 0.5 unit stroke.
    SyntheticBold,
    /// Plain rendering with a registered font resource name, as returned
    /// by [`AcroForm::add_default_font`].
    CustomFont(String),
}

impl AppearancePreset {
    /// The directive this preset synthesizes, before overrides.
    pub fn directive(&self) -> AppearanceDirective {
        match self {
            AppearancePreset::Plain => AppearanceDirective::plain(HELVETICA),
            AppearancePreset::SyntheticBold => AppearanceDirective::synthetic_bold(HELVETICA),
            AppearancePreset::CustomFont(name) => AppearanceDirective::plain(name.clone()),
        }
    }
}

/// Outcome of a fill operation. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Appearance rewritten and value committed.
    Applied,
    /// The field carried no appearance directive; nothing was fabricated,
    /// only the value was committed.
    SkippedNoAppearance,
    /// The field does not expose text entry; the value was not committed.
    /// Takes precedence over `SkippedNoAppearance` when both apply.
    SkippedNotTextField,
}

/// Fills fields on one form.
///
/// Holds the appearance override table so the reserved-name exceptions
/// are injectable rather than baked into the synthesizer. The borrow is
/// exclusive: one writer per form at a time, no internal locking.
#[derive(Debug)]
pub struct FormFiller<'a> {
    form: &'a mut AcroForm,
    overrides: AppearanceOverrides,
}

impl<'a> FormFiller<'a> {
    /// Create a filler with the default override table.
    pub fn new(form: &'a mut AcroForm) -> Self {
        Self {
            form,
            overrides: AppearanceOverrides::default(),
        }
    }

    /// Create a filler with an explicit override table.
    pub fn with_overrides(form: &'a mut AcroForm, overrides: AppearanceOverrides) -> Self {
        Self { form, overrides }
    }

    /// The underlying form.
    pub fn form(&self) -> &AcroForm {
        self.form
    }

    /// Set a field's value with the plain appearance preset.
    pub fn set_value(&mut self, name: &str, value: &str) -> Result<SetOutcome> {
        self.set_value_with_appearance(name, value, AppearancePreset::Plain)
    }

    /// Set a field's value, rewriting its appearance with the given
    /// preset.
    ///
    /// Steps, in order:
    /// 1. locate the field; a miss is [`Error::FieldNotFound`];
    /// 2. if the field has no /DA entry, leave its appearance alone — a
    ///    directive is only ever rewritten, never created;
    /// 3. otherwise overwrite /DA with the preset's directive, the
    ///    reserved-name override applied last;
    /// 4. coerce to the text-entry view; fields without it are left
    ///    unwritten;
    /// 5. commit the value.
    pub fn set_value_with_appearance(
        &mut self,
        name: &str,
        value: &str,
        preset: AppearancePreset,
    ) -> Result<SetOutcome> {
        let field = self
            .form
            .field(name)
            .ok_or_else(|| Error::FieldNotFound(name.to_string()))?;

        let had_appearance = field.has_default_appearance();
        if had_appearance {
            let mut directive = preset.directive();
            if let Some(forced) = self.overrides.lookup(name) {
                log::debug!(
                    "Field '{}' is reserved; forcing plain appearance at {} pt",
                    name,
                    forced.size
                );
                directive = forced.apply(directive);
            }
            field.set_default_appearance(&directive.to_da_string());
        } else {
            log::debug!("Field '{}' has no appearance directive; leaving it inherited", name);
        }

        match field.as_text_field() {
            Some(text_field) => {
                text_field.set_value(value);
                log::debug!("Committed value to field '{}'", name);
                if had_appearance {
                    Ok(SetOutcome::Applied)
                } else {
                    Ok(SetOutcome::SkippedNoAppearance)
                }
            },
            None => {
                log::warn!("Field '{}' does not accept text values; value not written", name);
                Ok(SetOutcome::SkippedNotTextField)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::{FieldType, FormField};

    fn form_with_text_field(name: &str, da: &str) -> AcroForm {
        let mut form = AcroForm::new();
        form.insert_field(name, FormField::text_with_appearance(da));
        form
    }

    #[test]
    fn test_plain_preset_rewrites_in_place() {
        let mut form = form_with_text_field("FirstName", "/TimesNewRoman 14 Tf 1 0 0 rg");
        let mut filler = FormFiller::new(&mut form);

        let outcome = filler.set_value("FirstName", "My first name").unwrap();
        assert_eq!(outcome, SetOutcome::Applied);

        let field = form.field("FirstName").unwrap();
        assert_eq!(field.default_appearance(), Some("/Helv 10 Tf 0 g".to_string()));
        assert_eq!(field.value(), Some("My first name".to_string()));
    }

    #[test]
    fn test_bold_preset() {
        let mut form = form_with_text_field("LastName", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::new(&mut form);

        filler
            .set_value_with_appearance("LastName", "My last name", AppearancePreset::SyntheticBold)
            .unwrap();

        let field = form.field("LastName").unwrap();
        assert_eq!(
            field.default_appearance(),
            Some("/Helv 10 Tf 2 Tr 0.5 w 0 g".to_string())
        );
    }

    #[test]
    fn test_custom_font_preset() {
        let mut form = form_with_text_field("FirstName", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::new(&mut form);

        filler
            .set_value_with_appearance(
                "FirstName",
                "My first name",
                AppearancePreset::CustomFont("F1".to_string()),
            )
            .unwrap();

        let field = form.field("FirstName").unwrap();
        assert_eq!(field.default_appearance(), Some("/F1 10 Tf 0 g".to_string()));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut form = form_with_text_field("FirstName", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::new(&mut form);

        let err = filler.set_value("DoesNotExist", "x").unwrap_err();
        assert!(matches!(err, Error::FieldNotFound(ref name) if name == "DoesNotExist"));

        // No collateral mutation.
        let field = form.field("FirstName").unwrap();
        assert_eq!(field.default_appearance(), Some("/Helv 10 Tf 0 g".to_string()));
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_absent_appearance_is_not_created() {
        let mut form = AcroForm::new();
        form.insert_field("Notes", FormField::new(FieldType::Text));
        let mut filler = FormFiller::new(&mut form);

        let outcome = filler.set_value("Notes", "hello").unwrap();
        assert_eq!(outcome, SetOutcome::SkippedNoAppearance);

        let field = form.field("Notes").unwrap();
        assert!(!field.has_default_appearance());
        assert_eq!(field.value(), Some("hello".to_string()));
    }

    #[test]
    fn test_empty_appearance_counts_as_present() {
        let mut form = form_with_text_field("FirstName", "");
        let mut filler = FormFiller::new(&mut form);

        let outcome = filler.set_value("FirstName", "x").unwrap();
        assert_eq!(outcome, SetOutcome::Applied);
        assert_eq!(
            form.field("FirstName").unwrap().default_appearance(),
            Some("/Helv 10 Tf 0 g".to_string())
        );
    }

    #[test]
    fn test_non_text_field_value_skipped() {
        let mut form = AcroForm::new();
        let checkbox = FormField::new(FieldType::Button);
        checkbox.set_default_appearance("/ZaDb 0 Tf 0 g");
        form.insert_field("Agree", checkbox);
        let mut filler = FormFiller::new(&mut form);

        let outcome = filler.set_value("Agree", "Yes").unwrap();
        assert_eq!(outcome, SetOutcome::SkippedNotTextField);

        let field = form.field("Agree").unwrap();
        // Appearance was still rewritten; the value was not.
        assert_eq!(field.default_appearance(), Some("/Helv 10 Tf 0 g".to_string()));
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_reserved_field_override_wins_over_bold() {
        let mut form = form_with_text_field("Field1", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::new(&mut form);

        filler
            .set_value_with_appearance("Field1", "v", AppearancePreset::SyntheticBold)
            .unwrap();

        assert_eq!(
            form.field("Field1").unwrap().default_appearance(),
            Some("/Helv 12 Tf 0 g".to_string())
        );
    }

    #[test]
    fn test_reserved_override_matches_case_insensitively() {
        // Lookup is case-sensitive, so the field must be registered under
        // the exact name used in the call; only the override table
        // matches loosely.
        let mut form = form_with_text_field("FIELD1", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::new(&mut form);

        filler.set_value("FIELD1", "v").unwrap();
        assert_eq!(
            form.field("FIELD1").unwrap().default_appearance(),
            Some("/Helv 12 Tf 0 g".to_string())
        );
    }

    #[test]
    fn test_injected_empty_overrides_disable_exception() {
        let mut form = form_with_text_field("Field1", "/Helv 10 Tf 0 g");
        let mut filler = FormFiller::with_overrides(&mut form, AppearanceOverrides::empty());

        filler.set_value("Field1", "v").unwrap();
        assert_eq!(
            form.field("Field1").unwrap().default_appearance(),
            Some("/Helv 10 Tf 0 g".to_string())
        );
    }
}
