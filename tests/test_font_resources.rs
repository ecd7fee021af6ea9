//! Integration tests for font resource registration.
//!
//! Covers name allocation against pre-populated tables, bulk
//! registration order, and the interaction between registered fonts and
//! appearance directives.

use acrofill::{
    AcroForm, AppearanceDirective, AppearancePreset, FontProgram, FormField, FormFiller,
    ResourceTable, StandardFont,
};

/// Names stay pairwise distinct even when the document's producer
/// already used the same naming scheme.
#[test]
fn test_uniqueness_against_prepopulated_table() {
    let mut table = ResourceTable::new();
    table.insert("F1", FontProgram::Standard(StandardFont::TimesRoman));
    table.insert("F2", FontProgram::Standard(StandardFont::TimesBold));

    let mut form = AcroForm::new();
    form.set_default_resources(table);

    let a = form.add_default_font(StandardFont::Helvetica.into());
    let b = form.add_default_font(StandardFont::HelveticaBold.into());

    assert_eq!(a, "F3");
    assert_eq!(b, "F4");

    let names = form.default_resources().unwrap().font_names();
    let mut deduped = names.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
}

/// Bulk registration returns names in input order and attaches the table
/// once, mixing standard and embedded programs.
#[test]
fn test_bulk_registration_order() {
    let mut form = AcroForm::new();

    let names = form.add_default_fonts(vec![
        FontProgram::Standard(StandardFont::Helvetica),
        FontProgram::Standard(StandardFont::HelveticaBold),
        FontProgram::Standard(StandardFont::Courier),
    ]);

    assert_eq!(names, vec!["F1", "F2", "F3"]);

    let table = form.default_resources().unwrap();
    assert_eq!(table.get("F1").unwrap().base_name(), "Helvetica");
    assert_eq!(table.get("F2").unwrap().base_name(), "Helvetica-Bold");
    assert_eq!(table.get("F3").unwrap().base_name(), "Courier");
}

/// Registering the same program twice yields two names; the registry
/// deduplicates by name collision only, never by program identity.
#[test]
fn test_same_program_twice_two_names() {
    let mut form = AcroForm::new();
    let program = FontProgram::Standard(StandardFont::Helvetica);

    let first = form.add_default_font(program.clone());
    let second = form.add_default_font(program);

    assert_ne!(first, second);
    assert_eq!(form.default_resources().unwrap().len(), 2);
}

/// Every font name referenced by a rewritten directive resolves through
/// the form's default resources.
#[test]
fn test_directive_font_resolves_through_resources() {
    let mut form = AcroForm::new();
    form.insert_field("Name", FormField::text_with_appearance("/Helv 10 Tf 0 g"));

    let font_name = form.add_default_font(StandardFont::TimesRoman.into());

    let mut filler = FormFiller::new(&mut form);
    filler
        .set_value_with_appearance("Name", "value", AppearancePreset::CustomFont(font_name))
        .unwrap();

    let da = form.field("Name").unwrap().default_appearance().unwrap();
    let directive = AppearanceDirective::parse(&da).unwrap();

    let resources = form.default_resources().unwrap();
    assert!(resources.contains(&directive.font_name));
    assert_eq!(
        resources.get(&directive.font_name).unwrap().base_name(),
        "Times-Roman"
    );
}
