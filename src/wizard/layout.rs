//! Static form layout: one tab and one panel per generation mode.

use super::form::{Form, FormField};
use super::tabs::{ContentSwitcher, Tab, TabBar};
use crate::model::{Mode, OUTPUT_FORMATS};

fn common_fields() -> Vec<FormField> {
    vec![
        FormField::text("proposal_code", "Proposal code"),
        FormField::text("principal_investigator", "Principal Investigator"),
        FormField::text("target", "Target"),
    ]
}

fn pointing_fields() -> Vec<FormField> {
    vec![
        FormField::text("right_ascension", "Right ascension"),
        FormField::text("declination", "Declination"),
    ]
}

fn position_angle() -> FormField {
    FormField::text("position_angle", "Position angle")
}

/// Builds the panel for `mode`.
pub fn panel(mode: Mode) -> Form {
    let mut fields = common_fields();
    match mode {
        Mode::Hrs | Mode::Imaging | Mode::Slotmode => {
            fields.extend(pointing_fields());
            fields.push(position_angle());
        }
        Mode::Longslit => {
            fields.extend(pointing_fields());
            fields.push(position_angle());
            fields.push(FormField::text("slit_width", "Slit width"));
        }
        Mode::Mos => {
            fields.push(FormField::file("mos_mask_file", "MOS mask file"));
        }
        Mode::Nir => {
            fields.extend(pointing_fields());
            fields.push(FormField::text(
                "science_bundle_right_ascension",
                "Science bundle RA",
            ));
            fields.push(FormField::text(
                "science_bundle_declination",
                "Science bundle Dec",
            ));
            fields.push(FormField::text(
                "nir_bundle_separation",
                "Bundle separation",
            ));
            fields.push(position_angle());
        }
    }
    fields.push(FormField::choice(
        "output_format",
        "Output format",
        OUTPUT_FORMATS,
    ));
    Form::new(fields)
}

/// Builds the tab bar, in [`Mode::all`] order.
pub fn tabs() -> TabBar {
    TabBar::new(
        Mode::all()
            .iter()
            .map(|mode| Tab::new(format!("{}_tab", mode.name()), mode.form_id(), mode.label()))
            .collect(),
    )
}

/// Builds every panel, keyed by panel id.
pub fn panels() -> ContentSwitcher {
    ContentSwitcher::new(Mode::all().iter().map(|mode| (mode.form_id(), panel(*mode))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::{Input, InputKind};

    fn names(form: &Form) -> Vec<&str> {
        form.fields().iter().map(FormField::name).collect()
    }

    #[test]
    fn every_tab_targets_an_existing_panel() {
        let tabs = tabs();
        let panels = panels();
        assert_eq!(tabs.len(), Mode::all().len());
        for tab in tabs.tabs() {
            assert!(panels.panel(tab.target()).is_some(), "{}", tab.target());
        }
    }

    #[test]
    fn every_panel_has_common_fields_and_output_format() {
        for mode in Mode::all() {
            let form = panel(*mode);
            let names = names(&form);
            assert_eq!(&names[..3], ["proposal_code", "principal_investigator", "target"]);
            assert_eq!(names.last(), Some(&"output_format"));
        }
    }

    #[test]
    fn longslit_has_slit_width() {
        assert!(panel(Mode::Longslit).field("slit_width").is_some());
        assert!(panel(Mode::Imaging).field("slit_width").is_none());
    }

    #[test]
    fn mos_mask_is_a_file_input() {
        let form = panel(Mode::Mos);
        let input = form.inputs().find(|i| i.name() == "mos_mask_file").unwrap();
        assert_eq!(input.kind(), InputKind::File);
        assert!(form.field("right_ascension").is_none());
    }

    #[test]
    fn nir_has_bundle_fields() {
        let form = panel(Mode::Nir);
        for name in [
            "science_bundle_right_ascension",
            "science_bundle_declination",
            "nir_bundle_separation",
        ] {
            assert!(form.field(name).is_some(), "{name}");
        }
    }

    #[test]
    fn field_names_are_unique_within_a_panel() {
        for mode in Mode::all() {
            let form = panel(*mode);
            let mut names: Vec<&str> = form.inputs().map(Input::name).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "{mode}");
        }
    }
}
