//! Error presenter: projects an [`ErrorMap`] onto field containers and the general error slot.

use tracing::debug;

use super::form::FormField;
use crate::model::{ErrorMap, GENERAL_ERROR_KEY};

/// The shared slot for errors not attributable to a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneralErrorSlot {
    text: String,
    visible: bool,
}

impl GeneralErrorSlot {
    /// Returns the message when the slot is visible.
    pub fn message(&self) -> Option<&str> {
        self.visible.then_some(self.text.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self, message: &str) {
        message.clone_into(&mut self.text);
        self.visible = true;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.visible = false;
    }
}

/// Anything errors can be presented on: the live field containers plus a general slot.
pub trait ErrorSurface {
    /// Every field container currently attached to the live form.
    fn field_containers(&mut self) -> Vec<&mut FormField>;

    fn general_slot(&mut self) -> &mut GeneralErrorSlot;
}

/// Removes all error presentation from `surface`.
pub fn clear(surface: &mut impl ErrorSurface) {
    for field in surface.field_containers() {
        field.clear_error();
    }
    surface.general_slot().clear();
}

/// Presents each entry of `errors` on `surface`.
///
/// Keys without a matching container are dropped.
pub fn apply(surface: &mut impl ErrorSurface, errors: &ErrorMap) {
    for (key, message) in errors.iter() {
        if key == GENERAL_ERROR_KEY {
            surface.general_slot().show(message);
            continue;
        }
        match surface
            .field_containers()
            .into_iter()
            .find(|f| f.name() == key)
        {
            Some(field) => field.show_error(message),
            None => debug!(key, "no field container for error key"),
        }
    }
}

/// Clears and then applies `errors`, so the surface mirrors the map exactly.
pub fn render(surface: &mut impl ErrorSurface, errors: &ErrorMap) {
    clear(surface);
    apply(surface, errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::form::Form;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Page {
        form: Form,
        general: GeneralErrorSlot,
    }

    impl ErrorSurface for Page {
        fn field_containers(&mut self) -> Vec<&mut FormField> {
            self.form.fields_mut().iter_mut().collect()
        }

        fn general_slot(&mut self) -> &mut GeneralErrorSlot {
            &mut self.general
        }
    }

    fn make_page() -> Page {
        Page {
            form: Form::new(vec![
                FormField::text("proposal_code", "Proposal code"),
                FormField::text("target", "Target"),
                FormField::text("declination", "Declination"),
            ]),
            general: GeneralErrorSlot::default(),
        }
    }

    fn invalid_names(page: &Page) -> Vec<&str> {
        page.form
            .fields()
            .iter()
            .filter(|f| f.is_invalid())
            .map(FormField::name)
            .collect()
    }

    #[test]
    fn field_error_marks_only_that_field() {
        let mut page = make_page();
        render(&mut page, &ErrorMap::from_iter([("target", "Required")]));
        assert_eq!(invalid_names(&page), vec!["target"]);
        assert_eq!(page.form.field("target").unwrap().error(), Some("Required"));
        assert_eq!(page.form.field("proposal_code").unwrap().error(), None);
        assert_eq!(page.general.message(), None);
    }

    #[test]
    fn general_key_goes_to_general_slot() {
        let mut page = make_page();
        render(&mut page, &ErrorMap::general_failure());
        assert_eq!(page.general.message(), Some("Oops. Something has gone wrong."));
        assert!(invalid_names(&page).is_empty());
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let mut page = make_page();
        render(
            &mut page,
            &ErrorMap::from_iter([("mos_mask_file", "Missing"), ("target", "Required")]),
        );
        assert_eq!(invalid_names(&page), vec!["target"]);
        assert!(!page.general.is_visible());
    }

    #[test]
    fn empty_map_clears_previous_errors() {
        let mut page = make_page();
        render(
            &mut page,
            &ErrorMap::from_iter([("target", "Required"), (GENERAL_ERROR_KEY, "Bad")]),
        );
        render(&mut page, &ErrorMap::new());
        assert!(invalid_names(&page).is_empty());
        assert!(!page.form.has_errors());
        assert!(!page.general.is_visible());
    }

    #[test]
    fn render_replaces_rather_than_merges() {
        let mut page = make_page();
        render(&mut page, &ErrorMap::from_iter([("target", "Required")]));
        render(&mut page, &ErrorMap::from_iter([("declination", "Out of range")]));
        assert_eq!(invalid_names(&page), vec!["declination"]);
    }

    #[test]
    fn render_is_idempotent() {
        let errors = ErrorMap::from_iter([("target", "Required"), (GENERAL_ERROR_KEY, "Bad")]);
        let mut once = make_page();
        render(&mut once, &errors);
        let mut twice = make_page();
        render(&mut twice, &errors);
        render(&mut twice, &errors);
        assert_eq!(once, twice);
    }

    #[test]
    fn clear_blanks_general_slot() {
        let mut page = make_page();
        apply(&mut page, &ErrorMap::general_failure());
        clear(&mut page);
        assert_eq!(page.general, GeneralErrorSlot::default());
    }
}
