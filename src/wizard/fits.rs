//! FITS source selector: exactly one of the FITS option sub-forms is mounted.

use tracing::debug;

use super::form::{Form, FormField};
use crate::model::{FitsOption, IMAGE_SURVEYS};

/// Keeps one sub-form per [`FitsOption`] and tracks which one is mounted.
///
/// Unmounted sub-forms retain whatever was entered into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitsSelector {
    views: [Form; 2],
    mounted: FitsOption,
}

impl Default for FitsSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl FitsSelector {
    /// Builds both option sub-forms with the survey lookup mounted.
    pub fn new() -> Self {
        Self {
            views: [
                Form::new(vec![FormField::choice(
                    "image_survey",
                    "Image survey",
                    IMAGE_SURVEYS,
                )]),
                Form::new(vec![FormField::file("custom_fits", "FITS file")]),
            ],
            mounted: FitsOption::default(),
        }
    }

    /// Mounts `option`, detaching the previously mounted sub-form.
    pub fn select(&mut self, option: FitsOption) {
        debug!(from = %self.mounted, to = %option, "switching FITS option");
        self.mounted = option;
    }

    /// Mounts the option whose element id is `id`.
    ///
    /// Returns `false` and keeps the current option when `id` is unknown.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match FitsOption::from_element_id(id) {
            Some(option) => {
                self.select(option);
                true
            }
            None => {
                debug!(id, "ignoring unknown FITS option id");
                false
            }
        }
    }

    pub fn mounted(&self) -> FitsOption {
        self.mounted
    }

    /// The mounted sub-form.
    pub fn view(&self) -> &Form {
        &self.views[self.mounted.index()]
    }

    pub fn view_mut(&mut self) -> &mut Form {
        &mut self.views[self.mounted.index()]
    }

    /// The sub-form for `option`, mounted or not.
    pub fn view_for(&self, option: FitsOption) -> &Form {
        &self.views[option.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_is_mounted_initially() {
        let selector = FitsSelector::new();
        assert_eq!(selector.mounted(), FitsOption::ImageSurvey);
        assert!(selector.view().field("image_survey").is_some());
    }

    #[test]
    fn exactly_one_view_is_mounted() {
        let mut selector = FitsSelector::new();
        selector.select(FitsOption::CustomFits);
        assert!(selector.view().field("custom_fits").is_some());
        assert!(selector.view().field("image_survey").is_none());
    }

    #[test]
    fn detached_view_keeps_its_state() {
        let mut selector = FitsSelector::new();
        selector.view_mut().set_value("image_survey", "2MASS-K");
        selector.select(FitsOption::CustomFits);
        selector.view_mut().set_value("custom_fits", "/data/field.fits");
        selector.select(FitsOption::ImageSurvey);
        assert_eq!(selector.view().value("image_survey"), "2MASS-K");
        assert_eq!(
            selector.view_for(FitsOption::CustomFits).value("custom_fits"),
            "/data/field.fits"
        );
    }

    #[test]
    fn select_by_id_mounts_known_option() {
        let mut selector = FitsSelector::new();
        assert!(selector.select_by_id("custom_fits_element"));
        assert_eq!(selector.mounted(), FitsOption::CustomFits);
    }

    #[test]
    fn select_by_unknown_id_is_noop() {
        let mut selector = FitsSelector::new();
        selector.select(FitsOption::CustomFits);
        let before = selector.clone();
        assert!(!selector.select_by_id("dss_element"));
        assert_eq!(selector, before);
    }

    #[test]
    fn reselecting_mounted_option_keeps_state() {
        let mut selector = FitsSelector::new();
        selector.view_mut().set_value("image_survey", "POSS1 Red");
        selector.select(FitsOption::ImageSurvey);
        assert_eq!(selector.view().value("image_survey"), "POSS1 Red");
    }
}
