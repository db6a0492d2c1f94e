use std::fmt;

/// Sky surveys offered by the image survey option.
pub static IMAGE_SURVEYS: &[&str] = &[
    "POSS2/UKSTU Red",
    "POSS2/UKSTU Blue",
    "POSS2/UKSTU IR",
    "POSS1 Red",
    "POSS1 Blue",
    "2MASS-J",
    "2MASS-H",
    "2MASS-K",
];

/// File formats the server can generate.
pub static OUTPUT_FORMATS: &[&str] = &["pdf", "png"];

/// Source of the FITS image underlying the finder chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FitsOption {
    /// Look the image up in a sky survey.
    #[default]
    ImageSurvey,
    /// Upload a custom FITS file.
    CustomFits,
}

static ALL_FITS_OPTIONS: &[FitsOption] = &[FitsOption::ImageSurvey, FitsOption::CustomFits];

impl FitsOption {
    /// Returns all options in radio-button order.
    pub fn all() -> &'static [FitsOption] {
        ALL_FITS_OPTIONS
    }

    /// Id of the element holding this option's sub-form.
    pub fn element_id(&self) -> &'static str {
        match self {
            FitsOption::ImageSurvey => "image_survey_element",
            FitsOption::CustomFits => "custom_fits_element",
        }
    }

    /// Looks an option up by element id. Unknown ids yield `None`.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|o| o.element_id() == id)
    }

    /// Radio-button label.
    pub fn label(&self) -> &'static str {
        match self {
            FitsOption::ImageSurvey => "Image survey",
            FitsOption::CustomFits => "Custom FITS file",
        }
    }

    /// Position within [`FitsOption::all`].
    pub(crate) fn index(&self) -> usize {
        match self {
            FitsOption::ImageSurvey => 0,
            FitsOption::CustomFits => 1,
        }
    }
}

#[mutants::skip]
impl fmt::Display for FitsOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_round_trip() {
        for option in FitsOption::all() {
            assert_eq!(FitsOption::from_element_id(option.element_id()), Some(*option));
        }
    }

    #[test]
    fn unknown_element_id_is_none() {
        assert_eq!(FitsOption::from_element_id("dss_element"), None);
        assert_eq!(FitsOption::from_element_id(""), None);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, option) in FitsOption::all().iter().enumerate() {
            assert_eq!(option.index(), i);
        }
    }

    #[test]
    fn default_is_image_survey() {
        assert_eq!(FitsOption::default(), FitsOption::ImageSurvey);
    }
}
