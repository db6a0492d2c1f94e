use std::fmt;

/// Suffix appended to a mode name to form its panel id (`imaging` → `imaging_form`).
pub const FORM_ID_SUFFIX: &str = "_form";

/// Finder chart generation mode, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Hrs,
    Imaging,
    Longslit,
    Mos,
    Nir,
    Slotmode,
}

static ALL_MODES: &[Mode] = &[
    Mode::Hrs,
    Mode::Imaging,
    Mode::Longslit,
    Mode::Mos,
    Mode::Nir,
    Mode::Slotmode,
];

impl Mode {
    /// Returns all modes in tab order.
    pub fn all() -> &'static [Mode] {
        ALL_MODES
    }

    /// Returns the lowercase name sent as the `mode` query parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Hrs => "hrs",
            Mode::Imaging => "imaging",
            Mode::Longslit => "longslit",
            Mode::Mos => "mos",
            Mode::Nir => "nir",
            Mode::Slotmode => "slotmode",
        }
    }

    /// Returns the id of the content panel holding this mode's form.
    pub fn form_id(&self) -> String {
        format!("{}{FORM_ID_SUFFIX}", self.name())
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Hrs => "HRS",
            Mode::Imaging => "Imaging",
            Mode::Longslit => "Longslit",
            Mode::Mos => "MOS",
            Mode::Nir => "NIR",
            Mode::Slotmode => "Slotmode",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives the mode name from a tab's target panel id.
///
/// Everything from the first occurrence of [`FORM_ID_SUFFIX`] onward is
/// dropped; a target without the suffix is returned unchanged.
pub fn mode_from_target(target: &str) -> &str {
    target
        .split_once(FORM_ID_SUFFIX)
        .map_or(target, |(mode, _)| mode)
}
