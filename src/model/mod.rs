mod errors;
mod fits;
mod mode;

pub use errors::{ErrorMap, GENERAL_ERROR_KEY, GENERAL_ERROR_MESSAGE};
pub use fits::{FitsOption, IMAGE_SURVEYS, OUTPUT_FORMATS};
pub use mode::{FORM_ID_SUFFIX, Mode, mode_from_target};
