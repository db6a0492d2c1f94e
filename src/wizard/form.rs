//! Form model: field containers, their inputs and inline error messages.

/// The kind of control an [`Input`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text entry.
    Text,
    /// A path to a file that is uploaded on submit.
    File,
    /// One value out of a fixed list.
    Choice(&'static [&'static str]),
}

impl InputKind {
    /// Returns `true` for plain text inputs, the only kind the form cache restores.
    pub fn is_text(&self) -> bool {
        matches!(self, InputKind::Text)
    }
}

/// A named input control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    name: String,
    kind: InputKind,
    value: String,
    invalid: bool,
}

impl Input {
    /// Creates an input. Choice inputs start on their first option.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        let value = match kind {
            InputKind::Choice(options) => options.first().copied().unwrap_or_default().to_string(),
            InputKind::Text | InputKind::File => String::new(),
        };
        Self {
            name: name.into(),
            kind,
            value,
            invalid: false,
        }
    }

    /// The name the value is submitted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value.
    ///
    /// Choice inputs ignore values outside their option list.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if let InputKind::Choice(options) = self.kind
            && !options.contains(&value.as_str())
        {
            return;
        }
        self.value = value;
    }

    /// Returns `true` if the input is styled as invalid.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub(crate) fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    /// Appends a character. Choice inputs are not editable.
    pub fn insert_char(&mut self, ch: char) {
        if !matches!(self.kind, InputKind::Choice(_)) {
            self.value.push(ch);
        }
    }

    /// Deletes the last character. Choice inputs are not editable.
    pub fn delete_char(&mut self) {
        if !matches!(self.kind, InputKind::Choice(_)) {
            self.value.pop();
        }
    }

    /// Moves a choice input to the next or previous option, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) {
        let InputKind::Choice(options) = self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let current = options.iter().position(|o| *o == self.value).unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.value = options[next].to_string();
    }
}

/// A field container: a label, at most one input and at most one error message.
///
/// `name` is the key server-side validation errors are reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    label: String,
    input: Option<Input>,
    message: Option<String>,
}

impl FormField {
    /// Creates a container whose input is named like the container itself.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: InputKind) -> Self {
        let name = name.into();
        Self {
            input: Some(Input::new(name.clone(), kind)),
            name,
            label: label.into(),
            message: Some(String::new()),
        }
    }

    /// Creates a text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, InputKind::Text)
    }

    /// Creates a file field.
    pub fn file(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, InputKind::File)
    }

    /// Creates a choice field.
    pub fn choice(
        name: impl Into<String>,
        label: impl Into<String>,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, InputKind::Choice(options))
    }

    /// Removes the input control from this container.
    pub fn without_input(mut self) -> Self {
        self.input = None;
        self
    }

    /// Removes the error message element from this container.
    pub fn without_message(mut self) -> Self {
        self.message = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut Input> {
        self.input.as_mut()
    }

    /// Returns the displayed error message, if one is set and non-blank.
    pub fn error(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Returns `true` if the input is marked invalid.
    pub fn is_invalid(&self) -> bool {
        self.input.as_ref().is_some_and(Input::is_invalid)
    }

    /// Marks the input invalid and shows `message`, for whichever of the two exist.
    pub fn show_error(&mut self, message: &str) {
        if let Some(input) = self.input.as_mut() {
            input.set_invalid(true);
        }
        if let Some(slot) = self.message.as_mut() {
            message.clone_into(slot);
        }
    }

    /// Removes invalid styling and blanks the error message.
    pub fn clear_error(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.set_invalid(false);
        }
        if let Some(slot) = self.message.as_mut() {
            slot.clear();
        }
    }
}

/// An ordered group of field containers, e.g. one tab's panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    /// Returns the first container whose name is `name`.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Returns the value of the input named `name`, or an empty string if there is none.
    pub fn value(&self, name: &str) -> &str {
        self.inputs()
            .find(|i| i.name() == name)
            .map(Input::value)
            .unwrap_or("")
    }

    /// Sets the value of the input named `name`. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(input) = self.inputs_mut().find(|i| i.name() == name) {
            input.set_value(value);
        }
    }

    /// Iterates the inputs of all containers.
    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.fields.iter().filter_map(FormField::input)
    }

    pub fn inputs_mut(&mut self) -> impl Iterator<Item = &mut Input> {
        self.fields.iter_mut().filter_map(FormField::input_mut)
    }

    /// Returns `true` if any container shows an error.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error().is_some() || f.is_invalid())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FORMATS: &[&str] = &["pdf", "png"];

    fn make_form() -> Form {
        Form::new(vec![
            FormField::text("target", "Target"),
            FormField::file("mos_mask_file", "MOS mask"),
            FormField::choice("output_format", "Output format", FORMATS),
        ])
    }

    mod input {
        use super::*;

        #[test]
        fn text_starts_empty() {
            let input = Input::new("target", InputKind::Text);
            assert_eq!(input.value(), "");
            assert!(!input.is_invalid());
        }

        #[test]
        fn choice_starts_on_first_option() {
            let input = Input::new("output_format", InputKind::Choice(FORMATS));
            assert_eq!(input.value(), "pdf");
        }

        #[test]
        fn insert_and_delete_edit_text() {
            let mut input = Input::new("target", InputKind::Text);
            input.insert_char('M');
            input.insert_char('3');
            input.insert_char('1');
            input.delete_char();
            assert_eq!(input.value(), "M3");
        }

        #[test]
        fn file_input_is_editable_as_a_path() {
            let mut input = Input::new("custom_fits", InputKind::File);
            for ch in "/tmp/a.fits".chars() {
                input.insert_char(ch);
            }
            assert_eq!(input.value(), "/tmp/a.fits");
        }

        #[test]
        fn choice_ignores_typing() {
            let mut input = Input::new("output_format", InputKind::Choice(FORMATS));
            input.insert_char('x');
            input.delete_char();
            assert_eq!(input.value(), "pdf");
        }

        #[test]
        fn cycle_choice_wraps_both_ways() {
            let mut input = Input::new("output_format", InputKind::Choice(FORMATS));
            input.cycle_choice(true);
            assert_eq!(input.value(), "png");
            input.cycle_choice(true);
            assert_eq!(input.value(), "pdf");
            input.cycle_choice(false);
            assert_eq!(input.value(), "png");
        }

        #[test]
        fn cycle_choice_on_text_is_noop() {
            let mut input = Input::new("target", InputKind::Text);
            input.cycle_choice(true);
            assert_eq!(input.value(), "");
        }

        #[test]
        fn choice_rejects_unknown_value() {
            let mut input = Input::new("output_format", InputKind::Choice(FORMATS));
            input.set_value("gif");
            assert_eq!(input.value(), "pdf");
            input.set_value("png");
            assert_eq!(input.value(), "png");
        }

        #[test]
        fn only_text_kind_is_text() {
            assert!(InputKind::Text.is_text());
            assert!(!InputKind::File.is_text());
            assert!(!InputKind::Choice(FORMATS).is_text());
        }
    }

    mod field_errors {
        use super::*;

        #[test]
        fn show_error_marks_input_and_sets_message() {
            let mut field = FormField::text("target", "Target");
            field.show_error("Required");
            assert!(field.is_invalid());
            assert_eq!(field.error(), Some("Required"));
        }

        #[test]
        fn clear_error_resets_both() {
            let mut field = FormField::text("target", "Target");
            field.show_error("Required");
            field.clear_error();
            assert!(!field.is_invalid());
            assert_eq!(field.error(), None);
        }

        #[test]
        fn container_without_message_still_marks_input() {
            let mut field = FormField::text("target", "Target").without_message();
            field.show_error("Required");
            assert!(field.is_invalid());
            assert_eq!(field.error(), None);
        }

        #[test]
        fn container_without_input_still_shows_message() {
            let mut field = FormField::text("notes", "Notes").without_input();
            field.show_error("Too long");
            assert!(!field.is_invalid());
            assert_eq!(field.error(), Some("Too long"));
            field.clear_error();
            assert_eq!(field.error(), None);
        }
    }

    mod form {
        use super::*;

        #[test]
        fn value_by_name() {
            let mut form = make_form();
            form.set_value("target", "NGC 104");
            assert_eq!(form.value("target"), "NGC 104");
            assert_eq!(form.value("output_format"), "pdf");
        }

        #[test]
        fn value_of_unknown_name_is_empty() {
            let form = make_form();
            assert_eq!(form.value("nope"), "");
        }

        #[test]
        fn set_value_of_unknown_name_is_ignored() {
            let mut form = make_form();
            form.set_value("nope", "x");
            assert_eq!(form, make_form());
        }

        #[test]
        fn has_errors_tracks_containers() {
            let mut form = make_form();
            assert!(!form.has_errors());
            form.field_mut("target").unwrap().show_error("Required");
            assert!(form.has_errors());
            form.field_mut("target").unwrap().clear_error();
            assert!(!form.has_errors());
        }

        #[test]
        fn inputs_follow_container_order() {
            let form = make_form();
            let names: Vec<&str> = form.inputs().map(Input::name).collect();
            assert_eq!(names, vec!["target", "mos_mask_file", "output_format"]);
        }

        #[test]
        fn len_and_labels() {
            let form = make_form();
            assert_eq!(form.len(), 3);
            assert!(!form.is_empty());
            assert_eq!(form.field("mos_mask_file").unwrap().label(), "MOS mask");
            assert!(Form::default().is_empty());
        }
    }
}
