//! The finder chart form controller.
//!
//! [`Wizard`] owns every piece of transient form state: the tab bar, all
//! content panels, the FITS source selector, the cross-tab value cache, the
//! current error map and the loading indicator. The TUI drives it through
//! tab and FITS selection, field edits and the two halves of a submission
//! ([`Wizard::begin_submission`] / [`Wizard::finish_submission`]).

pub mod cache;
pub mod fits;
pub mod form;
pub mod layout;
pub mod presenter;
pub mod submission;
pub mod tabs;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::client::{ChartRequest, FormPayload};
use crate::model::{ErrorMap, FitsOption, mode_from_target};

use self::cache::FormCache;
use self::fits::FitsSelector;
use self::form::{Form, FormField, Input, InputKind};
use self::presenter::{ErrorSurface, GeneralErrorSlot};
use self::submission::{
    Completion, LoadingIndicator, Resolution, SubmissionPhase, SubmissionTicket, interpret,
};
use self::tabs::{ContentSwitcher, Tab, TabBar};

/// The forms attached to the live form: the shown panel, then the mounted FITS option.
fn live_forms<'a>(
    content: &'a ContentSwitcher,
    fits: &'a FitsSelector,
) -> impl Iterator<Item = &'a Form> {
    content.shown().into_iter().chain(std::iter::once(fits.view()))
}

fn live_forms_mut<'a>(
    content: &'a mut ContentSwitcher,
    fits: &'a mut FitsSelector,
) -> impl Iterator<Item = &'a mut Form> {
    content
        .shown_mut()
        .into_iter()
        .chain(std::iter::once(fits.view_mut()))
}

/// Tab/form state controller for the finder chart request form.
#[derive(Debug, Clone)]
pub struct Wizard {
    tabs: TabBar,
    content: ContentSwitcher,
    fits: FitsSelector,
    cache: FormCache,
    errors: ErrorMap,
    general_error: GeneralErrorSlot,
    loading: LoadingIndicator,
    last_resolution: Option<(Resolution, DateTime<Utc>)>,
    next_ticket: u64,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Creates a wizard with one tab per mode.
    pub fn new() -> Self {
        Self::with_layout(layout::tabs(), layout::panels())
    }

    /// Creates a wizard over the given tabs and panels.
    ///
    /// The first tab is selected and the image survey option mounted.
    pub fn with_layout(tabs: TabBar, content: ContentSwitcher) -> Self {
        let mut wizard = Self {
            tabs,
            content,
            fits: FitsSelector::new(),
            cache: FormCache::new(),
            errors: ErrorMap::new(),
            general_error: GeneralErrorSlot::default(),
            loading: LoadingIndicator::default(),
            last_resolution: None,
            next_ticket: 0,
        };
        wizard.select_tab(0);
        wizard.select_fits_option(FitsOption::ImageSurvey);
        wizard
    }

    // --- Tabs ---

    /// Makes the tab at `index` active and shows its panel.
    ///
    /// Live values are captured into the cache before the switch and cached
    /// text values are written into the newly shown inputs after it. Returns
    /// `false` without changing anything if `index` is out of range.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() {
            debug!(index, "ignoring selection of unknown tab");
            return false;
        }

        self.cache.capture(
            live_forms(&self.content, &self.fits)
                .flat_map(Form::inputs)
                .map(|i| (i.name(), i.value())),
        );

        let Some(target) = self.tabs.select(index).map(|t| t.target().to_string()) else {
            return false;
        };
        if !self.content.show(&target) {
            debug!(panel = %target, "tab targets an unknown panel");
        }

        let restored = self.cache.restore(
            live_forms_mut(&mut self.content, &mut self.fits).flat_map(Form::inputs_mut),
        );
        debug!(index, panel = %target, restored, "selected tab");
        true
    }

    /// Selects the tab after the active one, wrapping around.
    pub fn next_tab(&mut self) {
        if let Some(index) = self.tabs.next_index() {
            self.select_tab(index);
        }
    }

    /// Selects the tab before the active one, wrapping around.
    pub fn prev_tab(&mut self) {
        if let Some(index) = self.tabs.prev_index() {
            self.select_tab(index);
        }
    }

    pub fn tabs(&self) -> &TabBar {
        &self.tabs
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.active()
    }

    /// The mode name derived from the active tab's target.
    pub fn mode(&self) -> Option<&str> {
        self.active_tab().map(|t| mode_from_target(t.target()))
    }

    /// The shown panel.
    pub fn panel(&self) -> Option<&Form> {
        self.content.shown()
    }

    // --- FITS source ---

    /// Mounts `option` in the FITS option container.
    pub fn select_fits_option(&mut self, option: FitsOption) {
        self.fits.select(option);
    }

    /// Mounts the FITS option with element id `id`; unknown ids are ignored.
    pub fn select_fits_option_by_id(&mut self, id: &str) -> bool {
        self.fits.select_by_id(id)
    }

    pub fn fits(&self) -> &FitsSelector {
        &self.fits
    }

    // --- Live form ---

    /// Every field container in the live form, in display order.
    pub fn live_fields(&self) -> impl Iterator<Item = &FormField> {
        live_forms(&self.content, &self.fits).flat_map(Form::fields)
    }

    pub fn live_field_count(&self) -> usize {
        self.live_fields().count()
    }

    /// The live field container at `index`.
    pub fn live_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        live_forms_mut(&mut self.content, &mut self.fits)
            .flat_map(Form::fields_mut)
            .nth(index)
    }

    /// The value of the live input named `name`, if there is one.
    pub fn live_value(&self, name: &str) -> Option<&str> {
        live_forms(&self.content, &self.fits)
            .flat_map(Form::inputs)
            .find(|i| i.name() == name)
            .map(Input::value)
    }

    /// Serializes the live form.
    pub fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();
        for input in live_forms(&self.content, &self.fits).flat_map(Form::inputs) {
            match input.kind() {
                InputKind::File => payload.push_file(input.name(), input.value()),
                InputKind::Text | InputKind::Choice(_) => {
                    payload.push_text(input.name(), input.value())
                }
            }
        }
        payload
    }

    pub fn cache(&self) -> &FormCache {
        &self.cache
    }

    // --- Submission ---

    /// Moves to [`SubmissionPhase::Submitting`] and builds the request for the active mode.
    ///
    /// The returned ticket reports back on `tx`; the loading indicator stays
    /// active until its [`Completion`] is passed to
    /// [`finish_submission`](Self::finish_submission). Returns `None` when no
    /// tab is active.
    pub fn begin_submission(
        &mut self,
        tx: UnboundedSender<Completion>,
    ) -> Option<(ChartRequest, SubmissionTicket)> {
        let mode = self.mode()?.to_string();
        let request = ChartRequest {
            mode,
            payload: self.payload(),
        };
        self.next_ticket += 1;
        let ticket = SubmissionTicket::new(self.next_ticket, tx);
        self.loading.start();
        info!(id = ticket.id(), mode = %request.mode, fields = request.payload.len(), "submitting finder chart request");
        Some((request, ticket))
    }

    /// Applies a finished submission: replaces the error map, re-renders the
    /// errors and releases the loading indicator.
    pub fn finish_submission(&mut self, completion: Completion) -> Resolution {
        let (resolution, errors) = interpret(&completion.outcome);
        self.errors = errors;
        let errors = self.errors.clone();
        presenter::render(self, &errors);
        self.loading.finish();
        self.last_resolution = Some((resolution, Utc::now()));
        info!(id = completion.id, ?resolution, errors = self.errors.len(), "submission finished");
        resolution
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.loading.is_active() {
            SubmissionPhase::Submitting
        } else {
            SubmissionPhase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_active()
    }

    /// The most recent resolution and when it happened.
    pub fn last_resolution(&self) -> Option<(Resolution, DateTime<Utc>)> {
        self.last_resolution
    }

    /// The current error map.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// The visible general error message, if any.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.message()
    }
}

impl ErrorSurface for Wizard {
    fn field_containers(&mut self) -> Vec<&mut FormField> {
        live_forms_mut(&mut self.content, &mut self.fits)
            .flat_map(Form::fields_mut)
            .collect()
    }

    fn general_slot(&mut self) -> &mut GeneralErrorSlot {
        &mut self.general_error
    }
}
