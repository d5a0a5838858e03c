use crate::{Date, DayModel, Period, RangeSelectionModel, SelectionState, Signal, Subscription};

/// Two adjacent displayed months over a [`RangeSelectionModel`].
///
/// Every mutation publishes one change notification; subscribers re-read
/// whatever state they render.
#[derive(Debug)]
pub struct CalendarViewModel {
    model:         RangeSelectionModel,
    current_month: Date,
    changed:       Signal<()>,
}

impl CalendarViewModel {
    /// `current_month` may be any day of the anchor month.
    pub fn new(model: RangeSelectionModel, current_month: Date) -> Self {
        tracing::debug!(%current_month, "calendar view model created");
        Self {
            model,
            current_month,
            changed: Signal::new(),
        }
    }

    /// Subscribes to change notifications.
    pub fn changed<F>(&self, mut handler: F) -> Subscription
    where
        F: FnMut() + 'static,
    {
        self.changed.subscribe(move |()| handler())
    }

    /// Subscribes to completed selections on the owned model.
    pub fn on_period_changed<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Period) + 'static,
    {
        self.model.on_period_changed(handler)
    }

    pub const fn model(&self) -> &RangeSelectionModel {
        &self.model
    }

    pub const fn current_month(&self) -> Date {
        self.current_month
    }

    pub fn set_current_month(&mut self, month: Date) {
        tracing::debug!(from = %self.current_month, to = %month, "current month changed");
        self.current_month = month;
        self.notify();
    }

    /// The month after the current one. 9999-12 has no successor and maps to itself.
    pub fn next_month(&self) -> Date {
        self.current_month.succ_month().unwrap_or(self.current_month)
    }

    /// The month before the current one. 0001-01 maps to itself.
    pub fn previous_month(&self) -> Date {
        self.current_month.pred_month().unwrap_or(self.current_month)
    }

    pub fn next(&mut self) {
        if self.current_month.succ_month().is_none() {
            tracing::warn!(current = %self.current_month, "no month after the calendar limit");
        }
        self.set_current_month(self.next_month());
    }

    pub fn previous(&mut self) {
        if self.current_month.pred_month().is_none() {
            tracing::warn!(current = %self.current_month, "no month before the calendar limit");
        }
        self.set_current_month(self.previous_month());
    }

    /// Forwards a day tap to the selection model, then notifies once.
    pub fn on_date_changed(&mut self, date: Date) -> SelectionState {
        let state = self.model.on_date_changed(date);
        self.notify();
        state
    }

    /// Replaces both selectable bounds, then notifies once.
    pub fn set_bounds(&mut self, min_date: Option<Date>, max_date: Option<Date>) {
        self.model.set_min_date(min_date);
        self.model.set_max_date(max_date);
        self.notify();
    }

    pub fn retrieve_dates_for_month(&self) -> Vec<DayModel> {
        self.model.retrieve_dates_for_month(self.current_month)
    }

    pub fn retrieve_dates_for_next_month(&self) -> Vec<DayModel> {
        self.model.retrieve_dates_for_month(self.next_month())
    }

    pub fn retrieve_delta_for_month(&self) -> u8 {
        self.model.retrieve_delta_for_month(self.current_month)
    }

    pub fn retrieve_delta_for_next_month(&self) -> u8 {
        self.model.retrieve_delta_for_month(self.next_month())
    }

    /// Releases every change subscriber. Dropping the view model does the same.
    pub fn dispose(self) {
        drop(self);
    }

    fn notify(&self) {
        self.changed.emit(&());
    }
}

impl Drop for CalendarViewModel {
    fn drop(&mut self) {
        self.changed.dispose();
    }
}
