//! Range selection driven by day taps.
//!
//! The selection cycles through three states:
//!
//! ```text
//! Empty --tap--> StartOnly --tap on/after start--> Complete --tap--> StartOnly ...
//!                    ^   |
//!                    +---+ tap before start moves the start back
//! ```
//!
//! Every entry into `Complete` publishes the new [`Period`] to the
//! period-changed listeners exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Clock, Date, DayModel, Period, Signal, Subscription, SystemClock};

/// Initial selection and bounds for a [`RangeSelectionModel`].
///
/// `period` takes precedence over `start_date`/`end_date`. All bounds are
/// inclusive. `min_date > max_date` is accepted and leaves no day selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    pub period:     Option<Period>,
    pub min_date:   Option<Date>,
    pub max_date:   Option<Date>,
    pub start_date: Option<Date>,
    pub end_date:   Option<Date>,
}

impl SelectionConfig {
    pub const fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub const fn with_bounds(mut self, min_date: Option<Date>, max_date: Option<Date>) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    pub const fn with_start(mut self, start_date: Date) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub const fn with_end(mut self, end_date: Date) -> Self {
        self.end_date = Some(end_date);
        self
    }

    fn initial_state(&self) -> Result<SelectionState, SelectionError> {
        if let Some(period) = self.period {
            return Ok(SelectionState::Complete(period));
        }
        match (self.start_date, self.end_date) {
            (None, None) => Ok(SelectionState::Empty),
            (Some(start), None) => Ok(SelectionState::StartOnly(start)),
            (None, Some(end)) => Err(SelectionError::EndWithoutStart { end }),
            (Some(start), Some(end)) => Period::new(start, end)
                .map(SelectionState::Complete)
                .map_err(|_| SelectionError::InvertedRange { start, end }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("end date {end} supplied without a start date")]
    EndWithoutStart { end: Date },

    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: Date, end: Date },
}

/// Where the selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SelectionState {
    Empty,
    /// A start day has been picked; the next tap on or after it completes the range.
    StartOnly(Date),
    Complete(Period),
}

impl SelectionState {
    pub const fn start(&self) -> Option<Date> {
        match self {
            Self::Empty => None,
            Self::StartOnly(start) => Some(*start),
            Self::Complete(period) => Some(period.start()),
        }
    }

    pub const fn end(&self) -> Option<Date> {
        match self {
            Self::Complete(period) => Some(period.end()),
            Self::Empty | Self::StartOnly(_) => None,
        }
    }

    pub const fn period(&self) -> Option<Period> {
        match self {
            Self::Complete(period) => Some(*period),
            Self::Empty | Self::StartOnly(_) => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Owns the selected range and the selectable bounds.
pub struct RangeSelectionModel {
    min_date:       Option<Date>,
    max_date:       Option<Date>,
    state:          SelectionState,
    period_changed: Signal<Period>,
    clock:          Box<dyn Clock>,
}

impl RangeSelectionModel {
    /// Builds a model that reads "today" from the local system clock.
    ///
    /// # Errors
    /// Returns `SelectionError` when the configured start/end pair is inconsistent.
    pub fn new(config: SelectionConfig) -> Result<Self, SelectionError> {
        Self::with_clock(config, SystemClock)
    }

    /// Builds a model with an injected source of "today".
    ///
    /// # Errors
    /// Returns `SelectionError` when the configured start/end pair is inconsistent.
    pub fn with_clock(config: SelectionConfig, clock: impl Clock + 'static) -> Result<Self, SelectionError> {
        let state = config.initial_state()?;
        tracing::debug!(?state, min = ?config.min_date, max = ?config.max_date, "selection model created");
        Ok(Self {
            min_date: config.min_date,
            max_date: config.max_date,
            state,
            period_changed: Signal::new(),
            clock: Box::new(clock),
        })
    }

    /// Subscribes to completed selections. Each completion is delivered once,
    /// synchronously, from inside [`RangeSelectionModel::on_date_changed`].
    pub fn on_period_changed<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&Period) + 'static,
    {
        self.period_changed.subscribe(handler)
    }

    /// Applies a tap on `date` and returns the resulting state.
    ///
    /// Selectability is not checked here; callers consult
    /// [`RangeSelectionModel::date_is_selectable`] first.
    pub fn on_date_changed(&mut self, date: Date) -> SelectionState {
        let previous = self.state;
        self.state = match previous {
            SelectionState::Empty | SelectionState::Complete(_) => SelectionState::StartOnly(date),
            // a tap before the start moves the start back instead of completing
            SelectionState::StartOnly(start) => {
                Period::new(start, date).map_or(SelectionState::StartOnly(date), SelectionState::Complete)
            },
        };
        tracing::debug!(%date, ?previous, current = ?self.state, "selection changed");

        if let SelectionState::Complete(period) = self.state {
            self.period_changed.emit(&period);
        }
        self.state
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub const fn start_date(&self) -> Option<Date> {
        self.state.start()
    }

    pub const fn end_date(&self) -> Option<Date> {
        self.state.end()
    }

    pub const fn selected_period(&self) -> Option<Period> {
        self.state.period()
    }

    pub const fn min_date(&self) -> Option<Date> {
        self.min_date
    }

    pub const fn max_date(&self) -> Option<Date> {
        self.max_date
    }

    /// Replaces the lower bound. The current selection is left alone.
    pub fn set_min_date(&mut self, min_date: Option<Date>) {
        tracing::debug!(?min_date, "min date changed");
        self.min_date = min_date;
    }

    /// Replaces the upper bound. The current selection is left alone.
    pub fn set_max_date(&mut self, max_date: Option<Date>) {
        tracing::debug!(?max_date, "max date changed");
        self.max_date = max_date;
    }

    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// True for the start, the end, and every day between them of a completed range.
    pub fn date_in_selected_range(&self, date: Date) -> bool {
        self.state.period().is_some_and(|period| period.contains(&date))
    }

    /// Within the inclusive min/max bounds. Advisory only.
    pub fn date_is_selectable(&self, date: Date) -> bool {
        let above_min = self.min_date.is_none_or(|min| date >= min);
        let below_max = self.max_date.is_none_or(|max| date <= max);
        above_min && below_max
    }

    pub fn date_is_start(&self, date: Date) -> bool {
        self.state.start() == Some(date)
    }

    pub fn date_is_end(&self, date: Date) -> bool {
        self.state.end() == Some(date)
    }

    pub fn date_is_start_or_end(&self, date: Date) -> bool {
        self.date_is_start(date) || self.date_is_end(date)
    }

    pub fn day_model(&self, date: Date) -> DayModel {
        self.day_model_with_today(date, self.today())
    }

    fn day_model_with_today(&self, date: Date, today: Date) -> DayModel {
        DayModel {
            date,
            is_selected: self.date_is_start_or_end(date),
            is_start: self.date_is_start(date),
            is_end: self.date_is_end(date),
            is_selectable: self.date_is_selectable(date),
            is_today: date == today,
            is_in_range: self.date_in_selected_range(date),
        }
    }

    /// One [`DayModel`] per day of `month`'s year and month, day 1 first.
    pub fn retrieve_dates_for_month(&self, month: Date) -> Vec<DayModel> {
        let today = self.today();
        let days: Vec<DayModel> = month
            .month_days()
            .map(|date| self.day_model_with_today(date, today))
            .collect();
        tracing::trace!(year = month.year(), month = month.month(), days = days.len(), "enumerated month");
        days
    }

    /// Leading blank cells before day 1 in a Monday-first week (Monday = 0, Sunday = 6).
    pub fn retrieve_delta_for_month(&self, month: Date) -> u8 {
        // num_days_from_monday is always 0..=6
        u8::try_from(month.first_of_month().weekday().num_days_from_monday()).unwrap_or_default()
    }
}

impl fmt::Debug for RangeSelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSelectionModel")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("state", &self.state)
            .field("period_changed", &self.period_changed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use crate::test_utils::{date, period};
    use proptest::prelude::*;
    use std::{cell::RefCell, rc::Rc};

    fn model() -> RangeSelectionModel {
        RangeSelectionModel::with_clock(SelectionConfig::default(), FixedClock(date(2024, 3, 7))).unwrap()
    }

    fn record_periods(model: &RangeSelectionModel) -> (Rc<RefCell<Vec<Period>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = model.on_period_changed(move |period| sink.borrow_mut().push(*period));
        (seen, subscription)
    }

    #[test]
    fn test_first_tap_sets_start() {
        let mut model = model();
        let (seen, _subscription) = record_periods(&model);

        let state = model.on_date_changed(date(2024, 3, 5));

        assert_eq!(state, SelectionState::StartOnly(date(2024, 3, 5)));
        assert_eq!(model.start_date(), Some(date(2024, 3, 5)));
        assert_eq!(model.end_date(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_second_tap_after_start_completes() {
        let mut model = model();
        let (seen, _subscription) = record_periods(&model);

        model.on_date_changed(date(2024, 3, 5));
        let state = model.on_date_changed(date(2024, 3, 10));

        assert_eq!(state, SelectionState::Complete(period((2024, 3, 5), (2024, 3, 10))));
        assert_eq!(model.start_date(), Some(date(2024, 3, 5)));
        assert_eq!(model.end_date(), Some(date(2024, 3, 10)));
        assert_eq!(*seen.borrow(), vec![period((2024, 3, 5), (2024, 3, 10))]);
    }

    #[test]
    fn test_second_tap_on_start_completes_single_day() {
        let mut model = model();
        let (seen, _subscription) = record_periods(&model);

        model.on_date_changed(date(2024, 3, 5));
        model.on_date_changed(date(2024, 3, 5));

        assert_eq!(model.selected_period(), Some(Period::single(date(2024, 3, 5))));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_second_tap_before_start_moves_start() {
        let mut model = model();
        let (seen, _subscription) = record_periods(&model);

        model.on_date_changed(date(2024, 3, 10));
        let state = model.on_date_changed(date(2024, 3, 5));

        assert_eq!(state, SelectionState::StartOnly(date(2024, 3, 5)));
        assert_eq!(model.end_date(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_third_tap_always_resets() {
        struct TestCase {
            third:       Date,
            description: &'static str,
        }

        let cases = [
            TestCase {
                third:       date(2024, 3, 1),
                description: "before the range",
            },
            TestCase {
                third:       date(2024, 3, 5),
                description: "on the start",
            },
            TestCase {
                third:       date(2024, 3, 7),
                description: "inside the range",
            },
            TestCase {
                third:       date(2024, 3, 10),
                description: "on the end",
            },
            TestCase {
                third:       date(2024, 4, 1),
                description: "after the range",
            },
        ];

        for case in &cases {
            let mut model = model();
            let (seen, _subscription) = record_periods(&model);
            model.on_date_changed(date(2024, 3, 5));
            model.on_date_changed(date(2024, 3, 10));

            let state = model.on_date_changed(case.third);

            assert_eq!(state, SelectionState::StartOnly(case.third), "third tap {}", case.description);
            assert_eq!(seen.borrow().len(), 1, "no extra completion for tap {}", case.description);
        }
    }

    #[test]
    fn test_every_listener_hears_each_completion() {
        let mut model = model();
        let (first, _first_sub) = record_periods(&model);
        let (second, second_sub) = record_periods(&model);

        model.on_date_changed(date(2024, 3, 5));
        model.on_date_changed(date(2024, 3, 6));
        drop(second_sub);
        model.on_date_changed(date(2024, 3, 8));
        model.on_date_changed(date(2024, 3, 9));

        assert_eq!(
            *first.borrow(),
            vec![period((2024, 3, 5), (2024, 3, 6)), period((2024, 3, 8), (2024, 3, 9))]
        );
        assert_eq!(*second.borrow(), vec![period((2024, 3, 5), (2024, 3, 6))]);
    }

    #[test]
    fn test_config_period_overrides_start_and_end() {
        let config = SelectionConfig::default()
            .with_start(date(2024, 1, 1))
            .with_end(date(2024, 1, 2))
            .with_period(period((2024, 3, 5), (2024, 3, 10)));
        let model = RangeSelectionModel::new(config).unwrap();

        assert_eq!(model.start_date(), Some(date(2024, 3, 5)));
        assert_eq!(model.end_date(), Some(date(2024, 3, 10)));
    }

    #[test]
    fn test_config_start_only() {
        let model = RangeSelectionModel::new(SelectionConfig::default().with_start(date(2024, 3, 5))).unwrap();
        assert_eq!(model.state(), SelectionState::StartOnly(date(2024, 3, 5)));
    }

    #[test]
    fn test_config_rejects_broken_pairs() {
        let end_only = RangeSelectionModel::new(SelectionConfig::default().with_end(date(2024, 3, 5)));
        assert!(matches!(end_only, Err(SelectionError::EndWithoutStart { .. })));

        let inverted = RangeSelectionModel::new(
            SelectionConfig::default()
                .with_start(date(2024, 3, 10))
                .with_end(date(2024, 3, 5)),
        );
        assert!(matches!(inverted, Err(SelectionError::InvertedRange { .. })));
    }

    #[test]
    fn test_config_from_json() {
        let config: SelectionConfig = serde_json::from_str(
            r#"{"min_date": "2024-01-10", "max_date": "2024-01-20", "period": "2024-01-12/2024-01-15"}"#,
        )
        .unwrap();

        assert_eq!(config.min_date, Some(date(2024, 1, 10)));
        assert_eq!(config.max_date, Some(date(2024, 1, 20)));
        assert_eq!(config.period, Some(period((2024, 1, 12), (2024, 1, 15))));
        assert_eq!(config.start_date, None);

        assert!(serde_json::from_str::<SelectionConfig>(r#"{"minDate": "2024-01-10"}"#).is_err());
        assert!(serde_json::from_str::<SelectionConfig>(r#"{"min_date": "08/15/1991"}"#).is_err());
    }

    #[test]
    fn test_date_is_selectable_within_bounds() {
        let config = SelectionConfig::default().with_bounds(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let model = RangeSelectionModel::new(config).unwrap();

        assert!(!model.date_is_selectable(date(2024, 1, 5)));
        assert!(model.date_is_selectable(date(2024, 1, 10)));
        assert!(model.date_is_selectable(date(2024, 1, 15)));
        assert!(model.date_is_selectable(date(2024, 1, 20)));
        assert!(!model.date_is_selectable(date(2024, 1, 25)));
    }

    #[test]
    fn test_date_is_selectable_with_one_sided_bounds() {
        let mut model = model();
        assert!(model.date_is_selectable(date(1, 1, 1)));
        assert!(model.date_is_selectable(date(9999, 12, 31)));

        model.set_min_date(Some(date(2024, 1, 10)));
        assert!(!model.date_is_selectable(date(2024, 1, 9)));
        assert!(model.date_is_selectable(date(9999, 12, 31)));

        model.set_min_date(None);
        model.set_max_date(Some(date(2024, 1, 20)));
        assert!(model.date_is_selectable(date(1, 1, 1)));
        assert!(!model.date_is_selectable(date(2024, 1, 21)));
    }

    #[test]
    fn test_inverted_bounds_leave_nothing_selectable() {
        let config = SelectionConfig::default().with_bounds(Some(date(2024, 1, 20)), Some(date(2024, 1, 10)));
        let model = RangeSelectionModel::new(config).unwrap();

        for day in date(2024, 1, 1).month_days() {
            assert!(!model.date_is_selectable(day), "{day} should not be selectable");
        }
    }

    #[test]
    fn test_selectability_is_not_enforced() {
        let config = SelectionConfig::default().with_bounds(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        let mut model = RangeSelectionModel::new(config).unwrap();

        model.on_date_changed(date(2024, 1, 1));
        assert_eq!(model.start_date(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_bound_changes_keep_selection() {
        let mut model = model();
        model.on_date_changed(date(2024, 3, 5));
        model.on_date_changed(date(2024, 3, 10));

        model.set_min_date(Some(date(2024, 3, 8)));
        model.set_max_date(Some(date(2024, 3, 9)));

        assert_eq!(model.selected_period(), Some(period((2024, 3, 5), (2024, 3, 10))));
    }

    #[test]
    fn test_date_in_selected_range() {
        let mut model = model();
        model.on_date_changed(date(2024, 3, 5));
        assert!(!model.date_in_selected_range(date(2024, 3, 5)), "incomplete range has no members");

        model.on_date_changed(date(2024, 3, 10));
        assert!(model.date_in_selected_range(date(2024, 3, 7)));
        assert!(model.date_in_selected_range(date(2024, 3, 5)));
        assert!(model.date_in_selected_range(date(2024, 3, 10)));
        assert!(!model.date_in_selected_range(date(2024, 3, 4)));
        assert!(!model.date_in_selected_range(date(2024, 3, 11)));
    }

    #[test]
    fn test_start_and_end_checks() {
        let mut model = model();
        assert!(!model.date_is_start(date(2024, 3, 5)));

        model.on_date_changed(date(2024, 3, 5));
        assert!(model.date_is_start(date(2024, 3, 5)));
        assert!(!model.date_is_end(date(2024, 3, 5)));
        assert!(model.date_is_start_or_end(date(2024, 3, 5)));

        model.on_date_changed(date(2024, 3, 10));
        assert!(model.date_is_end(date(2024, 3, 10)));
        assert!(model.date_is_start_or_end(date(2024, 3, 10)));
        assert!(!model.date_is_start_or_end(date(2024, 3, 7)));
    }

    #[test]
    fn test_retrieve_dates_for_month_lengths() {
        let model = model();
        assert_eq!(model.retrieve_dates_for_month(date(2024, 2, 10)).len(), 29);
        assert_eq!(model.retrieve_dates_for_month(date(2023, 2, 10)).len(), 28);
        assert_eq!(model.retrieve_dates_for_month(date(2024, 4, 30)).len(), 30);
        assert_eq!(model.retrieve_dates_for_month(date(2024, 12, 1)).len(), 31);
    }

    #[test]
    fn test_retrieve_dates_for_month_flags() {
        let mut model = RangeSelectionModel::with_clock(
            SelectionConfig::default().with_bounds(Some(date(2024, 3, 3)), None),
            FixedClock(date(2024, 3, 7)),
        )
        .unwrap();
        model.on_date_changed(date(2024, 3, 5));
        model.on_date_changed(date(2024, 3, 10));

        let days = model.retrieve_dates_for_month(date(2024, 3, 20));

        assert_eq!(days.len(), 31);
        assert!(days.iter().enumerate().all(|(i, day)| usize::from(day.day()) == i + 1));

        let fifth = days[4];
        assert!(fifth.is_start && fifth.is_selected && fifth.is_in_range && !fifth.is_end);

        let seventh = days[6];
        assert!(seventh.is_today && seventh.is_in_range && seventh.is_range_interior());
        assert!(!seventh.is_selected);

        let tenth = days[9];
        assert!(tenth.is_end && tenth.is_selected && !tenth.is_start);

        assert!(!days[1].is_selectable);
        assert!(days[2].is_selectable);
        assert_eq!(days.iter().filter(|day| day.is_in_range).count(), 6);
        assert_eq!(days.iter().filter(|day| day.is_today).count(), 1);
    }

    #[test]
    fn test_day_models_track_later_changes() {
        let mut model = model();
        let before = model.retrieve_dates_for_month(date(2024, 3, 1));
        assert!(before.iter().all(|day| !day.is_selected));

        model.on_date_changed(date(2024, 3, 12));
        let after = model.retrieve_dates_for_month(date(2024, 3, 1));
        assert!(after[11].is_start);
    }

    #[test]
    fn test_today_follows_clock() {
        let today = Rc::new(RefCell::new(date(2024, 3, 7)));
        let source = Rc::clone(&today);
        let mut model =
            RangeSelectionModel::with_clock(SelectionConfig::default(), move || *source.borrow()).unwrap();

        assert!(model.day_model(date(2024, 3, 7)).is_today);
        *today.borrow_mut() = date(2024, 3, 8);
        assert!(!model.day_model(date(2024, 3, 7)).is_today);
        assert!(model.day_model(date(2024, 3, 8)).is_today);

        model.set_clock(FixedClock(date(2020, 1, 1)));
        assert_eq!(model.today(), date(2020, 1, 1));
    }

    #[test]
    fn test_retrieve_delta_for_month() {
        let model = model();
        // April 2024 starts on a Monday, September 2024 on a Sunday
        assert_eq!(model.retrieve_delta_for_month(date(2024, 4, 18)), 0);
        assert_eq!(model.retrieve_delta_for_month(date(2024, 9, 30)), 6);
        // March 2024 starts on a Friday
        assert_eq!(model.retrieve_delta_for_month(date(2024, 3, 1)), 4);
    }

    #[test]
    fn test_month_grid_agrees_with_chrono() {
        use chrono::{Datelike, Months, NaiveDate};

        let model = model();
        for year in [1, 1582, 1900, 1970, 2000, 2024, 9999] {
            for month in 1..=12 {
                let first = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1).unwrap();
                let anchor = date(year, month, 15);
                let days = model.retrieve_dates_for_month(anchor);

                assert_eq!(
                    u32::from(model.retrieve_delta_for_month(anchor)),
                    first.weekday().num_days_from_monday(),
                    "{year}-{month:02}"
                );
                let length = first.checked_add_months(Months::new(1)).unwrap().signed_duration_since(first).num_days();
                assert_eq!(i64::try_from(days.len()).unwrap(), length, "{year}-{month:02}");
            }
        }
    }

    fn arb_date() -> impl Strategy<Value = Date> {
        (2023u16..=2025, 1u8..=12, 1u8..=31).prop_map(|(y, m, d)| date(y, m, d.min(crate::days_in_month(y, m))))
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_for_any_tap_sequence(taps in prop::collection::vec(arb_date(), 0..64)) {
            let mut model = model();
            let (seen, _subscription) = record_periods(&model);
            let mut completions = Vec::new();

            for tap in taps {
                let before = model.state();
                let after = model.on_date_changed(tap);

                prop_assert!(model.end_date().is_none() || model.start_date().is_some());
                if let (Some(start), Some(end)) = (model.start_date(), model.end_date()) {
                    prop_assert!(start <= end);
                }
                if let SelectionState::StartOnly(start) = before {
                    if tap >= start {
                        completions.push(period_of(start, tap));
                        prop_assert!(after.is_complete());
                    } else {
                        prop_assert_eq!(after, SelectionState::StartOnly(tap));
                    }
                } else {
                    prop_assert_eq!(after, SelectionState::StartOnly(tap));
                }
            }

            prop_assert_eq!(&*seen.borrow(), &completions);
        }
    }

    fn period_of(start: Date, end: Date) -> Period {
        Period::new(start, end).unwrap()
    }
}
