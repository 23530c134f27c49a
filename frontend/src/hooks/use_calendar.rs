use std::rc::Rc;

use chrono::NaiveDate;
use shared::{
    aggregate, date_key, CalendarMonth, DaySelection, Lecture, LectureBook, MonthCursor,
    MonthSummary,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::use_local_storage::Snapshot;
use crate::services::date_utils;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub cursor: MonthCursor,
    pub selection: DaySelection,
    pub month: Rc<CalendarMonth>,
    pub summary: Rc<MonthSummary>,
}

impl CalendarState {
    /// Lectures on the selected day, empty when nothing is selected
    pub fn selected_lectures(&self) -> Vec<Lecture> {
        self.selection
            .selected_date()
            .map(|date| self.summary.lectures_on(&date_key(date)).to_vec())
            .unwrap_or_default()
    }
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub go_to_today: Callback<MouseEvent>,
    pub select_day: Callback<NaiveDate>,
    pub close_modal: Callback<()>,
    /// Close the editor once a lecture has been deleted from it
    pub after_delete: Callback<()>,
}

#[hook]
pub fn use_calendar(book: &Snapshot<LectureBook>) -> UseCalendarResult {
    let today = date_utils::today();
    let cursor = use_state(|| MonthCursor::today(today));
    let selection = use_state(DaySelection::default);

    // Grid and totals only change with the month, the collection or the day
    let computed = use_memo((*cursor, book.clone(), today), |(cursor, book, today)| {
        let summary = aggregate(book.lectures(), cursor.year(), cursor.month());
        let month = CalendarMonth::build(*cursor, *today, &summary);
        (Rc::new(month), Rc::new(summary))
    });

    // Navigation callbacks
    let prev_month = {
        let cursor = cursor.clone();
        use_callback(*cursor, move |_: MouseEvent, current| {
            cursor.set(current.previous());
        })
    };

    let next_month = {
        let cursor = cursor.clone();
        use_callback(*cursor, move |_: MouseEvent, current| {
            cursor.set(current.next());
        })
    };

    let go_to_today = {
        let cursor = cursor.clone();
        use_callback((), move |_: MouseEvent, _| {
            cursor.set(MonthCursor::today(date_utils::today()));
        })
    };

    // Selection callbacks
    let select_day = {
        let selection = selection.clone();
        use_callback(*selection, move |date: NaiveDate, current| {
            let mut next = *current;
            next.select(date);
            selection.set(next);
        })
    };

    let close_modal = {
        let selection = selection.clone();
        use_callback(*selection, move |_: (), current| {
            let mut next = *current;
            next.close();
            selection.set(next);
        })
    };

    let after_delete = {
        let selection = selection.clone();
        use_callback(*selection, move |_: (), current| {
            let mut next = *current;
            next.after_delete();
            selection.set(next);
        })
    };

    let state = CalendarState {
        cursor: *cursor,
        selection: *selection,
        month: computed.0.clone(),
        summary: computed.1.clone(),
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        go_to_today,
        select_day,
        close_modal,
        after_delete,
    };

    UseCalendarResult { state, actions }
}
