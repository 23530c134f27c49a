use chrono::NaiveDate;
use shared::{format_month_year, month_name, CalendarCell, CalendarConfig, CalendarMonth};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::lecture_modal::LectureModal;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_lectures::use_lectures;

const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarHeaderProps {
    pub year: i32,
    pub month: u32,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_today: Callback<MouseEvent>,
}

#[function_component(CalendarHeader)]
pub fn calendar_header(props: &CalendarHeaderProps) -> Html {
    html! {
        <div class="calendar-header">
            <div class="calendar-title">
                <h2>{format_month_year(props.year, props.month)}</h2>
                <button class="btn btn-secondary today-button" onclick={props.on_today.clone()}>
                    {"Today"}
                </button>
            </div>
            <div class="calendar-nav">
                <button class="nav-button" onclick={props.on_prev_month.clone()} aria-label="Previous month">
                    {"‹"}
                </button>
                <button class="nav-button" onclick={props.on_next_month.clone()} aria-label="Next month">
                    {"›"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarDayProps {
    pub cell: CalendarCell,
    pub on_day_click: Callback<NaiveDate>,
}

#[function_component(CalendarDay)]
pub fn calendar_day(props: &CalendarDayProps) -> Html {
    let config = use_context::<CalendarConfig>().unwrap_or_default();
    let cell = &props.cell;

    let onclick = {
        let on_day_click = props.on_day_click.clone();
        let date = cell.date;
        Callback::from(move |_: MouseEvent| on_day_click.emit(date))
    };

    let day_class = if cell.is_current_month() {
        "calendar-day"
    } else {
        "calendar-day other-month"
    };
    let number_class = if cell.is_today { "day-number today" } else { "day-number" };

    html! {
        <div
            class={day_class}
            {onclick}
            aria-label={format!("Date {}, {} lectures", cell.day(), cell.lectures.len())}
        >
            <span class={number_class}>{cell.day()}</span>
            <div class="day-lectures" role="list">
                {for cell.lectures.iter().map(|lecture| html! {
                    <div key={lecture.id.clone()} class="lecture-chip" title={lecture.title.clone()} role="listitem">
                        {&lecture.title}
                    </div>
                })}
            </div>
            {if cell.day_total > 0.0 {
                html! { <div class="day-total">{config.format_amount(cell.day_total)}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CalendarGridProps {
    pub month: std::rc::Rc<CalendarMonth>,
    pub on_day_click: Callback<NaiveDate>,
}

#[function_component(CalendarGrid)]
pub fn calendar_grid(props: &CalendarGridProps) -> Html {
    html! {
        <div class="calendar">
            <div class="calendar-weekdays">
                {for DAYS_OF_WEEK.iter().map(|day| html! {
                    <div class="weekday">{*day}</div>
                })}
            </div>
            <div class="calendar-grid">
                {for props.month.cells.iter().map(|cell| html! {
                    <CalendarDay
                        key={cell.date_key.clone()}
                        cell={cell.clone()}
                        on_day_click={props.on_day_click.clone()}
                    />
                })}
            </div>
        </div>
    }
}

/// Month calendar with navigation, totals and the day editor
#[function_component(Calendar)]
pub fn calendar() -> Html {
    let config = use_context::<CalendarConfig>().unwrap_or_default();
    let lectures = use_lectures(&config);
    let calendar = use_calendar(&lectures.book);
    let state = &calendar.state;

    let on_delete = {
        let delete = lectures.actions.delete.clone();
        let after_delete = calendar.actions.after_delete.clone();
        Callback::from(move |id: String| {
            delete.emit(id);
            after_delete.emit(());
        })
    };

    let on_save = {
        let save = lectures.actions.save.clone();
        let selected_date = state.selection.selected_date();
        Callback::from(move |lecture: shared::SaveLecture| {
            if let Some(date) = selected_date {
                save.emit((date, lecture));
            }
        })
    };

    html! {
        <div class="calendar-container">
            <CalendarHeader
                year={state.cursor.year()}
                month={state.cursor.month()}
                on_prev_month={calendar.actions.prev_month.clone()}
                on_next_month={calendar.actions.next_month.clone()}
                on_today={calendar.actions.go_to_today.clone()}
            />
            <CalendarGrid
                month={state.month.clone()}
                on_day_click={calendar.actions.select_day.clone()}
            />
            {if state.month.monthly_total > 0.0 {
                html! {
                    <div class="monthly-total">
                        {format!("Total for {}: ", month_name(state.cursor.month()))}
                        <span class="monthly-total-amount">{config.format_amount(state.month.monthly_total)}</span>
                    </div>
                }
            } else {
                html! {}
            }}
            {match state.selection.open_date() {
                Some(date) => html! {
                    <LectureModal
                        {date}
                        lectures={state.selected_lectures()}
                        on_close={calendar.actions.close_modal.clone()}
                        {on_save}
                        {on_delete}
                    />
                },
                None => html! {},
            }}
        </div>
    }
}
