use chrono::NaiveDate;
use shared::{
    daily_total, format_korean_long_date, CalendarConfig, DayEditor, EditorView, Lecture,
    SaveLecture,
};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::forms::lecture_form::LectureForm;

const DELETE_CONFIRMATION: &str = "이 강의를 삭제하시겠습니까?";

#[derive(Properties, PartialEq)]
pub struct LectureModalProps {
    pub date: NaiveDate,
    /// Lectures recorded on `date`, in collection order
    pub lectures: Vec<Lecture>,
    pub on_close: Callback<()>,
    pub on_save: Callback<SaveLecture>,
    pub on_delete: Callback<String>,
}

/// Day editor: a list of the day's lectures that switches to a form for
/// adding or editing one. Unsaved input is dropped when the modal closes.
#[function_component(LectureModal)]
pub fn lecture_modal(props: &LectureModalProps) -> Html {
    let config = use_context::<CalendarConfig>().unwrap_or_default();
    let editor = use_state(|| DayEditor::open(props.date));

    {
        let editor = editor.clone();
        use_effect_with(props.date, move |date| {
            if editor.date() != *date {
                editor.set(DayEditor::open(*date));
            }
            || ()
        });
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_add = {
        let editor = editor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*editor).clone();
            next.add();
            editor.set(next);
        })
    };

    let on_edit = {
        let editor = editor.clone();
        Callback::from(move |lecture: Lecture| {
            let mut next = (*editor).clone();
            next.edit(lecture);
            editor.set(next);
        })
    };

    let on_cancel = {
        let editor = editor.clone();
        Callback::from(move |_: ()| {
            let mut next = (*editor).clone();
            next.cancel();
            editor.set(next);
        })
    };

    let on_submit = {
        let editor = editor.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |(title, amount): (String, String)| {
            let mut next = (*editor).clone();
            if let Ok(save) = next.submit(&title, &amount) {
                on_save.emit(save);
            }
            editor.set(next);
        })
    };

    let on_delete = {
        let editor = editor.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: ()| {
            if let Some(id) = editor.delete_target() {
                if gloo::dialogs::confirm(DELETE_CONFIRMATION) {
                    on_delete.emit(id.to_string());
                }
            }
        })
    };

    let body = match editor.view() {
        EditorView::List => {
            let total = daily_total(&props.lectures);
            html! {
                <div class="lecture-list-view">
                    <div class="modal-header">
                        <div>
                            <h3 id="modal-title">{"강의 목록"}</h3>
                            <p class="modal-date">{format_korean_long_date(props.date)}</p>
                        </div>
                        <button class="close-button" onclick={on_close_click} aria-label="Close modal">
                            {"×"}
                        </button>
                    </div>
                    <div class="modal-body">
                        {if props.lectures.is_empty() {
                            html! { <p class="empty-state">{"이 날짜에 강의가 없습니다."}</p> }
                        } else {
                            html! {
                                <ul class="lecture-list">
                                    {for props.lectures.iter().map(|lecture| {
                                        let onclick = {
                                            let on_edit = on_edit.clone();
                                            let lecture = lecture.clone();
                                            Callback::from(move |_: MouseEvent| on_edit.emit(lecture.clone()))
                                        };
                                        html! {
                                            <li key={lecture.id.clone()} class="lecture-item">
                                                <div>
                                                    <p class="lecture-title">{&lecture.title}</p>
                                                    <p class="lecture-amount">{config.format_amount(lecture.amount)}</p>
                                                </div>
                                                <button
                                                    class="edit-button"
                                                    {onclick}
                                                    aria-label={format!("Edit {}", lecture.title)}
                                                >
                                                    {"✎"}
                                                </button>
                                            </li>
                                        }
                                    })}
                                </ul>
                            }
                        }}
                    </div>
                    <div class="modal-footer">
                        <div>
                            <span class="daily-total-label">{"일일 합계: "}</span>
                            <span class="daily-total-amount">{config.format_amount(total)}</span>
                        </div>
                        <button class="btn btn-primary" onclick={on_add}>{"새 강의 추가"}</button>
                    </div>
                </div>
            }
        }
        EditorView::Form(_) => {
            let (title, amount) = editor.form_inputs();
            let editing = editor.editing().is_some();
            let form_key = editor
                .editing()
                .map(|l| l.id.clone())
                .unwrap_or_else(|| "new".to_string());
            html! {
                <LectureForm
                    key={form_key}
                    initial_title={title}
                    initial_amount={amount}
                    {editing}
                    error={editor.error().map(|e| e.to_string())}
                    {on_submit}
                    {on_cancel}
                    {on_delete}
                />
            }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click} role="dialog" aria-modal="true" aria-labelledby="modal-title">
            <div class="modal" onclick={on_modal_click}>
                {body}
            </div>
        </div>
    }
}
