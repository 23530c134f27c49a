use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LectureFormProps {
    pub initial_title: String,
    pub initial_amount: String,
    /// Editing an existing lecture rather than adding one
    pub editing: bool,
    pub error: Option<String>,

    // Event handlers
    pub on_submit: Callback<(String, String)>,
    pub on_cancel: Callback<()>,
    pub on_delete: Callback<()>,
}

#[function_component(LectureForm)]
pub fn lecture_form(props: &LectureFormProps) -> Html {
    let title = use_state(|| props.initial_title.clone());
    let amount = use_state(|| props.initial_amount.clone());

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let onsubmit = {
        let title = title.clone();
        let amount = amount.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(((*title).clone(), (*amount).clone()));
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };

    html! {
        <form class="lecture-form" {onsubmit} novalidate=true>
            <div class="form-body">
                <h3>{if props.editing { "강의 수정" } else { "새 강의 추가" }}</h3>

                <div class="form-group">
                    <label for="title">{"강의 제목"}</label>
                    <input
                        type="text"
                        id="title"
                        value={(*title).clone()}
                        oninput={on_title_input}
                        placeholder="예: 리액트 입문"
                        autofocus=true
                    />
                </div>

                <div class="form-group">
                    <label for="amount">{"금액 (₩)"}</label>
                    <input
                        type="number"
                        id="amount"
                        value={(*amount).clone()}
                        oninput={on_amount_input}
                        placeholder="예: 50000"
                        step="1"
                        min="0"
                    />
                </div>

                {if let Some(error) = props.error.as_ref() {
                    html! { <p class="form-message error">{error}</p> }
                } else { html! {} }}
            </div>

            <div class="form-actions">
                {if props.editing {
                    html! {
                        <button type="button" class="btn btn-danger" onclick={on_delete_click}>
                            {"삭제"}
                        </button>
                    }
                } else { html! {} }}
                <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                    {"취소"}
                </button>
                <button type="submit" class="btn btn-primary">
                    {if props.editing { "변경 사항 저장" } else { "강의 저장" }}
                </button>
            </div>
        </form>
    }
}
