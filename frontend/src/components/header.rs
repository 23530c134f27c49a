use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <h1>{"Lecture Calendar"}</h1>
            <p class="header-subtitle">{"Schedule lectures and track your earnings."}</p>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Data is stored locally in your browser."}</p>
        </footer>
    }
}
