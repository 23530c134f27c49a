use shared::CalendarConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::header::{Footer, Header};
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| CalendarConfig::default());

    html! {
        <ContextProvider<CalendarConfig> context={(*config).clone()}>
            <div class="app">
                <div class="container">
                    <Header />
                    <main>
                        <Calendar />
                    </main>
                    <Footer />
                </div>
            </div>
        </ContextProvider<CalendarConfig>>
    }
}

fn main() {
    Logger::init(CalendarConfig::default().log_level());
    Logger::info_with_component("app", "Starting lecture calendar");
    yew::Renderer::<App>::new().render();
}
