use yew::prelude::*;

use crate::views::auth::LoginView;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="app">
            <LoginView />
        </main>
    }
}
