use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_login_form;
use crate::models::Field;
use crate::utils::constants::USERNAME_PLACEHOLDER;

fn field_error(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! { <p class="form-message">{message.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let form = use_login_form();
    let state = &form.state;

    html! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-header">
                    <h1>{"Login"}</h1>
                    <p class="login-description">
                        {"New user? Register "}
                        <a href={CONFIG.register_path.clone()} class="register-link">{"here."}</a>
                    </p>
                </div>

                <form class="login-form" onsubmit={form.on_submit.clone()}>
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            placeholder={USERNAME_PLACEHOLDER}
                            value={state.credentials.value(Field::Username).to_string()}
                            oninput={form.on_username_input.clone()}
                        />
                        { field_error(state.field_error(Field::Username)) }
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value={state.credentials.value(Field::Password).to_string()}
                            oninput={form.on_password_input.clone()}
                        />
                        { field_error(state.field_error(Field::Password)) }
                    </div>

                    { field_error(state.banner()) }

                    <button type="submit" class="btn-login" disabled={!state.can_submit()}>
                        {"Login"}
                    </button>
                </form>
            </div>
        </div>
    }
}
