// ============================================================================
// USE LOGIN FORM HOOK - Enlace entre LoginViewModel y Yew
// ============================================================================
// Un ViewModel por formulario montado; cada cambio del estado reactivo
// fuerza un re-render del componente
// ============================================================================

use std::rc::Rc;

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Field;
use crate::services::{BrowserNavigator, HttpAuthService};
use crate::state::FormState;
use crate::viewmodels::LoginViewModel;

pub struct UseLoginFormHandle {
    pub state: FormState,
    pub on_username_input: Callback<InputEvent>,
    pub on_password_input: Callback<InputEvent>,
    pub on_submit: Callback<SubmitEvent>,
}

fn field_input(view_model: &Rc<LoginViewModel>, field: Field) -> Callback<InputEvent> {
    let view_model = view_model.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        view_model.change_field(field, input.value());
    })
}

#[hook]
pub fn use_login_form() -> UseLoginFormHandle {
    let view_model = use_memo((), |_| {
        LoginViewModel::new(Rc::new(HttpAuthService::new()), Rc::new(BrowserNavigator))
    });
    let force_update = use_force_update();

    // Suscripción única al montar
    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| {
            view_model
                .state()
                .subscribe(move || force_update.force_update());
            || ()
        });
    }

    let on_submit = {
        let view_model = view_model.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let view_model = view_model.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if view_model.submit_form().await.is_none() {
                    log::info!("ℹ️ Envío no realizado");
                }
            });
        })
    };

    UseLoginFormHandle {
        state: view_model.snapshot(),
        on_username_input: field_input(&view_model, Field::Username),
        on_password_input: field_input(&view_model, Field::Password),
        on_submit,
    }
}
