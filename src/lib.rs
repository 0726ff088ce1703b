// ============================================================================
// LOGIN PORTAL - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: componentes Yew (sin lógica)
// - Hooks: enlace ViewModel <-> Yew
// - ViewModels: validación + controlador de envío
// - Services: SOLO comunicación con el exterior (HTTP, navegación)
// - State: estado reactivo con Rc<RefCell>
// - Models: estructuras de datos
// ============================================================================

pub mod config;
pub mod errors;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::views::App;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Login Portal ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();

    Ok(())
}
