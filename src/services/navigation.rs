// ============================================================================
// NAVIGATION - Capacidad de redirección del navegador (inyectable)
// ============================================================================

/// Redirección de página completa
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Navegación real: `window.location.href = path`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ No hay window disponible para redirigir a {}", path);
            return;
        };

        log::info!("➡️ Redirigiendo a {}", path);
        if let Err(e) = window.location().set_href(path) {
            log::error!("❌ Error redirigiendo a {}: {:?}", path, e);
        }
    }
}
