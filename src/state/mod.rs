// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod form_state;

pub use reactivity::*;
pub use form_state::*;
