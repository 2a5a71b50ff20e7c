//! Состояние экранов текущей вкладки браузера.
//!
//! Переходы считает `ViewState::apply`; здесь только сигнал и хук доступа.

use contracts::system::{AdminCredential, Screen, ViewEvent, ViewState};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<ViewState>,
    credential: StoredValue<AdminCredential>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ViewState::new()),
            credential: StoredValue::new(AdminCredential::default()),
        }
    }

    pub fn dispatch(&self, event: ViewEvent) {
        self.state.update(|state| {
            let next = state.apply(event);
            if next != *state {
                log::debug!("view: {:?} -> {:?} on {:?}", state.screen, next.screen, event);
            }
            *state = next;
        });
    }

    /// Returns `true` when the secret was accepted.
    pub fn sign_in(&self, input: &str) -> bool {
        let accepted = self.credential.with_value(|c| c.matches(input));
        self.dispatch(ViewEvent::SubmitCredentials { accepted });
        if !accepted {
            log::warn!("admin sign-in rejected");
        }
        accepted
    }

    pub fn screen(&self) -> Screen {
        self.state.with(|s| s.screen)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.authenticated)
    }

    pub fn login_error(&self) -> bool {
        self.state.with(|s| s.login_error)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session view state
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
