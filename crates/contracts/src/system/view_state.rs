//! Машина состояний экранов: дашборд, вход, администрирование.
//!
//! Функция перехода чистая; фронтенд хранит `ViewState` в сигнале и
//! отправляет в него события. Флаг `authenticated` живёт только в пределах
//! сессии и после перезагрузки всегда `false`.

use super::auth::AdminCredential;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Dashboard,
    Login,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// "Admin" button in the header
    OpenAdmin,
    /// Login form submitted; `accepted` is the credential check result
    SubmitCredentials { accepted: bool },
    /// Password field edited after a failed attempt
    EditCredentials,
    SignOut,
    /// "Back to Dashboard" in the admin console
    Back,
    /// "Dashboard" tab in the header
    SelectDashboard,
    /// A KPI was created or updated from the admin console
    KpiSaved,
    /// A KPI was deleted from the admin console
    KpiRemoved,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    pub authenticated: bool,
    /// "Incorrect password" is shown on the login screen
    pub login_error: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(self, event: ViewEvent) -> Self {
        let mut next = self;
        match (self.screen, event) {
            (_, ViewEvent::OpenAdmin) => {
                next.screen = if self.authenticated {
                    Screen::Admin
                } else {
                    Screen::Login
                };
            }
            (Screen::Login, ViewEvent::SubmitCredentials { accepted: true }) => {
                next.authenticated = true;
                next.screen = Screen::Admin;
            }
            (Screen::Login, ViewEvent::SubmitCredentials { accepted: false }) => {
                next.login_error = true;
            }
            (Screen::Login, ViewEvent::EditCredentials) => {
                next.login_error = false;
            }
            (_, ViewEvent::SignOut) if self.authenticated => {
                next.authenticated = false;
                next.screen = Screen::Dashboard;
            }
            (Screen::Admin, ViewEvent::Back) | (Screen::Admin, ViewEvent::KpiSaved) => {
                next.screen = Screen::Dashboard;
            }
            (_, ViewEvent::SelectDashboard) => {
                next.screen = Screen::Dashboard;
            }
            _ => {}
        }

        // The login form starts clean every time it is shown again.
        if next.screen != Screen::Login {
            next.login_error = false;
        }
        next
    }

    /// Check `input` against the credential and apply the result.
    pub fn submit_credentials(self, credential: &AdminCredential, input: &str) -> Self {
        self.apply(ViewEvent::SubmitCredentials {
            accepted: credential.matches(input),
        })
    }

    pub fn is_admin_area(&self) -> bool {
        matches!(self.screen, Screen::Admin | Screen::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(screen: Screen, authenticated: bool) -> ViewState {
        ViewState {
            screen,
            authenticated,
            login_error: false,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(!state.authenticated);
        assert!(!state.login_error);
    }

    #[test]
    fn test_open_admin_is_guarded() {
        assert_eq!(
            ViewState::new().apply(ViewEvent::OpenAdmin).screen,
            Screen::Login
        );
        assert_eq!(
            at(Screen::Dashboard, true).apply(ViewEvent::OpenAdmin).screen,
            Screen::Admin
        );
    }

    #[test]
    fn test_login_with_correct_secret() {
        let credential = AdminCredential::default();
        let state = ViewState::new()
            .apply(ViewEvent::OpenAdmin)
            .submit_credentials(&credential, "NCC@@2025");
        assert_eq!(state.screen, Screen::Admin);
        assert!(state.authenticated);
        assert!(!state.login_error);
    }

    #[test]
    fn test_login_with_wrong_secret() {
        let credential = AdminCredential::default();
        let before = ViewState::new().apply(ViewEvent::OpenAdmin);
        let state = before.submit_credentials(&credential, "guess");
        assert_eq!(state.screen, Screen::Login);
        assert!(state.login_error);
        assert_eq!(state.authenticated, before.authenticated);

        let state = state.apply(ViewEvent::EditCredentials);
        assert!(!state.login_error);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn test_sign_out_and_back() {
        let state = at(Screen::Admin, true).apply(ViewEvent::SignOut);
        assert_eq!(state, at(Screen::Dashboard, false));

        let state = at(Screen::Admin, true).apply(ViewEvent::Back);
        assert_eq!(state, at(Screen::Dashboard, true));

        // Header sign-out is visible on the dashboard too.
        let state = at(Screen::Dashboard, true).apply(ViewEvent::SignOut);
        assert_eq!(state, at(Screen::Dashboard, false));
    }

    #[test]
    fn test_select_dashboard_from_any_screen() {
        for screen in [Screen::Dashboard, Screen::Login, Screen::Admin] {
            let state = at(screen, true).apply(ViewEvent::SelectDashboard);
            assert_eq!(state, at(Screen::Dashboard, true));
        }
    }

    #[test]
    fn test_leaving_login_clears_error() {
        let state = ViewState {
            screen: Screen::Login,
            authenticated: false,
            login_error: true,
        };
        let state = state.apply(ViewEvent::SelectDashboard);
        assert!(!state.login_error);
        assert_eq!(state.apply(ViewEvent::OpenAdmin), at(Screen::Login, false));
    }

    #[test]
    fn test_admin_actions() {
        assert_eq!(
            at(Screen::Admin, true).apply(ViewEvent::KpiSaved),
            at(Screen::Dashboard, true)
        );
        assert_eq!(
            at(Screen::Admin, true).apply(ViewEvent::KpiRemoved),
            at(Screen::Admin, true)
        );
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let dashboard = at(Screen::Dashboard, false);
        assert_eq!(
            dashboard.apply(ViewEvent::SubmitCredentials { accepted: true }),
            dashboard
        );
        assert_eq!(dashboard.apply(ViewEvent::Back), dashboard);
        assert_eq!(dashboard.apply(ViewEvent::SignOut), dashboard);
        assert_eq!(dashboard.apply(ViewEvent::KpiSaved), dashboard);
    }
}
