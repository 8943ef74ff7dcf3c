//! Browser-backed session and the handle pages receive as a prop.

use estatedesk_grid::{
    ListenerRegistry, MemorySession, SessionContext, SessionListener, SessionUser, Subscription,
    Theme,
};
use std::cell::RefCell;
use std::rc::Rc;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
pub const THEME_KEY: &str = "theme";

fn storage() -> Option<web_sys::Storage> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window()
        .and_then(|win| win.local_storage().ok().flatten())
        .or_else(|| {
            log::warn!("localStorage unavailable; session is empty");
            None
        })
}

fn read(key: &str) -> Option<String> {
    storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .filter(|v| !v.is_empty())
}

/// Session persisted in `localStorage` under `user`, `token` and `theme`.
#[derive(Clone, Default)]
pub struct BrowserSession {
    listeners: Rc<RefCell<ListenerRegistry>>,
}

impl BrowserSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn notify(&self) {
        ListenerRegistry::notify(&self.listeners, &self.snapshot());
    }
}

impl SessionContext for BrowserSession {
    fn user(&self) -> Option<SessionUser> {
        let raw = read(USER_KEY)?;
        SessionUser::from_json(&raw)
            .map_err(|err| log::warn!("ignoring stored user: {err}"))
            .ok()
    }

    fn token(&self) -> Option<String> {
        read(TOKEN_KEY)
    }

    fn theme(&self) -> Theme {
        read(THEME_KEY).map_or_else(Theme::default, |raw| Theme::parse(&raw))
    }

    fn set_theme(&self, theme: Theme) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(THEME_KEY, theme.as_str());
        }
        self.notify();
    }

    fn sign_out(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(TOKEN_KEY);
        }
        self.notify();
    }

    fn on_change(&self, listener: SessionListener) -> Subscription {
        ListenerRegistry::subscribe(&self.listeners, listener)
    }
}

/// Shared session capability; equality is identity so props stay stable.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionContext>);

impl SessionHandle {
    #[must_use]
    pub fn new(session: impl SessionContext + 'static) -> Self {
        Self(Rc::new(session))
    }

    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserSession::new())
    }

    #[must_use]
    pub fn memory(session: MemorySession) -> Self {
        Self::new(session)
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionContext;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_session_is_empty_off_wasm() {
        let session = BrowserSession::new();
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert_eq!(session.theme(), Theme::Light);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn handle_equality_is_identity() {
        let a = SessionHandle::memory(MemorySession::default());
        let b = a.clone();
        let c = SessionHandle::memory(MemorySession::default());
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn handle_derefs_to_session() {
        let memory = MemorySession::default();
        memory.set_theme(Theme::Dark);
        let handle = SessionHandle::memory(memory);
        assert_eq!(handle.theme(), Theme::Dark);
    }
}
