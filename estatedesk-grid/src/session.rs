//! Signed-in user, token and preferences, injected into list pages.
//!
//! Pages never read browser storage directly; they receive a
//! [`SessionContext`] so tests and native tools can supply [`MemorySession`].

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl SessionUser {
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSession`] when `json` is not a user record.
    pub fn from_json(json: &str) -> Result<Self, GridError> {
        serde_json::from_str(json).map_err(|e| GridError::InvalidSession(e.to_string()))
    }
}

/// Grants such as `tenant.delete`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Permissions(BTreeSet<String>);

impl Permissions {
    #[must_use]
    pub fn from_grants<I, S>(grants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(grants.into_iter().map(Into::into).collect())
    }

    /// `*` grants everything.
    #[must_use]
    pub fn can(&self, grant: &str) -> bool {
        self.0.contains("*") || self.0.contains(grant)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

/// Point-in-time copy handed to change listeners.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub theme: Theme,
}

impl SessionSnapshot {
    #[must_use]
    pub fn permissions(&self) -> Permissions {
        self.user
            .as_ref()
            .map(|u| Permissions::from_grants(u.permissions.iter().cloned()))
            .unwrap_or_default()
    }
}

pub type SessionListener = Rc<dyn Fn(&SessionSnapshot)>;

/// Registered listeners; a [`Subscription`] removes its entry on drop.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(u64, SessionListener)>,
}

impl ListenerRegistry {
    fn add(&mut self, listener: SessionListener) -> u64 {
        self.next_id += 1;
        self.listeners.push((self.next_id, listener));
        self.next_id
    }

    fn remove(&mut self, id: u64) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    /// Call every listener. Listeners are cloned out first so they may
    /// subscribe or unsubscribe while being notified.
    pub fn notify(registry: &Rc<RefCell<Self>>, snapshot: &SessionSnapshot) {
        let listeners: Vec<SessionListener> = registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }

    #[must_use]
    pub fn subscribe(registry: &Rc<RefCell<Self>>, listener: SessionListener) -> Subscription {
        let id = registry.borrow_mut().add(listener);
        Subscription {
            registry: Rc::downgrade(registry),
            id,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[must_use = "dropping a subscription unsubscribes the listener"]
pub struct Subscription {
    registry: Weak<RefCell<ListenerRegistry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}

pub trait SessionContext {
    fn user(&self) -> Option<SessionUser>;
    fn token(&self) -> Option<String>;
    fn theme(&self) -> Theme;
    fn set_theme(&self, theme: Theme);
    /// Forget the user and token; the theme is kept.
    fn sign_out(&self);
    fn on_change(&self, listener: SessionListener) -> Subscription;

    fn permissions(&self) -> Permissions {
        self.user()
            .map(|u| Permissions::from_grants(u.permissions))
            .unwrap_or_default()
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user(),
            token: self.token(),
            theme: self.theme(),
        }
    }

    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

/// In-memory session for tests and native tools.
#[derive(Clone, Default)]
pub struct MemorySession {
    state: Rc<RefCell<SessionSnapshot>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
}

impl MemorySession {
    #[must_use]
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            state: Rc::new(RefCell::new(snapshot)),
            listeners: Rc::default(),
        }
    }

    fn update(&self, apply: impl FnOnce(&mut SessionSnapshot)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            apply(&mut state);
            state.clone()
        };
        ListenerRegistry::notify(&self.listeners, &snapshot);
    }

    pub fn sign_in(&self, user: SessionUser, token: impl Into<String>) {
        let token = token.into();
        self.update(|s| {
            s.user = Some(user);
            s.token = Some(token);
        });
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl SessionContext for MemorySession {
    fn user(&self) -> Option<SessionUser> {
        self.state.borrow().user.clone()
    }

    fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    fn theme(&self) -> Theme {
        self.state.borrow().theme
    }

    fn set_theme(&self, theme: Theme) {
        self.update(|s| s.theme = theme);
    }

    fn sign_out(&self) {
        self.update(|s| {
            s.user = None;
            s.token = None;
        });
    }

    fn on_change(&self, listener: SessionListener) -> Subscription {
        ListenerRegistry::subscribe(&self.listeners, listener)
    }
}
