//! State shared by every list page: query, current page of records, loading
//! flag and toasts, wired to [`QueryController`] so stale responses are dropped.

use crate::api::ApiClient;
use crate::components::daisy_ui::organisms::{ToastAction, ToastKind, ToastQueue};
use crate::session::SessionHandle;
use estatedesk_grid::{
    ApiError, ColumnKey, ListQuery, Paged, QueryController, RequestTicket, RowId, SessionContext,
    SortState,
};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Sign out when `err` says the stored credentials were rejected.
///
/// Returns whether the session was ended.
pub fn expire_session(session: &dyn SessionContext, err: &ApiError) -> bool {
    if !err.ends_session() || session.token().is_none() {
        return false;
    }
    log::warn!("credentials rejected; signing out");
    session.sign_out();
    true
}

pub struct ListPage<T: 'static> {
    pub resource: &'static str,
    pub controller: Rc<RefCell<QueryController>>,
    pub query: UseStateHandle<ListQuery>,
    pub data: UseStateHandle<Paged<T>>,
    pub loading: UseStateHandle<bool>,
    pub search_text: UseStateHandle<String>,
    pub toasts: UseReducerHandle<ToastQueue>,
    pub api: ApiClient,
    pub session: SessionHandle,
}

impl<T> Clone for ListPage<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            controller: Rc::clone(&self.controller),
            query: self.query.clone(),
            data: self.data.clone(),
            loading: self.loading.clone(),
            search_text: self.search_text.clone(),
            toasts: self.toasts.clone(),
            api: self.api.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T> ListPage<T>
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
{
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.dispatch(ToastAction::Push(kind, message.into()));
    }

    /// Issue a fresh ticket for the current query and fetch it.
    pub fn refresh(&self) {
        let ticket = self.controller.borrow_mut().begin();
        self.load(ticket);
    }

    pub fn load(&self, ticket: RequestTicket) {
        self.query.set(self.controller.borrow().query().clone());
        self.loading.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            let page = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let query = page.controller.borrow().query().clone();
                let token = page.session.token();
                let result = page
                    .api
                    .list::<T>(page.resource, &query, token.as_deref())
                    .await;
                page.apply(ticket, result);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!(
                "{} request #{} not sent outside the browser",
                self.resource,
                ticket.sequence()
            );
        }
    }

    /// Apply a response unless a newer request has been issued since.
    pub fn apply(&self, ticket: RequestTicket, result: Result<Paged<T>, ApiError>) {
        if !self.controller.borrow().is_current(ticket) {
            log::debug!(
                "dropping stale {} response #{}",
                self.resource,
                ticket.sequence()
            );
            return;
        }
        match result {
            Ok(page) => {
                let corrected = self.controller.borrow_mut().reconcile_total(page.total);
                if corrected.is_some() {
                    self.refresh();
                    return;
                }
                self.data.set(page);
                self.loading.set(false);
            }
            Err(err) => {
                log::error!("loading {} failed: {err}", self.resource);
                self.loading.set(false);
                expire_session(&*self.session, &err);
                self.notify(ToastKind::Error, err.to_string());
            }
        }
    }

    pub fn on_change_page(&self) -> Callback<u32> {
        let page = self.clone();
        Callback::from(move |n: u32| {
            let ticket = page.controller.borrow_mut().set_page(n);
            if let Some(ticket) = ticket {
                page.load(ticket);
            }
        })
    }

    pub fn on_sort(&self) -> Callback<ColumnKey> {
        let page = self.clone();
        Callback::from(move |key: ColumnKey| {
            let next = SortState::toggle(page.controller.borrow().query().sort.as_ref(), &key);
            let ticket = page.controller.borrow_mut().set_sort(next);
            if let Some(ticket) = ticket {
                page.load(ticket);
            }
        })
    }

    pub fn on_filter(&self, key: &'static str) -> Callback<String> {
        let page = self.clone();
        Callback::from(move |value: String| {
            let ticket = page
                .controller
                .borrow_mut()
                .set_filter(key, Some(value.as_str()));
            if let Some(ticket) = ticket {
                page.load(ticket);
            }
        })
    }

    /// Search input handler. The request fires after the debounce delay and
    /// only if no later keystroke superseded it.
    pub fn on_search(&self) -> Callback<String> {
        let page = self.clone();
        Callback::from(move |raw: String| {
            page.search_text.set(raw.clone());
            let ticket = page.controller.borrow_mut().set_search(&raw);
            let Some(ticket) = ticket else {
                return;
            };
            #[cfg(target_arch = "wasm32")]
            {
                let page = page.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) =
                        crate::dom::sleep_ms(estatedesk_grid::SEARCH_DEBOUNCE_MS).await
                    {
                        log::warn!("debounce timer failed: {}", crate::dom::js_error_message(&err));
                    }
                    if page.controller.borrow().is_current(ticket) {
                        page.load(ticket);
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                page.load(ticket);
            }
        })
    }

    /// Delete `ids` one by one, then reload. `on_done` receives the failures.
    pub fn delete_many(&self, ids: Vec<RowId>, on_done: Callback<Vec<RowId>>) {
        #[cfg(target_arch = "wasm32")]
        {
            let page = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token = page.session.token();
                let mut failed = Vec::new();
                for id in ids {
                    if let Err(err) = page.api.delete(page.resource, &id, token.as_deref()).await {
                        log::error!("deleting {} {id} failed: {err}", page.resource);
                        failed.push(id);
                    }
                }
                on_done.emit(failed);
                page.refresh();
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            log::debug!("{} delete of {} rows skipped outside the browser", self.resource, ids.len());
            on_done.emit(Vec::new());
        }
    }
}

#[hook]
pub fn use_list_page<T>(
    resource: &'static str,
    session: SessionHandle,
    api: ApiClient,
    initial: Option<Paged<T>>,
) -> ListPage<T>
where
    T: Clone + PartialEq + DeserializeOwned + 'static,
{
    let controller = use_mut_ref(QueryController::default);
    let query = {
        let controller = Rc::clone(&controller);
        use_state(move || controller.borrow().query().clone())
    };
    let seeded = initial.is_some();
    let data = use_state(move || initial.unwrap_or_default());
    let loading = use_state(move || !seeded);
    let search_text = use_state(String::new);
    let toasts = use_reducer(ToastQueue::default);

    let page = ListPage {
        resource,
        controller,
        query,
        data,
        loading,
        search_text,
        toasts,
        api,
        session,
    };

    {
        let page = page.clone();
        use_effect_with((), move |()| {
            if !seeded {
                page.refresh();
            }
            || ()
        });
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use estatedesk_grid::{MemorySession, SessionSnapshot, SessionUser};
    use std::cell::Cell;

    fn signed_in() -> MemorySession {
        let session = MemorySession::default();
        session.sign_in(
            SessionUser {
                id: "u-9".into(),
                name: "Ines Park".into(),
                email: None,
                role: None,
                permissions: vec!["tenant.delete".into()],
            },
            "tok",
        );
        session
    }

    #[test]
    fn unauthorized_response_signs_out() {
        let session = signed_in();
        let seen = Rc::new(Cell::new(0));
        let _subscription = session.on_change(Rc::new({
            let seen = Rc::clone(&seen);
            move |snapshot: &SessionSnapshot| {
                assert!(snapshot.user.is_none());
                seen.set(seen.get() + 1);
            }
        }));

        assert!(expire_session(&session, &ApiError::Unauthorized));
        assert!(session.token().is_none());
        assert!(!session.permissions().can("tenant.delete"));
        assert_eq!(seen.get(), 1);

        assert!(!expire_session(&session, &ApiError::Unauthorized));
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn other_failures_keep_the_session() {
        let session = signed_in();
        assert!(!expire_session(&session, &ApiError::Network("offline".into())));
        assert!(!expire_session(
            &session,
            &ApiError::from_status(403, "forbidden")
        ));
        assert!(session.is_authenticated());
    }
}
