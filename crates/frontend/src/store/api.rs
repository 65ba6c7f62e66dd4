use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::slice::{Action, ExtraReducers, Slice};

pub const API_SLICE: &str = "api";

/// Credentials partition. `auth` is either a token or `None`, never both-ish.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiState {
    pub auth: Option<String>,
}

// No reducers yet. Auth request handlers go into the extra reducers table.
static SLICE: Lazy<Slice<ApiState>> = Lazy::new(|| {
    Slice::new(API_SLICE, ApiState::default()).extra_reducers(ExtraReducers::new())
});

pub fn api_slice() -> &'static Slice<ApiState> {
    &SLICE
}

/// Reactive holder of [`ApiState`]. Writes go through [`ApiStore::dispatch`] only.
#[derive(Clone, Copy)]
pub struct ApiStore {
    state: RwSignal<ApiState>,
}

impl ApiStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(api_slice().initial_state()),
        }
    }

    pub fn state(&self) -> ReadSignal<ApiState> {
        self.state.read_only()
    }

    pub fn get(&self) -> ApiState {
        self.state.get_untracked()
    }

    pub fn dispatch(&self, action: Action) {
        let slice = api_slice();
        let next = self
            .state
            .with_untracked(|current| slice.reduce(current, &action));
        let changed = self.state.with_untracked(|current| *current != next);
        log::debug!(
            "dispatch '{}' to '{}' (changed: {})",
            action.action_type(),
            slice.name(),
            changed
        );
        if changed {
            self.state.set(next);
        }
    }
}

impl Default for ApiStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the API store provided by `App`.
pub fn use_api_store() -> ApiStore {
    use_context::<ApiStore>().expect("ApiStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::slice::Phase;
    use leptos::reactive::owner::Owner;
    use serde_json::{json, Value};

    #[test]
    fn test_initial_state_is_absent_auth() {
        let slice = api_slice();
        assert_eq!(slice.name(), "api");
        assert_eq!(slice.initial_state(), ApiState { auth: None });
        assert_eq!(slice.initial_state(), slice.initial_state());
        assert_eq!(slice.reducer_count(), 0);
    }

    #[test]
    fn test_state_serializes_absent_as_null() {
        assert_eq!(
            serde_json::to_value(ApiState::default()).unwrap(),
            json!({ "auth": null })
        );
        let restored: ApiState = serde_json::from_value(json!({ "auth": "abc" })).unwrap();
        assert_eq!(restored.auth.as_deref(), Some("abc"));
    }

    #[test]
    fn test_store_reads_are_stable() {
        let store = ApiStore::new();
        let first = store.get();
        let second = store.get();
        assert_eq!(first, ApiState { auth: None });
        assert_eq!(first, second);
    }

    #[test]
    fn test_dispatch_without_reducers_changes_nothing() {
        let store = ApiStore::new();
        let before = store.get();
        for action in [
            Action::direct("setAuth", json!("token")),
            Action::lifecycle("auth/login", Phase::Pending, Value::Null),
            Action::lifecycle("auth/login", Phase::Fulfilled, json!({ "token": "t" })),
            Action::lifecycle("auth/login", Phase::Rejected, json!("denied")),
            Action::from_type("auth/logout/fulfilled", Value::Null),
        ] {
            store.dispatch(action);
            assert_eq!(store.get(), before);
        }
    }

    #[test]
    fn test_context_store_state_signal() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(ApiStore::new());
            let store = use_api_store();
            let state = store.state();
            assert_eq!(state.get_untracked(), ApiState { auth: None });

            store.dispatch(Action::lifecycle("auth", Phase::Fulfilled, json!("token")));
            assert_eq!(state.get_untracked(), ApiState { auth: None });
            assert_eq!(use_api_store().get(), state.get_untracked());
        });
        owner.cleanup();
    }
}
