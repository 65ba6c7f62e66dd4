//! Named state partitions and their transition tables.
//!
//! A [`Slice`] owns the initial value of one partition and two tables:
//! direct reducers keyed by action name, and [`ExtraReducers`] keyed by
//! `(event, Phase)` for lifecycle events of external async requests.
//! Transitions are pure: they take the old state and return the new one.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// Lifecycle phase of an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Pending,
    Fulfilled,
    Rejected,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Pending => "pending",
            Phase::Fulfilled => "fulfilled",
            Phase::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Phase::Pending),
            "fulfilled" => Ok(Phase::Fulfilled),
            "rejected" => Ok(Phase::Rejected),
            other => Err(format!("unknown phase '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Plain action handled by the slice's own reducers.
    Direct { name: String, payload: Value },
    /// Lifecycle event of an external async request.
    Lifecycle {
        event: String,
        phase: Phase,
        payload: Value,
    },
}

impl Action {
    pub fn direct(name: impl Into<String>, payload: Value) -> Self {
        Action::Direct {
            name: name.into(),
            payload,
        }
    }

    pub fn lifecycle(event: impl Into<String>, phase: Phase, payload: Value) -> Self {
        Action::Lifecycle {
            event: event.into(),
            phase,
            payload,
        }
    }

    /// Parses `"<event>/<phase>"`. Anything whose last segment is not a phase is direct.
    pub fn from_type(action_type: &str, payload: Value) -> Self {
        if let Some((event, phase)) = action_type.rsplit_once('/') {
            if let Ok(phase) = phase.parse::<Phase>() {
                if !event.is_empty() {
                    return Action::lifecycle(event, phase, payload);
                }
            }
        }
        Action::direct(action_type, payload)
    }

    pub fn action_type(&self) -> String {
        match self {
            Action::Direct { name, .. } => name.clone(),
            Action::Lifecycle { event, phase, .. } => format!("{}/{}", event, phase),
        }
    }
}

pub type Transition<S> = fn(&S, &Value) -> S;

/// `(event, phase) -> transition` table. Empty is a valid value.
pub struct ExtraReducers<S> {
    cases: HashMap<(String, Phase), Transition<S>>,
}

impl<S> ExtraReducers<S> {
    pub fn new() -> Self {
        Self {
            cases: HashMap::new(),
        }
    }

    /// Registers a transition. A later case for the same key replaces the earlier one.
    pub fn add_case(mut self, event: impl Into<String>, phase: Phase, f: Transition<S>) -> Self {
        self.cases.insert((event.into(), phase), f);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn transition(&self, state: &S, event: &str, phase: Phase, payload: &Value) -> Option<S> {
        self.cases
            .get(&(event.to_string(), phase))
            .map(|f| f(state, payload))
    }
}

impl<S> Default for ExtraReducers<S> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Slice<S> {
    name: &'static str,
    initial: S,
    reducers: HashMap<String, Transition<S>>,
    extra: ExtraReducers<S>,
}

impl<S: Clone> Slice<S> {
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            name,
            initial,
            reducers: HashMap::new(),
            extra: ExtraReducers::new(),
        }
    }

    pub fn reducer(mut self, name: impl Into<String>, f: Transition<S>) -> Self {
        self.reducers.insert(name.into(), f);
        self
    }

    pub fn extra_reducers(mut self, extra: ExtraReducers<S>) -> Self {
        self.extra = extra;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn initial_state(&self) -> S {
        self.initial.clone()
    }

    pub fn reducer_count(&self) -> usize {
        self.reducers.len() + self.extra.len()
    }

    /// Next state for `action`. Unhandled actions return an unchanged copy.
    pub fn reduce(&self, state: &S, action: &Action) -> S {
        let next = match action {
            Action::Direct { name, payload } => self.reducers.get(name).map(|f| f(state, payload)),
            Action::Lifecycle {
                event,
                phase,
                payload,
            } => self.extra.transition(state, event, *phase, payload),
        };
        next.unwrap_or_else(|| state.clone())
    }
}
