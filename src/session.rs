// src/session.rs
//
// Per-view UI state the core cares about: which commitment duration is
// picked for each plan, and which profile tab is showing. Transitions
// are by-value and side-effect free; the owning view drops the whole
// Session on navigation, so a stale one can never corrupt anything.

use std::collections::HashMap;
use std::error::Error;
use std::str::FromStr;

use crate::pricing::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Reviews,
    About,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::About => "About Me",
        }
    }
}

impl FromStr for Tab {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reviews" => Ok(Tab::Reviews),
            "about" => Ok(Tab::About),
            other => Err(format!("Not a profile tab: {other:?}").into()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    durations: HashMap<String, Duration>,
    tab: Tab,
}

impl Session {
    /// Fresh state for a plans view: every plan starts at 12 weeks.
    pub fn for_plans<'a, I>(plan_names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            durations: plan_names
                .into_iter()
                .map(|name| (name.to_string(), Duration::default()))
                .collect(),
            tab: Tab::default(),
        }
    }

    /// 12 weeks for plans nobody has touched (or that were never loaded).
    pub fn duration_for(&self, plan: &str) -> Duration {
        self.durations.get(plan).copied().unwrap_or_default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Replace the selection for one plan; every other entry is untouched.
    /// An unknown plan name is fine — plan identity is caller-supplied.
    pub fn set_duration(mut self, plan: &str, duration: Duration) -> Self {
        self.durations.insert(plan.to_string(), duration);
        self
    }

    pub fn set_tab(mut self, tab: Tab) -> Self {
        self.tab = tab;
        self
    }
}
