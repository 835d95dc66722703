//! Page router
//!
//! Exactly one page is active. Controllers that need to react to navigation
//! register an on-enter hook for their page at setup; `show_page` runs the
//! hooks of the target page in registration order.

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Settings,
    Masks,
    Logs,
    Biometric,
    Archive,
}

impl Page {
    pub fn all() -> Vec<Page> {
        Page::iter().collect()
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Settings => "Settings",
            Page::Masks => "Masks",
            Page::Logs => "Logs",
            Page::Biometric => "Biometric",
            Page::Archive => "Archive",
        }
    }

    pub fn index(self) -> usize {
        Page::iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Page::iter().nth(index)
    }

    pub fn next(self) -> Page {
        Page::from_index(self.index() + 1).unwrap_or(Page::Dashboard)
    }
}

pub type EnterHook = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

#[derive(Default)]
pub struct PageRouter {
    active: RwLock<Page>,
    hooks: RwLock<HashMap<Page, Vec<EnterHook>>>,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Page {
        *self.active.read()
    }

    pub fn register_on_enter<F>(&self, page: Page, hook: F)
    where
        F: Fn() -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        self.hooks.write().entry(page).or_default().push(Arc::new(hook));
    }

    pub fn hook_count(&self, page: Page) -> usize {
        self.hooks.read().get(&page).map_or(0, Vec::len)
    }

    /// Activate `page` and run its hooks. Re-entering the active page runs
    /// them again, the same as clicking its nav link twice.
    pub async fn show_page(&self, page: Page) {
        *self.active.write() = page;
        debug!("Switched to page {}", page);

        let hooks = self.hooks.read().get(&page).cloned().unwrap_or_default();
        for hook in hooks {
            hook().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use parking_lot::Mutex;

    #[tokio::test]
    async fn test_hooks_run_in_order_for_target_page_only() {
        let router = PageRouter::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let calls = calls.clone();
            router.register_on_enter(Page::Archive, move || {
                let calls = calls.clone();
                async move { calls.lock().push(tag) }.boxed()
            });
        }
        let other = calls.clone();
        router.register_on_enter(Page::Logs, move || {
            let other = other.clone();
            async move { other.lock().push("logs") }.boxed()
        });

        router.show_page(Page::Archive).await;
        assert_eq!(router.active(), Page::Archive);
        assert_eq!(*calls.lock(), vec!["first", "second"]);

        router.show_page(Page::Masks).await;
        assert_eq!(router.active(), Page::Masks);
        assert_eq!(calls.lock().len(), 2);
    }

    #[test]
    fn test_page_cycle_and_parse() {
        assert_eq!(Page::default(), Page::Dashboard);
        assert_eq!(Page::Archive.next(), Page::Dashboard);
        assert_eq!(Page::from_index(3), Some(Page::Logs));
        assert_eq!("biometric".parse::<Page>().ok(), Some(Page::Biometric));
        assert_eq!(Page::Settings.to_string(), "settings");
        assert_eq!(Page::all().len(), 6);
    }
}
