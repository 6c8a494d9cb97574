use async_graphql::{Enum, SimpleObject};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
pub enum Route {
    Home,
    Learn,
    Quiz,
    Library,
    Videos,
    News,
    Chat,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Learn,
        Route::Library,
        Route::Quiz,
        Route::Videos,
        Route::News,
        Route::Chat,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Learn => "/learn",
            Route::Quiz => "/quiz",
            Route::Library => "/library",
            Route::Videos => "/videos",
            Route::News => "/news",
            Route::Chat => "/chat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Learn => "Learn",
            Route::Quiz => "Quiz",
            Route::Library => "Library",
            Route::Videos => "Videos",
            Route::News => "News",
            Route::Chat => "Chat",
        }
    }

    /// Exact path match, ignoring one trailing slash. Anything else is unrouted.
    pub fn from_path(path: &str) -> Option<Route> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
pub struct NavItem {
    pub route: Route,
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Header navigation entries in display order, with `current` marked active.
pub fn navigation(current: Option<Route>) -> Vec<NavItem> {
    Route::ALL
        .into_iter()
        .filter(|r| *r != Route::Home)
        .map(|route| NavItem {
            route,
            label: route.label().to_string(),
            href: route.path().to_string(),
            active: current == Some(route),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_paths_resolve() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/learn"), Some(Route::Learn));
        assert_eq!(Route::from_path("/quiz/"), Some(Route::Quiz));
        assert_eq!(Route::from_path("/chat"), Some(Route::Chat));
    }

    #[test]
    fn unrecognised_paths_are_none() {
        assert_eq!(Route::from_path("/about"), None);
        assert_eq!(Route::from_path("/learn/extra"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn navigation_marks_only_current_route() {
        let items = navigation(Some(Route::Quiz));
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].href, "/learn");
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items.iter().any(|i| i.route == Route::Quiz && i.active));
    }
}
