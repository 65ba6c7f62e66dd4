use crate::routes::registry::{registry, Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub route: Route,
    pub active: bool,
}

/// One entry per registered route, in declared order, active on exact path match.
pub fn tab_states(location: &str) -> Vec<TabState> {
    let reg = registry();
    reg.routes()
        .iter()
        .map(|route| TabState {
            route: *route,
            active: reg.is_active(route, location),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(location: &str) -> Vec<&'static str> {
        tab_states(location)
            .into_iter()
            .filter(|t| t.active)
            .map(|t| t.route.label)
            .collect()
    }

    #[test]
    fn test_exactly_one_active_for_registered_paths() {
        assert_eq!(active_labels("/"), vec!["Home"]);
        assert_eq!(active_labels("http"), vec!["HTTP"]);
        assert_eq!(active_labels("twitchbot"), vec!["TwitchBot"]);
        assert_eq!(active_labels("stulbe"), vec!["Stulbe"]);
        assert_eq!(active_labels("streamlabs"), vec!["StreamLabs"]);
    }

    #[test]
    fn test_none_active_for_unknown_path() {
        assert!(active_labels("settings").is_empty());
        assert!(active_labels("/twitchbot").is_empty());
        assert_eq!(tab_states("settings").len(), 5);
    }

    #[test]
    fn test_order_is_declared_order() {
        let labels: Vec<&str> = tab_states("/").iter().map(|t| t.route.label).collect();
        assert_eq!(labels, vec!["Home", "HTTP", "TwitchBot", "Stulbe", "StreamLabs"]);
    }
}
