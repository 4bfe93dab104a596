//! The map's county selection rule.
//!
//! Zero or one county is active at any time. Clicking the active county
//! deselects it and restores the overview; clicking any other county
//! moves the selection there in one step.

/// Next active county after a click.
pub fn toggle_selection(active: Option<&str>, clicked: &str) -> Option<String> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_selects() {
        assert_eq!(toggle_selection(None, "臺北市"), Some("臺北市".to_string()));
    }

    #[test]
    fn test_click_active_deselects() {
        assert_eq!(toggle_selection(Some("臺北市"), "臺北市"), None);
    }

    #[test]
    fn test_click_other_switches() {
        assert_eq!(
            toggle_selection(Some("臺北市"), "高雄市"),
            Some("高雄市".to_string())
        );
    }

    #[test]
    fn test_any_click_sequence_keeps_at_most_one_active() {
        let clicks = ["a", "b", "b", "c", "c", "a", "a", "a"];
        let mut active: Option<String> = None;
        for click in clicks {
            active = toggle_selection(active.as_deref(), click);
            // The invariant is structural: Option holds at most one name.
            if let Some(name) = &active {
                assert!(clicks.contains(&name.as_str()));
            }
        }
        assert_eq!(active, Some("a".to_string()));
    }
}
