//! Usage: "All windows closed" policy per windowing convention.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowingConvention {
    /// Closing the last window ends the application (Windows, Linux).
    QuitWithLastWindow,
    /// Applications stay alive without windows until explicitly quit (macOS).
    PersistWithoutWindows,
}

impl WindowingConvention {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::PersistWithoutWindows
        } else {
            Self::QuitWithLastWindow
        }
    }
}

pub fn quit_when_all_windows_closed(convention: WindowingConvention) -> bool {
    match convention {
        WindowingConvention::QuitWithLastWindow => true,
        WindowingConvention::PersistWithoutWindows => false,
    }
}

/// Decides an `ExitRequested` event. `exit_code` is `None` only when the last window closed;
/// explicit exits (`app.exit(code)`, installer restarts) always proceed.
pub fn keep_running_on_exit_request(
    exit_code: Option<i32>,
    convention: WindowingConvention,
) -> bool {
    exit_code.is_none() && !quit_when_all_windows_closed(convention)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quits_on_non_persistent_platforms() {
        assert!(quit_when_all_windows_closed(
            WindowingConvention::QuitWithLastWindow
        ));
    }

    #[test]
    fn stays_alive_on_persistent_platforms() {
        assert!(!quit_when_all_windows_closed(
            WindowingConvention::PersistWithoutWindows
        ));
    }

    #[test]
    fn current_convention_matches_target() {
        let expected = if cfg!(target_os = "macos") {
            WindowingConvention::PersistWithoutWindows
        } else {
            WindowingConvention::QuitWithLastWindow
        };
        assert_eq!(WindowingConvention::current(), expected);
    }

    #[test]
    fn last_window_closed_keeps_running_only_when_persistent() {
        assert!(keep_running_on_exit_request(
            None,
            WindowingConvention::PersistWithoutWindows
        ));
        assert!(!keep_running_on_exit_request(
            None,
            WindowingConvention::QuitWithLastWindow
        ));
    }

    #[test]
    fn explicit_exit_always_proceeds() {
        for convention in [
            WindowingConvention::PersistWithoutWindows,
            WindowingConvention::QuitWithLastWindow,
        ] {
            assert!(!keep_running_on_exit_request(Some(0), convention));
            assert!(!keep_running_on_exit_request(Some(1), convention));
        }
    }
}
