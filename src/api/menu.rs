use crate::api::mode::AxisMode;

/// One entry of the axis-mode selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuOption {
    pub mode: AxisMode,
    pub label: &'static str,
}

const ENABLED_OPACITY: f64 = 1.0;
const DISABLED_OPACITY: f64 = 0.3;

/// UI controls: the axis-mode selector and the wide-view toggle.
///
/// The menu only holds presentation state; user choices are forwarded to the
/// engine entry points (`set_mode`, `set_wide_view`) by the host.
#[derive(Debug)]
pub struct Menu {
    options: [MenuOption; 3],
    selected: AxisMode,
    enabled: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    #[must_use]
    pub fn new() -> Self {
        let options = AxisMode::ALL.map(|mode| MenuOption {
            mode,
            label: mode.menu_label(),
        });
        Self {
            options,
            selected: AxisMode::Age,
            enabled: true,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[MenuOption; 3] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> AxisMode {
        self.selected
    }

    pub fn select_option(&mut self, mode: AxisMode) {
        self.selected = mode;
    }

    /// Grayed out and inert while the story player drives the chart.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.enabled {
            ENABLED_OPACITY
        } else {
            DISABLED_OPACITY
        }
    }
}
