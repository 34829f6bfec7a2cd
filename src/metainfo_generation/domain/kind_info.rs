/// Input methods a GUI application can be operated with.
///
/// Pointer/keyboard is the assumed default for desktop applications;
/// the other flags mark explicit support for additional input hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputControls {
    pub pointer_keyboard: bool,
    pub touch: bool,
    pub gamepad: bool,
    pub tablet: bool,
}

impl Default for InputControls {
    fn default() -> Self {
        Self {
            pointer_keyboard: true,
            touch: false,
            gamepad: false,
            tablet: false,
        }
    }
}

impl InputControls {
    /// Normalizes the flag set: if none of pointer/touch/gamepad is set,
    /// pointer/keyboard operation is assumed.
    pub fn normalized(self) -> Self {
        if !self.pointer_keyboard && !self.touch && !self.gamepad {
            Self {
                pointer_keyboard: true,
                ..self
            }
        } else {
            self
        }
    }

    /// Whether any input method beyond the pointer/keyboard default is set.
    pub fn has_non_default(&self) -> bool {
        self.touch || self.gamepad || self.tablet
    }
}

/// Extension data for desktop (GUI) applications.
#[derive(Debug, Clone, Default)]
pub struct GuiAppInfo {
    pub controls: InputControls,
    /// Ordered screenshot URLs; the first one becomes the default screenshot
    pub screenshots: Vec<String>,
    /// Explicit desktop-entry file name; when absent the launchable ID is
    /// derived from the component ID
    pub desktop_entry_name: Option<String>,
    /// Category pair for a generated desktop entry
    pub categories: Vec<String>,
    /// Stock icon name
    pub icon_name: Option<String>,
    /// Name of the installed executable
    pub binary: Option<String>,
    /// Minimum display length in logical pixels (honored when >= 10)
    pub display_length: Option<u32>,
}

/// Extension data for console applications.
#[derive(Debug, Clone, Default)]
pub struct ConsoleAppInfo {
    pub categories: Vec<String>,
    pub icon_name: String,
    pub binary: String,
}

/// Extension data for addon components.
#[derive(Debug, Clone, Default)]
pub struct AddonInfo {
    /// IDs of the components this addon extends (at least one)
    pub extends: Vec<String>,
    pub icon_name: Option<String>,
}

/// Extension data for service components.
#[derive(Debug, Clone, Default)]
pub struct ServiceInfo {
    /// One or two categories
    pub categories: Vec<String>,
    pub icon_name: String,
    /// Name of the service launcher (e.g. a systemd unit)
    pub service_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_controls_default() {
        let controls = InputControls::default();
        assert!(controls.pointer_keyboard);
        assert!(!controls.touch);
        assert!(!controls.gamepad);
        assert!(!controls.tablet);
    }

    #[test]
    fn test_input_controls_normalized_restores_default() {
        let controls = InputControls {
            pointer_keyboard: false,
            touch: false,
            gamepad: false,
            tablet: true,
        };
        let normalized = controls.normalized();
        assert!(normalized.pointer_keyboard);
        assert!(normalized.tablet);
    }

    #[test]
    fn test_input_controls_normalized_keeps_touch_only() {
        let controls = InputControls {
            pointer_keyboard: false,
            touch: true,
            gamepad: false,
            tablet: false,
        };
        let normalized = controls.normalized();
        assert!(!normalized.pointer_keyboard);
        assert!(normalized.touch);
    }

    #[test]
    fn test_input_controls_has_non_default() {
        assert!(!InputControls::default().has_non_default());
        let controls = InputControls {
            gamepad: true,
            ..InputControls::default()
        };
        assert!(controls.has_non_default());
    }
}
