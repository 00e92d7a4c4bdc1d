//! Tab controller.
//!
//! Panels and tab buttons are tracked separately because a switch may name a
//! panel that does not exist: in that case every panel ends up hidden while
//! the button that asked for the switch is still highlighted.

/// The panels of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Resume,
    CoverLetter,
    Portfolio,
    About,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Resume,
        Panel::CoverLetter,
        Panel::Portfolio,
        Panel::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Panel::Resume => "resume",
            Panel::CoverLetter => "cover-letter",
            Panel::Portfolio => "portfolio",
            Panel::About => "about",
        }
    }

    /// DOM id of the panel element.
    pub fn element_id(self) -> String {
        format!("{}-tab", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Resume => "Resume Builder",
            Panel::CoverLetter => "Cover Letter",
            Panel::Portfolio => "Portfolio",
            Panel::About => "About",
        }
    }

    pub fn from_id(id: &str) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| panel.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    active_panel: Option<Panel>,
    active_button: Option<Panel>,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self {
            active_panel: Some(Panel::Resume),
            active_button: Some(Panel::Resume),
        }
    }
}

impl TabStrip {
    /// Shows the panel named `tab_id` and highlights `trigger`, the button the
    /// switch came from. Callers invoking this programmatically pass the button
    /// they want highlighted.
    pub fn show_tab(&mut self, tab_id: &str, trigger: Panel) {
        self.active_panel = None;
        self.active_button = None;

        if let Some(panel) = Panel::from_id(tab_id) {
            self.active_panel = Some(panel);
        }
        self.active_button = Some(trigger);
    }

    pub fn is_panel_active(&self, panel: Panel) -> bool {
        self.active_panel == Some(panel)
    }

    pub fn is_button_active(&self, button: Panel) -> bool {
        self.active_button == Some(button)
    }

    pub fn active_panel(&self) -> Option<Panel> {
        self.active_panel
    }
}
