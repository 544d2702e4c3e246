//! Dock layout and tab viewer

use egui_dock::{DockState, NodeIndex, TabViewer};

use crate::config::SharedConfig;
use crate::panels::{HierarchyPanel, Panel, PropertiesPanel};
use crate::state::SharedAppState;

/// Panel types for the dock system
pub enum PanelType {
    Hierarchy(HierarchyPanel),
    Properties(PropertiesPanel),
}

impl PanelType {
    pub fn name(&self) -> &str {
        match self {
            PanelType::Hierarchy(p) => p.name(),
            PanelType::Properties(p) => p.name(),
        }
    }
}

/// Tab viewer for dock area
pub struct InspectorTabViewer<'a> {
    pub app_state: &'a SharedAppState,
    pub config: &'a SharedConfig,
}

impl TabViewer for InspectorTabViewer<'_> {
    type Tab = PanelType;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.name().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            PanelType::Hierarchy(panel) => panel.ui(ui, self.app_state, self.config),
            PanelType::Properties(panel) => panel.ui(ui, self.app_state, self.config),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }
}

/// Create the default dock layout
pub fn create_dock_layout() -> DockState<PanelType> {
    let mut dock_state = DockState::new(vec![PanelType::Properties(PropertiesPanel::new())]);

    let surface = dock_state.main_surface_mut();

    // Split left for the object list
    let [_properties, _hierarchy] = surface.split_left(
        NodeIndex::root(),
        0.3,
        vec![PanelType::Hierarchy(HierarchyPanel::new())],
    );

    dock_state
}
