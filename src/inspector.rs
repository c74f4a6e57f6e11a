use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

/// Every `ResourceInspectorPlugin` in the app runs only while this is set.
#[derive(Resource, Reflect, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct InspectorVisibility(pub bool);

impl InspectorVisibility {
    pub const fn toggle(&mut self) { self.0 = !self.0; }
}

pub struct InspectorPlugin;

impl Plugin for InspectorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .init_resource::<InspectorVisibility>();
    }
}

pub fn inspectors_visible(visibility: Res<InspectorVisibility>) -> bool { visibility.0 }
