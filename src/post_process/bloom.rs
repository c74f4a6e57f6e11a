use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;

use super::config::PostProcessConfig;
use crate::camera::GalleryCamera;
use crate::schedule::GallerySet;

pub struct BloomPlugin;

impl Plugin for BloomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_bloom.in_set(GallerySet::Presentation));
    }
}

fn bloom_settings(config: &PostProcessConfig) -> Bloom {
    let mut bloom = Bloom::NATURAL;
    bloom.intensity = config.bloom_intensity;
    bloom.low_frequency_boost = config.bloom_low_frequency_boost;
    bloom.high_pass_frequency = config.bloom_high_pass_frequency;
    bloom
}

// remove and insert Bloom to toggle it off and on
fn update_bloom(
    mut commands: Commands,
    config: Res<PostProcessConfig>,
    camera: Single<(Entity, Option<&mut Bloom>), With<GalleryCamera>>,
) {
    if !config.is_changed() {
        return;
    }

    let (entity, bloom) = camera.into_inner();
    match (config.enabled, bloom) {
        (true, Some(mut bloom)) => *bloom = bloom_settings(&config),
        (true, None) => {
            commands.entity(entity).insert(bloom_settings(&config));
        },
        (false, Some(_)) => {
            commands.entity(entity).remove::<Bloom>();
        },
        (false, None) => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_follow_the_config() {
        let config = PostProcessConfig {
            bloom_intensity: 0.4,
            bloom_low_frequency_boost: 0.2,
            bloom_high_pass_frequency: 0.9,
            ..default()
        };
        let bloom = bloom_settings(&config);
        assert_eq!(bloom.intensity, 0.4);
        assert_eq!(bloom.low_frequency_boost, 0.2);
        assert_eq!(bloom.high_pass_frequency, 0.9);
    }
}
