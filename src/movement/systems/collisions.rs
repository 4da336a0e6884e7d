//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementTuning, Player};

/// Latest ground sensor reading, written by [`detect_ground`] and consumed by the
/// controller step.
#[derive(Component, Debug, Default)]
pub struct GroundSensor {
    pub touching: bool,
}

/// Center of the ground-check box for a body at `position`.
pub fn ground_check_center(position: Vec2, tuning: &MovementTuning) -> Vec2 {
    position + tuning.ground_check_offset()
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut GroundSensor), With<Player>>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let size = tuning.ground_check_size();
    let probe = Collider::rectangle(size.x, size.y);

    for (transform, mut sensor) in &mut query {
        let center = ground_check_center(transform.translation.truncate(), &tuning);
        let hits = spatial_query.shape_intersections(&probe, center, 0.0, &ground_filter);
        sensor.touching = !hits.is_empty();
    }
}
