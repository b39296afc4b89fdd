use bevy_ecs::system::ResMut;

use crate::systems::components::SessionStage;

/// Ticks down the capture flash window.
///
/// Runs ahead of the entity systems so the frame on which the counter
/// expires resumes normal updates immediately.
pub fn stage_system(mut stage: ResMut<SessionStage>) {
    if let SessionStage::Flashing { remaining_ticks } = *stage {
        *stage = if remaining_ticks > 1 {
            SessionStage::Flashing {
                remaining_ticks: remaining_ticks - 1,
            }
        } else {
            tracing::trace!("Flash overlay expired");
            SessionStage::Running
        };
    }
}
