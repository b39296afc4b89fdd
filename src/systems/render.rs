use bevy_ecs::{
    query::{With, Without},
    system::{Query, Res, ResMut},
};

use crate::{
    config::SessionConfig,
    constants::{ALERT_PROMPT_LABEL, PROMPT_MARGIN},
    scene::{AlertPrompt, Overlay, Scene, SceneSprite, SpriteKind},
    systems::components::{AlertState, Avatar, Guardian, Position, SessionStage, SpriteSize, TargetLayout},
};

/// Rebuilds the [`Scene`] the host draws this frame.
///
/// Sprites are emitted back-to-front: targets, then the avatar, then the
/// guardian. While the alert is active the prompt is re-anchored above the
/// guardian every frame so it tracks movement.
pub fn scene_system(
    stage: Res<SessionStage>,
    alert: Res<AlertState>,
    config: Res<SessionConfig>,
    targets: Res<TargetLayout>,
    mut scene: ResMut<Scene>,
    avatars: Query<(&Position, &SpriteSize), (With<Avatar>, Without<Guardian>)>,
    guardians: Query<(&Position, &SpriteSize), (With<Guardian>, Without<Avatar>)>,
) {
    scene.sprites.clear();
    scene.overlay = None;
    scene.alert_prompt = None;

    match *stage {
        SessionStage::NotStarted => {
            scene.overlay = Some(Overlay::StartPrompt);
        }
        SessionStage::Flashing { .. } => {
            scene.overlay = Some(Overlay::Flash);
        }
        SessionStage::Running => {
            for target in &targets.0 {
                scene.sprites.push(SceneSprite {
                    kind: SpriteKind::Target,
                    position: *target,
                    size: config.target_size,
                });
            }

            if let Ok((position, size)) = avatars.single() {
                scene.sprites.push(SceneSprite {
                    kind: SpriteKind::Avatar,
                    position: position.0,
                    size: size.0,
                });
            }

            if let Ok((position, size)) = guardians.single() {
                scene.sprites.push(SceneSprite {
                    kind: SpriteKind::Guardian,
                    position: position.0,
                    size: size.0,
                });

                if matches!(*alert, AlertState::Alert) {
                    scene.alert_prompt = Some(AlertPrompt {
                        position: position.0 - glam::Vec2::new(0.0, size.half().y + PROMPT_MARGIN),
                        label: ALERT_PROMPT_LABEL,
                    });
                }
            }
        }
    }
}
