//! This module contains the session controller that owns the world and loop.

use bevy_ecs::{
    entity::Entity,
    event::{EventRegistry, Events},
    schedule::{IntoScheduleConfigs, Schedule},
    world::World,
};
use glam::Vec2;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use smallvec::SmallVec;

use crate::{
    audio::AudioSink,
    config::SessionConfig,
    constants::HOME_PLACEMENT_ATTEMPTS,
    error::{GameError, GameResult},
    events::SessionEvent,
    helper::avatar_start,
    scene::Scene,
    systems::{
        alert_system, audio_system, avatar_follow_system, control_system, guardian_movement_system, scene_system,
        stage_system, target_selection_system, AlertState, Avatar, AvatarBundle, AudioEvent, AudioOutput, Guardian,
        GuardianBundle, Home, Playfield, PointerState, Position, SelectedTarget, SessionStage, SpriteSize, TargetLayout,
    },
};

/// The `Session` struct is the main entry point for the interaction loop.
///
/// It owns the world and schedule, and is the single place host glue talks
/// to: the host samples the pointer into [`Session::tick`] every frame,
/// queues clicks and visibility changes with [`Session::queue_event`], and
/// draws the [`Scene`] left behind by the tick.
pub struct Session {
    pub world: World,
    pub schedule: Schedule,
    avatar: Entity,
    guardian: Entity,
}

impl Session {
    /// Creates a session with an OS-seeded home placement.
    pub fn new(config: SessionConfig, playfield: Vec2, sink: Box<dyn AudioSink>) -> GameResult<Session> {
        Self::from_rng(config, playfield, sink, SmallRng::from_os_rng())
    }

    /// Creates a session with a deterministic home placement.
    pub fn with_seed(config: SessionConfig, playfield: Vec2, sink: Box<dyn AudioSink>, seed: u64) -> GameResult<Session> {
        Self::from_rng(config, playfield, sink, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(config: SessionConfig, playfield: Vec2, sink: Box<dyn AudioSink>, mut rng: SmallRng) -> GameResult<Session> {
        config.validate()?;

        if playfield.x <= config.guardian_size.x || playfield.y <= config.guardian_size.y {
            return Err(GameError::InvalidConfig(format!(
                "playfield {playfield} cannot contain the guardian footprint {}",
                config.guardian_size
            )));
        }
        if playfield.x <= config.avatar_size.x || playfield.y <= config.avatar_size.y {
            return Err(GameError::InvalidConfig(format!(
                "playfield {playfield} cannot contain the avatar footprint {}",
                config.avatar_size
            )));
        }

        let targets = layout_targets(playfield, config.target_count);
        let home = place_home(&mut rng, playfield, config.guardian_size, &targets, config.home_separation())?;
        let start = avatar_start(playfield, config.avatar_size);

        let mut world = World::default();

        EventRegistry::register_event::<SessionEvent>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);

        world.insert_resource(Playfield(playfield));
        world.insert_resource(PointerState(start));
        world.insert_resource(TargetLayout(targets));
        world.insert_resource(Home(home));
        world.insert_resource(SelectedTarget(None));
        world.insert_resource(SessionStage::NotStarted);
        world.insert_resource(AlertState::Calm);
        world.insert_resource(Scene::default());
        world.insert_resource(config);

        world.insert_non_send_resource(AudioOutput(sink));

        let avatar = world
            .spawn(AvatarBundle {
                avatar: Avatar,
                position: Position(start),
                size: SpriteSize(config.avatar_size),
            })
            .id();
        let guardian = world
            .spawn(GuardianBundle {
                guardian: Guardian,
                position: Position(home),
                size: SpriteSize(config.guardian_size),
            })
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                control_system,
                stage_system,
                avatar_follow_system,
                target_selection_system,
                guardian_movement_system,
                alert_system,
                scene_system,
                audio_system,
            )
                .chain(),
        );

        tracing::debug!(?playfield, ?home, targets = config.target_count, "Session created");

        Ok(Session {
            world,
            schedule,
            avatar,
            guardian,
        })
    }

    /// Queues an inbound host event; it is drained at the top of the next tick.
    pub fn queue_event(&mut self, event: SessionEvent) {
        self.world.send_event(event);
    }

    /// Updates the playfield dimensions after a host resize.
    ///
    /// Targets and home keep their session-start positions; moving entities
    /// clamp into the new bounds on their next update.
    pub fn resize(&mut self, playfield: Vec2) {
        self.world.resource_mut::<Playfield>().0 = playfield;
    }

    /// Advances the loop one frame.
    ///
    /// Samples the pointer, drains queued events, updates every entity, steps
    /// the alert state machine, and rebuilds the scene. Exactly one full
    /// iteration per call; the host owns the timing.
    pub fn tick(&mut self, pointer: Vec2) {
        self.world.resource_mut::<PointerState>().0 = pointer;

        self.schedule.run(&mut self.world);

        // Swap the double-buffered event queues so consumed events are
        // dropped instead of accumulating across frames.
        self.world.resource_mut::<Events<SessionEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
    }

    /// The scene produced by the most recent tick.
    pub fn scene(&self) -> &Scene {
        self.world.resource::<Scene>()
    }

    pub fn stage(&self) -> SessionStage {
        *self.world.resource::<SessionStage>()
    }

    pub fn alert(&self) -> AlertState {
        *self.world.resource::<AlertState>()
    }

    pub fn selected_target(&self) -> Option<usize> {
        self.world.resource::<SelectedTarget>().0
    }

    pub fn playfield(&self) -> Vec2 {
        self.world.resource::<Playfield>().0
    }

    /// The fixed target positions, in selection order.
    pub fn targets(&self) -> &[Vec2] {
        &self.world.resource::<TargetLayout>().0
    }

    /// The guardian's idle position, fixed at session start.
    pub fn home(&self) -> Vec2 {
        self.world.resource::<Home>().0
    }

    pub fn avatar_position(&self) -> Vec2 {
        self.world
            .entity(self.avatar)
            .get::<Position>()
            .expect("Avatar entity lost its Position component")
            .0
    }

    pub fn guardian_position(&self) -> Vec2 {
        self.world
            .entity(self.guardian)
            .get::<Position>()
            .expect("Guardian entity lost its Position component")
            .0
    }
}

/// Lays the targets out evenly along the playfield's horizontal centerline.
fn layout_targets(playfield: Vec2, count: usize) -> SmallVec<[Vec2; 5]> {
    let gap = playfield.x / (count + 1) as f32;
    (1..=count).map(|i| Vec2::new(gap * i as f32, playfield.y / 2.0)).collect()
}

/// Rejection-samples a home position at least `separation` away from every target.
fn place_home(
    rng: &mut SmallRng,
    playfield: Vec2,
    guardian_size: Vec2,
    targets: &[Vec2],
    separation: f32,
) -> GameResult<Vec2> {
    let half = guardian_size * 0.5;

    for _ in 0..HOME_PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(half.x..playfield.x - half.x),
            rng.random_range(half.y..playfield.y - half.y),
        );

        if targets.iter().all(|target| candidate.distance(*target) >= separation) {
            return Ok(candidate);
        }
    }

    Err(GameError::HomePlacement {
        attempts: HOME_PLACEMENT_ATTEMPTS,
        separation,
    })
}
