//! Reach: the decorative network scene behind the marketing site hero.
//!
//! The engine is headless. A host supplies the container size and drives
//! [`engine::SceneEngine::frame`] from its display-refresh callback; the
//! resulting [`draw::DrawList`] is presented by `reach_view`.

pub mod core {
    pub mod clock;
    pub mod color;
}

pub mod scene {
    pub mod camera;
    pub mod lights;
    pub mod orbit;
    pub mod surface;

    pub use camera::PerspectiveCamera;
    pub use lights::LightRig;
    pub use orbit::OrbitControls;
    pub use surface::{RenderSurface, SceneState};
}

pub mod effects;
pub mod field;
pub mod material;
pub mod network;
pub mod shapes;

pub mod config;
pub mod control;
pub mod draw;
pub mod engine;
pub mod host;
pub mod panel;

pub use config::SceneConfig;
pub use control::{CommandQueue, CommandSender, SceneCommand};
pub use engine::{SceneEngine, SkipReason, TriggerOutcome};
pub use host::{ContainerHost, ContainerSize, StaticHost};
