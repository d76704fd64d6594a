use super::camera::PerspectiveCamera;
use super::lights::LightRig;
use crate::config::SceneConfig;
use crate::host::ContainerSize;

/// Size of the drawing surface the renderer presents into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSurface {
    pub size: ContainerSize,
}

impl RenderSurface {
    pub fn set_size(&mut self, size: ContainerSize) {
        self.size = size;
    }
}

/// Camera, lights and surface: the part of the world that is not content.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: PerspectiveCamera,
    pub lights: LightRig,
    pub surface: RenderSurface,
}

impl SceneState {
    pub fn new(config: &SceneConfig, size: ContainerSize) -> Self {
        Self {
            camera: PerspectiveCamera::new(&config.camera, size.aspect()),
            lights: LightRig::default(),
            surface: RenderSurface { size },
        }
    }

    pub fn resize(&mut self, size: ContainerSize) {
        self.camera.aspect = size.aspect();
        self.surface.set_size(size);
    }
}
