use std::collections::HashMap;

/// Pixel dimensions of a scene container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, with a zero height treated as one pixel.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// The page (or window) the engine is attached to.
///
/// The engine only ever asks for the size of its own container; a `None`
/// answer means the container does not exist.
pub trait ContainerHost {
    fn container_size(&self, id: &str) -> Option<ContainerSize>;
}

/// Fixed set of named containers. Used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    containers: HashMap<String, ContainerSize>,
}

impl StaticHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>, size: ContainerSize) -> Self {
        self.insert(id, size);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, size: ContainerSize) {
        self.containers.insert(id.into(), size);
    }

    pub fn remove(&mut self, id: &str) {
        self.containers.remove(id);
    }
}

impl ContainerHost for StaticHost {
    fn container_size(&self, id: &str) -> Option<ContainerSize> {
        self.containers.get(id).copied()
    }
}
