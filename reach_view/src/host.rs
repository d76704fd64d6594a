use reach::{ContainerHost, ContainerSize};

/// Answers container lookups for the viewer.
///
/// Natively the window is the container: it is known under the configured id
/// and sized by the window. In the browser the container is a DOM element and
/// its client size is read from the page on every lookup.
pub struct WindowHost {
    container_id: String,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    size: ContainerSize,
}

impl WindowHost {
    pub fn new(container_id: impl Into<String>, size: ContainerSize) -> Self {
        Self {
            container_id: container_id.into(),
            size,
        }
    }

    pub fn set_size(&mut self, size: ContainerSize) {
        self.size = size;
    }

    #[cfg(target_arch = "wasm32")]
    pub fn element(&self) -> Option<web_sys::Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.container_id)
    }
}

impl ContainerHost for WindowHost {
    #[cfg(not(target_arch = "wasm32"))]
    fn container_size(&self, id: &str) -> Option<ContainerSize> {
        (id == self.container_id).then_some(self.size)
    }

    #[cfg(target_arch = "wasm32")]
    fn container_size(&self, id: &str) -> Option<ContainerSize> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let width = element.client_width().max(0) as u32;
        let height = element.client_height().max(0) as u32;
        Some(ContainerSize::new(width, height))
    }
}

/// Wall clock backed by `performance.now()`; `std::time::Instant` is not
/// available on `wasm32-unknown-unknown`.
#[cfg(target_arch = "wasm32")]
pub struct PerformanceClock {
    performance: Option<web_sys::Performance>,
}

#[cfg(target_arch = "wasm32")]
impl PerformanceClock {
    pub fn new() -> Self {
        Self {
            performance: web_sys::window().and_then(|window| window.performance()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl reach::core::clock::Clock for PerformanceClock {
    fn now(&self) -> std::time::Duration {
        let millis = self.performance.as_ref().map_or(0.0, |p| p.now());
        std::time::Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }
}
