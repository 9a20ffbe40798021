use arena_core::{LayerType, Size, StateKey};

use crate::surface::{Container, Surface};

/// The parts every canvas layer shares: its identity, the container it is
/// laid out in, and the surface it draws on.
#[derive(Debug)]
pub struct BaseLayer<C, S> {
    pub layer_type: LayerType,
    pub state_key: StateKey,
    container: C,
    element: S,
}

impl<C: Container, S: Surface> BaseLayer<C, S> {
    pub fn new(layer_type: LayerType, state_key: StateKey, container: C, element: S) -> Self {
        Self {
            layer_type,
            state_key,
            container,
            element,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn element(&self) -> &S {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut S {
        &mut self.element
    }

    pub fn container_size(&self) -> Size {
        self.container.offset_size()
    }

    /// Match the surface's backing store to the container. Clears the surface.
    pub fn fit_element(&mut self) {
        let size = self.container.offset_size();
        self.element.resize(size);
    }
}
