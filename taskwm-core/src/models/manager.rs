//! Entry point of the engine. The manager owns the hierarchy state plus the
//! two external collaborators, and every operation handler is implemented on
//! it under `handlers/`.
use crate::models::WindowGroup;
use crate::notify::ResizeNotifier;
use crate::state::State;

use super::DimLayerOwner;

pub struct Manager<G: WindowGroup, DIM, NOTIFY> {
    pub state: State<G>,
    pub dim_layer: DIM,
    pub notifier: NOTIFY,
    /// Treat every task as resizable, overriding what its window groups
    /// declared.
    pub force_resizable_tasks: bool,
}

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    pub fn new(dim_layer: DIM, notifier: NOTIFY) -> Self {
        Self {
            state: State::default(),
            dim_layer,
            notifier,
            force_resizable_tasks: false,
        }
    }
}
