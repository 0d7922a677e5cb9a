//! Configuration propagation down the display → stack → task → window-group
//! chain.
use crate::errors::{Result, TaskWmError};
use crate::models::{
    Configurable, Configuration, DimLayerOwner, DisplayId, Manager, StackId, WindowGroup,
};
use crate::notify::ResizeNotifier;

impl<G, DIM, NOTIFY> Manager<G, DIM, NOTIFY>
where
    G: WindowGroup,
    DIM: DimLayerOwner,
    NOTIFY: ResizeNotifier,
{
    /// Replace a display's configuration and push the merged result through
    /// every stack on it.
    pub fn set_display_configuration(
        &mut self,
        display_id: DisplayId,
        configuration: Configuration,
    ) -> Result<()> {
        let display = self
            .state
            .display_mut(display_id)
            .ok_or(TaskWmError::UnknownDisplay(display_id))?;
        display.set_configuration(configuration);
        for stack in self
            .state
            .stacks
            .iter_mut()
            .filter(|s| s.display == Some(display_id))
        {
            stack.configure(configuration);
        }
        Ok(())
    }

    /// Replace a stack's override configuration. The parent it merges over
    /// is its display's configuration, or the empty one off-display.
    pub fn set_stack_override_configuration(
        &mut self,
        stack_id: StackId,
        configuration: Configuration,
    ) -> Result<()> {
        let (stack, display) = self
            .state
            .stack_and_display_mut(stack_id)
            .ok_or(TaskWmError::UnknownStack(stack_id))?;
        let parent = display.map_or(Configuration::EMPTY, |d| d.configuration());
        stack.set_override_configuration(configuration, parent);
        Ok(())
    }
}
