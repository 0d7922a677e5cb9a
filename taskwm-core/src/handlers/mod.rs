mod configuration_handler;
mod drag_resize_handler;
mod resize_handler;
mod rotation_handler;
mod task_handler;
