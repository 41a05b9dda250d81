mod app_events;
mod app_render;
mod app_state;
mod surface;


// Re-export public types
pub use app_state::App;
pub use surface::{BufferSurface, Decoration};
