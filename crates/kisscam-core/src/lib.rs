//! Platform-independent core of the kiss cam display.
//!
//! Nothing in here touches the DOM. The web front-end feeds pointer input,
//! viewport sizes and camera frame dimensions into a [`KissCam`] session and
//! supplies the particle sink and draw target it renders through.

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod particles;
pub mod render;
pub mod scene;
pub mod session;
pub mod timers;
pub mod zoom;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
pub use particles::*;
pub use render::*;
pub use scene::*;
pub use session::*;
pub use timers::*;
pub use zoom::*;
