pub mod capability;
pub mod config;
pub mod constants;
pub mod controller;
pub mod event;
pub mod host;
pub mod mailbox;
pub mod mapping;
pub mod menu;
pub mod proximity;
pub mod render_loop;
pub mod tilt;

pub use capability::*;
pub use config::*;
pub use controller::*;
pub use event::*;
pub use host::*;
pub use mailbox::*;
pub use menu::*;
pub use proximity::{ActivationGeometry, AnchorRect};
pub use render_loop::*;
pub use tilt::{TiltAngle, TiltIntegrator};
