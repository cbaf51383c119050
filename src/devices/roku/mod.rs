mod roku_app;
mod roku_device_info;
mod roku_input;
mod roku_key;

pub use roku_app::*;
pub use roku_device_info::*;
pub use roku_input::*;
pub use roku_key::*;
