pub mod component;
pub mod kind_info;
pub mod relations;

pub use component::{BasicInfo, ComponentKind};
pub use kind_info::{AddonInfo, ConsoleAppInfo, GuiAppInfo, InputControls, ServiceInfo};
pub use relations::RelationSet;
