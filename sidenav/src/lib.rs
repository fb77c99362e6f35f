pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod sidebar;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::{process_events, Event, Key, Modifiers, MouseButton};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use sidebar::{marker, BindingError, SidebarBindings, SidebarController};
