mod keyboard;
mod menu;
mod page;
mod pointer;

pub use keyboard::wire_keydown;
pub use menu::wire_menu_handlers;
pub use page::wire_page_handlers;
pub use pointer::wire_pointer_handlers;
