mod connect_wallet;
mod switch_panel;

pub use connect_wallet::Navbar;
pub use switch_panel::SwitchPanel;
