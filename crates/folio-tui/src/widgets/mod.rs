mod navbar;
mod popup;
mod sections;
mod status_bar;
mod text;

pub use navbar::NavbarWidget;
pub use popup::PopupWidget;
pub use sections::PageWidget;
pub use status_bar::StatusBarWidget;
