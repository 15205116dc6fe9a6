//! Reusable Dioxus RSX components for the AeroSense dashboard.

mod city_detail;
mod city_selector;
mod loading_overlay;
mod map_panel;
mod search_box;
mod source_badge;
mod view_nav;

pub use city_detail::CityDetail;
pub use city_selector::CitySelector;
pub use loading_overlay::LoadingOverlay;
pub use map_panel::MapPanel;
pub use search_box::SearchBox;
pub use source_badge::SourceBadge;
pub use view_nav::ViewNav;
