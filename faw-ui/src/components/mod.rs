//! Reusable Dioxus RSX components for the fraud awareness apps.

mod county_details;
mod county_table;
mod error_display;
mod loading_spinner;
mod map_container;
mod nav_menu;
mod section_header;
mod top_types_table;

pub use county_details::CountyDetails;
pub use county_table::CountyRankTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use nav_menu::{site_links, NavMenu};
pub use section_header::SectionHeader;
pub use top_types_table::TopTypesTable;
