pub mod analysis_panel;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod info_section;
pub mod results;
pub mod utils;
