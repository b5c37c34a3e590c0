//! Platform Config Provider and site name probing.

mod html;
pub mod provider;
pub mod site_name;

pub use html::extract_title;
pub use provider::{PlatformConfig, get_config, normalize_domain};
pub use site_name::{SiteNameProbe, SiteNameProber};
