pub mod platform;
pub mod repository;
pub mod request;

pub use platform::{ApiFamily, Platform};
pub use repository::{
    CanonicalRepository, DownloadInfo, DownloadKind, DownloadRef, Owner, OwnerType, SiteInfo,
};
pub use request::{RepositoryRequest, RepositoryTarget};
