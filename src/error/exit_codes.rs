use crate::error::GitEmbedError;

pub fn get_exit_code(error: &GitEmbedError) -> i32 {
    match error {
        GitEmbedError::MissingRepositoryIdentity
        | GitEmbedError::MissingCustomDomain(_)
        | GitEmbedError::UnsupportedPlatform(_)
        | GitEmbedError::InvalidConfig(_) => 2,

        GitEmbedError::UpstreamUnavailable(_)
        | GitEmbedError::UpstreamMalformed(_)
        | GitEmbedError::Http(_) => 20,

        _ => 1,
    }
}
