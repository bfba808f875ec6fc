use types::{Profile, Result};

use crate::{ApiClient, ListResource, Profiles};

impl ApiClient {
    /// Profiles are read-only from the admin side.
    pub async fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.get(&format!("{}/{profile_id}", Profiles::PATH)).await
    }
}
