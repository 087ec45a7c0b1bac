//! User repository implementation

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;
use crate::database::store::JsonStore;
use crate::models::user::UserProfile;
use crate::utils::errors::Result;

/// All profiles, keyed by phone number
pub type ProfileMap = BTreeMap<String, UserProfile>;

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    store: JsonStore<ProfileMap>,
}

impl UserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    /// Load every profile
    pub async fn load(&self) -> Result<ProfileMap> {
        self.store.load().await
    }

    /// Replace every profile
    pub async fn save_all(&self, profiles: &ProfileMap) -> Result<()> {
        self.store.save(profiles).await
    }

    /// Find a profile by phone number
    pub async fn find_by_phone(&self, phone_number: &str) -> Result<Option<UserProfile>> {
        let mut profiles = self.load().await?;
        Ok(profiles.remove(phone_number))
    }

    /// Insert or replace a profile, refreshing its `last_updated`
    pub async fn save(&self, mut profile: UserProfile) -> Result<UserProfile> {
        profile.touch();

        let mut profiles = self.load().await?;
        profiles.insert(profile.phone_number.clone(), profile.clone());
        self.save_all(&profiles).await?;

        debug!(cursor = profile.cursor, attractions = profile.attractions.len(), "Profile saved");
        Ok(profile)
    }

    /// Return the stored profile, creating an empty one if there is none.
    /// The flag is true when a new profile was created.
    pub async fn get_or_create(&self, phone_number: &str) -> Result<(UserProfile, bool)> {
        let mut profiles = self.load().await?;
        if let Some(existing) = profiles.get(phone_number) {
            return Ok((existing.clone(), false));
        }

        let profile = UserProfile::new(phone_number);
        profiles.insert(phone_number.to_string(), profile.clone());
        self.save_all(&profiles).await?;
        Ok((profile, true))
    }
}
