//! The user-profile endpoint: one document per user, upsert on save.

use serde::{Deserialize, Serialize};

use crate::error::{AdapterError, ApiError};

/// A stored user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// The owning user's unique id.
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    /// First profile photo as a base64 data URL, empty if unset.
    pub profile_image1: String,
    /// Second profile photo as a base64 data URL, empty if unset.
    pub profile_image2: String,
    /// Creation time in milliseconds since the epoch.
    pub created_at: u64,
    /// Last-update time in milliseconds since the epoch.
    pub updated_at: u64,
}

/// Profile save request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image1: Option<String>,
    #[serde(default)]
    pub profile_image2: Option<String>,
}

/// GET response envelope. A missing profile is `{"profile": null}`,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub profile: Option<UserProfile>,
}

/// Backing store for profile documents.
pub trait ProfileStore {
    /// Fetch the profile for a user, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the store cannot be reached.
    fn get(&self, user_id: &str) -> impl Future<Output = Result<Option<UserProfile>, AdapterError>>;

    /// Insert or replace the profile for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] if the store cannot be reached.
    fn upsert(&mut self, profile: UserProfile)
    -> impl Future<Output = Result<(), AdapterError>>;
}

/// In-memory store for tests and native runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: std::collections::BTreeMap<String, UserProfile>,
}

impl MemoryProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, AdapterError> {
        Ok(self.profiles.get(user_id).cloned())
    }

    async fn upsert(&mut self, profile: UserProfile) -> Result<(), AdapterError> {
        self.profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

/// Handle a profile GET.
///
/// # Errors
///
/// Returns [`ApiError::Internal`] if the store is unreachable. A
/// missing profile is the `{"profile": null}` envelope, not an error.
pub async fn handle_get_profile<S: ProfileStore>(
    store: &S,
    user_id: &str,
) -> Result<ProfileEnvelope, ApiError> {
    let profile = store.get(user_id).await.map_err(|e| ApiError::Internal {
        error: "Failed to load profile".to_owned(),
        details: Some(e.to_string()),
    })?;
    Ok(ProfileEnvelope { profile })
}

/// Handle a profile save. Upserts keyed by `user_id`: the creation
/// timestamp of an existing document is preserved, images left out of
/// the request default to empty.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when either name is missing or
/// blank, and [`ApiError::Internal`] if the store is unreachable.
pub async fn handle_save_profile<S: ProfileStore>(
    store: &mut S,
    user_id: &str,
    request: SaveProfileRequest,
    now_ms: u64,
) -> Result<ProfileEnvelope, ApiError> {
    let first_name = non_blank(request.first_name)?;
    let last_name = non_blank(request.last_name)?;

    let existing = store.get(user_id).await.map_err(store_error)?;
    let created_at = existing.map_or(now_ms, |p| p.created_at);

    let profile = UserProfile {
        user_id: user_id.to_owned(),
        first_name,
        last_name,
        profile_image1: request.profile_image1.unwrap_or_default(),
        profile_image2: request.profile_image2.unwrap_or_default(),
        created_at,
        updated_at: now_ms,
    };

    store.upsert(profile.clone()).await.map_err(store_error)?;
    Ok(ProfileEnvelope {
        profile: Some(profile),
    })
}

fn non_blank(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest {
            error: "First name and last name are required".to_owned(),
            details: None,
        }),
    }
}

fn store_error(e: AdapterError) -> ApiError {
    ApiError::Internal {
        error: "Failed to save profile".to_owned(),
        details: Some(e.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn save_request(first: &str, last: &str) -> SaveProfileRequest {
        SaveProfileRequest {
            first_name: Some(first.to_owned()),
            last_name: Some(last.to_owned()),
            profile_image1: None,
            profile_image2: None,
        }
    }

    #[test]
    fn missing_profile_is_a_null_envelope() {
        let store = MemoryProfileStore::new();
        let envelope = pollster::block_on(handle_get_profile(&store, "u-1")).unwrap();
        assert_eq!(envelope.profile, None);
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["profile"].is_null());
    }

    #[test]
    fn save_then_get_round_trips() {
        let mut store = MemoryProfileStore::new();
        let saved = pollster::block_on(handle_save_profile(
            &mut store,
            "u-1",
            save_request("Ada", "Lovelace"),
            1_000,
        ))
        .unwrap();
        let profile = saved.profile.unwrap();
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.profile_image1, "");
        assert_eq!(profile.created_at, 1_000);
        assert_eq!(profile.updated_at, 1_000);

        let fetched = pollster::block_on(handle_get_profile(&store, "u-1")).unwrap();
        assert_eq!(fetched.profile, Some(profile));
    }

    #[test]
    fn upsert_preserves_creation_time() {
        let mut store = MemoryProfileStore::new();
        pollster::block_on(handle_save_profile(
            &mut store,
            "u-1",
            save_request("Ada", "Lovelace"),
            1_000,
        ))
        .unwrap();
        let updated = pollster::block_on(handle_save_profile(
            &mut store,
            "u-1",
            SaveProfileRequest {
                profile_image1: Some("data:image/jpeg;base64,aGk=".to_owned()),
                ..save_request("Ada", "King")
            },
            2_000,
        ))
        .unwrap();
        let profile = updated.profile.unwrap();
        assert_eq!(profile.last_name, "King");
        assert_eq!(profile.created_at, 1_000);
        assert_eq!(profile.updated_at, 2_000);
        assert_eq!(profile.profile_image1, "data:image/jpeg;base64,aGk=");
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut store = MemoryProfileStore::new();
        for request in [
            SaveProfileRequest::default(),
            save_request("", "Lovelace"),
            save_request("Ada", "   "),
        ] {
            let err = pollster::block_on(handle_save_profile(&mut store, "u-1", request, 0))
                .unwrap_err();
            assert_eq!(err.status(), 400);
            assert_eq!(err.to_string(), "First name and last name are required");
        }
    }

    #[test]
    fn profiles_are_keyed_per_user() {
        let mut store = MemoryProfileStore::new();
        pollster::block_on(handle_save_profile(
            &mut store,
            "u-1",
            save_request("Ada", "Lovelace"),
            1,
        ))
        .unwrap();
        let other = pollster::block_on(handle_get_profile(&store, "u-2")).unwrap();
        assert_eq!(other.profile, None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let request: SaveProfileRequest = serde_json::from_str(
            "{\"firstName\":\"Ada\",\"lastName\":\"Lovelace\",\"profileImage1\":\"x\"}",
        )
        .unwrap();
        assert_eq!(request.first_name.as_deref(), Some("Ada"));
        assert_eq!(request.profile_image1.as_deref(), Some("x"));
    }
}
