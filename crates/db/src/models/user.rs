//! User record model and DTOs.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use userdir_core::business::{EnableStatus, Gender};
use userdir_core::types::DbId;
use validator::Validate;

/// A stored directory entry.
///
/// Serialized with camelCase keys (`userName`, `createTime`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub user_name: String,
    pub user_gender: Option<Gender>,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub user_email: String,
    /// Role codes, e.g. `R_ADMIN`.
    #[serde(default)]
    pub user_roles: Vec<String>,
    pub status: EnableStatus,
    #[serde(default)]
    pub create_by: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub update_by: String,
    #[serde(default)]
    pub update_time: String,
}

/// DTO for creating a user. The directory assigns `id` and `createTime`.
///
/// Also the request body for updates, where the path supplies the id.
/// Validation covers field presence only.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 1, message = "userName is required"))]
    pub user_name: String,
    pub user_gender: Option<Gender>,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_roles: Vec<String>,
    pub status: EnableStatus,
    #[serde(default)]
    pub create_by: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub update_by: String,
    #[serde(default)]
    pub update_time: String,
}

impl NewUser {
    /// Attach an identity, producing a full record.
    pub fn into_user(self, id: DbId) -> User {
        User {
            id,
            user_name: self.user_name,
            user_gender: self.user_gender,
            nick_name: self.nick_name,
            user_phone: self.user_phone,
            user_email: self.user_email,
            user_roles: self.user_roles,
            status: self.status,
            create_by: self.create_by,
            create_time: self.create_time,
            update_by: self.update_by,
            update_time: self.update_time,
        }
    }
}

/// Filter and paging parameters for listing users. Every field is optional.
///
/// String filters are substring matches; enum filters are exact. Empty
/// values (`?status=&current=`) are treated as absent, as search forms send
/// blank selects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub user_gender: Option<Gender>,
    pub nick_name: Option<String>,
    pub user_phone: Option<String>,
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<EnableStatus>,
    /// 1-based page number.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub current: Option<usize>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub size: Option<usize>,
}

/// Parse a query value with `FromStr`, mapping a blank value to `None`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl UserSearchParams {
    /// Whether `user` passes every filter that is set.
    pub fn matches(&self, user: &User) -> bool {
        contains(&user.user_name, self.user_name.as_deref())
            && self.user_gender.map_or(true, |g| user.user_gender == Some(g))
            && contains(&user.nick_name, self.nick_name.as_deref())
            && contains(&user.user_phone, self.user_phone.as_deref())
            && contains(&user.user_email, self.user_email.as_deref())
            && self.status.map_or(true, |s| user.status == s)
    }
}

fn contains(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(n) if !n.is_empty() => haystack.contains(n),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: 7,
            user_name: "ops_lead".into(),
            user_gender: Some(Gender::Female),
            nick_name: "Ops".into(),
            user_phone: "13900001111".into(),
            user_email: "ops@example.com".into(),
            user_roles: vec!["R_USER".into()],
            status: EnableStatus::Enable,
            create_by: "admin".into(),
            create_time: "2024-05-01 09:00:00".into(),
            update_by: "admin".into(),
            update_time: "2024-05-01 09:00:00".into(),
        }
    }

    #[test]
    fn empty_params_match_everything() {
        assert!(UserSearchParams::default().matches(&sample()));
    }

    #[test]
    fn empty_string_filter_is_ignored() {
        let params = UserSearchParams {
            user_name: Some(String::new()),
            ..Default::default()
        };
        assert!(params.matches(&sample()));
    }

    #[test]
    fn substring_filters() {
        let params = UserSearchParams {
            user_name: Some("lead".into()),
            user_email: Some("@example".into()),
            ..Default::default()
        };
        assert!(params.matches(&sample()));

        let params = UserSearchParams {
            nick_name: Some("dev".into()),
            ..Default::default()
        };
        assert!(!params.matches(&sample()));
    }

    #[test]
    fn gender_filter_does_not_match_missing_gender() {
        let mut user = sample();
        user.user_gender = None;
        let params = UserSearchParams {
            user_gender: Some(Gender::Female),
            ..Default::default()
        };
        assert!(!params.matches(&user));
    }

    #[test]
    fn blank_enum_and_paging_values_are_absent() {
        let params: UserSearchParams = serde_json::from_value(serde_json::json!({
            "userGender": "",
            "status": " ",
            "current": "",
            "size": ""
        }))
        .unwrap();

        assert_eq!(params.user_gender, None);
        assert_eq!(params.status, None);
        assert_eq!(params.current, None);
        assert_eq!(params.size, None);
    }

    #[test]
    fn filled_enum_and_paging_values_parse() {
        let params: UserSearchParams = serde_json::from_value(serde_json::json!({
            "userGender": "2",
            "status": "1",
            "current": "3",
            "size": "25"
        }))
        .unwrap();

        assert_eq!(params.user_gender, Some(Gender::Female));
        assert_eq!(params.status, Some(EnableStatus::Enable));
        assert_eq!(params.current, Some(3));
        assert_eq!(params.size, Some(25));
    }

    #[test]
    fn unknown_status_code_is_rejected() {
        let result = serde_json::from_value::<UserSearchParams>(serde_json::json!({"status": "9"}));
        assert!(result.is_err());
    }

    #[test]
    fn user_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["userName"], "ops_lead");
        assert_eq!(json["userGender"], "2");
        assert_eq!(json["status"], "1");
        assert_eq!(json["userRoles"], serde_json::json!(["R_USER"]));
        assert_eq!(json["createTime"], "2024-05-01 09:00:00");
    }

    #[test]
    fn new_user_requires_user_name_and_status() {
        let missing_name = serde_json::json!({"status": "1"});
        assert!(serde_json::from_value::<NewUser>(missing_name).is_err());

        let missing_status = serde_json::json!({"userName": "x"});
        assert!(serde_json::from_value::<NewUser>(missing_status).is_err());

        let minimal = serde_json::json!({"userName": "x", "status": "2"});
        let input: NewUser = serde_json::from_value(minimal).unwrap();
        assert_eq!(input.user_gender, None);
        assert!(input.user_roles.is_empty());
    }

    #[test]
    fn blank_user_name_fails_validation() {
        let input: NewUser =
            serde_json::from_value(serde_json::json!({"userName": "", "status": "1"})).unwrap();
        assert!(input.validate().is_err());

        let input: NewUser =
            serde_json::from_value(serde_json::json!({"userName": "ok", "status": "1"})).unwrap();
        assert!(input.validate().is_ok());
    }
}
