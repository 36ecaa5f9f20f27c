//! Sample records loaded into a fresh directory at startup.

use userdir_core::business::{role_codes, EnableStatus, Gender};

use crate::models::user::User;

/// The two fixed sample users, in insertion order (`admin`, `test_user`).
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            user_name: "admin".to_string(),
            user_gender: Some(Gender::Male),
            nick_name: "Soybean".to_string(),
            user_phone: "13800138000".to_string(),
            user_email: "admin@soybean.com".to_string(),
            user_roles: vec![role_codes::ADMIN.to_string()],
            status: EnableStatus::Enable,
            create_by: "system".to_string(),
            create_time: "2024-01-01 12:00:00".to_string(),
            update_by: "system".to_string(),
            update_time: "2024-01-01 12:00:00".to_string(),
        },
        User {
            id: 2,
            user_name: "test_user".to_string(),
            user_gender: Some(Gender::Female),
            nick_name: "Testing".to_string(),
            user_phone: "13712345678".to_string(),
            user_email: "test@gmail.com".to_string(),
            user_roles: vec![role_codes::USER.to_string()],
            status: EnableStatus::Disable,
            create_by: "admin".to_string(),
            create_time: "2024-02-10 10:00:00".to_string(),
            update_by: "admin".to_string(),
            update_time: "2024-02-10 10:00:00".to_string(),
        },
    ]
}
