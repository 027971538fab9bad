//! Fixtures shared by the service tests.

use crate::entities::{
    SubscriptionType, account_entity as accounts, client_entity as clients,
    course_entity as courses, profile_entity as profiles, subscription_entity as subscriptions,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Active staff account without a usable password; returns the account id.
pub async fn create_staff_account(pool: &DatabaseConnection, username: &str) -> i64 {
    accounts::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set("not-a-real-hash".to_string()),
        is_staff: Set(true),
        is_active: Set(true),
        created_at: Set(Some(Utc::now())),
        ..Default::default()
    }
    .insert(pool)
    .await
    .unwrap()
    .id
}

/// Staff account with a profile; returns the profile id.
pub async fn create_teacher(pool: &DatabaseConnection, username: &str) -> i64 {
    let account_id = create_staff_account(pool, username).await;

    profiles::ActiveModel {
        user_id: Set(account_id),
        first_name: Set("Анна".to_string()),
        last_name: Set("Петрова".to_string()),
        birthday: Set(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()),
        experience: Set(2012),
        ..Default::default()
    }
    .insert(pool)
    .await
    .unwrap()
    .id
}

pub async fn create_course(pool: &DatabaseConnection, teacher_id: i64, name: &str) -> i64 {
    courses::ActiveModel {
        name: Set(name.to_string()),
        teacher_id: Set(teacher_id),
        description: Set(String::new()),
        ..Default::default()
    }
    .insert(pool)
    .await
    .unwrap()
    .id
}

pub async fn create_client(pool: &DatabaseConnection, first_name: &str) -> i64 {
    clients::ActiveModel {
        first_name: Set(first_name.to_string()),
        last_name: Set("Тестов".to_string()),
        birthday: Set(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()),
        phone_number: Set(String::new()),
        is_from_club: Set(true),
        ..Default::default()
    }
    .insert(pool)
    .await
    .unwrap()
    .id
}

/// Limited plan with 8 sessions for 3500.00.
pub async fn create_plan(pool: &DatabaseConnection, name: &str, duration: i32) -> i64 {
    subscriptions::ActiveModel {
        name: Set(name.to_string()),
        subscription_type: Set(SubscriptionType::Limited),
        duration: Set(duration),
        num_sessions: Set(8),
        price_kopecks: Set(350_000),
        ..Default::default()
    }
    .insert(pool)
    .await
    .unwrap()
    .id
}
