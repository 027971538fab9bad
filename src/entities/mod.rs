pub mod accounts;
pub mod client_subscriptions;
pub mod clients;
pub mod courses;
pub mod lesson_clients;
pub mod lessons;
pub mod profiles;
pub mod schedules;
pub mod subscriptions;

pub use accounts as account_entity;
pub use client_subscriptions as client_subscription_entity;
pub use clients as client_entity;
pub use courses as course_entity;
pub use lesson_clients as lesson_client_entity;
pub use lessons as lesson_entity;
pub use profiles as profile_entity;
pub use schedules as schedule_entity;
pub use schedules::DayOfWeek;
pub use subscriptions as subscription_entity;
pub use subscriptions::SubscriptionType;
