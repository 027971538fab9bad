use crate::handlers::{
    account_config, client_config, client_subscription_config, course_config, lesson_config,
    profile_config, subscription_config,
};
use actix_web::web;

/// Generic CRUD surface over every club resource.
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .configure(account_config)
            .configure(profile_config)
            .configure(client_config)
            .configure(course_config)
            .configure(lesson_config)
            .configure(subscription_config)
            .configure(client_subscription_config),
    );
}
