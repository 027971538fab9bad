use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;

use club_accounting::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config =
        Config::from_toml().map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    let pool = create_pool(&config.database)
        .await
        .context("Failed to create database connection pool")?;

    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    let auth_service = AuthService::new(pool.clone(), jwt_service);
    auth_service
        .ensure_bootstrap_admin(&config.admin)
        .await
        .context("Failed to create the admin account")?;

    let account_service = AccountService::new(pool.clone());
    let profile_service = ProfileService::new(pool.clone());
    let client_service = ClientService::new(pool.clone());
    let course_service = CourseService::new(pool.clone());
    let lesson_service = LessonService::new(pool.clone());
    let subscription_service = SubscriptionService::new(pool.clone());
    let client_subscription_service = ClientSubscriptionService::new(pool.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(auth_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(account_service.clone()))
            .app_data(web::Data::new(profile_service.clone()))
            .app_data(web::Data::new(client_service.clone()))
            .app_data(web::Data::new(course_service.clone()))
            .app_data(web::Data::new(lesson_service.clone()))
            .app_data(web::Data::new(subscription_service.clone()))
            .app_data(web::Data::new(client_subscription_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::admin_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
