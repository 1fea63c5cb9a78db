mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            scheduler::appointment_reminders,
            service::{mail::Mailer, setup_code::SetupCodeService},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;

        let mailer = Mailer::new(
            http_client,
            config.app_url.clone(),
            config.email_api_url.clone(),
            config.email_api_key.clone(),
            config.email_from.clone(),
        );
        let setup_code_service = SetupCodeService::new();

        tracing::info!("Starting server");

        // Print a one-time setup code when the install has no users yet
        startup::check_for_first_run(&db, &setup_code_service).await?;

        // Start appointment reminder scheduler
        let scheduler_db = db.clone();
        let scheduler_mailer = mailer.clone();
        tokio::spawn(async move {
            if let Err(e) =
                appointment_reminders::start_scheduler(scheduler_db, scheduler_mailer).await
            {
                tracing::error!("Appointment reminder scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()?
            .with_state(AppState::new(db, mailer, setup_code_service))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
