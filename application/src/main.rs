use std::{io, sync::OnceLock};

use application::{args::Command, view, Args, Config, Service};
use secrecy::SecretBox;
use service::{
    command,
    domain::{checkin, user, vacation},
    infra::Http,
    Command as _,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args { config, command } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { api, auth, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let gateway = Http::new(&api.into()).map_err(|e| {
        log::error!("failed to initialize HTTP gateway: {e}");
    })?;
    let service = Service::new(gateway);

    let email = auth.email.parse::<user::Email>().map_err(|e| {
        log::error!("invalid `auth.email` in `Config`: {e}");
    })?;
    let password = auth.password.parse::<user::Password>().map_err(|e| {
        log::error!("invalid `auth.password` in `Config`: {e}");
    })?;

    let session = service
        .execute(command::Login {
            email,
            password: SecretBox::new(Box::new(password)),
        })
        .await
        .map_err(|e| {
            log::error!("login failed: {e}");
        })?;

    match command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            service.execute(command::RefreshResources).await.map_err(
                |e| {
                    log::error!("failed to refresh resources: {e}");
                },
            )?;

            let checkins =
                service.cache().recent_checkins(view::RECENT_CHECKINS).await;
            let vacations = service.cache().vacations().await;
            println!(
                "{}",
                view::dashboard(&session.user, &checkins, &vacations),
            );
        }
        Command::CheckIn { status } => {
            let status = status.parse::<checkin::Status>().map_err(|e| {
                log::error!("unknown check-in status `{status}`: {e}");
            })?;

            service
                .execute(command::SubmitCheckIn { status })
                .await
                .map_err(|e| {
                    log::error!("failed to submit the check-in: {e}");
                })?;

            println!("Check-In gesendet: {}", status.text());
        }
        Command::Vacation {
            start_date,
            end_date,
            reason,
        } => {
            let created = service
                .execute(command::SubmitVacationRequest {
                    draft: vacation::Draft {
                        start_date,
                        end_date,
                        reason,
                    },
                })
                .await
                .map_err(|e| {
                    log::error!("failed to submit the vacation request: {e}");
                })?;

            println!(
                "Urlaubsantrag eingereicht: {}",
                created.status.text(),
            );
        }
    }

    Ok(())
}
