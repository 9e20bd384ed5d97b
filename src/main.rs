use std::{path::Path, process, sync::Arc};

use snsp_site::{
    application::{
        admin::{
            Confirmation,
            transfer::{ImportError, ImportOutcome},
        },
        clock::SystemClock,
        context::{AppContext, ContextOptions},
        error::AppError,
        repos::KeyValueStore,
    },
    config,
    domain::error::DomainError,
    infra::{
        error::InfraError,
        http::{self, AdminState, HttpState},
        kv::{FileKeyValueStore, MemoryKeyValueStore},
        telemetry,
    },
};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    sync::watch,
    try_join,
};
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::from(InfraError::configuration(err.to_string())))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Export(args) => run_export(settings, args).await,
        config::Command::Import(args) => run_import(settings, args).await,
    }
}

async fn open_store(settings: &config::Settings) -> Result<Arc<dyn KeyValueStore>, AppError> {
    if settings.storage.ephemeral {
        info!(target = "snsp::storage", "using in-memory storage");
        return Ok(Arc::new(MemoryKeyValueStore::new()));
    }

    let store = FileKeyValueStore::open(settings.storage.path.clone()).await?;
    info!(
        target = "snsp::storage",
        path = %store.path().display(),
        "opened key-value store"
    );
    Ok(Arc::new(store))
}

async fn build_application_context(settings: &config::Settings) -> Result<AppContext, AppError> {
    let kv = open_store(settings).await?;
    let options = ContextOptions {
        blogs_key: settings.storage.blogs_key.clone(),
        settings_key: settings.storage.settings_key.clone(),
        public_site_url: settings.site.public_site_url.clone(),
        toast_ttl_ms: settings.admin.toast_ttl.get(),
    };
    AppContext::build(kv, Arc::new(SystemClock), options)
        .await
        .map_err(AppError::from)
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let context = build_application_context(&settings).await?;
    let http_state = HttpState::new(&context);
    let admin_state = AdminState::new(
        &context,
        std::time::Duration::from_millis(settings.admin.toast_ttl.get()),
        settings.admin.require_session,
    );

    serve_http(&settings, http_state, admin_state).await
}

async fn serve_http(
    settings: &config::Settings,
    http_state: HttpState,
    admin_state: AdminState,
) -> Result<(), AppError> {
    let public_router = http::build_router(http_state);
    let admin_router = http::build_admin_router(admin_state);

    let public_addr = settings.server.public_addr;
    let admin_addr = settings.server.admin_addr;
    let public_listener = tokio::net::TcpListener::bind(public_addr)
        .await
        .map_err(InfraError::io(format!("bind public listener on {public_addr}")))?;
    let admin_listener = tokio::net::TcpListener::bind(admin_addr)
        .await
        .map_err(InfraError::io(format!("bind admin listener on {admin_addr}")))?;

    info!(
        target = "snsp::http",
        public = %settings.server.public_addr,
        admin = %settings.server.admin_addr,
        "listening"
    );

    let (stop_tx, stop_rx) = watch::channel(false);
    let public_server = axum::serve(public_listener, public_router.into_make_service())
        .with_graceful_shutdown(wait_for_stop(stop_rx.clone()));
    let admin_server = axum::serve(admin_listener, admin_router.into_make_service())
        .with_graceful_shutdown(wait_for_stop(stop_rx));

    let mut servers = tokio::spawn(async move { try_join!(public_server, admin_server) });

    let joined = tokio::select! {
        joined = &mut servers => joined,
        () = shutdown_signal() => {
            info!(target = "snsp::http", "shutdown requested, draining connections");
            let _ = stop_tx.send(true);
            match tokio::time::timeout(settings.server.graceful_shutdown, &mut servers).await {
                Ok(joined) => joined,
                Err(_) => {
                    warn!(
                        target = "snsp::http",
                        timeout_secs = settings.server.graceful_shutdown.as_secs(),
                        "graceful shutdown timed out"
                    );
                    servers.abort();
                    return Ok(());
                }
            }
        }
    };

    joined
        .map_err(|err| AppError::unexpected(format!("server task failed: {err}")))?
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;
    Ok(())
}

async fn wait_for_stop(mut stop: watch::Receiver<bool>) {
    let _ = stop.wait_for(|stopped| *stopped).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(target = "snsp::http", error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(target = "snsp::http", error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

async fn run_export(settings: config::Settings, args: config::ExportArgs) -> Result<(), AppError> {
    let context = build_application_context(&settings).await?;
    let path = args.file;

    info!(target = "snsp::export", path = %path.display(), "Starting export");

    let file = context
        .transfer
        .export()
        .await
        .map_err(|err| AppError::unexpected(err.to_string()))?;
    write_export(&path, &file.contents).await?;

    info!(target = "snsp::export", path = %path.display(), "Export completed");
    Ok(())
}

async fn write_export(path: &Path, contents: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(InfraError::io(format!("create {}", parent.display())))?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(InfraError::io(format!("write {}", path.display())))?;
    Ok(())
}

async fn run_import(settings: config::Settings, args: config::ImportArgs) -> Result<(), AppError> {
    let context = build_application_context(&settings).await?;
    let path = args.file;

    info!(target = "snsp::import", path = %path.display(), "Starting import");

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(InfraError::io(format!("read {}", path.display())))?;

    let confirmation = if args.yes {
        Confirmation::Accepted
    } else {
        prompt_confirmation(Confirmation::IMPORT_PROMPT).await?
    };

    match context.transfer.import(&text, confirmation).await {
        Ok(ImportOutcome::Imported { count }) => {
            info!(target = "snsp::import", count, "Import completed");
            Ok(())
        }
        Ok(ImportOutcome::Declined) => {
            info!(target = "snsp::import", "Import cancelled");
            Ok(())
        }
        Err(ImportError::Storage(err)) => Err(AppError::from(err)),
        Err(err) => Err(AppError::from(DomainError::validation(format!(
            "{}: {err}",
            err.user_message()
        )))),
    }
}

/// Ask on the terminal; only an explicit yes accepts.
async fn prompt_confirmation(prompt: &str) -> Result<Confirmation, AppError> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(format!("{prompt} [y/N] ").as_bytes())
        .await
        .map_err(InfraError::io("write prompt"))?;
    stdout.flush().await.map_err(InfraError::io("write prompt"))?;

    let mut answer = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut answer)
        .await
        .map_err(InfraError::io("read answer"))?;

    let answer = match answer.trim().to_ascii_lowercase().as_str() {
        "y" => "yes".to_string(),
        other => other.to_string(),
    };
    Ok(Confirmation::from_flag(Some(&answer)))
}
