use std::process;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wafguard_monitor::adapters::inbound::OperatorCommand;
use wafguard_monitor::adapters::outbound::console::TerminalPresenter;
use wafguard_monitor::adapters::outbound::network::HttpWafApi;
use wafguard_monitor::application::read_models::DashboardReadModelBuilder;
use wafguard_monitor::application::use_cases::{ActionDispatcher, SyncLoop};
use wafguard_monitor::cli::Args;
use wafguard_monitor::config::{discover_config, load_config_from_path, MonitorSettings};
use wafguard_monitor::ports::outbound::DashboardPresenter;
use wafguard_monitor::shared::error::{ExitCode, MonitorError};
use wafguard_monitor::shared::Result;

#[tokio::main]
async fn main() {
    // Logs go to stderr so they never interleave with the dashboard on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = MonitorSettings::resolve(&args, config.as_ref());

    // Create adapters (Dependency Injection)
    let api = Arc::new(HttpWafApi::new(&settings.api_base, settings.request_timeout)?);
    let sync = SyncLoop::new(Arc::clone(&api), settings.sync_options());

    if args.once {
        let presenter = TerminalPresenter::new().with_redraw(false);
        return run_once(sync, &presenter).await;
    }

    let dispatcher = ActionDispatcher::new(Arc::clone(&api), sync.refresh_handle());
    run_interactive(sync, dispatcher, &TerminalPresenter::new()).await
}

async fn run_once(sync: SyncLoop<HttpWafApi>, presenter: &TerminalPresenter) -> Result<ExitCode> {
    sync.refresh().await;

    let state = sync.state();
    presenter.present(&DashboardReadModelBuilder::build(&state))?;

    match state.last_error() {
        Some(error) => {
            eprintln!("Refresh failed: {}", error);
            Ok(ExitCode::RefreshFailed)
        }
        None => Ok(ExitCode::Success),
    }
}

async fn run_interactive(
    mut sync: SyncLoop<HttpWafApi>,
    dispatcher: ActionDispatcher<HttpWafApi>,
    presenter: &TerminalPresenter,
) -> Result<ExitCode> {
    let mut updates = sync.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    sync.start();
    presenter.present(&DashboardReadModelBuilder::build(&sync.state()))?;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                presenter.present(&DashboardReadModelBuilder::build(&state))?;
            }
            line = lines.next_line(), if stdin_open => {
                let line = line.map_err(|e| MonitorError::TerminalError {
                    details: e.to_string(),
                })?;
                let Some(line) = line else {
                    // Keep polling until interrupted
                    stdin_open = false;
                    continue;
                };
                match OperatorCommand::parse(&line) {
                    Ok(Some(OperatorCommand::Quit)) => break,
                    Ok(Some(OperatorCommand::Action { event_id, verdict })) => {
                        dispatcher.spawn_dispatch(event_id, verdict);
                    }
                    Ok(Some(OperatorCommand::Refresh)) => {
                        let refresher = sync.refresh_handle();
                        tokio::spawn(async move { refresher.refresh().await });
                    }
                    Ok(Some(OperatorCommand::Dismiss)) => sync.store().dismiss_error(),
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }

    sync.shutdown();
    Ok(ExitCode::Success)
}
