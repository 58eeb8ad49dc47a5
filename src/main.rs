use clap::Parser;
use fare_estimator::utils::{logger, validation::Validate};
use fare_estimator::{DemoConfig, FareCoordinator, FareUiState, GeoPoint};
use rand::Rng;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DemoConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fare-estimator demo");
    if config.verbose {
        tracing::debug!("Demo config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let coordinator = FareCoordinator::with_draft(config.pricing_api(), config.initial_draft());

    // Read-only observer, the way a screen would re-render on every
    // published state.
    let mut observed = coordinator.subscribe();
    let renderer = tokio::spawn(async move {
        while observed.changed().await.is_ok() {
            render_transition(&observed.borrow_and_update().clone());
        }
    });

    let mut states = coordinator.subscribe();
    wait_for_settled(&mut states).await?;

    // Scripted gestures standing in for user input. The stops are added
    // back to back on purpose: earlier requests are superseded and only the
    // freshest draft's estimate is published.
    for _ in 0..config.stops {
        coordinator.add_stop(random_point());
    }
    wait_for_settled(&mut states).await?;

    coordinator.change_destination(random_point());
    wait_for_settled(&mut states).await?;

    coordinator.remove_stop();
    let mut settled = wait_for_settled(&mut states).await?;

    // The retry affordance: keep recomputing while the backend misbehaves.
    let mut attempts = 0;
    while let FareUiState::Error(message) = settled.clone() {
        if attempts >= config.retries {
            break;
        }
        attempts += 1;
        tracing::warn!(attempts, "retrying after pricing failure: {}", message);
        coordinator.recompute();
        settled = wait_for_settled(&mut states).await?;
    }

    let exit_code = match settled {
        FareUiState::Content(estimate) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("✅ Fare estimate ({})", estimate.total.currency);
                println!("   Base fare:     {:>8.2}", estimate.base_fare.amount);
                println!("   Distance fare: {:>8.2}", estimate.distance_fare.amount);
                println!("   Time fare:     {:>8.2}", estimate.time_fare.amount);
                println!("   Stops fee:     {:>8.2}", estimate.stops_fee.amount);
                println!("   Total:         {:>8.2}", estimate.total.amount);
            }
            0
        }
        FareUiState::Error(message) => {
            eprintln!("❌ Estimate failed after {} retries: {}", attempts, message);
            1
        }
        FareUiState::Loading => unreachable!("settled state is never loading"),
    };

    drop(coordinator);
    let _ = renderer.await;

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

/// Blocks until the coordinator leaves `Loading`, returning the terminal
/// state of the newest in-flight request.
async fn wait_for_settled(
    states: &mut watch::Receiver<FareUiState>,
) -> anyhow::Result<FareUiState> {
    loop {
        let current = states.borrow_and_update().clone();
        if !current.is_loading() {
            return Ok(current);
        }
        states.changed().await?;
    }
}

fn render_transition(state: &FareUiState) {
    match state {
        FareUiState::Loading => tracing::info!("⏳ Estimating fare..."),
        FareUiState::Content(estimate) => tracing::info!(
            "💶 Estimate ready: {:.2} {}",
            estimate.total.amount,
            estimate.total.currency
        ),
        FareUiState::Error(message) => tracing::warn!("⚠️ Estimate failed: {}", message),
    }
}

/// The demo has no map to pick stops from, so it invents plausible ones.
fn random_point() -> GeoPoint {
    let mut rng = rand::thread_rng();
    GeoPoint::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}
