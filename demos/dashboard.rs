use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use salah_tracker::{
    resolve_location, Clock, CompassPoint, Coordinate, DashboardConfig, DashboardState,
    StaticLocation, SystemClock, Ticker,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DashboardConfig::from_env()?;
    let clock = Arc::new(SystemClock);
    let mut state = DashboardState::new(
        clock.now(),
        config.prayer_table()?,
        config.hijri_adjustment_days,
    );

    // New York
    let provider = StaticLocation(Ok(Coordinate::new(40.0, -74.0)?));
    let resolution = resolve_location(
        &provider,
        &config.located_label.city,
        &config.located_label.country,
        config.fallback_place.clone(),
    )
    .await;
    state = state.apply_location(resolution);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(config.tick_interval(), clock, move |now| {
        let _ = tx.send(now);
    });

    for _ in 0..3 {
        let Some(now) = rx.recv().await else { break };
        state = state.tick(now);
        let view = state.view();

        println!("=== {} ===", view.clock);
        if let Some(place) = &view.place {
            println!("Location: {}", place.label());
        }
        for event in &view.prayers {
            println!("  {:<8} {}", event.prayer.english_name(), event.time);
        }
        if let Some(next) = view.next_prayer {
            println!(
                "Next prayer: {} at {} (in {} min)",
                next.event.prayer.english_name(),
                next.event.time,
                next.minutes_remaining
            );
        }
        if let Some(qibla) = view.qibla_degrees {
            println!(
                "Qibla: {}° ({:?})",
                qibla,
                CompassPoint::nearest(f64::from(qibla))
            );
        }
        println!("Hadith: {}", view.hadith.text);
        if let Some(hijri) = &view.hijri_date {
            println!("Hijri: {} / {}", hijri, view.gregorian_date);
        }
        println!();

        state = state.next_hadith();
    }

    ticker.stop().await;
    Ok(())
}
