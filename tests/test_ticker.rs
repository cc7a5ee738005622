use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tokio::sync::mpsc;

use salah_tracker::clock::{Clock, FixedClock};
use salah_tracker::ticker::Ticker;

fn clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2026, 3, 21)
            .unwrap()
            .and_hms_opt(5, 29, 58)
            .unwrap(),
    )
}

// ── Lifecycle ──

#[tokio::test(start_paused = true)]
async fn test_first_tick_is_immediate() {
    let clock = Arc::new(clock());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::from_secs(1), clock.clone(), move |now| {
        let _ = tx.send(now);
    });
    let first = rx.recv().await.unwrap();
    assert_eq!(first, clock.now());
    ticker.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_ticks_sample_clock_each_period() {
    let clock = Arc::new(clock());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::from_secs(1), clock.clone(), move |now| {
        let _ = tx.send(now);
    });

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(rx.recv().await.unwrap());
        clock.advance(chrono::Duration::seconds(1));
    }
    assert_eq!(seen[1] - seen[0], chrono::Duration::seconds(1));
    assert_eq!(seen[2] - seen[1], chrono::Duration::seconds(1));
    ticker.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_ends_ticks() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::from_secs(1), Arc::new(clock()), move |now| {
        let _ = tx.send(now);
    });
    assert!(ticker.is_running());
    rx.recv().await.unwrap();
    ticker.stop().await;

    // the callback (and its sender) is dropped with the task
    while rx.try_recv().is_ok() {}
    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::from_secs(1), Arc::new(clock()), move |now| {
        let _ = tx.send(now);
    });
    rx.recv().await.unwrap();
    drop(ticker);

    // recv only returns None once the task has exited
    let mut extra = 0;
    while rx.recv().await.is_some() {
        extra += 1;
    }
    assert!(extra <= 2, "extra ticks after drop: {}", extra);
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_is_raised_to_minimum() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::ZERO, Arc::new(clock()), move |now| {
        let _ = tx.send(now);
    });
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());
    ticker.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_dyn_clock() {
    let clock: Arc<dyn Clock> = Arc::new(clock());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticker = Ticker::start(Duration::from_millis(250), clock, move |now| {
        let _ = tx.send(now);
    });
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());
    ticker.stop().await;
}
