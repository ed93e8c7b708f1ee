//! Timer behavior of the transient error surface, under paused time.

use std::time::Duration;

use iris::notice::{ErrorSurface, AUTO_HIDE};

async fn advance(duration: Duration) {
    // Let a freshly spawned auto-hide task register its timer at the current
    // instant before the clock moves.
    tokio::task::yield_now().await;
    tokio::time::advance(duration).await;
    // Let the spawned auto-hide task observe the new time.
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn message_auto_hides_after_ttl() {
    let surface = ErrorSurface::new();
    surface.show("boom");
    assert_eq!(surface.message().as_deref(), Some("boom"));

    advance(AUTO_HIDE - Duration::from_secs(1)).await;
    assert!(surface.is_visible());

    advance(Duration::from_secs(2)).await;
    assert!(!surface.is_visible());
    assert_eq!(surface.message(), None);
}

#[tokio::test(start_paused = true)]
async fn newer_message_survives_older_timer() {
    let surface = ErrorSurface::new();
    surface.show("first");

    advance(Duration::from_secs(5)).await;
    surface.show("second");

    // The first message's timer expires here; "second" must stay.
    advance(Duration::from_secs(6)).await;
    assert_eq!(surface.message().as_deref(), Some("second"));

    // The second message's own timer hides it on schedule.
    advance(Duration::from_secs(5)).await;
    assert!(!surface.is_visible());
}

#[tokio::test(start_paused = true)]
async fn show_overwrites_current_message() {
    let surface = ErrorSurface::new();
    surface.show("first");
    surface.show("second");
    assert_eq!(surface.message().as_deref(), Some("second"));
}

#[tokio::test(start_paused = true)]
async fn hide_is_idempotent() {
    let surface = ErrorSurface::new();
    surface.hide();
    assert!(!surface.is_visible());

    surface.show("boom");
    surface.hide();
    surface.hide();
    assert!(!surface.is_visible());
}
