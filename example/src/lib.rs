mod controller;
mod gallery;

use tessera_array_view::{
    Result,
    px::{Px, PxSize},
};
use tracing::info;

pub use crate::{
    controller::{GalleryController, GalleryView},
    gallery::{Gallery, Photo, Tile},
};

/// Runs a scripted gallery session: appear, scroll through, rotate, then swap
/// the data set.
pub fn run() -> Result<()> {
    init_tracing();

    let mut controller =
        GalleryController::new(PxSize::new(Px(320), Px(480)), Photo::numbered(1_000));
    controller.will_appear()?;
    log_stats("appeared", &controller);

    for step in 1..=40 {
        controller.scroll_to(Px(step * 250))?;
    }
    log_stats("scrolled", &controller);

    controller.did_resize(PxSize::new(Px(480), Px(320)))?;
    log_stats("rotated", &controller);

    controller.scroll_to(Px(0))?;
    controller.replace_data(Photo::numbered(24))?;
    log_stats("replaced", &controller);

    Ok(())
}

fn log_stats(phase: &str, controller: &GalleryController) {
    let Some(view) = controller.array_view() else {
        return;
    };
    let stats = view.stats();
    info!(
        phase,
        first = ?view.first_visible_item_index(),
        last = ?view.last_visible_item_index(),
        visible = stats.visible,
        pooled = stats.pooled,
        created = stats.created,
        reused = stats.reused,
        peak = stats.peak_materialized,
        "Gallery stats"
    );
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_array_view=debug,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
