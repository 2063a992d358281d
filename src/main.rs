//! Demo host: filter a small project grid and trace the resulting cycles.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use glide_config::GlideConfig;
use glide_motion::{ChildId, FixedPreference, LayoutAnimator, MotionPreference, SystemPreference};
use glide_surface::{FrameDriver, GridItem, GridSurface};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GlideConfig::load_or_default("glide.toml")?;

    // A three-column project grid. Tags stand in for the filter categories a
    // real host would expose as buttons.
    let mut surface = GridSurface::new(350.0, 10.0, 10.0);
    let tags = ["steel", "timber", "steel", "concrete", "timber", "steel"];
    for (i, tag) in tags.iter().enumerate() {
        surface.insert_item(GridItem::new(ChildId(i as u64 + 1), 100.0, 80.0).with_tag(*tag));
    }
    surface.relayout()?;

    let mut animator = LayoutAnimator::new(config.motion.slide_spec(), SystemPreference::new());
    animator.bind_container(surface.container_id());
    let mut driver = FrameDriver::new(animator, surface);

    let report = driver.run_filter(|item| item.has_tag("steel"))?;
    info!(
        cycle = ?report.cycle,
        frames = report.frames,
        completed = report.completed(),
        "steel filter settled"
    );
    for event in &report.events {
        info!(?event);
    }

    let report = driver.run_filter(|_| true)?;
    info!(
        cycle = ?report.cycle,
        frames = report.frames,
        completed = report.completed(),
        "show-all settled"
    );

    // The same grid with reduced motion preferred: the filter still
    // applies, the decoration is skipped.
    let mut surface = GridSurface::new(350.0, 10.0, 10.0);
    for (i, tag) in tags.iter().enumerate() {
        surface.insert_item(GridItem::new(ChildId(i as u64 + 1), 100.0, 80.0).with_tag(*tag));
    }
    surface.relayout()?;
    let mut animator = LayoutAnimator::new(
        config.motion.slide_spec(),
        FixedPreference(MotionPreference::Reduce),
    );
    animator.bind_container(surface.container_id());
    let mut reduced = FrameDriver::new(animator, surface);
    let report = reduced.run_filter(|item| item.has_tag("timber"))?;
    info!(
        skip = ?report.skip_reason(),
        visible = reduced.surface().visible().len(),
        "timber filter with reduced motion"
    );

    Ok(())
}
