//! Headless Pulse Demo
//!
//! Mounts a small tree, keeps a pulsing opacity animation running across
//! re-renders and prints what each frame changed:
//! - Reverse + loop animation on a label
//! - A transform animation that finishes and holds its end value
//! - A re-render halfway through that reuses every slot
//! - One simulated second stepped at the target frame rate
//!
//! Run with: cargo run -p weft_app --example headless_pulse

use anyhow::{Context, Result};
use weft_app::logging;
use weft_app::prelude::*;
use weft_widgets::OpacityActuator;

const CONFIG: &str = r#"
[frame]
fixed_delta_ms = 50.0

[logging]
filter = "info,weft_widgets=debug"
"#;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_toml_str(CONFIG).context("parsing demo config")?;
    logging::init(&config.logging).context("initializing logging")?;

    let mut runtime = Runtime::new(&config);
    runtime
        .styles_mut()
        .register(Style::<Label>::new().enabled(true).hit_test_visible(true));

    let ui = build_ui(runtime.styles(), true)?;
    runtime.render(ui);

    for frame in 0..12 {
        if frame == 6 {
            let ui = build_ui(runtime.styles(), false)?;
            let stats = runtime.render(ui);
            println!("re-render: {stats:?}");
        }

        let stats = runtime.frame();
        let root = runtime.root().context("tree mounted")?;
        let pulse = root
            .child(0)
            .and_then(|node| node.downcast_ref::<Label>())
            .context("pulse label")?;
        let slide = root
            .child(1)
            .and_then(|node| node.downcast_ref::<Label>())
            .context("slide label")?;

        println!(
            "frame {frame:2}: changed={} pulse.opacity={:.2} slide.x={:.1}",
            stats.changed,
            pulse.element().opacity,
            slide.element().transform.e,
        );
        runtime.finish_paint();
    }

    let settle = runtime.advance(1000.0);
    println!(
        "settled one second at {} fps: {settle:?}",
        runtime.clock().target_fps()
    );

    Ok(())
}

fn build_ui(styles: &StyleRegistry, start_animations: bool) -> Result<Box<dyn Widget>> {
    let mut pulse = Label::new(styles, "pulse");
    let mut slide = Label::new(styles, "slide");

    if start_animations {
        let breathe = NumberAnimation::new(1.0, 0.2, 200, Easing::EaseInOutQuad)?
            .reverse()
            .looping();
        pulse = pulse.with_animation(OpacityActuator::<Label>::new(breathe));

        let enter =
            TransformAnimation::to(Transform::translate(120.0, 0.0), 300, Easing::EaseOutBack)?;
        slide = slide.animate_transform(enter);
    }

    Ok(Box::new(Panel::new(styles).child(pulse).child(slide)))
}
