//! Demo: plays a fused transition group, then a mixed group, on a fixed
//! frame clock. Pass a TOML options file as the first argument to override
//! the defaults.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use transition_group::animation::{
    Animation, AnimationManager, CallbackAnimation, SharedAnimation,
};
use transition_group::controller::default_factory;
use transition_group::options::GroupOptions;
use transition_group::transition::{Property, PropertyTarget, Transition};
use transition_group::util::easing::EasingFunction;
use transition_group::AnimationError;

/// Frame budget before a run is considered stuck.
const MAX_FRAMES: usize = 10_000;

fn load_options() -> Result<GroupOptions, AnimationError> {
    match std::env::args().nth(1) {
        Some(path) => GroupOptions::load(Path::new(&path)),
        None => Ok(GroupOptions::default()),
    }
}

/// Pump `group` at `interval` until it stops. Returns the frames played.
fn play(group: &AnimationManager, interval: Duration) -> usize {
    let mut frames = 0;
    while frames < MAX_FRAMES && group.tick(interval) {
        frames += 1;
    }
    frames
}

fn run(options: &GroupOptions) -> Result<(), AnimationError> {
    let card = PropertyTarget::shared("card");
    let badge = PropertyTarget::shared("badge");

    let group = AnimationManager::from_options(options, default_factory());
    group.add_all_transitions([
        Transition::new("card-fade")
            .targeting(card.clone())
            .with_track(Property::Alpha, 0.0, 1.0)
            .into_shared(),
        Transition::new("badge-pop")
            .targeting(badge.clone())
            .with_track(Property::ScaleX, 0.5, 1.0)
            .with_track(Property::ScaleY, 0.5, 1.0)
            .with_easing(EasingFunction::EaseOut)
            .into_shared(),
    ]);

    let interval = options.frame_interval();
    group.start()?;
    log::info!(
        "homogeneous run: {} members, fused = {}",
        group.len(),
        group.shared_controller().is_some()
    );
    let frames = play(&group, interval);
    log::info!(
        "finished after {frames} frames: card alpha {:?}, badge scale {:?}",
        card.value(Property::Alpha),
        badge.value(Property::ScaleX)
    );

    let counter: SharedAnimation = Rc::new(CallbackAnimation::new(
        "counter",
        Duration::from_millis(500),
        |t| log::debug!("counter at {:.0}", t * 100.0),
    ));
    group.add_animation(counter);
    group.start()?;
    log::info!(
        "mixed run: {} members, fused = {}",
        group.len(),
        group.shared_controller().is_some()
    );
    let frames = play(&group, interval);
    log::info!("finished after {frames} frames");
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
