use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::{AnimationSpec, Motion, Pose};
use crate::config;
use crate::visibility::{initial_phase, viewport_signal_available, RevealPhase, ViewportWatch};

fn reveal_motion(delay: Duration, offset: f32) -> Motion {
    Motion::new(
        Pose::below(offset),
        AnimationSpec::tween(config::REVEAL.duration).with_delay(delay),
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Wait before the fade starts, once the element is in view.
    #[prop_or_default]
    pub delay: Duration,
    /// Distance (px) travelled while fading in. Zero fades in place.
    #[prop_or(config::REVEAL.offset)]
    pub offset: f32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children up into place the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let phase = use_state(|| initial_phase(viewport_signal_available()));

    {
        let node = node.clone();
        let set_phase = phase.setter();
        let already_revealed = phase.is_revealed();
        use_effect_with_deps(
            move |_| {
                let mut watch = None;
                if !already_revealed {
                    let on_reveal = {
                        let set_phase = set_phase.clone();
                        move || set_phase.set(RevealPhase::Revealed)
                    };
                    let element = node.cast::<Element>();
                    let started =
                        ViewportWatch::start(element.as_ref(), config::REVEAL.threshold, on_reveal);
                    if started.phase().is_revealed() {
                        set_phase.set(RevealPhase::Revealed);
                    }
                    watch = Some(started);
                }
                move || {
                    if let Some(mut watch) = watch {
                        watch.stop();
                    }
                }
            },
            (),
        );
    }

    let style = reveal_motion(props.delay, props.offset).style(phase.is_revealed());

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={style}>
            { for props.children.iter() }
        </div>
    }
}

type FrameStep = Box<dyn FnOnce()>;

/// Runs `done` after `frames` ticks of `schedule`. Only the pending handle is
/// kept, in `slot`; emptying the slot cancels whatever has not run yet.
fn after_frames<H: 'static>(
    frames: u32,
    schedule: Rc<dyn Fn(FrameStep) -> H>,
    slot: Rc<RefCell<Option<H>>>,
    done: FrameStep,
) {
    if frames == 0 {
        slot.borrow_mut().take();
        done();
        return;
    }
    let next: FrameStep = {
        let schedule = schedule.clone();
        let slot = slot.clone();
        Box::new(move || after_frames(frames - 1, schedule, slot, done))
    };
    let handle = schedule(next);
    *slot.borrow_mut() = Some(handle);
}

/// Flips to true once the starting pose has been painted, for entrances that
/// play on page load rather than on scroll.
#[hook]
pub fn use_entrance() -> bool {
    let entered = use_state(|| false);
    {
        let set_entered = entered.setter();
        use_effect_with_deps(
            move |_| {
                let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
                let schedule: Rc<dyn Fn(FrameStep) -> AnimationFrame> =
                    Rc::new(|step: FrameStep| request_animation_frame(move |_| step()));
                after_frames(
                    config::ENTRANCE_FRAMES,
                    schedule,
                    slot.clone(),
                    Box::new(move || set_entered.set(true)),
                );
                // Dropping the pending frame cancels it if we unmount first
                move || drop(slot.borrow_mut().take())
            },
            (),
        );
    }
    *entered
}

#[derive(Properties, PartialEq)]
pub struct EntranceProps {
    #[prop_or_default]
    pub children: Children,
    pub motion: Motion,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Entrance)]
pub fn entrance(props: &EntranceProps) -> Html {
    let entered = use_entrance();
    html! {
        <div class={props.class.clone()} style={props.motion.style(entered)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_reveal_motion_poses() {
        let motion = reveal_motion(Duration::ZERO, config::REVEAL.offset);
        assert_eq!(motion.pose(false), Pose::below(50.0));
        assert_eq!(motion.pose(true), Pose::RESTING);
        assert_eq!(motion.spec.duration, Duration::from_millis(800));
    }

    #[test]
    fn test_reveal_delay_reaches_transition() {
        let style = reveal_motion(Duration::from_millis(400), config::REVEAL.offset).style(false);
        assert!(style.contains("opacity 800ms ease-out 400ms"));
        assert!(style.starts_with("opacity: 0; transform: translate(0px, 50px)"));
    }

    #[test]
    fn test_zero_offset_fades_in_place() {
        let motion = reveal_motion(Duration::from_millis(200), 0.0);
        assert!(motion
            .style(false)
            .starts_with("opacity: 0; transform: translate(0px, 0px) scale(1);"));
        assert_eq!(motion.pose(true), Pose::RESTING);
    }

    /// Frame queue standing in for the browser: handles are frame numbers and
    /// `tick` runs everything queued before it.
    struct Frames {
        queue: RefCell<Vec<FrameStep>>,
    }

    fn scheduler(frames: &Rc<Frames>) -> Rc<dyn Fn(FrameStep) -> usize> {
        let frames = frames.clone();
        Rc::new(move |step: FrameStep| {
            let mut queue = frames.queue.borrow_mut();
            queue.push(step);
            queue.len()
        })
    }

    impl Frames {
        fn tick(&self) {
            let due: Vec<FrameStep> = self.queue.borrow_mut().drain(..).collect();
            for step in due {
                step();
            }
        }
    }

    #[test]
    fn test_entrance_waits_for_second_frame() {
        let frames = Rc::new(Frames {
            queue: RefCell::new(Vec::new()),
        });
        let slot = Rc::new(RefCell::new(None));
        let entered = Rc::new(Cell::new(false));
        let flag = entered.clone();
        after_frames(2, scheduler(&frames), slot.clone(), Box::new(move || flag.set(true)));

        assert!(!entered.get());
        assert!(slot.borrow().is_some());
        frames.tick();
        assert!(!entered.get());
        frames.tick();
        assert!(entered.get());
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_zero_frames_runs_at_once() {
        let frames = Rc::new(Frames {
            queue: RefCell::new(Vec::new()),
        });
        let slot = Rc::new(RefCell::new(None));
        let entered = Rc::new(Cell::new(false));
        let flag = entered.clone();
        after_frames(0, scheduler(&frames), slot, Box::new(move || flag.set(true)));
        assert!(entered.get());
        assert!(frames.queue.borrow().is_empty());
    }
}
