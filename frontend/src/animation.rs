use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    /// Damping ratio of a unit-mass spring. Below 1.0 the spring overshoots.
    fn damping_ratio(stiffness: f32, damping: f32) -> f32 {
        damping / (2.0 * stiffness.max(f32::EPSILON).sqrt())
    }

    /// CSS timing function. Springs are approximated with a cubic-bezier
    /// whose second control point overshoots by the spring's first peak.
    pub fn css(&self) -> String {
        match *self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::Spring { stiffness, damping } => {
                let zeta = Self::damping_ratio(stiffness, damping);
                if zeta < 1.0 {
                    let overshoot = (-zeta * PI / (1.0 - zeta * zeta).sqrt()).exp();
                    format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", 1.0 + overshoot)
                } else {
                    // Critically or overdamped, no bounce
                    "cubic-bezier(0.22, 1, 0.36, 1)".to_string()
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseOut,
        }
    }

    /// Spring with the given stiffness and damping. Duration is the time the
    /// oscillation takes to settle within ~2% (8 / damping seconds for a
    /// unit mass).
    pub fn spring(stiffness: f32, damping: f32) -> Self {
        let millis = (8000.0 / damping.max(f32::EPSILON)).round() as u64;
        Self {
            duration: Duration::from_millis(millis),
            delay: Duration::ZERO,
            easing: Easing::Spring { stiffness, damping },
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn transition(&self, properties: &[&str]) -> String {
        let easing = self.easing.css();
        properties
            .iter()
            .map(|property| {
                format!(
                    "{} {}ms {} {}ms",
                    property,
                    self.duration.as_millis(),
                    easing,
                    self.delay.as_millis()
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The spring every hover effect on the page uses.
pub fn hover_spring() -> AnimationSpec {
    AnimationSpec::spring(400.0, 10.0)
}

/// Visual state of an animated element: opacity plus a 2D translate/scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent and pushed down by `offset` pixels.
    pub const fn below(offset: f32) -> Pose {
        Pose {
            opacity: 0.0,
            x: 0.0,
            y: offset,
            scale: 1.0,
        }
    }

    /// Fully opaque, moved vertically by `offset` pixels.
    pub const fn shifted(offset: f32) -> Pose {
        Pose {
            opacity: 1.0,
            x: 0.0,
            y: offset,
            scale: 1.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// A one-way transition from `from` to `Pose::RESTING`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub spec: AnimationSpec,
}

impl Motion {
    pub fn new(from: Pose, spec: AnimationSpec) -> Self {
        Self { from, spec }
    }

    pub fn pose(&self, settled: bool) -> Pose {
        if settled {
            Pose::RESTING
        } else {
            self.from
        }
    }

    /// Inline style for the element, including the transition so the browser
    /// interpolates when `settled` flips.
    pub fn style(&self, settled: bool) -> String {
        format!(
            "{} transition: {};",
            self.pose(settled).css(),
            self.spec.transition(&["opacity", "transform"])
        )
    }
}

/// Start delay of the `index`-th sibling in a staggered group.
pub fn stagger(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    /// Card rises 10px.
    Lift,
    /// Lift plus a deeper drop shadow.
    LiftShadow,
    /// Slides 10px to the right.
    Nudge,
    /// Brand mark and images, scale 1.05.
    Grow,
    /// Large blocks, scale 1.02.
    GrowSoft,
    /// Nav links, scale 1.1.
    Pop,
    /// Social icons, scale 1.2.
    PopLarge,
    /// Image inside the element zooms to 1.05.
    Zoom,
    /// Shrinks to 0.95 while pressed.
    Press,
}

impl Hover {
    pub const ALL: [Hover; 9] = [
        Hover::Lift,
        Hover::LiftShadow,
        Hover::Nudge,
        Hover::Grow,
        Hover::GrowSoft,
        Hover::Pop,
        Hover::PopLarge,
        Hover::Zoom,
        Hover::Press,
    ];

    pub fn class(self) -> &'static str {
        match self {
            Hover::Lift => "hover-lift",
            Hover::LiftShadow => "hover-lift-shadow",
            Hover::Nudge => "hover-nudge",
            Hover::Grow => "hover-grow",
            Hover::GrowSoft => "hover-grow-soft",
            Hover::Pop => "hover-pop",
            Hover::PopLarge => "hover-pop-large",
            Hover::Zoom => "hover-zoom",
            Hover::Press => "press",
        }
    }

    fn declarations(self) -> &'static str {
        match self {
            Hover::Lift => "transform: translateY(-10px);",
            Hover::LiftShadow => {
                "transform: translateY(-10px); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);"
            }
            Hover::Nudge => "transform: translateX(10px);",
            Hover::Grow | Hover::Zoom => "transform: scale(1.05);",
            Hover::GrowSoft => "transform: scale(1.02);",
            Hover::Pop => "transform: scale(1.1);",
            Hover::PopLarge => "transform: scale(1.2);",
            Hover::Press => "transform: scale(0.95);",
        }
    }

    fn spec(self) -> AnimationSpec {
        match self {
            Hover::Zoom => AnimationSpec::tween(Duration::from_millis(500)),
            Hover::Press => AnimationSpec::tween(Duration::from_millis(150)),
            _ => hover_spring(),
        }
    }

    /// Base rule carrying the transition, and the rule applied on hover.
    pub fn rules(self) -> String {
        let class = self.class();
        let properties: &[&str] = match self {
            Hover::LiftShadow => &["transform", "box-shadow"],
            _ => &["transform"],
        };
        let transition = self.spec().transition(properties);
        match self {
            Hover::Zoom => format!(
                ".{class} img {{ transition: {transition}; }}\n.{class}:hover img {{ {} }}\n",
                self.declarations()
            ),
            Hover::Press => format!(
                ".{class} {{ transition: {transition}; }}\n.{class}:active {{ {} }}\n",
                self.declarations()
            ),
            _ => format!(
                ".{class} {{ transition: {transition}; }}\n.{class}:hover {{ {} }}\n",
                self.declarations()
            ),
        }
    }
}

pub fn hover_stylesheet() -> String {
    Hover::ALL.iter().map(|hover| hover.rules()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_pose_css() {
        assert_eq!(
            Pose::below(50.0).css(),
            "opacity: 0; transform: translate(0px, 50px) scale(1);"
        );
        assert_eq!(
            Pose::RESTING.css(),
            "opacity: 1; transform: translate(0px, 0px) scale(1);"
        );
    }

    #[test]
    fn test_transition_includes_delay() {
        let spec = AnimationSpec::tween(Duration::from_millis(800))
            .with_delay(Duration::from_millis(400));
        assert_eq!(
            spec.transition(&["opacity", "transform"]),
            "opacity 800ms ease-out 400ms, transform 800ms ease-out 400ms"
        );
    }

    #[test]
    fn test_motion_style_switches_pose_only() {
        let motion = Motion::new(Pose::below(50.0), AnimationSpec::tween(Duration::from_millis(800)));
        let hidden = motion.style(false);
        let shown = motion.style(true);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(shown.starts_with("opacity: 1;"));
        assert!(hidden.ends_with("transform 800ms ease-out 0ms;"));
        assert!(shown.ends_with("transform 800ms ease-out 0ms;"));
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = hover_spring();
        assert_eq!(spring.duration, Duration::from_millis(800));
        assert_eq!(spring.easing.css(), "cubic-bezier(0.34, 1.44, 0.64, 1)");
    }

    #[test]
    fn test_overdamped_spring_does_not_overshoot() {
        let easing = Easing::Spring {
            stiffness: 100.0,
            damping: 40.0,
        };
        assert_eq!(easing.css(), "cubic-bezier(0.22, 1, 0.36, 1)");
    }

    #[test]
    fn test_stagger_steps_are_even() {
        let step = Duration::from_millis(200);
        assert_eq!(stagger(0, step), Duration::ZERO);
        for index in 1..8 {
            let gap = stagger(index, step) - stagger(index - 1, step);
            assert!(gap >= step, "card {index} starts too early");
        }
        assert_eq!(stagger(2, step), Duration::from_millis(400));
    }

    #[test]
    fn test_hover_stylesheet_rules() {
        let css = hover_stylesheet();
        assert!(css.contains(".hover-lift:hover { transform: translateY(-10px); }"));
        assert!(css.contains(".hover-zoom:hover img { transform: scale(1.05); }"));
        assert!(css.contains(".hover-zoom img { transition: transform 500ms ease-out 0ms; }"));
        assert!(css.contains(".hover-nudge:hover { transform: translateX(10px); }"));
        assert!(css.contains(".press:active { transform: scale(0.95); }"));
        assert!(css.contains("box-shadow 800ms"));
    }
}
