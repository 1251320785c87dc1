use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("viewport intersection is not available in this environment")]
    Unsupported,
    #[error("intersection observer could not be created: {0}")]
    Rejected(String),
}

/// Handle to an external notification source. Releasing runs the detach
/// callback at most once; dropping an unreleased subscription releases it.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.detach.is_some()
    }

    pub fn release(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealed,
}

impl RevealPhase {
    pub fn is_revealed(self) -> bool {
        self == RevealPhase::Revealed
    }
}

/// One-shot `Hidden -> Revealed` latch that owns the subscription feeding it.
///
/// The subscription is released on the first qualifying notification, on
/// [`RevealLatch::detach`], or when the latch is dropped, whichever comes
/// first. Once revealed the latch never goes back.
#[derive(Debug)]
pub struct RevealLatch {
    threshold: f64,
    phase: RevealPhase,
    subscription: Option<Subscription>,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            phase: RevealPhase::Hidden,
            subscription: None,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_attached(&self) -> bool {
        self.subscription
            .as_ref()
            .map_or(false, Subscription::is_active)
    }

    /// Connects the latch to its visibility source. `None` means the
    /// environment has no such signal and the latch reveals immediately.
    pub fn attach(&mut self, subscription: Option<Subscription>) -> RevealPhase {
        match subscription {
            Some(subscription) if self.phase == RevealPhase::Hidden => {
                self.detach();
                self.subscription = Some(subscription);
            }
            Some(mut subscription) => subscription.release(),
            None => self.reveal(),
        }
        self.phase
    }

    /// Feeds one intersection ratio. Returns true only for the notification
    /// that flips the latch.
    pub fn notify(&mut self, ratio: f64) -> bool {
        if self.phase.is_revealed() || ratio.is_nan() || ratio < self.threshold {
            return false;
        }
        self.reveal();
        true
    }

    pub fn detach(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
    }

    fn reveal(&mut self) {
        self.phase = RevealPhase::Revealed;
        self.detach();
    }
}

pub fn viewport_signal_available() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Phase to render with before any notification arrives. Without a
/// visibility signal the content starts at rest.
pub fn initial_phase(signal_available: bool) -> RevealPhase {
    if signal_available {
        RevealPhase::Hidden
    } else {
        RevealPhase::Revealed
    }
}

/// Largest intersection ratio in one observer batch. An empty batch counts
/// as fully out of view.
pub fn batch_ratio(ratios: impl IntoIterator<Item = f64>) -> f64 {
    ratios.into_iter().fold(0.0, f64::max)
}

/// Feeds one observer batch to `latch` and runs `on_reveal` if that batch
/// flipped it. The latch borrow ends before `on_reveal` runs.
fn deliver_batch(
    latch: &RefCell<RevealLatch>,
    ratios: impl IntoIterator<Item = f64>,
    on_reveal: &dyn Fn(),
) -> bool {
    let ratio = batch_ratio(ratios);
    let flipped = latch.borrow_mut().notify(ratio);
    if flipped {
        debug!("Revealing element at intersection ratio {:.2}", ratio);
        on_reveal();
    }
    flipped
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(
    element: &Element,
    threshold: f64,
    callback: &ObserverCallback,
) -> Result<Subscription, ObserveError> {
    if !viewport_signal_available() {
        return Err(ObserveError::Unsupported);
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| ObserveError::Rejected(format!("{:?}", err)))?;
    observer.observe(element);
    Ok(Subscription::new(move || observer.disconnect()))
}

/// Live `IntersectionObserver` bound to one element and one latch.
///
/// The JS callback stays owned here until [`ViewportWatch::stop`] or drop, so
/// it is never freed while the browser may still invoke it.
pub struct ViewportWatch {
    latch: Rc<RefCell<RevealLatch>>,
    _callback: ObserverCallback,
}

impl ViewportWatch {
    /// Watches `element` until it first reaches `threshold`. With no element
    /// or no usable observer the latch is attached to nothing and reveals at
    /// once; check [`ViewportWatch::phase`] right after starting.
    pub fn start(element: Option<&Element>, threshold: f64, on_reveal: impl Fn() + 'static) -> Self {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));
        let callback = {
            let latch = latch.clone();
            ObserverCallback::new(move |entries: Array, _observer: IntersectionObserver| {
                let ratios = entries.iter().map(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .intersection_ratio()
                });
                deliver_batch(&latch, ratios, &on_reveal);
            })
        };

        let subscription = match element {
            Some(element) => match observe(element, threshold, &callback) {
                Ok(subscription) => Some(subscription),
                Err(err) => {
                    warn!("{}, showing content without animation", err);
                    None
                }
            },
            None => {
                warn!("Reveal target is not mounted, showing content without animation");
                None
            }
        };
        latch.borrow_mut().attach(subscription);

        Self {
            latch,
            _callback: callback,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.latch.borrow().phase()
    }

    pub fn stop(&mut self) {
        self.latch.borrow_mut().detach();
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        (subscription, released)
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut latch = RevealLatch::new(0.1);
        let (subscription, released) = counting_subscription();
        assert_eq!(latch.attach(Some(subscription)), RevealPhase::Hidden);

        assert!(!latch.notify(0.0));
        assert!(!latch.notify(0.05));
        assert_eq!(latch.phase(), RevealPhase::Hidden);
        assert!(latch.is_attached());
        assert_eq!(released.get(), 0);

        assert!(latch.notify(0.1));
        assert_eq!(latch.phase(), RevealPhase::Revealed);
        assert!(!latch.is_attached());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_later_notifications_are_ignored() {
        let mut latch = RevealLatch::new(0.1);
        let (subscription, released) = counting_subscription();
        latch.attach(Some(subscription));

        assert!(latch.notify(0.6));
        assert!(!latch.notify(0.0));
        assert!(!latch.notify(1.0));
        assert_eq!(latch.phase(), RevealPhase::Revealed);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_nan_ratio_does_not_reveal() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.notify(f64::NAN));
        assert_eq!(latch.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_missing_signal_reveals_immediately() {
        assert_eq!(initial_phase(false), RevealPhase::Revealed);
        assert_eq!(initial_phase(true), RevealPhase::Hidden);

        // What a watch does when the observer could not be created
        let mut latch = RevealLatch::new(0.1);
        assert_eq!(latch.attach(None), RevealPhase::Revealed);
        assert!(!latch.is_attached());
        assert!(!latch.notify(1.0));
    }

    #[test]
    fn test_empty_batch_counts_as_out_of_view() {
        assert_eq!(batch_ratio(Vec::<f64>::new()), 0.0);

        let latch = RefCell::new(RevealLatch::new(0.1));
        let reveals = Cell::new(0);
        assert!(!deliver_batch(&latch, Vec::<f64>::new(), &|| reveals.set(reveals.get() + 1)));
        assert_eq!(reveals.get(), 0);
        assert_eq!(latch.borrow().phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_batch_reveals_on_its_largest_ratio() {
        assert_eq!(batch_ratio([0.05, 0.3, 0.0]), 0.3);

        let latch = RefCell::new(RevealLatch::new(0.1));
        let (subscription, released) = counting_subscription();
        latch.borrow_mut().attach(Some(subscription));
        let reveals = Cell::new(0);
        let on_reveal = || reveals.set(reveals.get() + 1);

        assert!(deliver_batch(&latch, [0.05, 0.3], &on_reveal));
        assert_eq!(reveals.get(), 1);
        assert_eq!(released.get(), 1);

        assert!(!deliver_batch(&latch, [0.9, 1.0], &on_reveal));
        assert_eq!(reveals.get(), 1);
        assert_eq!(latch.borrow().phase(), RevealPhase::Revealed);
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut latch = RevealLatch::new(0.1);
        let (subscription, released) = counting_subscription();
        latch.attach(Some(subscription));

        latch.detach();
        latch.detach();
        assert_eq!(released.get(), 1);
        assert_eq!(latch.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let (subscription, released) = counting_subscription();
        {
            let mut latch = RevealLatch::new(0.1);
            latch.attach(Some(subscription));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_attach_after_reveal_releases_new_subscription() {
        let mut latch = RevealLatch::new(0.1);
        latch.attach(None);
        let (subscription, released) = counting_subscription();
        assert_eq!(latch.attach(Some(subscription)), RevealPhase::Revealed);
        assert_eq!(released.get(), 1);
        assert!(!latch.is_attached());
    }

    #[test]
    fn test_reattach_releases_previous_subscription() {
        let mut latch = RevealLatch::new(0.1);
        let (first, first_released) = counting_subscription();
        let (second, second_released) = counting_subscription();
        latch.attach(Some(first));
        latch.attach(Some(second));
        assert_eq!(first_released.get(), 1);
        assert_eq!(second_released.get(), 0);
    }

    #[test]
    fn test_offer_cards_reveal_independently() {
        let mut cards: Vec<RevealLatch> = (0..3).map(|_| RevealLatch::new(0.1)).collect();
        let releases: Vec<Rc<Cell<u32>>> = cards
            .iter_mut()
            .map(|card| {
                let (subscription, released) = counting_subscription();
                card.attach(Some(subscription));
                released
            })
            .collect();
        assert!(cards.iter().all(|card| card.phase() == RevealPhase::Hidden));

        assert!(cards[0].notify(0.12));
        assert_eq!(cards[0].phase(), RevealPhase::Revealed);
        assert_eq!(cards[1].phase(), RevealPhase::Hidden);
        assert_eq!(cards[2].phase(), RevealPhase::Hidden);
        assert_eq!(releases[0].get(), 1);
        assert_eq!(releases[1].get(), 0);
        assert_eq!(releases[2].get(), 0);
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut latch = RevealLatch::new(4.0);
        assert!(!latch.notify(0.99));
        assert!(latch.notify(1.0));
    }
}
