//! Counter animations for the hero stats and monthly projections.
//!
//! One engine covers both derivation modes: targets parsed out of an
//! element's literal text ("17", "40k", "20k - 40k") and targets read from
//! `data-target`/`data-prefix`/`data-suffix` attributes. Values ramp
//! linearly from zero and the element ends up showing the exact original
//! literal, trailing units included.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

/// What a counter element should count up to.
#[derive(Debug, Clone, PartialEq)]
pub enum CounterTarget {
    /// A single value framed by optional literal text, e.g. `R$ 800` or `40k`.
    Single {
        value: u32,
        prefix: String,
        suffix: String,
    },
    /// A two-ended interval like `20k - 40k`; both ends share one suffix and
    /// finish together.
    Range {
        start: u32,
        end: u32,
        suffix: String,
        literal: String,
    },
}

impl CounterTarget {
    /// Derives a target from an element's displayed text.
    ///
    /// Ranges are recognized by the `" - "` delimiter; otherwise the text is
    /// split into a leading non-numeric prefix, the number itself and a
    /// trailing suffix. Returns `None` when there is no number to animate.
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some((left, right)) = text.split_once(" - ") {
            let start = leading_number(left)?;
            let end = leading_number(right)?;
            Some(Self::Range {
                start,
                end,
                suffix: without_digits(right),
                literal: text.to_string(),
            })
        } else {
            let first_digit = text.find(|c: char| c.is_ascii_digit())?;
            let (prefix, rest) = text.split_at(first_digit);
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let value = rest[..digits_end].parse().ok()?;
            Some(Self::Single {
                value,
                prefix: prefix.to_string(),
                suffix: rest[digits_end..].to_string(),
            })
        }
    }

    /// Derives a target from `data-*` attribute values.
    pub fn from_data_attributes(target: &str, prefix: &str, suffix: &str) -> Option<Self> {
        let value = target.trim().parse().ok()?;
        Some(Self::Single {
            value,
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Text shown at `progress` (clamped to [0, 1]). Intermediate frames
    /// floor the interpolated value; a finished counter shows the exact
    /// target literal.
    pub fn display(&self, progress: f64) -> String {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Single {
                value,
                prefix,
                suffix,
            } => {
                if t >= 1.0 {
                    format!("{}{}{}", prefix, value, suffix)
                } else {
                    let current = (f64::from(*value) * t).floor() as u32;
                    format!("{}{}{}", prefix, current, suffix)
                }
            }
            Self::Range {
                start,
                end,
                suffix,
                literal,
            } => {
                if t >= 1.0 {
                    literal.clone()
                } else {
                    let s = (f64::from(*start) * t).floor() as u32;
                    let e = (f64::from(*end) * t).floor() as u32;
                    format!("{}{} - {}{}", s, suffix, e, suffix)
                }
            }
        }
    }
}

/// A target progressing through its run. Elapsed time is accumulated in
/// fixed ticks so the ramp is deterministic regardless of timer jitter.
#[derive(Debug, Clone)]
pub struct CounterRun {
    target: CounterTarget,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl CounterRun {
    pub fn new(target: CounterTarget, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    pub fn advance(&mut self, dt_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn display(&self) -> String {
        self.target.display(self.progress())
    }

    fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        f64::from(self.elapsed_ms) / f64::from(self.duration_ms)
    }
}

/// Cancels the animation it was returned for when dropped.
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

/// Counter timer tick, matching the original 16 ms interval.
pub const TICK_MS: u32 = 16;

/// Animates a batch of elements in lockstep over `duration_ms`.
///
/// Every element is reset to its zero form up front, then all advance on a
/// shared 16 ms tick until the whole batch has finished. The loop stops on
/// its own after the final frame; dropping the returned handle stops it
/// early (the next pending tick notices and exits without touching the
/// document again).
pub fn animate_all(
    targets: Vec<(Element, CounterTarget)>,
    duration_ms: u32,
) -> AnimationHandle {
    let cancelled = Rc::new(Cell::new(false));
    let flag = cancelled.clone();

    spawn_local(async move {
        let mut runs: Vec<(Element, CounterRun)> = targets
            .into_iter()
            .map(|(el, target)| (el, CounterRun::new(target, duration_ms)))
            .collect();
        if runs.is_empty() {
            return;
        }

        for (el, run) in &runs {
            el.set_text_content(Some(&run.display()));
        }

        loop {
            TimeoutFuture::new(TICK_MS).await;
            if flag.get() {
                return;
            }
            let mut all_complete = true;
            for (el, run) in &mut runs {
                run.advance(TICK_MS);
                el.set_text_content(Some(&run.display()));
                if !run.is_complete() {
                    all_complete = false;
                }
            }
            if all_complete {
                return;
            }
        }
    });

    AnimationHandle { cancelled }
}

fn leading_number(text: &str) -> Option<u32> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

fn without_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(target: CounterTarget, duration_ms: u32) -> Vec<String> {
        let mut run = CounterRun::new(target, duration_ms);
        let mut frames = vec![run.display()];
        while !run.is_complete() {
            run.advance(TICK_MS);
            frames.push(run.display());
        }
        frames
    }

    #[test]
    fn parses_plain_number() {
        assert_eq!(
            CounterTarget::from_text("17"),
            Some(CounterTarget::Single {
                value: 17,
                prefix: String::new(),
                suffix: String::new(),
            })
        );
    }

    #[test]
    fn parses_suffixed_number() {
        assert_eq!(
            CounterTarget::from_text("40k"),
            Some(CounterTarget::Single {
                value: 40,
                prefix: String::new(),
                suffix: "k".to_string(),
            })
        );
    }

    #[test]
    fn parses_prefixed_number() {
        assert_eq!(
            CounterTarget::from_text("R$ 800"),
            Some(CounterTarget::Single {
                value: 800,
                prefix: "R$ ".to_string(),
                suffix: String::new(),
            })
        );
    }

    #[test]
    fn parses_percentage() {
        assert_eq!(
            CounterTarget::from_text("5%"),
            Some(CounterTarget::Single {
                value: 5,
                prefix: String::new(),
                suffix: "%".to_string(),
            })
        );
    }

    #[test]
    fn parses_range_with_suffix() {
        assert_eq!(
            CounterTarget::from_text("20k - 40k"),
            Some(CounterTarget::Range {
                start: 20,
                end: 40,
                suffix: "k".to_string(),
                literal: "20k - 40k".to_string(),
            })
        );
    }

    #[test]
    fn parses_bare_range() {
        assert_eq!(
            CounterTarget::from_text("9 - 56"),
            Some(CounterTarget::Range {
                start: 9,
                end: 56,
                suffix: String::new(),
                literal: "9 - 56".to_string(),
            })
        );
    }

    #[test]
    fn rejects_text_without_numbers() {
        assert_eq!(CounterTarget::from_text(""), None);
        assert_eq!(CounterTarget::from_text("em breve"), None);
        assert_eq!(CounterTarget::from_text("a - b"), None);
    }

    #[test]
    fn data_attributes_build_single_targets() {
        assert_eq!(
            CounterTarget::from_data_attributes("800", "R$ ", ""),
            Some(CounterTarget::Single {
                value: 800,
                prefix: "R$ ".to_string(),
                suffix: String::new(),
            })
        );
        assert_eq!(CounterTarget::from_data_attributes("muitos", "", ""), None);
    }

    #[test]
    fn plain_counter_runs_zero_to_target() {
        let frames = drive(CounterTarget::from_text("17").unwrap(), 2000);
        assert_eq!(frames.first().unwrap(), "0");
        assert_eq!(frames.last().unwrap(), "17");

        let values: Vec<u32> = frames.iter().map(|f| f.parse().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "display went backwards");
    }

    #[test]
    fn monetary_counter_keeps_prefix() {
        let frames = drive(CounterTarget::from_text("R$ 800").unwrap(), 2000);
        assert_eq!(frames.first().unwrap(), "R$ 0");
        assert_eq!(frames.last().unwrap(), "R$ 800");
        assert!(frames.iter().all(|f| f.starts_with("R$ ")));
    }

    #[test]
    fn range_counter_finishes_on_exact_literal() {
        let frames = drive(CounterTarget::from_text("20k - 40k").unwrap(), 2000);
        assert_eq!(frames.first().unwrap(), "0k - 0k");
        assert_eq!(frames.last().unwrap(), "20k - 40k");

        let mut previous = (0u32, 0u32);
        for frame in &frames {
            let (left, right) = frame.split_once(" - ").expect("range shape");
            assert!(left.ends_with('k') && right.ends_with('k'));
            let pair = (
                left.trim_end_matches('k').parse().unwrap(),
                right.trim_end_matches('k').parse().unwrap(),
            );
            assert!(pair.0 >= previous.0 && pair.1 >= previous.1);
            previous = pair;
        }
        assert_eq!(previous, (20, 40));
    }

    #[test]
    fn completes_within_duration() {
        let mut run = CounterRun::new(CounterTarget::from_text("17").unwrap(), 2000);
        let mut ticks = 0;
        while !run.is_complete() {
            run.advance(TICK_MS);
            ticks += 1;
        }
        // 2000 / 16 = 125 ticks.
        assert_eq!(ticks, 125);
    }

    #[test]
    fn zero_duration_is_immediately_final() {
        let run = CounterRun::new(CounterTarget::from_text("40k").unwrap(), 0);
        assert!(run.is_complete());
        assert_eq!(run.display(), "40k");
    }

    #[test]
    fn display_clamps_past_the_end() {
        let target = CounterTarget::from_text("20k - 40k").unwrap();
        assert_eq!(target.display(7.5), "20k - 40k");
        let mut run = CounterRun::new(target, 100);
        run.advance(100_000);
        assert_eq!(run.display(), "20k - 40k");
    }
}
