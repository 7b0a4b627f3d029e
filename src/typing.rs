//! Character-by-character replay of text with human-like timing.

use crate::dispatch::{KeyDispatcher, KeyToken};
use crate::error::Result;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::time::sleep;

/// Nominal delay between keystrokes, roughly a fast typist.
pub const DEFAULT_DELAY_MS: u64 = 90;

/// Delay bounds for a nominal delay: ten percent either side, in whole
/// milliseconds. The upper bound saturates at `u64::MAX`.
pub fn jitter_range(nominal_ms: u64) -> RangeInclusive<u64> {
    let variation = nominal_ms / 10;
    nominal_ms - variation..=nominal_ms.saturating_add(variation)
}

/// The keystrokes of one typed string and the pause after each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingPlan {
    steps: Vec<(char, Duration)>,
}

impl TypingPlan {
    pub fn new(text: &str, nominal_ms: u64) -> Self {
        Self::with_rng(text, nominal_ms, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(text: &str, nominal_ms: u64, rng: &mut R) -> Self {
        let range = jitter_range(nominal_ms);
        let steps = text
            .chars()
            .map(|ch| (ch, Duration::from_millis(rng.gen_range(range.clone()))))
            .collect();
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[(char, Duration)] {
        &self.steps
    }
}

impl IntoIterator for TypingPlan {
    type Item = (char, Duration);
    type IntoIter = std::vec::IntoIter<(char, Duration)>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Type `text` into `session` one literal character at a time, sleeping a
/// jittered `nominal_ms` after each.
///
/// Stops at the first failed dispatch; characters after it are never sent.
pub async fn type_text(
    dispatcher: &KeyDispatcher,
    session: &str,
    text: &str,
    nominal_ms: u64,
) -> Result<()> {
    // Planned up front so the thread-local rng never lives across an await.
    let plan = TypingPlan::new(text, nominal_ms);
    let mut buf = [0u8; 4];
    for (ch, delay) in plan {
        let keys: &str = ch.encode_utf8(&mut buf);
        dispatcher.dispatch(session, KeyToken::Literal(keys)).await?;
        sleep(delay).await;
    }
    Ok(())
}
