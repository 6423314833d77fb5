//! Load-failure tracking for remote image references.
//!
//! Each mounted image owns one `ImageSlot`. The slot remembers which `src` it
//! was mounted for and whether a load error was reported for it. A failure is
//! sticky for that source; handing the slot a different `src` is treated as a
//! fresh mount and reads as `Ok` again.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Ok,
    Failed,
}

/// What a fallback-aware image should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Image,
    Fallback,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSlot {
    mounted_src: String,
    state: ImageLoadState,
}

impl ImageSlot {
    pub fn mounted<S: Into<String>>(src: S) -> Self {
        Self {
            mounted_src: src.into(),
            state: ImageLoadState::Ok,
        }
    }

    /// Load state as seen by a render for `src`.
    pub fn state_for(&self, src: &str) -> ImageLoadState {
        if self.mounted_src == src {
            self.state
        } else {
            ImageLoadState::Ok
        }
    }

    /// An empty `src` goes straight to the fallback without waiting for a load event.
    pub fn presentation(&self, src: &str) -> Presentation {
        if src.trim().is_empty() || self.state_for(src) == ImageLoadState::Failed {
            Presentation::Fallback
        } else {
            Presentation::Image
        }
    }

    /// Record a load error for `src`. Returns `true` only on the `Ok -> Failed` transition.
    pub fn record_failure(&mut self, src: &str) -> bool {
        if self.mounted_src != src {
            *self = Self::mounted(src);
        }
        if self.state == ImageLoadState::Failed {
            return false;
        }
        self.state = ImageLoadState::Failed;
        true
    }
}
