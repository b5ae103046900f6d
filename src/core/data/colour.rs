#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }
}

/// Per-thread tint used to show which worker rendered a pixel.
///
/// Thread 0 always gets 0, so single-threaded renders stay black inside the set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ColourSeed(u8);

impl ColourSeed {
    #[must_use]
    pub fn for_thread(thread_id: u32, thread_count: u32) -> Self {
        debug_assert!(thread_count > 0 && thread_id < thread_count);

        let level = (255 * u64::from(thread_id)) / u64::from(thread_count.max(1));
        Self(level.min(255) as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}
