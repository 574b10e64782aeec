//! Testability port for injecting randomness.

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform value in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}

/// Pick an index in `0..n` (0 when `n` is 0).
///
/// Adapts a `RandomPort` to the picker closures the domain expects.
pub fn pick_index(random: &dyn RandomPort, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let max = i32::try_from(n - 1).unwrap_or(i32::MAX);
    let picked = random.gen_range(0, max).clamp(0, max);
    usize::try_from(picked).unwrap_or(0)
}
