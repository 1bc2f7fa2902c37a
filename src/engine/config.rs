//! Game session configuration

/// Flat configuration record for one game session
///
/// These are plain feature flags passed through by the host; none of them
/// changes how feedback is scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Gate guesses on length, grammar, and arithmetic truth before scoring
    pub verify_equation: bool,
    /// Hosts may reveal the target (presentation only; the engine just
    /// carries the flag)
    pub show_target: bool,
    /// Pick a fresh target from the corpus on every new game; when false the
    /// previously-set target is reused
    pub random_target: bool,
}
