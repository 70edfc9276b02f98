//! Optional decorative particle background.

/// A visual plugin redrawn when the theme changes. Absence is tolerated.
pub trait ParticleBackground {
    /// Whether the plugin and its host element exist on the page.
    fn is_present(&self) -> bool;
    fn initialize(&self);
    fn reinitialize(&self);
}

/// Stand-in for pages without the plugin.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParticles;

impl ParticleBackground for NoParticles {
    fn is_present(&self) -> bool {
        false
    }

    fn initialize(&self) {}

    fn reinitialize(&self) {}
}
