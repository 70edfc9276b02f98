//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! The page runs on a single-threaded event loop, so futures returned by
//! ports are not required to be `Send`.

pub mod page;
pub mod particles;
pub mod preferences;
pub mod profile_source;
pub mod timers;

pub use page::Page;
pub use particles::{NoParticles, ParticleBackground};
pub use preferences::{PreferenceStore, SystemTheme};
pub use profile_source::ProfileSource;
pub use timers::Timers;
