mod popover;

pub use popover::Popover;
