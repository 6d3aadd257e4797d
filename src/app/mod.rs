// Form shell around the numerology core: state transitions and terminal output.

pub mod render;
pub mod session;
