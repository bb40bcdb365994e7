pub mod patch;
pub mod scaffold;
pub mod stubs;
