// Custom widgets for the TUI

pub mod slider;
pub mod text_input;

pub use slider::MemberSlider;
pub use text_input::{TextField, TextInput};
