pub mod alert;
pub mod button;
pub mod dialog;
pub mod dropdown_menu;
pub mod fade;
pub mod input;
pub mod label;
pub mod spinner;
pub mod toast;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use alert::*;
pub use button::*;
pub use dialog::*;
#[allow(unused_imports)]
pub use dropdown_menu::*;
pub use fade::*;
pub use input::*;
pub use label::*;
pub use spinner::*;
pub use toast::*;
