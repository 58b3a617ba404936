pub mod alert;
pub mod log_panel;
pub mod preview;
pub mod result;
pub mod settings;
pub mod upload;

pub use alert::show_alert;
pub use log_panel::show_log_panel;
pub use preview::{PreviewTile, SelectionState, show_previews};
pub use result::{ResultAction, ResultInfo, show_result};
pub use settings::{show_config_buttons, show_settings};
pub use upload::show_upload;
