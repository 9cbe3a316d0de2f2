//! UI 组件模块

mod header;
mod link_form;
mod mode_selector;
mod output_panel;

pub use header::Header;
pub use link_form::LinkForm;
pub use mode_selector::ModeSelector;
pub use output_panel::OutputPanel;
