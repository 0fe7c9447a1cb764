mod central_panel;
mod text_prompt;
mod tools_panel;

pub use central_panel::central_panel;
pub use text_prompt::text_prompt_window;
pub use tools_panel::tools_panel;
