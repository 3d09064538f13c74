mod tools_panel;

pub use tools_panel::tools_panel;
