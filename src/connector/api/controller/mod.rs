pub mod check_controller;
pub mod retrieve_controller;
pub mod tools_controller;

pub use check_controller::CheckController;
pub use retrieve_controller::RetrieveController;
pub use tools_controller::ToolsController;
