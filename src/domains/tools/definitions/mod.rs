//! Tool definitions module.
//!
//! This module exports all available tool definitions, one file per
//! resource family of the platform API.

pub mod analysis;
pub mod capability;
pub mod directory;
pub mod element;
pub mod execution;
pub mod file;
pub mod method;
pub mod module;
pub mod route;
pub mod scaffold;
pub mod statement;

pub use analysis::{AnalysisGetTool, AnalysisRunTool};
pub use capability::{CapabilityGetTool, CapabilityListTool};
pub use directory::{
    DirectoryCreateTool, DirectoryDeleteTool, DirectoryGetTool, DirectoryUpdateTool,
};
pub use element::{ElementCreateTool, ElementDeleteTool, ElementGetTool, ElementUpdateTool};
pub use execution::CodeExecuteTool;
pub use file::{FileCreateTool, FileDeleteTool, FileGetTool, FileUpdateTool};
pub use method::{MethodCreateTool, MethodDeleteTool, MethodGetTool, MethodUpdateTool};
pub use module::{ModuleCreateTool, ModuleDeleteTool, ModuleGetTool, ModuleUpdateTool};
pub use route::{RouteCreateTool, RouteDeleteTool, RouteGetTool, RouteUpdateTool};
pub use scaffold::{ScaffoldCreateTool, ScaffoldKindsTool};
pub use statement::{
    StatementCreateTool, StatementDeleteTool, StatementGetTool, StatementUpdateTool,
};
