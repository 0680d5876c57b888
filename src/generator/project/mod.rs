mod generate;

pub use generate::{
    generate_project, FailureMode, GenerationReport, Module, ModuleRole, Project,
};
