/// Use cases orchestrating the application workflow
mod generate_component;

pub use generate_component::GenerateComponentUseCase;
