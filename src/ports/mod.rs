/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe the infrastructure the application
/// core needs: reading the component manifest and presenting generated
/// artifacts.
pub mod outbound;
