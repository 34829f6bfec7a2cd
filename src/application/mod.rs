/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the domain services to fulfill user requests,
/// depending on outbound ports rather than concrete adapters.
pub mod dto;
pub mod use_cases;
