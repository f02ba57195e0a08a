/// Application layer - Use cases, client state and read models
///
/// This layer contains the synchronization logic that keeps the local
/// client state consistent with the backend, coordinating with
/// infrastructure through ports.
pub mod read_models;
pub mod state;
pub mod use_cases;
