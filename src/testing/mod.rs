//! Test doubles for the engine, presenter and fetcher ports

mod mock_engine;
mod mock_fetcher;
mod mock_presenter;
pub mod mock_server;
#[cfg(test)]
/// Unit tests for the mocks.
pub mod tests;

pub use mock_engine::{EngineCommand, MockEngine};
pub use mock_fetcher::StaticFetcher;
pub use mock_presenter::{MockPresenter, PresenterCall};
