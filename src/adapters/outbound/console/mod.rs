/// Console adapters for terminal rendering
mod terminal_presenter;

pub use terminal_presenter::TerminalPresenter;
