#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod money_format;
pub mod summary_presenter;
pub mod totals_presenter;

pub use error_presenter::{
    format_balance_warning, format_roster_parse_error, format_validation_error,
};
pub use money_format::DisplayOptions;
pub use summary_presenter::SummaryPresenter;
pub use totals_presenter::TotalsPresenter;
