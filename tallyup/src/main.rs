#![warn(clippy::uninlined_format_args)]

mod bootstrap;

use std::{
    borrow::Cow,
    env, fs,
    io::{self, Read},
    process,
};

use bootstrap::{AppConfig, init_logging};
use tallyup_application::{ProcessingOutcome, SettlementProcessor};
use tallyup_domain::SettlementResult;
use tallyup_i18n as i18n;
use tallyup_infrastructure::TallyRosterParser;
use tallyup_presentation::{
    DisplayOptions, SummaryPresenter, TotalsPresenter, format_balance_warning,
    format_roster_parse_error, format_validation_error,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    init_logging();

    let config = AppConfig::from_env().map_err(|err| err.to_string())?;
    let source = read_roster(env::args().nth(1).as_deref())?;

    let processor = SettlementProcessor::new(&TallyRosterParser);
    let report = match processor.process(&source) {
        ProcessingOutcome::Success(report) => report,
        ProcessingOutcome::InvalidRoster(err) => {
            return Err(format_roster_parse_error(&err).into());
        }
    };

    print!(
        "{}",
        TotalsPresenter::render_participants(&report.participants, &config.display)
    );
    println!("{}", TotalsPresenter::render(&report.totals, &config.display));
    println!();

    let result = report
        .outcome
        .map_err(|err| format_validation_error(&err))?;
    print_settlement(&result, &config.display);
    Ok(())
}

fn read_roster(path: Option<&str>) -> CliResult<String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            Ok(source)
        }
        Some(path) => {
            fs::read_to_string(path).map_err(|err| format!("Failed to read '{path}': {err}").into())
        }
    }
}

fn print_settlement(result: &SettlementResult, options: &DisplayOptions) {
    if let Some(warning) = &result.balance_warning {
        println!("{}", format_balance_warning(warning));
    }

    if result.is_settled() {
        println!("{}", i18n::ALREADY_SETTLED);
    } else {
        println!("{}", SummaryPresenter::share_text(&result.transfers, options));
    }
}
