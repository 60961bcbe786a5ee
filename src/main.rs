//! baidu-search command line entry point

mod cli;

use anyhow::Result;
use baidu_search::{run_search, App, EmptyResults, Presenter};
use clap::Parser;
use cli::Args;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);

    // The search capability is built before any query is attempted
    let App { settings, gateway } = match App::init(args.config.as_deref()) {
        Ok(app) => app,
        Err(e) => fail_startup(&e),
    };

    let num_results = args.num.unwrap_or(settings.search.default_num_results);
    let empty = if args.empty_json || settings.output.empty_json {
        EmptyResults::Json
    } else {
        EmptyResults::Notice
    };

    debug!(
        "Searching '{}' for {} results (output {:?})",
        args.query, num_results, args.output
    );

    let mut presenter = Presenter::new(std::io::stdout(), std::io::stderr(), args.output)
        .with_empty_results(empty)
        .with_abstract_max_chars(settings.output.abstract_max_chars);

    presenter.banner(&args.query)?;

    let outcome = run_search(&gateway, &args.query, num_results, args.debug).await;
    if let Some(ref message) = outcome.error {
        presenter.report_error(message)?;
    }

    presenter.render(&args.query, &outcome.records)?;

    Ok(())
}

/// Logs go to stderr; `--debug 1` opens up this crate's debug events
fn init_logging(debug: u8) {
    let default_directives = if debug > 0 {
        "warn,baidu_search=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn fail_startup(err: &anyhow::Error) -> ! {
    eprintln!("错误: 搜索组件不可用: {:#}", err);
    std::process::exit(1);
}
