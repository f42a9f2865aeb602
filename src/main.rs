use anyhow::Context;
use std::io;
use wordcrawler::{error, logging, App, CrawlOptions};

fn main() {
    error::setup_panic_handler();

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options = CrawlOptions::from_args(std::env::args().skip(1))
        .context("invalid command line")?;
    logging::init(options.verbosity);

    if options.show_help {
        println!("{}", CrawlOptions::usage());
        return Ok(());
    }

    let app = App::new(options);
    app.run(io::stdin().lock(), io::stdout().lock())
        .context("could not crawl the input")?;

    Ok(())
}
