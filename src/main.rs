mod cli;

use clap::Parser;
use cli::Cli;
use console::style;
use helm_splitter::error::SplitterError;
use helm_splitter::output::Console;
use miette::Diagnostic;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let console = Console::new(cli.debug);
    console.debug(format!("Input values: {cli:#?}"));

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(err @ SplitterError::MissingParameters { .. }) => {
            // Usage errors go to stdout, before anything has been resolved or run.
            println!("{} {err}", style("ERROR!").red().bold());
            if let Some(help) = err.help() {
                println!("{help}");
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    helm_splitter::run(&options, &console)?;
    Ok(())
}
