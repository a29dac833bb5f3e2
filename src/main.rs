//! dtp's main application entry point.
//! Parses the command line, sets up logging and dispatches to the
//! conversion, expansion or starter flow.

use std::io::IsTerminal;

use dtp::{
    cli::{get_args, print_usage, Action, Args},
    converter::Converter,
    error::{default_error_handler, Result},
    expander::expand_template,
    logger::init_logger,
    prompt::{DefaultPrompter, DialoguerPrompter, Prompter},
    starter::{choose_starter, find_starter, write_starter},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let Some(action) = args.action() else {
        print_usage();
        std::process::exit(1);
    };

    if let Err(err) = run(action, &args) {
        default_error_handler(err);
    }
}

/// Executes one resolved action.
fn run(action: Action, args: &Args) -> Result<()> {
    match action {
        Action::Convert { source_dir, output_dir } => {
            let report = Converter::new(args.scheme).convert(&source_dir, &output_dir)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Template for '{}' written to {} ({} files).",
                    report.component_name,
                    output_dir.display(),
                    report.files_written
                );
            }
        }
        Action::Expand { name, template_dir, output_dir } => {
            let files = expand_template(&template_dir, &name, &output_dir, args.scheme)?;
            println!("Component '{}' written to {} ({} files).", name, output_dir.display(), files);
        }
        Action::Starter { key, output_dir } => {
            let starter = match key {
                Some(key) => find_starter(&key)?,
                None => {
                    let prompt: Box<dyn Prompter> = if std::io::stdin().is_terminal() {
                        Box::new(DialoguerPrompter::new())
                    } else {
                        Box::new(DefaultPrompter)
                    };
                    choose_starter(&*prompt)?
                }
            };
            let files = write_starter(starter, &output_dir)?;
            println!(
                "Starter '{}' written to {} ({} files).",
                starter.key,
                output_dir.display(),
                files
            );
        }
    }
    Ok(())
}
