use std::path::PathBuf;

use ftl_syntax::{Diagnostics, Parser};

use super::source_loader::{Input, load_inputs};

pub struct CheckArgs {
    pub inputs: Vec<PathBuf>,
    pub text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let inputs = match load_inputs(&args.inputs, args.text.as_deref()) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut failed = 0;
    for input in &inputs {
        if let Some(report) = check_input(input, args.color) {
            eprintln!("{}", report);
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("error: {} of {} inputs have syntax errors", failed, inputs.len());
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

/// Renders the diagnostics of `input`, or returns `None` when it parses cleanly.
pub fn check_input(input: &Input, color: bool) -> Option<String> {
    let resource = Parser::new().with_spans(true).parse(&input.text);
    let diagnostics = Diagnostics::from_resource(&resource);
    tracing::info!(input = %input.name, errors = diagnostics.len(), "checked");

    if diagnostics.is_empty() {
        return None;
    }

    Some(
        diagnostics
            .printer()
            .source(&input.text)
            .path(&input.name)
            .colored(color)
            .render(),
    )
}
