//! Show the syntax tree of an FTL source.

use std::path::PathBuf;

use ftl_syntax::Parser;
use ftl_syntax::ast::AstPrinter;

use super::source_loader::load_input;

pub struct AstArgs {
    pub input: Option<PathBuf>,
    pub text: Option<String>,
    pub spans: bool,
    pub json: bool,
}

pub fn run(args: AstArgs) {
    let input = match load_input(args.input.as_deref(), args.text.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match render_ast(&input.text, args.spans, args.json) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn render_ast(source: &str, spans: bool, json: bool) -> Result<String, serde_json::Error> {
    let resource = Parser::new().with_spans(spans).parse(source);

    if json {
        let mut out = serde_json::to_string_pretty(&resource)?;
        out.push('\n');
        return Ok(out);
    }

    Ok(AstPrinter::new(&resource).with_spans(spans).dump())
}
