use std::fmt::{self, Write};

use lipid::{Convention, Lipid};
use log::LevelFilter;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use rustyline::{DefaultEditor, error::ReadlineError};

fn main() -> rustyline::Result<()> {
    // NOTE: Diagnostics are already rendered in full below, so the library's own warnings are hidden unless asked for
    env_logger::builder()
        .format_timestamp(None)
        .filter_level(LevelFilter::Info)
        .filter_module("lipid", LevelFilter::Error)
        .parse_default_env()
        .init();

    let mut rl = DefaultEditor::new()?;
    loop {
        let name = match rl.readline("Lipid: ") {
            Ok(name) => name,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error),
        };
        if name.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(&name)?;

        let lipid = Lipid::new(name);
        match lipid_info(&lipid) {
            Ok(info) => print!("{info}"),
            Err(error) => log::error!("failed to format {:?}: {error}", lipid.raw_name()),
        }
        for diagnostic in lipid.diagnostics() {
            render_diagnostic(diagnostic);
        }
    }
    Ok(())
}

fn lipid_info(lipid: &Lipid) -> Result<String, fmt::Error> {
    let mut buf = String::new();
    let Some(structure) = lipid.structure() else {
        writeln!(buf, "Unparsed: {}", lipid.raw_name())?;
        return Ok(buf);
    };

    writeln!(buf, "Entry Token: {}", structure.entry_token())?;
    writeln!(buf, "Prefix: {:?}", structure.prefix())?;
    let chains: Vec<_> = structure.chains().iter().map(ToString::to_string).collect();
    writeln!(buf, "Chains: {}", chains.join(", "))?;
    if let Some(known_chain) = structure.known_chain() {
        writeln!(buf, "Known Chain: {known_chain}")?;
    }
    writeln!(buf, "Class: {}", structure.class())?;
    if let Some(sub_class) = structure.sub_class() {
        writeln!(buf, "Sub-Class: {sub_class}")?;
    }
    if !structure.trailing_annotation().is_empty() {
        writeln!(buf, "Additional Info: {}", structure.trailing_annotation())?;
    }

    for convention in Convention::ALL {
        if let Some(rendered) = convention.render(lipid) {
            writeln!(buf, "{:>9}: {rendered}", convention.to_string())?;
        }
    }
    writeln!(buf)?;

    Ok(buf)
}

fn render_diagnostic(diagnostic: &dyn Diagnostic) {
    let mut buf = String::new();
    match GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic)
    {
        Ok(()) => println!("{buf}"),
        Err(_) => println!("{diagnostic}"),
    }
}
