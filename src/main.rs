mod cli;
mod config;
mod handlers;
mod pandoc;
mod printer;
mod scan;

use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Convert {
            input,
            output,
            reference_doc,
            toc_depth,
            highlight_style,
        } => handlers::convert::run(input, output, reference_doc, toc_depth, highlight_style),
        cli::Command::Scan { root, ext } => handlers::scan::run(root, ext),
    }
}
