use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spidoc", about = "SPI FAM report tooling", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert the technical report Markdown into a formatted DOCX via pandoc.
    Convert {
        /// Markdown report to convert.
        #[arg(value_name = "INPUT", default_value = "SPI_FAM_Technical_Report.md")]
        input: PathBuf,

        /// Destination DOCX file.
        #[arg(short, long, default_value = "SPI_FAM_Informe_Tecnico_Integral.docx")]
        output: PathBuf,

        /// Reference DOCX supplying default styling. Synthesized with pandoc
        /// when the file does not exist.
        #[arg(long = "reference-doc")]
        reference_doc: Option<PathBuf>,

        /// Table of contents depth.
        #[arg(long = "toc-depth")]
        toc_depth: Option<u32>,

        /// Syntax highlighting style passed to pandoc.
        #[arg(long = "highlight-style")]
        highlight_style: Option<String>,
    },

    /// Report source files containing characters outside the ASCII range.
    Scan {
        /// Root directory to walk.
        #[arg(value_name = "ROOT", default_value = "backend/src/modules/business-case")]
        root: PathBuf,

        /// File extension to scan, without the leading dot.
        #[arg(long)]
        ext: Option<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
