//! Pandoc invocation for the report pipeline.
//!
//! Pandoc is treated as an opaque external collaborator: this module builds
//! the argument list, runs the executable with captured output, and
//! classifies the ways the run can go wrong. Nothing here parses or renders
//! documents itself.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, bail, Result};

use crate::config::Config;

/// Document metadata embedded in every generated report. Fixed by the
/// corporate documentation pipeline, not user-tunable.
pub const METADATA: &[(&str, &str)] = &[
    ("title", "SPI FAM - Informe Técnico Integral"),
    ("author", "Ingeniero de Tecnologías de la Información - SPI FAM"),
    ("subject", "Análisis Técnico del Sistema de Procesos Internos"),
    (
        "keywords",
        "SPI FAM, FamProject, Arquitectura de Software, Seguridad Informática, LOPDP",
    ),
    ("creator", "FamProject - Departamento de TI"),
    ("producer", "Documentación Técnica Automatizada"),
    ("lang", "es-ES"),
];

/// Markdown source for the minimal reference template.
const TEMPLATE_SOURCE: &str =
    "# Template SPI FAM\n\nDocumento de referencia para informes técnicos.\n";

/// One Markdown-to-DOCX conversion. Built at invocation start, discarded
/// after the external process completes.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub reference_doc: PathBuf,
    pub toc_depth: u32,
    pub highlight_style: String,
}

/// Result of a pandoc run that was spawned successfully.
#[derive(Debug)]
pub enum PandocOutcome {
    Success,
    Failed { stdout: String, stderr: String },
}

pub struct Pandoc {
    bin: String,
}

impl Pandoc {
    pub fn from_config(cfg: &Config) -> Self {
        Self { bin: cfg.pandoc_bin() }
    }

    /// Argument list for a conversion: the fixed professional-formatting
    /// option set plus the document metadata. The reference doc is only
    /// passed when the file actually exists, otherwise pandoc would abort.
    pub fn conversion_args(req: &ConversionRequest) -> Vec<String> {
        let mut args: Vec<String> = vec![
            req.input.display().to_string(),
            "-f".into(),
            "markdown".into(),
            "-t".into(),
            "docx".into(),
            "-o".into(),
            req.output.display().to_string(),
        ];
        if req.reference_doc.exists() {
            args.push("--reference-doc".into());
            args.push(req.reference_doc.display().to_string());
        }
        args.extend([
            "--toc".into(),
            "--toc-depth".into(),
            req.toc_depth.to_string(),
            "--number-sections".into(),
            "--highlight-style".into(),
            req.highlight_style.clone(),
            "--wrap".into(),
            "preserve".into(),
            "--columns".into(),
            "1".into(),
            "--dpi".into(),
            "300".into(),
            "--extract-media".into(),
            ".".into(),
            "--self-contained".into(),
        ]);
        for (k, v) in METADATA {
            args.push("--metadata".into());
            args.push(format!("{}:{}", k, v));
        }
        args
    }

    /// Run the conversion. `Err` means pandoc could not be spawned at all
    /// (the missing-executable case gets its own diagnostic); a spawned run
    /// that exits non-zero comes back as [`PandocOutcome::Failed`] with the
    /// captured output.
    pub fn convert(&self, req: &ConversionRequest) -> Result<PandocOutcome> {
        let output = Command::new(&self.bin)
            .args(Self::conversion_args(req))
            .output()
            .map_err(|e| classify_spawn_error(&self.bin, e))?;

        if output.status.success() {
            Ok(PandocOutcome::Success)
        } else {
            Ok(PandocOutcome::Failed {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }

    /// Generate a minimal reference DOCX at `reference_doc` from a scratch
    /// Markdown file. The scratch file is a tempfile and disappears on drop.
    pub fn write_reference_template(&self, reference_doc: &Path) -> Result<()> {
        let mut scratch = tempfile::Builder::new()
            .prefix("spidoc-template-")
            .suffix(".md")
            .tempfile()?;
        scratch.write_all(TEMPLATE_SOURCE.as_bytes())?;
        scratch.flush()?;

        let output = Command::new(&self.bin)
            .arg("-o")
            .arg(reference_doc)
            .arg("--metadata")
            .arg("title:Template SPI FAM")
            .arg(scratch.path())
            .output()
            .map_err(|e| classify_spawn_error(&self.bin, e))?;

        if !output.status.success() {
            bail!(
                "pandoc terminó con {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

fn classify_spawn_error(bin: &str, e: io::Error) -> anyhow::Error {
    if e.kind() == io::ErrorKind::NotFound {
        anyhow!(
            "Pandoc no está instalado ('{}' no encontrado). Instale con: sudo apt install pandoc",
            bin
        )
    } else {
        anyhow::Error::new(e).context(format!("no se pudo ejecutar '{}'", bin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn request(reference_doc: PathBuf) -> ConversionRequest {
        ConversionRequest {
            input: PathBuf::from("report.md"),
            output: PathBuf::from("report.docx"),
            reference_doc,
            toc_depth: 3,
            highlight_style: "tango".into(),
        }
    }

    #[test]
    fn args_carry_the_fixed_option_set() {
        let args = Pandoc::conversion_args(&request(PathBuf::from("missing-template.docx")));

        for opt in [
            "--toc",
            "--number-sections",
            "--wrap",
            "--columns",
            "--dpi",
            "--extract-media",
            "--self-contained",
        ] {
            assert!(args.iter().any(|a| a == opt), "missing {}", opt);
        }
        let depth_pos = args.iter().position(|a| a == "--toc-depth").unwrap();
        assert_eq!(args[depth_pos + 1], "3");
        let style_pos = args.iter().position(|a| a == "--highlight-style").unwrap();
        assert_eq!(args[style_pos + 1], "tango");
    }

    #[test]
    fn args_carry_all_metadata_pairs() {
        let args = Pandoc::conversion_args(&request(PathBuf::from("missing-template.docx")));
        assert_eq!(args.iter().filter(|a| *a == "--metadata").count(), METADATA.len());
        assert!(args.iter().any(|a| a == "lang:es-ES"));
        assert!(args.iter().any(|a| a.starts_with("title:SPI FAM")));
    }

    #[test]
    fn reference_doc_only_passed_when_present() {
        let absent = Pandoc::conversion_args(&request(PathBuf::from("missing-template.docx")));
        assert!(!absent.iter().any(|a| a == "--reference-doc"));

        let dir = tempfile::tempdir().unwrap();
        let tpl = dir.path().join("template.docx");
        fs::write(&tpl, b"stub").unwrap();
        let present = Pandoc::conversion_args(&request(tpl.clone()));
        let pos = present.iter().position(|a| a == "--reference-doc").unwrap();
        assert_eq!(present[pos + 1], tpl.display().to_string());
    }

    #[test]
    fn missing_executable_gets_install_hint() {
        let err = classify_spawn_error(
            "pandoc",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("no está instalado"));

        let other = classify_spawn_error(
            "pandoc",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!other.to_string().contains("no está instalado"));
    }
}
