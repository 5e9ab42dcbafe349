use clap::{Args, ValueEnum};
use hammer_rmf::RmfDocument;
use itertools::Itertools;
use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Mode {
    /// Only list the sections that changed
    #[default]
    Summary,
    /// Show every changed line with its surroundings
    Full,
}

#[derive(Args)]
pub struct DiffArgs {
    /// An input RMF file
    #[arg(short, long, value_name = "FILE")]
    left: std::path::PathBuf,

    /// An input RMF file
    #[arg(short, long, value_name = "FILE")]
    right: std::path::PathBuf,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t = Mode::Summary)]
    mode: Mode,
}

impl DiffArgs {
    fn sections(document: &RmfDocument) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            (
                "visgroups",
                serde_json::to_string_pretty(&document.visgroups).into_diagnostic()?,
            ),
            (
                "world",
                serde_json::to_string_pretty(&(
                    &document.root.classname,
                    &document.root.properties,
                    &document.root.paths,
                ))
                .into_diagnostic()?,
            ),
            (
                "objects",
                serde_json::to_string_pretty(&document.root.objects).into_diagnostic()?,
            ),
            (
                "docinfo",
                serde_json::to_string_pretty(&document.doc_info).into_diagnostic()?,
            ),
        ])
    }

    fn print_changes(&self, name: &str, old: &str, new: &str) -> bool {
        let diff = TextDiff::from_lines(old, new);
        if diff.ratio() >= 1.0 {
            return false;
        }

        let (inserted, deleted) = diff
            .iter_all_changes()
            .map(|c| c.tag())
            .fold((0, 0), |(i, d), tag| match tag {
                ChangeTag::Insert => (i + 1, d),
                ChangeTag::Delete => (i, d + 1),
                ChangeTag::Equal => (i, d),
            });
        println!(
            "🔃 {} {} {}",
            name.blue(),
            format!("+{inserted}").green(),
            format!("-{deleted}").red()
        );

        if self.mode == Mode::Full {
            for group in diff.grouped_ops(2) {
                let lines = group
                    .iter()
                    .flat_map(|op| diff.iter_inline_changes(op))
                    .map(|change| {
                        let marker = match change.tag() {
                            ChangeTag::Insert => "+",
                            ChangeTag::Delete => "-",
                            ChangeTag::Equal => " ",
                        };
                        let text = change
                            .iter_strings_lossy()
                            .map(|(emphasized, value)| match (change.tag(), emphasized) {
                                (ChangeTag::Insert, true) => format!("{}", value.green().underline()),
                                (ChangeTag::Insert, false) => format!("{}", value.green()),
                                (ChangeTag::Delete, true) => format!("{}", value.red().underline()),
                                (ChangeTag::Delete, false) => format!("{}", value.red()),
                                (ChangeTag::Equal, _) => format!("{}", value.dimmed()),
                            })
                            .join("");
                        format!("  {marker} {}", text.trim_end_matches('\n'))
                    })
                    .join("\n");
                println!("{lines}");
                println!("  {}", "...".dimmed());
            }
        }

        true
    }

    pub fn handle(&self) -> Result<()> {
        let left = Self::sections(&super::read_document(&self.left)?)?;
        let right = Self::sections(&super::read_document(&self.right)?)?;

        let mut changed = false;
        for ((name, old), (_, new)) in left.iter().zip(&right) {
            changed |= self.print_changes(name, old, new);
        }

        if !changed {
            println!("✅ {}", "documents are identical".green());
        }

        Ok(())
    }
}
