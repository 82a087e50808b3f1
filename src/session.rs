use crate::config::{Config, TargetEntry};
use crate::prompt::Prompter;
use crate::writer::OutputFile;
use anyhow::{Context, Result};
use makefile_gen::{DEFAULT_OUTPUT, Project, ProjectSettings, TargetKind, list_sources};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Ask for the global settings, then for targets until the operator stops,
/// then write the Makefile. Returns the number of targets written.
pub fn run_interactive(prompter: &mut impl Prompter, output: Option<&Path>) -> Result<usize> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => resolve_output(&prompter.ask_line(&format!("Enter filename [{}]", DEFAULT_OUTPUT))?),
    };
    // No later step is useful without a destination.
    let file = OutputFile::create(&output)?;

    let compiler = prompter.ask_line("Enter executable name (compiler)")?;
    let cflags = prompter.ask_line("Enter compiler flags")?;
    let ldflags = prompter.ask_line("Enter linker flags")?;
    let settings = ProjectSettings::new(compiler)
        .with_flags(cflags, ldflags)
        .with_output(output);

    let mut project = Project::new();
    loop {
        collect_target(prompter, &settings, &mut project)?;
        if !prompter.ask_yes_no("Do you want to generate another?")? {
            break;
        }
    }

    let text = project.render(&settings)?;
    file.write(&text)?;
    report(&project);
    Ok(project.len())
}

/// Same flow as [`run_interactive`] with every answer taken from `config`.
///
/// The output is only opened once the Makefile has rendered, so a bad target
/// leaves an existing file untouched.
pub fn run_config(config: Config, output: Option<&Path>) -> Result<usize> {
    let mut settings = config.settings;
    if let Some(output) = output {
        settings.output = output.to_path_buf();
    }

    let mut project = Project::new();
    for entry in &config.targets {
        let appended = match entry {
            TargetEntry::Directory { path, .. } => {
                let dir = path.as_deref().filter(|p| !p.as_os_str().is_empty());
                project.append_from_directory(&settings, dir, entry.kind(), entry.name())
            }
            TargetEntry::Files { sources, .. } => {
                project.append_from_manual_list(entry.kind(), entry.name(), sources)
            }
        };
        appended.with_context(|| format!("Cannot add target '{}'", entry.name()))?;
    }

    let text = project.render(&settings)?;
    OutputFile::create(&settings.output)?.write(&text)?;
    report(&project);
    Ok(project.len())
}

fn resolve_output(answer: &str) -> PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        PathBuf::from(DEFAULT_OUTPUT)
    } else {
        PathBuf::from(answer)
    }
}

fn collect_target(
    prompter: &mut impl Prompter,
    settings: &ProjectSettings,
    project: &mut Project,
) -> Result<()> {
    let appended = if prompter.ask_yes_no("Do you want to enter a source directory?")? {
        let dir = prompter.ask_line("Enter source directory (blank for current)")?;
        let dir = dir.trim();
        let dir = (!dir.is_empty()).then(|| Path::new(dir));
        // Scan before asking anything else about the target.
        let files = match list_sources(dir, &settings.source_suffix)
            .and_then(|listing| listing.collect::<makefile_gen::Result<Vec<_>>>())
        {
            Ok(files) if files.is_empty() => {
                error!(
                    "No *{} files in {}",
                    settings.source_suffix,
                    dir.unwrap_or(Path::new(".")).display()
                );
                return Ok(());
            }
            Ok(files) => files,
            Err(e) => {
                error!("{}", e);
                return Ok(());
            }
        };
        let kind = ask_kind(prompter)?;
        let name = ask_non_empty(prompter, "Enter program name")?;
        project.append_from_listed(kind, &name, files)
    } else {
        let sources = ask_non_empty(prompter, "Enter source files")?;
        let kind = ask_kind(prompter)?;
        let name = ask_non_empty(prompter, "Enter program name")?;
        project.append_from_manual_list(kind, &name, &sources)
    };

    // Only this target is dropped; the session carries on.
    if let Err(e) = appended {
        error!("{}", e);
    }
    Ok(())
}

fn ask_kind(prompter: &mut impl Prompter) -> Result<TargetKind> {
    let is_library = prompter.ask_yes_no("Are you making a library?")?;
    Ok(TargetKind::from_library_flag(is_library))
}

fn ask_non_empty(prompter: &mut impl Prompter, prompt: &str) -> Result<String> {
    loop {
        let answer = prompter.ask_line(prompt)?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

fn report(project: &Project) {
    info!("Total targets processed: {}", project.len());
    if !project.is_empty() {
        info!("Makefile generation done.");
    }
}
