use crate::error::Result;
use crate::model::{ProjectSettings, Target, TargetKind};
use serde::Serialize;
use tinytemplate::{TinyTemplate, format_unescaped};

const HEADER: &str = include_str!("templates/header.mk.tmpl");

const INSTALL_DIR: &str = "$(DESTDIR)$(PREFIX)/bin";
const DIST_RULE: &str = "dist:\n\tcd .. && tar cvzf $(SRCDIR).tgz ./$(SRCDIR)\n";

#[derive(Serialize)]
struct HeaderContext<'a> {
    compiler: &'a str,
    cflags: &'a str,
    ldflags: &'a str,
}

/// Render the whole Makefile. Output depends only on the arguments.
pub fn render(settings: &ProjectSettings, targets: &[Target]) -> Result<String> {
    let mut out = render_header(settings)?;

    for target in targets {
        push_variables(&mut out, target, &settings.source_suffix);
    }

    out.push_str("all:");
    for target in targets {
        out.push_str(&format!(" $({})", target.output_var()));
    }
    out.push_str("\n\n");

    for target in targets {
        out.push_str(&format!(
            "$({}): $({})\n\t{}\n\n",
            target.output_var(),
            target.obj_var(),
            target.kind().link_recipe()
        ));
    }

    let suffix = &settings.source_suffix;
    out.push_str(&format!(
        "%{suffix}.o: %{suffix}\n\t$(CC) $(CFLAGS) -c -o $@ $<\n\n"
    ));

    push_clean(&mut out, targets);
    push_install(&mut out, targets);
    out.push_str(DIST_RULE);
    Ok(out)
}

fn render_header(settings: &ProjectSettings) -> Result<String> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("header", HEADER)?;
    let ctx = HeaderContext {
        compiler: &settings.compiler,
        cflags: &settings.cflags,
        ldflags: &settings.ldflags,
    };
    Ok(tt.render("header", &ctx)?)
}

fn push_variables(out: &mut String, target: &Target, suffix: &str) {
    let src = target.src_var();
    out.push_str(&format!("{} = {}\n", src, target.sources().joined()));
    out.push_str(&format!(
        "{} = $({}:%{suffix}=%{suffix}.o)\n",
        target.obj_var(),
        src
    ));
    out.push_str(&format!("{} = {}\n\n", target.output_var(), target.output_name()));
}

fn push_clean(out: &mut String, targets: &[Target]) {
    out.push_str("clean:\n");
    if !targets.is_empty() {
        out.push_str("\trm -f");
        for target in targets {
            out.push_str(&format!(" $({}) $({})", target.obj_var(), target.output_var()));
        }
        out.push('\n');
    }
    out.push('\n');
}

// Libraries are never installed.
fn push_install(out: &mut String, targets: &[Target]) {
    let executables: Vec<String> = targets
        .iter()
        .filter(|t| t.kind() == TargetKind::Executable)
        .map(|t| format!("$({})", t.output_var()))
        .collect();

    out.push_str("install:\n");
    if !executables.is_empty() {
        out.push_str(&format!("\tcp {} {}\n", executables.join(" "), INSTALL_DIR));
    }
    out.push('\n');

    out.push_str("uninstall:\n");
    if !executables.is_empty() {
        out.push_str("\trm -f");
        for exe in &executables {
            out.push_str(&format!(" {}/{}", INSTALL_DIR, exe));
        }
        out.push('\n');
    }
    out.push('\n');
}
