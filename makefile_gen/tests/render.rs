use makefile_gen::{Project, ProjectSettings, TargetKind};
use regex::Regex;

fn settings() -> ProjectSettings {
    ProjectSettings::new("gcc").with_flags("-Wall", "-lpthread")
}

fn sample_project() -> Project {
    let mut project = Project::new();
    project
        .append_from_manual_list(TargetKind::Library, "libfoo", "x.c")
        .unwrap();
    project
        .append_from_manual_list(TargetKind::Executable, "prog", "y.c")
        .unwrap();
    project
        .append_from_manual_list(TargetKind::Executable, "tool", "t1.c t2.c")
        .unwrap();
    project
        .append_from_manual_list(TargetKind::Library, "libbar", "bar.c")
        .unwrap();
    project
}

/// Body of the single recipe line following `rule:`.
fn recipe<'a>(text: &'a str, rule: &str) -> &'a str {
    let start = text
        .find(&format!("\n{rule}:\n"))
        .unwrap_or_else(|| panic!("missing rule {rule}"));
    let rest = &text[start + rule.len() + 3..];
    rest.lines().next().unwrap_or_default()
}

#[test]
fn every_index_is_defined_once_in_order() {
    let text = sample_project().render(&settings()).unwrap();

    for (prefix, expected) in [("SRC", 4), ("OBJ", 4)] {
        let re = Regex::new(&format!(r"(?m)^{prefix}(\d+) = ")).unwrap();
        let indices: Vec<usize> = re
            .captures_iter(&text)
            .map(|cap| cap[1].parse().unwrap())
            .collect();
        assert_eq!(indices, (0..expected).collect::<Vec<_>>());
    }

    let outputs = Regex::new(r"(?m)^(LIB|EXE)(\d+) = ").unwrap();
    let defined: Vec<String> = outputs
        .captures_iter(&text)
        .map(|cap| format!("{}{}", &cap[1], &cap[2]))
        .collect();
    assert_eq!(defined, ["LIB0", "EXE1", "EXE2", "LIB3"]);
}

#[test]
fn all_follows_append_order() {
    let text = sample_project().render(&settings()).unwrap();
    assert!(text.contains("\nall: $(LIB0) $(EXE1) $(EXE2) $(LIB3)\n"));
}

#[test]
fn link_rules_match_kind() {
    let text = sample_project().render(&settings()).unwrap();
    assert!(text.contains("$(LIB0): $(OBJ0)\n\t$(AR) rcs $@ $^\n"));
    assert!(text.contains("$(EXE1): $(OBJ1)\n\t$(CC) $(CFLAGS) -o $@ $^ $(LDFLAGS)\n"));
    assert!(text.contains("$(LIB3): $(OBJ3)\n\t$(AR) rcs $@ $^\n"));
}

#[test]
fn housekeeping_targets_cover_the_right_outputs() {
    let text = sample_project().render(&settings()).unwrap();
    let clean = recipe(&text, "clean");
    let install = recipe(&text, "install");
    let uninstall = recipe(&text, "uninstall");

    for var in ["LIB0", "EXE1", "EXE2", "LIB3"] {
        assert!(clean.contains(&format!("$({var})")), "{var} not cleaned");
    }
    for var in ["LIB0", "LIB3"] {
        assert!(!install.contains(var));
        assert!(!uninstall.contains(var));
    }
    assert_eq!(install, "\tcp $(EXE1) $(EXE2) $(DESTDIR)$(PREFIX)/bin");
    assert_eq!(
        uninstall,
        "\trm -f $(DESTDIR)$(PREFIX)/bin/$(EXE1) $(DESTDIR)$(PREFIX)/bin/$(EXE2)"
    );
}

#[test]
fn rendering_is_idempotent() {
    let project = sample_project();
    let first = project.render(&settings()).unwrap();
    let second = project.render(&settings()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_ends_with_dist_rule() {
    let text = sample_project().render(&settings()).unwrap();
    assert!(text.starts_with("CC = gcc\nCFLAGS = -Wall\nLDFLAGS = -lpthread\n\n"));
    assert!(text.ends_with("dist:\n\tcd .. && tar cvzf $(SRCDIR).tgz ./$(SRCDIR)\n"));
}
