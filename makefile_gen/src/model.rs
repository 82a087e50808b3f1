use serde::Deserialize;
use std::borrow::Cow;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "Makefile";
pub const SOURCE_SUFFIX: &str = ".c";

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_suffix() -> String {
    SOURCE_SUFFIX.to_string()
}

/// Global settings shared by every target of one Makefile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectSettings {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    pub compiler: String,
    #[serde(default)]
    pub cflags: String,
    #[serde(default)]
    pub ldflags: String,
    #[serde(default = "default_suffix", rename = "suffix")]
    pub source_suffix: String,
}

impl ProjectSettings {
    pub fn new(compiler: impl Into<String>) -> Self {
        Self {
            output: default_output(),
            compiler: compiler.into(),
            cflags: String::new(),
            ldflags: String::new(),
            source_suffix: default_suffix(),
        }
    }

    pub fn with_flags(mut self, cflags: impl Into<String>, ldflags: impl Into<String>) -> Self {
        self.cflags = cflags.into();
        self.ldflags = ldflags.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Library,
    Executable,
}

impl TargetKind {
    pub fn from_library_flag(is_library: bool) -> Self {
        if is_library {
            TargetKind::Library
        } else {
            TargetKind::Executable
        }
    }

    /// Prefix of the output variable, `LIB` or `EXE`.
    pub fn var_prefix(&self) -> &'static str {
        match self {
            TargetKind::Library => "LIB",
            TargetKind::Executable => "EXE",
        }
    }

    pub fn link_recipe(&self) -> &'static str {
        match self {
            TargetKind::Library => "$(AR) rcs $@ $^",
            TargetKind::Executable => "$(CC) $(CFLAGS) -o $@ $^ $(LDFLAGS)",
        }
    }
}

/// Sources of a target: either found by a directory scan or typed in by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    Listed(Vec<String>),
    /// Kept verbatim, already in Makefile list syntax.
    Raw(String),
}

impl Sources {
    pub fn is_empty(&self) -> bool {
        match self {
            Sources::Listed(files) => files.is_empty(),
            Sources::Raw(raw) => raw.trim().is_empty(),
        }
    }

    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            Sources::Listed(files) => Cow::Owned(files.join(" ")),
            Sources::Raw(raw) => Cow::Borrowed(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    index: usize,
    kind: TargetKind,
    sources: Sources,
    output_name: String,
}

impl Target {
    pub(crate) fn new(index: usize, kind: TargetKind, sources: Sources, output_name: String) -> Self {
        Self {
            index,
            kind,
            sources,
            output_name,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn is_library(&self) -> bool {
        self.kind == TargetKind::Library
    }

    pub fn src_var(&self) -> String {
        format!("SRC{}", self.index)
    }

    pub fn obj_var(&self) -> String {
        format!("OBJ{}", self.index)
    }

    /// `LIB<i>` or `EXE<i>`.
    pub fn output_var(&self) -> String {
        format!("{}{}", self.kind.var_prefix(), self.index)
    }
}
