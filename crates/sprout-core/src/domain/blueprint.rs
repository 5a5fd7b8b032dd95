//! Blueprints: declarative descriptions of the files a generation run emits.
//!
//! A [`FileBlueprint`] pairs a relative-path template with a host content
//! template, the loop blocks feeding its anchors, any opt-in appended
//! sections, and an executable flag. The built-in set lives in
//! `sprout-adapters`; this module only defines the shapes the generate
//! service consumes.

use crate::domain::template::TemplateSource;

/// One file to render and write.
///
/// Both `path` and `content` are templates: the skeleton init file's path
/// depends on the manifest (`src/\[namespace_path\]/...`), so paths go
/// through the same scalar substitution as content.
#[derive(Debug, Clone)]
pub struct FileBlueprint {
    /// Relative-path template from the project root.
    pub path: TemplateSource,

    /// Host content template (scalars + anchors).
    pub content: TemplateSource,

    /// Loop blocks feeding the host's anchors. Empty when the host has no
    /// anchors.
    pub blocks: Vec<BlockBlueprint>,

    /// Opt-in static text appended to the host before substitution when the
    /// manifest enables the named flag. The only conditional mechanism the
    /// engine supports — no expression logic in templates.
    pub optional_sections: Vec<OptionalSection>,

    /// Whether the written file gets the executable bit.
    pub executable: bool,
}

impl FileBlueprint {
    /// Create a plain, non-executable blueprint with no blocks.
    pub fn new(path: impl Into<TemplateSource>, content: impl Into<TemplateSource>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            blocks: Vec::new(),
            optional_sections: Vec::new(),
            executable: false,
        }
    }

    /// Add a loop block (accumulates).
    pub fn with_block(mut self, block: BlockBlueprint) -> Self {
        self.blocks.push(block);
        self
    }

    /// Add an opt-in appended section (accumulates).
    pub fn with_optional_section(mut self, section: OptionalSection) -> Self {
        self.optional_sections.push(section);
        self
    }

    /// Mark the generated file as executable (e.g., shell scripts).
    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

/// One loop-driven block of a blueprint: which anchor it fills, the
/// sub-template rendered per element, and the bound list feeding it.
#[derive(Debug, Clone)]
pub struct BlockBlueprint {
    pub anchor: &'static str,
    pub body: TemplateSource,
    pub list: &'static str,
}

impl BlockBlueprint {
    pub fn new(anchor: &'static str, body: impl Into<TemplateSource>, list: &'static str) -> Self {
        Self {
            anchor,
            body: body.into(),
            list,
        }
    }
}

/// A static text block appended to the host when a manifest flag opts in.
#[derive(Debug, Clone)]
pub struct OptionalSection {
    /// Manifest option gating this section (e.g. `discussion`).
    pub flag: &'static str,
    pub text: &'static str,
}

impl OptionalSection {
    pub fn new(flag: &'static str, text: &'static str) -> Self {
        Self { flag, text }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
